//! Tests for UPDATE and DELETE.

mod common;
use common::*;

use oxide_sql92::ast::{Literal, RowValue, Statement, ValueExpr};

fn parse_update(sql: &str) -> oxide_sql92::ast::UpdateStatement {
    match parse_one(sql) {
        Statement::Update(u) => u,
        other => panic!("Expected UPDATE, got {other:?}"),
    }
}

fn parse_delete(sql: &str) -> oxide_sql92::ast::DeleteStatement {
    match parse_one(sql) {
        Statement::Delete(d) => d,
        other => panic!("Expected DELETE, got {other:?}"),
    }
}

#[test]
fn update_single_assignment() {
    let u = parse_update("UPDATE users SET name = 'Bob' WHERE id = 1");
    assert_eq!(u.table, "users");
    assert_eq!(u.assignments.len(), 1);
    assert_eq!(u.assignments[0].column, "name");
    assert_eq!(
        u.assignments[0].value,
        RowValue::Expr(ValueExpr::Literal(Literal::CharacterString(String::from(
            "Bob"
        ))))
    );
    assert!(u.where_clause.is_some());
    round_trip("UPDATE users SET name = 'Bob' WHERE id = 1");
}

#[test]
fn update_multiple_assignments() {
    let u = parse_update("UPDATE t SET a = 1, b = DEFAULT, c = NULL");
    assert_eq!(u.assignments.len(), 3);
    assert_eq!(u.assignments[1].value, RowValue::Default);
    assert_eq!(u.assignments[2].value, RowValue::Null);
    assert!(u.where_clause.is_none());
    round_trip("UPDATE t SET a = 1, b = DEFAULT, c = NULL");
}

#[test]
fn update_with_expression() {
    let u = parse_update("UPDATE t SET total = total + 1 WHERE id = 7");
    assert!(matches!(
        u.assignments[0].value,
        RowValue::Expr(ValueExpr::Binary { .. })
    ));
    round_trip("UPDATE t SET total = total + 1 WHERE id = 7");
}

#[test]
fn delete_with_where() {
    let d = parse_delete("DELETE FROM users WHERE id = 1");
    assert_eq!(d.table, "users");
    assert!(d.where_clause.is_some());
    round_trip("DELETE FROM users WHERE id = 1");
}

#[test]
fn delete_without_where() {
    let d = parse_delete("DELETE FROM users");
    assert!(d.where_clause.is_none());
    round_trip("DELETE FROM users");
}
