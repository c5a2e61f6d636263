//! Tests for INSERT: column lists, multi-row VALUES, DEFAULT VALUES,
//! row value constructors, and INSERT ... SELECT.

mod common;
use common::*;

use oxide_sql92::ast::{InsertSource, Literal, RowValue, Statement, ValueExpr};

#[test]
fn insert_with_columns() {
    let i = parse_insert("INSERT INTO t (a,b) VALUES (1, 'x')");
    assert_eq!(i.table, "t");
    assert_eq!(i.columns, vec!["a", "b"]);
    let InsertSource::Values(rows) = &i.source else {
        panic!("Expected VALUES");
    };
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0],
        vec![
            RowValue::Expr(ValueExpr::Literal(Literal::UnsignedInteger(1))),
            RowValue::Expr(ValueExpr::Literal(Literal::CharacterString(String::from(
                "x"
            )))),
        ]
    );
    round_trip("INSERT INTO t (a, b) VALUES (1, 'x')");
}

#[test]
fn insert_default_values() {
    let i = parse_insert("INSERT INTO t DEFAULT VALUES");
    assert!(i.columns.is_empty());
    assert_eq!(i.source, InsertSource::DefaultValues);
    round_trip("INSERT INTO t DEFAULT VALUES");
}

#[test]
fn insert_without_column_list() {
    let i = parse_insert("INSERT INTO t VALUES (1, 2, 3)");
    assert!(i.columns.is_empty());
    let InsertSource::Values(rows) = &i.source else {
        panic!("Expected VALUES");
    };
    assert_eq!(rows[0].len(), 3);
}

#[test]
fn insert_multiple_rows() {
    let i = parse_insert("INSERT INTO t (a) VALUES (1), (2), (3)");
    let InsertSource::Values(rows) = &i.source else {
        panic!("Expected VALUES");
    };
    assert_eq!(rows.len(), 3);
    round_trip("INSERT INTO t (a) VALUES (1), (2), (3)");
}

#[test]
fn insert_null_and_default_markers() {
    let i = parse_insert("INSERT INTO t (a, b, c) VALUES (NULL, DEFAULT, 7)");
    let InsertSource::Values(rows) = &i.source else {
        panic!("Expected VALUES");
    };
    assert_eq!(rows[0][0], RowValue::Null);
    assert_eq!(rows[0][1], RowValue::Default);
    round_trip("INSERT INTO t (a, b, c) VALUES (NULL, DEFAULT, 7)");
}

#[test]
fn insert_signed_literal() {
    let i = parse_insert("INSERT INTO t (a) VALUES (-1)");
    let InsertSource::Values(rows) = &i.source else {
        panic!("Expected VALUES");
    };
    assert_eq!(
        rows[0][0],
        RowValue::Expr(ValueExpr::Literal(Literal::SignedInteger(-1)))
    );
}

#[test]
fn insert_string_escape() {
    let i = parse_insert("INSERT INTO t (a) VALUES ('it''s')");
    let InsertSource::Values(rows) = &i.source else {
        panic!("Expected VALUES");
    };
    assert_eq!(
        rows[0][0],
        RowValue::Expr(ValueExpr::Literal(Literal::CharacterString(String::from(
            "it's"
        ))))
    );
    round_trip("INSERT INTO t (a) VALUES ('it''s')");
}

#[test]
fn insert_prefixed_string_literals() {
    let i = parse_insert("INSERT INTO t (a, b, c) VALUES (N'abc', B'0101', X'4F')");
    let InsertSource::Values(rows) = &i.source else {
        panic!("Expected VALUES");
    };
    assert_eq!(
        rows[0],
        vec![
            RowValue::Expr(ValueExpr::Literal(Literal::NationalString(String::from(
                "abc"
            )))),
            RowValue::Expr(ValueExpr::Literal(Literal::BitString(String::from(
                "0101"
            )))),
            RowValue::Expr(ValueExpr::Literal(Literal::HexString(String::from("4F")))),
        ]
    );
    round_trip("INSERT INTO t (a, b, c) VALUES (N'abc', B'0101', X'4F')");
}

#[test]
fn insert_expression_value() {
    let i = parse_insert("INSERT INTO t (a) VALUES (1 + 2 * 3)");
    let InsertSource::Values(rows) = &i.source else {
        panic!("Expected VALUES");
    };
    // Multiplication binds tighter than addition.
    let RowValue::Expr(ValueExpr::Binary { op, right, .. }) = &rows[0][0] else {
        panic!("Expected binary expression");
    };
    assert_eq!(op.as_str(), "+");
    assert!(matches!(right.as_ref(), ValueExpr::Binary { .. }));
    round_trip("INSERT INTO t (a) VALUES (1 + 2 * 3)");
}

#[test]
fn insert_select() {
    let Statement::InsertSelect(i) = parse_one("INSERT INTO t (a, b) SELECT a, b FROM s") else {
        panic!("Expected INSERT ... SELECT");
    };
    assert_eq!(i.table, "t");
    assert_eq!(i.columns, vec!["a", "b"]);
    assert_eq!(i.query.columns.len(), 2);
    round_trip("INSERT INTO t (a, b) SELECT a, b FROM s");
}

#[test]
fn insert_select_without_column_list() {
    let Statement::InsertSelect(i) = parse_one("INSERT INTO t SELECT a FROM s WHERE a > 0")
    else {
        panic!("Expected INSERT ... SELECT");
    };
    assert!(i.columns.is_empty());
    assert!(i.query.where_clause.is_some());
}
