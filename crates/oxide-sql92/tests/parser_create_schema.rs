//! Tests for CREATE SCHEMA and DROP SCHEMA.

mod common;
use common::*;

use oxide_sql92::ast::{DropBehavior, Statement};

#[test]
fn create_schema_simple() {
    let s = parse_create_schema("CREATE SCHEMA s1;");
    assert_eq!(s.name.as_deref(), Some("s1"));
    assert_eq!(s.authorization, None);
    assert_eq!(s.default_charset, None);
    round_trip("CREATE SCHEMA s1");
}

#[test]
fn create_schema_authorization_only() {
    let s = parse_create_schema("CREATE SCHEMA AUTHORIZATION alice");
    assert_eq!(s.name, None);
    assert_eq!(s.authorization.as_deref(), Some("alice"));
    assert_eq!(s.default_charset, None);
    round_trip("CREATE SCHEMA AUTHORIZATION alice");
}

#[test]
fn create_schema_name_and_authorization() {
    let s = parse_create_schema("CREATE SCHEMA s AUTHORIZATION u");
    assert_eq!(s.name.as_deref(), Some("s"));
    assert_eq!(s.authorization.as_deref(), Some("u"));
}

#[test]
fn create_schema_full() {
    let s = parse_create_schema("CREATE SCHEMA s AUTHORIZATION u DEFAULT CHARACTER SET utf8");
    assert_eq!(s.name.as_deref(), Some("s"));
    assert_eq!(s.authorization.as_deref(), Some("u"));
    assert_eq!(s.default_charset.as_deref(), Some("utf8"));
    round_trip("CREATE SCHEMA s AUTHORIZATION u DEFAULT CHARACTER SET utf8");
}

#[test]
fn create_schema_default_charset_without_authorization() {
    let s = parse_create_schema("CREATE SCHEMA s DEFAULT CHARACTER SET latin1");
    assert_eq!(s.name.as_deref(), Some("s"));
    assert_eq!(s.authorization, None);
    assert_eq!(s.default_charset.as_deref(), Some("latin1"));
}

#[test]
fn create_schema_delimited_identifier() {
    let s = parse_create_schema("CREATE SCHEMA \"has space\"");
    assert_eq!(s.name.as_deref(), Some("has space"));
    round_trip("CREATE SCHEMA \"has space\"");
}

#[test]
fn create_schema_delimited_identifier_with_escaped_quote() {
    let s = parse_create_schema("CREATE SCHEMA \"we \"\" quote\"");
    assert_eq!(s.name.as_deref(), Some("we \" quote"));
}

#[test]
fn multiple_statements_in_source_order() {
    let statements = parse_all("CREATE SCHEMA a; CREATE SCHEMA b; CREATE SCHEMA c");
    let names: Vec<_> = statements
        .iter()
        .map(|stmt| match stmt {
            Statement::CreateSchema(s) => s.name.clone().unwrap(),
            other => panic!("unexpected statement: {other:?}"),
        })
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn trailing_semicolon_is_optional() {
    assert_eq!(parse_all("CREATE SCHEMA x").len(), 1);
    assert_eq!(parse_all("CREATE SCHEMA x;").len(), 1);
}

#[test]
fn comments_are_ignored() {
    let s = parse_create_schema(
        "-- leading comment\nCREATE /* inline */ SCHEMA s1 -- trailing\n;",
    );
    assert_eq!(s.name.as_deref(), Some("s1"));
}

#[test]
fn drop_schema() {
    let Statement::DropSchema(s) = parse_one("DROP SCHEMA s") else {
        panic!("Expected DROP SCHEMA");
    };
    assert_eq!(s.name, "s");
    assert_eq!(s.behavior, None);
    round_trip("DROP SCHEMA s");
}

#[test]
fn drop_schema_behavior() {
    let Statement::DropSchema(s) = parse_one("DROP SCHEMA s CASCADE") else {
        panic!("Expected DROP SCHEMA");
    };
    assert_eq!(s.behavior, Some(DropBehavior::Cascade));

    let Statement::DropSchema(s) = parse_one("DROP SCHEMA s RESTRICT") else {
        panic!("Expected DROP SCHEMA");
    };
    assert_eq!(s.behavior, Some(DropBehavior::Restrict));
    round_trip("DROP SCHEMA s RESTRICT");
}
