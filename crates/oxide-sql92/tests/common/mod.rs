#![allow(dead_code)]

use oxide_sql92::ast::{
    CreateSchemaStatement, CreateTableStatement, InsertStatement, SelectStatement, Statement,
};
use oxide_sql92::{parse, ParseError, ParseOptions, SyntaxError};

pub fn parse_all(sql: &str) -> Vec<Statement> {
    let result = parse(sql, ParseOptions::default());
    match result.error {
        None => result.statements,
        Some(e) => panic!("Failed to parse: {sql}\nError: {e}"),
    }
}

pub fn parse_one(sql: &str) -> Statement {
    let mut statements = parse_all(sql);
    assert_eq!(statements.len(), 1, "Expected one statement for: {sql}");
    statements.remove(0)
}

pub fn parse_err(sql: &str) -> ParseError {
    let result = parse(sql, ParseOptions::default());
    result
        .error
        .unwrap_or_else(|| panic!("Expected parse error for: {sql}"))
}

pub fn syntax_err(sql: &str) -> SyntaxError {
    match parse_err(sql) {
        ParseError::Syntax(e) => e,
        ParseError::Lex(e) => panic!("Expected syntax error for: {sql}, got lex error: {e}"),
    }
}

pub fn parse_create_schema(sql: &str) -> CreateSchemaStatement {
    match parse_one(sql) {
        Statement::CreateSchema(s) => s,
        other => panic!("Expected CREATE SCHEMA, got {other:?}"),
    }
}

pub fn parse_create_table(sql: &str) -> CreateTableStatement {
    match parse_one(sql) {
        Statement::CreateTable(s) => s,
        other => panic!("Expected CREATE TABLE, got {other:?}"),
    }
}

pub fn parse_insert(sql: &str) -> InsertStatement {
    match parse_one(sql) {
        Statement::Insert(s) => s,
        other => panic!("Expected INSERT, got {other:?}"),
    }
}

pub fn parse_select(sql: &str) -> SelectStatement {
    match parse_one(sql) {
        Statement::Select(s) => s,
        other => panic!("Expected SELECT, got {other:?}"),
    }
}

/// Verifies that `to_string()` produces a fixed point: the dump of the
/// parsed statement re-parses to a statement with the same dump.
pub fn round_trip(sql: &str) {
    let ast1 = parse_one(sql);
    let rendered1 = ast1.to_string();
    let ast2 = parse_one(&rendered1);
    let rendered2 = ast2.to_string();
    assert_eq!(
        rendered1, rendered2,
        "Round-trip failed.\n  Input:    {sql}\n  First:    {rendered1}\n  Second:   {rendered2}"
    );
}
