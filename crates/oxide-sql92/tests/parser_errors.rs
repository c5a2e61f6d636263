//! Tests for diagnostics: positions, expected-symbol sets, and lex
//! errors.

mod common;
use common::*;

use oxide_sql92::{parse, LexErrorKind, ParseCode, ParseError, ParseOptions, Symbol};

#[test]
fn missing_rparen_points_at_end_of_input() {
    let sql = "CREATE TABLE t (x VARCHAR(10)";
    let e = syntax_err(sql);
    assert_eq!(e.position, sql.len());
    assert!(e.expected.contains(&Symbol::Rparen));
    assert!(e.expected.contains(&Symbol::Comma));
    assert_eq!(e.found, Symbol::Eos);
}

#[test]
fn double_without_precision() {
    let sql = "CREATE TABLE t (x DOUBLE)";
    let e = syntax_err(sql);
    assert_eq!(e.expected, vec![Symbol::Precision]);
    assert_eq!(e.position, sql.find(')').unwrap());
}

#[test]
fn unknown_leading_token() {
    let e = syntax_err("TRUNCATE users");
    assert_eq!(e.position, 0);
    assert!(e.expected.contains(&Symbol::Create));
    assert!(e.expected.contains(&Symbol::Select));
    assert_eq!(e.found, Symbol::Identifier);
}

#[test]
fn create_without_object() {
    let e = syntax_err("CREATE INDEX i");
    assert!(e.expected.contains(&Symbol::Schema));
    assert!(e.expected.contains(&Symbol::Table));
    assert!(e.expected.contains(&Symbol::View));
}

#[test]
fn create_schema_missing_name_clause() {
    let e = syntax_err("CREATE SCHEMA");
    assert_eq!(e.expected, vec![Symbol::Identifier, Symbol::Authorization]);
    assert_eq!(e.found, Symbol::Eos);
}

#[test]
fn insert_missing_into() {
    let e = syntax_err("INSERT t VALUES (1)");
    assert_eq!(e.expected, vec![Symbol::Into]);
}

#[test]
fn insert_bad_source() {
    let e = syntax_err("INSERT INTO t UPDATE");
    assert_eq!(
        e.expected,
        vec![
            Symbol::Lparen,
            Symbol::Default,
            Symbol::Values,
            Symbol::Select
        ]
    );
}

#[test]
fn empty_table_element_list() {
    let e = syntax_err("CREATE TABLE t ()");
    assert!(e.expected.contains(&Symbol::Identifier));
    assert!(e.expected.contains(&Symbol::Constraint));
    assert!(e.expected.contains(&Symbol::Check));
}

#[test]
fn join_without_on_or_using() {
    let e = syntax_err("SELECT * FROM a JOIN b WHERE a.x = 1");
    assert_eq!(e.expected, vec![Symbol::On, Symbol::Using]);
}

#[test]
fn junk_after_statement() {
    let e = syntax_err("DELETE FROM t WHERE a = 1 b");
    assert_eq!(e.expected, vec![Symbol::Semicolon, Symbol::Eos]);
}

#[test]
fn message_carries_marker_line() {
    let e = syntax_err("CREATE TABLE t (x DOUBLE)");
    let message = e.to_string();
    assert!(message.starts_with("Expected PRECISION but found RPAREN"));
    let marker_column = message.lines().last().unwrap().len() - 1;
    assert_eq!(marker_column, e.position);
}

#[test]
fn first_error_wins_and_statements_are_dropped() {
    let result = parse(
        "CREATE TABLE t (x DOUBLE); CREATE SCHEMA s",
        ParseOptions::default(),
    );
    assert_eq!(result.code, ParseCode::SyntaxError);
    assert!(result.statements.is_empty());
    let Some(ParseError::Syntax(e)) = result.error else {
        panic!("Expected syntax error");
    };
    assert_eq!(e.expected, vec![Symbol::Precision]);
}

#[test]
fn unterminated_string_is_a_lex_error() {
    let result = parse("INSERT INTO t (a) VALUES ('oops", ParseOptions::default());
    assert_eq!(result.code, ParseCode::LexError);
    let Some(ParseError::Lex(e)) = result.error else {
        panic!("Expected lex error");
    };
    assert_eq!(e.kind, LexErrorKind::UnterminatedString);
}

#[test]
fn unclosed_delimited_identifier_is_a_lex_error() {
    let result = parse("CREATE SCHEMA \"oops", ParseOptions::default());
    assert_eq!(result.code, ParseCode::LexError);
    let Some(ParseError::Lex(e)) = result.error else {
        panic!("Expected lex error");
    };
    assert_eq!(e.kind, LexErrorKind::NoClosingDelimiter);
}

#[test]
fn malformed_exponent_is_a_lex_error() {
    let result = parse("INSERT INTO t (a) VALUES (1e)", ParseOptions::default());
    assert_eq!(result.code, ParseCode::LexError);
    let Some(ParseError::Lex(e)) = result.error else {
        panic!("Expected lex error");
    };
    assert_eq!(e.kind, LexErrorKind::MalformedNumber);
}

#[test]
fn select_requires_from() {
    let e = syntax_err("SELECT 1");
    assert_eq!(e.expected, vec![Symbol::From]);
}
