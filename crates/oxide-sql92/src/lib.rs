//! # oxide-sql92
//!
//! A parser library for ANSI SQL-92: a hand-written streaming lexer and a
//! recursive-descent parser producing a typed AST, with byte-accurate
//! diagnostics.
//!
//! The pipeline has three layers:
//!
//! 1. **Lexer** ([`lexer`]): classifies source bytes into a token stream,
//!    honoring SQL's contextual rules (keywords vs. identifiers, delimited
//!    identifiers, literal subkinds, comments). Tokens borrow their
//!    lexemes from the input buffer as byte ranges.
//! 2. **Parser** ([`parser`]): a dispatcher routes on the leading symbol
//!    of each statement to a dedicated sub-parser implementing that
//!    statement's grammar. Errors carry the byte offset of the offending
//!    token, the set of symbols that were legal, and a rendered cursor
//!    marker.
//! 3. **AST** ([`ast`]): a closed family of statement, expression, type
//!    descriptor, table reference, and constraint nodes. Identifier text
//!    is copied into the nodes, so the AST outlives the input buffer.
//!
//! # Example
//!
//! ```rust
//! use oxide_sql92::{parse, ParseOptions, Statement};
//!
//! let result = parse("CREATE SCHEMA s1;", ParseOptions::default());
//! assert!(result.is_ok());
//! match &result.statements[0] {
//!     Statement::CreateSchema(stmt) => {
//!         assert_eq!(stmt.name.as_deref(), Some("s1"));
//!     }
//!     other => panic!("unexpected statement: {other:?}"),
//! }
//! ```
//!
//! Diagnostics point at the offending byte:
//!
//! ```rust
//! use oxide_sql92::{parse, ParseCode, ParseOptions};
//!
//! let result = parse("CREATE TABLE t (x DOUBLE)", ParseOptions::default());
//! assert_eq!(result.code, ParseCode::SyntaxError);
//! let message = result.error.unwrap().to_string();
//! assert!(message.contains("PRECISION"));
//! ```
//!
//! A parse call is a straight-line, synchronous computation: no I/O, no
//! callbacks, no shared state. Distinct parses are independent and may
//! run on different threads.

pub mod ast;
pub mod lexer;
pub mod options;
pub mod parser;
pub mod result;

pub use ast::Statement;
pub use lexer::{LexError, LexErrorKind, Lexer, Span, Symbol, Token, TokenKind};
pub use options::{Dialect, ParseOptions};
pub use parser::{ParseError, Parser, SyntaxError};
pub use result::{ParseCode, ParseResult};

/// Parses an input buffer into a list of statements.
///
/// This is the sole entry point for callers that want the packaged
/// [`ParseResult`]; [`Parser`] offers the same functionality as a
/// `Result`-returning API.
#[must_use]
pub fn parse(input: &str, options: ParseOptions) -> ParseResult {
    let mut parser = Parser::with_options(input, options);
    match parser.parse_statements() {
        Ok(statements) => ParseResult {
            code: ParseCode::Ok,
            statements,
            error: None,
        },
        Err(error) => ParseResult {
            code: match &error {
                ParseError::Lex(_) => ParseCode::LexError,
                ParseError::Syntax(_) => ParseCode::SyntaxError,
            },
            statements: Vec::new(),
            error: Some(error),
        },
    }
}
