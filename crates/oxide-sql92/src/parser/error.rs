//! Parser diagnostics.

use core::fmt::Write as _;

use crate::lexer::{LexError, Symbol, Token, TokenKind};

/// A syntax error: the byte position of the offending token, the set of
/// symbols that were legal in the failing state, the token actually
/// found, and a rendered message with a cursor marker line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct SyntaxError {
    /// Byte offset of the offending token start (the cursor position
    /// when the offending token is end-of-stream).
    pub position: usize,
    /// The symbols that would have been accepted.
    pub expected: Vec<Symbol>,
    /// The symbol actually found.
    pub found: Symbol,
    /// The rendered, human-readable message.
    pub message: String,
}

impl SyntaxError {
    /// Builds an expected-symbol diagnostic for the given offending
    /// token. `found_text` carries the token's lexeme for identifier and
    /// literal tokens.
    #[must_use]
    pub fn expected(
        expected: &[Symbol],
        found: Token,
        found_text: Option<&str>,
        input: &str,
    ) -> Self {
        let mut message = String::from("Expected ");
        for (i, symbol) in expected.iter().enumerate() {
            if i > 0 {
                if i + 1 == expected.len() {
                    message.push_str(" or ");
                } else {
                    message.push_str(", ");
                }
            }
            message.push_str(symbol.as_str());
        }
        let _ = write!(
            message,
            " but found {}",
            describe_token(found, found_text)
        );
        let position = found.span.start;
        message.push('\n');
        message.push_str(&error_marker(input, position));
        Self {
            position,
            expected: expected.to_vec(),
            found: found.symbol,
            message,
        }
    }

    /// Builds a free-form diagnostic anchored at a token.
    #[must_use]
    pub fn other(text: &str, found: Token, input: &str) -> Self {
        let position = found.span.start;
        let mut message = String::from(text);
        message.push('\n');
        message.push_str(&error_marker(input, position));
        Self {
            position,
            expected: Vec::new(),
            found: found.symbol,
            message,
        }
    }
}

/// A parse failure: either the lexer rejected the input or a statement
/// state machine did.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

/// Formats a token for humans: keywords and punctuators by symbol name,
/// identifiers and literals with their lexeme.
#[must_use]
pub fn describe_token(token: Token, text: Option<&str>) -> String {
    match token.kind {
        TokenKind::Identifier => match text {
            Some(text) => format!("identifier \"{text}\""),
            None => String::from("identifier"),
        },
        TokenKind::Literal => match text {
            Some(text) => format!("literal '{text}'"),
            None => String::from("literal"),
        },
        TokenKind::Eos => String::from("EOS"),
        _ => token.symbol.as_str().to_string(),
    }
}

/// Renders the source line containing `position` with a caret marker
/// under the offending byte.
#[must_use]
pub fn error_marker(input: &str, position: usize) -> String {
    let position = position.min(input.len());
    let line_start = input[..position].rfind('\n').map_or(0, |i| i + 1);
    let line_end = input[position..]
        .find('\n')
        .map_or(input.len(), |i| position + i);
    let column = position - line_start;
    let mut marker = String::with_capacity(line_end - line_start + column + 2);
    marker.push_str(&input[line_start..line_end]);
    marker.push('\n');
    for _ in 0..column {
        marker.push(' ');
    }
    marker.push('^');
    marker
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Span;

    #[test]
    fn test_expected_message_lists_symbol_set() {
        let input = "CREATE TABLE t (x VARCHAR(10)";
        let eos = Token::eos(input.len());
        let err = SyntaxError::expected(&[Symbol::Comma, Symbol::Rparen], eos, None, input);
        assert_eq!(err.position, input.len());
        assert!(err.expected.contains(&Symbol::Rparen));
        assert!(err.message.starts_with("Expected COMMA or RPAREN but found EOS"));
        assert!(err.message.contains('^'));
    }

    #[test]
    fn test_marker_points_at_column() {
        let marker = error_marker("CREATE TABLE", 7);
        assert_eq!(marker, "CREATE TABLE\n       ^");
    }

    #[test]
    fn test_describe_identifier() {
        let tok = Token::new(
            TokenKind::Identifier,
            Symbol::Identifier,
            Span::new(0, 3),
        );
        assert_eq!(describe_token(tok, Some("foo")), "identifier \"foo\"");
    }
}
