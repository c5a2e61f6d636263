//! The streaming tokenizer.

use super::{Span, Symbol, Token, TokenKind};

/// What went wrong while tokenizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LexErrorKind {
    /// A string literal reached end of input before its closing quote.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// A delimited identifier reached end of input before its closing
    /// delimiter.
    #[error("no closing delimiter for delimited identifier")]
    NoClosingDelimiter,
    /// A numeric literal with an exponent marker but no exponent digits.
    #[error("malformed numeric literal")]
    MalformedNumber,
    /// A byte no tokenizer recognizes.
    #[error("unexpected character")]
    UnexpectedCharacter,
}

/// A tokenization error, anchored at a byte offset in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at byte {position}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub position: usize,
}

/// Outcome of one sub-tokenizer attempt.
enum Scan {
    Found(Token),
    NotFound,
    Err(LexError),
}

/// A streaming lexer over a borrowed input buffer.
///
/// The cursor is monotonically non-decreasing across [`Lexer::next`] calls.
/// After an error, every further call yields the end-of-stream token.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    current: Token,
    error: Option<LexError>,
}

/// Bytes that terminate a regular (non-delimited) identifier. Whitespace
/// also terminates; it is checked separately.
fn is_identifier_stop(b: u8) -> bool {
    matches!(
        b,
        b';' | b',' | b'(' | b')' | b'=' | b'<' | b'>' | b'+' | b'-' | b'*' | b'/' | b'|'
    )
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            current: Token::eos(0),
            error: None,
        }
    }

    /// Returns the full input buffer.
    #[must_use]
    pub const fn input(&self) -> &'a str {
        self.input
    }

    /// Returns the text a span denotes.
    #[must_use]
    pub fn text(&self, span: Span) -> &'a str {
        &self.input[span.start..span.end]
    }

    /// Returns the current byte cursor.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.pos
    }

    /// Returns the most recently produced token.
    #[must_use]
    pub const fn current(&self) -> Token {
        self.current
    }

    /// Returns the tokenization error, if one occurred.
    #[must_use]
    pub const fn error(&self) -> Option<LexError> {
        self.error
    }

    /// Produces the next token.
    ///
    /// Skips whitespace and `--` line comments, then attempts each
    /// sub-tokenizer in priority order: block comment, punctuator, literal,
    /// keyword, identifier. Block comments come back as `Comment` tokens so
    /// the caller decides whether to surface or drop them.
    pub fn next(&mut self) -> Token {
        if self.error.is_some() {
            self.current = Token::eos(self.input.len());
            return self.current;
        }
        self.skip_ignored();
        if self.pos >= self.input.len() {
            self.current = Token::eos(self.pos);
            return self.current;
        }

        let scanners: [fn(&mut Self) -> Scan; 5] = [
            Self::scan_block_comment,
            Self::scan_punctuator,
            Self::scan_literal,
            Self::scan_keyword,
            Self::scan_identifier,
        ];
        for scan in scanners {
            match scan(self) {
                Scan::Found(tok) => {
                    self.current = tok;
                    return tok;
                }
                Scan::NotFound => {}
                Scan::Err(err) => return self.fail(err),
            }
        }
        self.fail(LexError {
            kind: LexErrorKind::UnexpectedCharacter,
            position: self.pos,
        })
    }

    fn fail(&mut self, err: LexError) -> Token {
        let tok = Token::new(TokenKind::Error, Symbol::Error, Span::at(err.position));
        self.error = Some(err);
        self.current = tok;
        tok
    }

    /// Skips whitespace and `--` line comments.
    fn skip_ignored(&mut self) {
        let bytes = self.input.as_bytes();
        loop {
            while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
                self.pos += 1;
            }
            if self.pos + 1 < bytes.len() && bytes[self.pos] == b'-' && bytes[self.pos + 1] == b'-'
            {
                while self.pos < bytes.len() && bytes[self.pos] != b'\n' {
                    self.pos += 1;
                }
                continue;
            }
            break;
        }
    }

    /// `/* ... */`, spanning newlines. An unterminated comment covers the
    /// remainder of the input.
    fn scan_block_comment(&mut self) -> Scan {
        let start = self.pos;
        if !self.input[start..].starts_with("/*") {
            return Scan::NotFound;
        }
        let end = match self.input[start + 2..].find("*/") {
            Some(off) => start + 2 + off + 2,
            None => self.input.len(),
        };
        self.pos = end;
        Scan::Found(Token::new(
            TokenKind::Comment,
            Symbol::Comment,
            Span::new(start, end),
        ))
    }

    /// One- and two-byte punctuators. A sign directly followed by a digit
    /// is declined here so the literal tokenizer can claim it as part of a
    /// signed number.
    fn scan_punctuator(&mut self) -> Scan {
        let bytes = self.input.as_bytes();
        let start = self.pos;
        let next = bytes.get(start + 1).copied();
        let (symbol, len) = match bytes[start] {
            b';' => (Symbol::Semicolon, 1),
            b',' => (Symbol::Comma, 1),
            b'(' => (Symbol::Lparen, 1),
            b')' => (Symbol::Rparen, 1),
            b'=' => (Symbol::Equals, 1),
            b'<' => match next {
                Some(b'>') => (Symbol::NotEquals, 2),
                Some(b'=') => (Symbol::LessThanOrEquals, 2),
                _ => (Symbol::LessThan, 1),
            },
            b'>' => match next {
                Some(b'=') => (Symbol::GreaterThanOrEquals, 2),
                _ => (Symbol::GreaterThan, 1),
            },
            b'+' | b'-' => {
                if next.is_some_and(|b| b.is_ascii_digit()) {
                    return Scan::NotFound;
                }
                if bytes[start] == b'+' {
                    (Symbol::Plus, 1)
                } else {
                    (Symbol::Minus, 1)
                }
            }
            b'*' => (Symbol::Asterisk, 1),
            b'/' => (Symbol::Solidus, 1),
            b'|' => match next {
                Some(b'|') => (Symbol::Concatenation, 2),
                _ => return Scan::NotFound,
            },
            _ => return Scan::NotFound,
        };
        self.pos = start + len;
        Scan::Found(Token::new(
            TokenKind::Punctuator,
            symbol,
            Span::new(start, self.pos),
        ))
    }

    /// Literals: numbers (with optional sign, fraction, and exponent),
    /// character strings, and `N`/`B`/`X` prefixed strings.
    fn scan_literal(&mut self) -> Scan {
        let bytes = self.input.as_bytes();
        let start = self.pos;
        match bytes[start] {
            b'\'' => self.scan_string(Symbol::LiteralCharacterString, start),
            b'N' | b'n' if bytes.get(start + 1) == Some(&b'\'') => {
                self.scan_string(Symbol::LiteralNationalCharacterString, start + 1)
            }
            b'B' | b'b' if bytes.get(start + 1) == Some(&b'\'') => {
                self.scan_string(Symbol::LiteralBitString, start + 1)
            }
            b'X' | b'x' if bytes.get(start + 1) == Some(&b'\'') => {
                self.scan_string(Symbol::LiteralHexString, start + 1)
            }
            b'0'..=b'9' => self.scan_number(start),
            b'+' | b'-' if bytes.get(start + 1).is_some_and(|b| b.is_ascii_digit()) => {
                self.scan_number(start)
            }
            _ => Scan::NotFound,
        }
    }

    /// A quoted string body starting at `quote_pos`. The produced span
    /// covers the interior only; a doubled quote escapes itself.
    fn scan_string(&mut self, symbol: Symbol, quote_pos: usize) -> Scan {
        let bytes = self.input.as_bytes();
        let mut p = quote_pos + 1;
        loop {
            match bytes.get(p) {
                None => {
                    return Scan::Err(LexError {
                        kind: LexErrorKind::UnterminatedString,
                        position: p,
                    });
                }
                Some(&b'\'') => {
                    if bytes.get(p + 1) == Some(&b'\'') {
                        p += 2;
                    } else {
                        break;
                    }
                }
                Some(_) => p += 1,
            }
        }
        let span = Span::new(quote_pos + 1, p);
        self.pos = p + 1;
        Scan::Found(Token::new(TokenKind::Literal, symbol, span))
    }

    /// A numeric literal. Classification:
    /// digits only and no sign yields an unsigned integer; a fractional
    /// part makes it numeric; an exponent makes it approximate.
    fn scan_number(&mut self, start: usize) -> Scan {
        let bytes = self.input.as_bytes();
        let mut p = start;
        let signed = matches!(bytes[p], b'+' | b'-');
        if signed {
            p += 1;
        }
        while p < bytes.len() && bytes[p].is_ascii_digit() {
            p += 1;
        }
        let mut symbol = if signed {
            Symbol::LiteralSignedInteger
        } else {
            Symbol::LiteralUnsignedInteger
        };
        if bytes.get(p) == Some(&b'.') {
            p += 1;
            while p < bytes.len() && bytes[p].is_ascii_digit() {
                p += 1;
            }
            symbol = if signed {
                Symbol::LiteralSignedNumeric
            } else {
                Symbol::LiteralUnsignedNumeric
            };
        }
        if matches!(bytes.get(p), Some(&(b'e' | b'E'))) {
            p += 1;
            if matches!(bytes.get(p), Some(&(b'+' | b'-'))) {
                p += 1;
            }
            let exponent_start = p;
            while p < bytes.len() && bytes[p].is_ascii_digit() {
                p += 1;
            }
            if p == exponent_start {
                return Scan::Err(LexError {
                    kind: LexErrorKind::MalformedNumber,
                    position: p,
                });
            }
            symbol = Symbol::LiteralApproximateNumeric;
        }
        self.pos = p;
        Scan::Found(Token::new(
            TokenKind::Literal,
            symbol,
            Span::new(start, p),
        ))
    }

    /// The longest alphanumeric/underscore run, looked up in the static
    /// keyword table (ASCII case-insensitive).
    fn scan_keyword(&mut self) -> Scan {
        let bytes = self.input.as_bytes();
        let start = self.pos;
        if !bytes[start].is_ascii_alphabetic() {
            return Scan::NotFound;
        }
        let mut p = start + 1;
        while p < bytes.len() && (bytes[p].is_ascii_alphanumeric() || bytes[p] == b'_') {
            p += 1;
        }
        match Symbol::keyword(&self.input[start..p]) {
            Some(symbol) => {
                self.pos = p;
                Scan::Found(Token::new(
                    TokenKind::Keyword,
                    symbol,
                    Span::new(start, p),
                ))
            }
            None => Scan::NotFound,
        }
    }

    /// Identifiers, delimited or regular.
    ///
    /// Delimited identifiers open with `'`, `"`, or a backtick and run to
    /// the matching closer (a doubled closer escapes itself); the span
    /// covers the interior. PostgreSQL `U&"..."` Unicode identifiers are
    /// not recognized and lex as regular identifiers. Regular identifiers
    /// run until whitespace or a punctuator byte and preserve source case.
    fn scan_identifier(&mut self) -> Scan {
        let bytes = self.input.as_bytes();
        let start = self.pos;
        if let closer @ (b'\'' | b'"' | b'`') = bytes[start] {
            return self.scan_delimited(start, closer);
        }
        let mut p = start;
        while p < bytes.len()
            && !bytes[p].is_ascii_whitespace()
            && !is_identifier_stop(bytes[p])
        {
            p += 1;
        }
        if p == start {
            return Scan::NotFound;
        }
        self.pos = p;
        Scan::Found(Token::new(
            TokenKind::Identifier,
            Symbol::Identifier,
            Span::new(start, p),
        ))
    }

    fn scan_delimited(&mut self, start: usize, closer: u8) -> Scan {
        let bytes = self.input.as_bytes();
        let mut p = start + 1;
        loop {
            match bytes.get(p) {
                None => {
                    return Scan::Err(LexError {
                        kind: LexErrorKind::NoClosingDelimiter,
                        position: p,
                    });
                }
                Some(&b) if b == closer => {
                    if bytes.get(p + 1) == Some(&closer) {
                        p += 2;
                    } else {
                        break;
                    }
                }
                Some(_) => p += 1,
            }
        }
        let span = Span::new(start + 1, p);
        self.pos = p + 1;
        Scan::Found(Token::new(TokenKind::Identifier, Symbol::Identifier, span))
    }
}
