//! Data type descriptor parsing.
//!
//! Implements the `<data type>` clause of a column definition (character
//! strings, national character strings, bit strings, exact and
//! approximate numerics, datetimes, intervals), including the optional
//! length, precision/scale, `VARYING`, `WITH TIME ZONE`, and
//! `CHARACTER SET` fragments.

use super::error::ParseError;
use super::parser::Parser;
use crate::ast::{
    ApproxKind, BitKind, CharKind, DataType, DatetimeKind, ExactKind, IntervalUnit,
};
use crate::lexer::Symbol;

/// Symbols that can open a data type, for expected-set diagnostics.
const DATA_TYPE_STARTERS: [Symbol; 19] = [
    Symbol::Char,
    Symbol::Character,
    Symbol::Varchar,
    Symbol::National,
    Symbol::Nchar,
    Symbol::Bit,
    Symbol::Int,
    Symbol::Integer,
    Symbol::Smallint,
    Symbol::Numeric,
    Symbol::Dec,
    Symbol::Decimal,
    Symbol::Float,
    Symbol::Real,
    Symbol::Double,
    Symbol::Date,
    Symbol::Time,
    Symbol::Timestamp,
    Symbol::Interval,
];

impl<'a> Parser<'a> {
    /// Dispatches on the leading symbol to the type family, then runs
    /// the family's fragment states.
    pub(crate) fn parse_data_type(&mut self) -> Result<DataType, ParseError> {
        match self.peek() {
            Symbol::Char | Symbol::Character => {
                self.bump()?;
                self.parse_char_string(CharKind::Char)
            }
            Symbol::Varchar => {
                self.bump()?;
                let length = self.parse_optional_length()?;
                let charset = self.parse_optional_charset()?;
                Ok(DataType::CharString {
                    kind: CharKind::Varchar,
                    length,
                    charset,
                })
            }
            // NATIONAL CHAR[ACTER] and NCHAR both continue through the
            // shared VARYING/length/charset states with the national
            // kind.
            Symbol::National => {
                self.bump()?;
                match self.peek() {
                    Symbol::Char | Symbol::Character => {
                        self.bump()?;
                        self.parse_char_string(CharKind::Nchar)
                    }
                    _ => Err(self.expected(&[Symbol::Char, Symbol::Character])),
                }
            }
            Symbol::Nchar => {
                self.bump()?;
                self.parse_char_string(CharKind::Nchar)
            }
            Symbol::Bit => {
                self.bump()?;
                let kind = if self.accept(Symbol::Varying)? {
                    BitKind::Varbit
                } else {
                    BitKind::Bit
                };
                let length = self.parse_optional_length()?;
                Ok(DataType::BitString { kind, length })
            }
            Symbol::Int | Symbol::Integer => {
                self.bump()?;
                Ok(DataType::ExactNumeric {
                    kind: ExactKind::Int,
                    precision: None,
                    scale: None,
                })
            }
            Symbol::Smallint => {
                self.bump()?;
                Ok(DataType::ExactNumeric {
                    kind: ExactKind::Smallint,
                    precision: None,
                    scale: None,
                })
            }
            Symbol::Numeric | Symbol::Dec | Symbol::Decimal => {
                self.bump()?;
                let (precision, scale) = self.parse_optional_precision_scale()?;
                Ok(DataType::ExactNumeric {
                    kind: ExactKind::Numeric,
                    precision,
                    scale,
                })
            }
            Symbol::Float => {
                self.bump()?;
                let precision = self.parse_optional_length()?;
                Ok(DataType::ApproximateNumeric {
                    kind: ApproxKind::Float,
                    precision,
                })
            }
            // REAL is a synonym for FLOAT(24).
            Symbol::Real => {
                self.bump()?;
                Ok(DataType::ApproximateNumeric {
                    kind: ApproxKind::Float,
                    precision: Some(24),
                })
            }
            Symbol::Double => {
                self.bump()?;
                self.expect(Symbol::Precision)?;
                Ok(DataType::ApproximateNumeric {
                    kind: ApproxKind::Double,
                    precision: None,
                })
            }
            Symbol::Date => {
                self.bump()?;
                Ok(DataType::Datetime {
                    kind: DatetimeKind::Date,
                    precision: None,
                    with_time_zone: false,
                })
            }
            Symbol::Time | Symbol::Timestamp => {
                let kind = if self.check(Symbol::Time) {
                    DatetimeKind::Time
                } else {
                    DatetimeKind::Timestamp
                };
                self.bump()?;
                let precision = self.parse_optional_length()?;
                let with_time_zone = if self.accept(Symbol::With)? {
                    self.expect(Symbol::Time)?;
                    self.expect(Symbol::Zone)?;
                    true
                } else {
                    false
                };
                Ok(DataType::Datetime {
                    kind,
                    precision,
                    with_time_zone,
                })
            }
            Symbol::Interval => {
                self.bump()?;
                let unit = match self.peek() {
                    Symbol::Year => IntervalUnit::Year,
                    Symbol::Month => IntervalUnit::Month,
                    Symbol::Day => IntervalUnit::Day,
                    Symbol::Hour => IntervalUnit::Hour,
                    Symbol::Minute => IntervalUnit::Minute,
                    Symbol::Second => IntervalUnit::Second,
                    _ => {
                        return Err(self.expected(&[
                            Symbol::Year,
                            Symbol::Month,
                            Symbol::Day,
                            Symbol::Hour,
                            Symbol::Minute,
                            Symbol::Second,
                        ]));
                    }
                };
                self.bump()?;
                // Only SECOND takes a fractional precision.
                let precision = if unit == IntervalUnit::Second {
                    self.parse_optional_length()?
                } else {
                    None
                };
                Ok(DataType::Interval { unit, precision })
            }
            _ => Err(self.expected(&DATA_TYPE_STARTERS)),
        }
    }

    /// Shared tail of the character string types: an optional `VARYING`
    /// upgrade, then the optional length and character set fragments.
    fn parse_char_string(&mut self, base: CharKind) -> Result<DataType, ParseError> {
        let kind = if self.accept(Symbol::Varying)? {
            match base {
                CharKind::Char => CharKind::Varchar,
                _ => CharKind::Nvarchar,
            }
        } else {
            base
        };
        let length = self.parse_optional_length()?;
        let charset = self.parse_optional_charset()?;
        Ok(DataType::CharString {
            kind,
            length,
            charset,
        })
    }

    /// `[( <unsigned integer> )]`, shared by lengths and precisions.
    pub(crate) fn parse_optional_length(&mut self) -> Result<Option<u32>, ParseError> {
        if !self.accept(Symbol::Lparen)? {
            return Ok(None);
        }
        let length = self.expect_unsigned_int()?;
        self.expect(Symbol::Rparen)?;
        Ok(Some(length))
    }

    /// `[( <precision> [, <scale>] )]` for the exact numeric types.
    fn parse_optional_precision_scale(
        &mut self,
    ) -> Result<(Option<u32>, Option<u32>), ParseError> {
        if !self.accept(Symbol::Lparen)? {
            return Ok((None, None));
        }
        let precision = self.expect_unsigned_int()?;
        let scale = if self.accept(Symbol::Comma)? {
            Some(self.expect_unsigned_int()?)
        } else {
            None
        };
        self.expect(Symbol::Rparen)?;
        Ok((Some(precision), scale))
    }

    /// `[CHARACTER SET <identifier>]` after a character string type.
    fn parse_optional_charset(&mut self) -> Result<Option<String>, ParseError> {
        if !self.accept(Symbol::Character)? {
            return Ok(None);
        }
        self.expect(Symbol::Set)?;
        Ok(Some(self.expect_identifier()?))
    }
}
