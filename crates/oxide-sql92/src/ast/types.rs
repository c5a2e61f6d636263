//! Data type descriptors, column definitions, and constraints.

use core::fmt;

use super::{write_ident, write_ident_list, Literal, SearchCondition, ValueFunction};

/// Character string kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharKind {
    Char,
    Varchar,
    Nchar,
    Nvarchar,
}

/// Bit string kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BitKind {
    Bit,
    Varbit,
}

/// Exact numeric kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExactKind {
    Int,
    Smallint,
    Numeric,
}

/// Approximate numeric kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ApproxKind {
    Float,
    Double,
}

/// Datetime kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DatetimeKind {
    Date,
    Time,
    Timestamp,
}

/// Interval qualifier units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntervalUnit {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl IntervalUnit {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Year => "YEAR",
            Self::Month => "MONTH",
            Self::Day => "DAY",
            Self::Hour => "HOUR",
            Self::Minute => "MINUTE",
            Self::Second => "SECOND",
        }
    }
}

/// A data type descriptor.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataType {
    /// `CHAR`, `VARCHAR`, `NCHAR`, `NCHAR VARYING`, with optional length
    /// and character set.
    CharString {
        kind: CharKind,
        length: Option<u32>,
        charset: Option<String>,
    },
    /// `BIT` and `BIT VARYING`, with optional length.
    BitString {
        kind: BitKind,
        length: Option<u32>,
    },
    /// `INT`, `SMALLINT`, and `NUMERIC(p, s)`.
    ExactNumeric {
        kind: ExactKind,
        precision: Option<u32>,
        scale: Option<u32>,
    },
    /// `FLOAT(p)` and `DOUBLE PRECISION`. `REAL` is `FLOAT(24)`.
    ApproximateNumeric {
        kind: ApproxKind,
        precision: Option<u32>,
    },
    /// `DATE`, `TIME(p)`, `TIMESTAMP(p)`, optionally `WITH TIME ZONE`.
    Datetime {
        kind: DatetimeKind,
        precision: Option<u32>,
        with_time_zone: bool,
    },
    /// `INTERVAL <unit>`; only `SECOND` takes a precision.
    Interval {
        unit: IntervalUnit,
        precision: Option<u32>,
    },
}

fn write_length(f: &mut fmt::Formatter<'_>, length: Option<u32>) -> fmt::Result {
    if let Some(n) = length {
        write!(f, "({n})")?;
    }
    Ok(())
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CharString {
                kind,
                length,
                charset,
            } => {
                let name = match kind {
                    CharKind::Char => "CHAR",
                    CharKind::Varchar => "VARCHAR",
                    CharKind::Nchar => "NCHAR",
                    CharKind::Nvarchar => "NCHAR VARYING",
                };
                f.write_str(name)?;
                write_length(f, *length)?;
                if let Some(charset) = charset {
                    f.write_str(" CHARACTER SET ")?;
                    write_ident(f, charset)?;
                }
                Ok(())
            }
            Self::BitString { kind, length } => {
                f.write_str(match kind {
                    BitKind::Bit => "BIT",
                    BitKind::Varbit => "BIT VARYING",
                })?;
                write_length(f, *length)
            }
            Self::ExactNumeric {
                kind,
                precision,
                scale,
            } => {
                f.write_str(match kind {
                    ExactKind::Int => "INT",
                    ExactKind::Smallint => "SMALLINT",
                    ExactKind::Numeric => "NUMERIC",
                })?;
                match (precision, scale) {
                    (Some(p), Some(s)) => write!(f, "({p},{s})"),
                    (Some(p), None) => write!(f, "({p})"),
                    _ => Ok(()),
                }
            }
            Self::ApproximateNumeric { kind, precision } => match kind {
                ApproxKind::Float => {
                    f.write_str("FLOAT")?;
                    write_length(f, *precision)
                }
                ApproxKind::Double => f.write_str("DOUBLE PRECISION"),
            },
            Self::Datetime {
                kind,
                precision,
                with_time_zone,
            } => {
                f.write_str(match kind {
                    DatetimeKind::Date => "DATE",
                    DatetimeKind::Time => "TIME",
                    DatetimeKind::Timestamp => "TIMESTAMP",
                })?;
                write_length(f, *precision)?;
                if *with_time_zone {
                    f.write_str(" WITH TIME ZONE")?;
                }
                Ok(())
            }
            Self::Interval { unit, precision } => {
                write!(f, "INTERVAL {}", unit.as_str())?;
                write_length(f, *precision)
            }
        }
    }
}

/// A `DEFAULT` clause option.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DefaultClause {
    Literal(Literal),
    Null,
    Function(ValueFunction),
}

impl fmt::Display for DefaultClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(lit) => write!(f, "{lit}"),
            Self::Null => f.write_str("NULL"),
            Self::Function(func) => write!(f, "{func}"),
        }
    }
}

/// The target of a `REFERENCES` clause.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferencesSpec {
    /// Referenced table.
    pub table: String,
    /// Referenced columns; empty means the table's primary key.
    pub columns: Vec<String>,
}

impl fmt::Display for ReferencesSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("REFERENCES ")?;
        write_ident(f, &self.table)?;
        if !self.columns.is_empty() {
            f.write_str(" (")?;
            write_ident_list(f, &self.columns)?;
            f.write_str(")")?;
        }
        Ok(())
    }
}

/// A constraint attached to a single column definition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColumnConstraint {
    NotNull,
    Unique,
    PrimaryKey,
    References(ReferencesSpec),
    Check(SearchCondition),
}

impl fmt::Display for ColumnConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotNull => f.write_str("NOT NULL"),
            Self::Unique => f.write_str("UNIQUE"),
            Self::PrimaryKey => f.write_str("PRIMARY KEY"),
            Self::References(spec) => write!(f, "{spec}"),
            Self::Check(cond) => write!(f, "CHECK ({cond})"),
        }
    }
}

/// A column definition inside `CREATE TABLE`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnDef {
    /// Column name.
    pub name: String,
    /// The data type descriptor.
    pub data_type: DataType,
    /// Optional `DEFAULT` clause.
    pub default: Option<DefaultClause>,
    /// Column constraints, in source order.
    pub constraints: Vec<ColumnConstraint>,
}

impl fmt::Display for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_ident(f, &self.name)?;
        write!(f, " {}", self.data_type)?;
        if let Some(default) = &self.default {
            write!(f, " DEFAULT {default}")?;
        }
        for constraint in &self.constraints {
            write!(f, " {constraint}")?;
        }
        Ok(())
    }
}

/// The body of a table-level constraint.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TableConstraintKind {
    Unique(Vec<String>),
    PrimaryKey(Vec<String>),
    ForeignKey {
        columns: Vec<String>,
        references: ReferencesSpec,
    },
    Check(SearchCondition),
}

/// A table-level constraint, optionally named.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableConstraint {
    pub name: Option<String>,
    pub kind: TableConstraintKind,
}

impl fmt::Display for TableConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            f.write_str("CONSTRAINT ")?;
            write_ident(f, name)?;
            f.write_str(" ")?;
        }
        match &self.kind {
            TableConstraintKind::Unique(columns) => {
                f.write_str("UNIQUE (")?;
                write_ident_list(f, columns)?;
                f.write_str(")")
            }
            TableConstraintKind::PrimaryKey(columns) => {
                f.write_str("PRIMARY KEY (")?;
                write_ident_list(f, columns)?;
                f.write_str(")")
            }
            TableConstraintKind::ForeignKey {
                columns,
                references,
            } => {
                f.write_str("FOREIGN KEY (")?;
                write_ident_list(f, columns)?;
                write!(f, ") {references}")
            }
            TableConstraintKind::Check(cond) => write!(f, "CHECK ({cond})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_display() {
        assert_eq!(
            DataType::CharString {
                kind: CharKind::Varchar,
                length: Some(64),
                charset: None
            }
            .to_string(),
            "VARCHAR(64)"
        );
        assert_eq!(
            DataType::CharString {
                kind: CharKind::Nvarchar,
                length: Some(10),
                charset: None
            }
            .to_string(),
            "NCHAR VARYING(10)"
        );
        assert_eq!(
            DataType::ExactNumeric {
                kind: ExactKind::Numeric,
                precision: Some(10),
                scale: Some(2)
            }
            .to_string(),
            "NUMERIC(10,2)"
        );
        assert_eq!(
            DataType::ApproximateNumeric {
                kind: ApproxKind::Double,
                precision: None
            }
            .to_string(),
            "DOUBLE PRECISION"
        );
        assert_eq!(
            DataType::Datetime {
                kind: DatetimeKind::Timestamp,
                precision: Some(3),
                with_time_zone: true
            }
            .to_string(),
            "TIMESTAMP(3) WITH TIME ZONE"
        );
        assert_eq!(
            DataType::Interval {
                unit: IntervalUnit::Second,
                precision: Some(6)
            }
            .to_string(),
            "INTERVAL SECOND(6)"
        );
    }

    #[test]
    fn test_column_def_display() {
        let col = ColumnDef {
            name: String::from("id"),
            data_type: DataType::ExactNumeric {
                kind: ExactKind::Int,
                precision: None,
                scale: None,
            },
            default: None,
            constraints: vec![ColumnConstraint::NotNull, ColumnConstraint::PrimaryKey],
        };
        assert_eq!(col.to_string(), "id INT NOT NULL PRIMARY KEY");
    }
}
