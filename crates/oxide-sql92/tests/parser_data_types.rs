//! Tests for the data type descriptor grammar.

mod common;
use common::*;

use oxide_sql92::ast::{
    ApproxKind, BitKind, CharKind, DatetimeKind, DataType, ExactKind, IntervalUnit,
};

/// Parses a single-column table and returns the column's data type.
fn column_type(sql_type: &str) -> DataType {
    let t = parse_create_table(&format!("CREATE TABLE t (x {sql_type})"));
    t.columns.into_iter().next().unwrap().data_type
}

fn char_string(kind: CharKind, length: Option<u32>) -> DataType {
    DataType::CharString {
        kind,
        length,
        charset: None,
    }
}

#[test]
fn char_family() {
    assert_eq!(column_type("CHAR"), char_string(CharKind::Char, None));
    assert_eq!(
        column_type("CHARACTER(10)"),
        char_string(CharKind::Char, Some(10))
    );
    assert_eq!(
        column_type("CHAR VARYING(5)"),
        char_string(CharKind::Varchar, Some(5))
    );
    assert_eq!(
        column_type("CHARACTER VARYING(20)"),
        char_string(CharKind::Varchar, Some(20))
    );
    assert_eq!(
        column_type("VARCHAR(30)"),
        char_string(CharKind::Varchar, Some(30))
    );
}

#[test]
fn national_char_family() {
    assert_eq!(column_type("NCHAR(5)"), char_string(CharKind::Nchar, Some(5)));
    assert_eq!(
        column_type("NATIONAL CHAR"),
        char_string(CharKind::Nchar, None)
    );
    assert_eq!(
        column_type("NATIONAL CHARACTER(8)"),
        char_string(CharKind::Nchar, Some(8))
    );
    // The national branch must keep running the shared VARYING and
    // length states.
    assert_eq!(
        column_type("NATIONAL CHARACTER VARYING(10)"),
        char_string(CharKind::Nvarchar, Some(10))
    );
    assert_eq!(
        column_type("NCHAR VARYING(7)"),
        char_string(CharKind::Nvarchar, Some(7))
    );
}

#[test]
fn character_set_suffix() {
    assert_eq!(
        column_type("CHAR(10) CHARACTER SET utf8"),
        DataType::CharString {
            kind: CharKind::Char,
            length: Some(10),
            charset: Some(String::from("utf8"))
        }
    );
    round_trip("CREATE TABLE t (x CHAR(10) CHARACTER SET utf8)");
}

#[test]
fn bit_family() {
    assert_eq!(
        column_type("BIT"),
        DataType::BitString {
            kind: BitKind::Bit,
            length: None
        }
    );
    assert_eq!(
        column_type("BIT VARYING(8)"),
        DataType::BitString {
            kind: BitKind::Varbit,
            length: Some(8)
        }
    );
    round_trip("CREATE TABLE t (x BIT VARYING(8))");
}

#[test]
fn exact_numerics() {
    let int = DataType::ExactNumeric {
        kind: ExactKind::Int,
        precision: None,
        scale: None,
    };
    assert_eq!(column_type("INT"), int);
    assert_eq!(column_type("INTEGER"), int);
    assert_eq!(
        column_type("SMALLINT"),
        DataType::ExactNumeric {
            kind: ExactKind::Smallint,
            precision: None,
            scale: None
        }
    );
    assert_eq!(
        column_type("NUMERIC"),
        DataType::ExactNumeric {
            kind: ExactKind::Numeric,
            precision: None,
            scale: None
        }
    );
    assert_eq!(
        column_type("NUMERIC(10)"),
        DataType::ExactNumeric {
            kind: ExactKind::Numeric,
            precision: Some(10),
            scale: None
        }
    );
    // DEC and DECIMAL are NUMERIC synonyms.
    assert_eq!(
        column_type("DEC(10,2)"),
        DataType::ExactNumeric {
            kind: ExactKind::Numeric,
            precision: Some(10),
            scale: Some(2)
        }
    );
    assert_eq!(column_type("DECIMAL(8,3)"), column_type("NUMERIC(8,3)"));
}

#[test]
fn approximate_numerics() {
    assert_eq!(
        column_type("FLOAT"),
        DataType::ApproximateNumeric {
            kind: ApproxKind::Float,
            precision: None
        }
    );
    assert_eq!(
        column_type("FLOAT(53)"),
        DataType::ApproximateNumeric {
            kind: ApproxKind::Float,
            precision: Some(53)
        }
    );
    assert_eq!(
        column_type("REAL"),
        DataType::ApproximateNumeric {
            kind: ApproxKind::Float,
            precision: Some(24)
        }
    );
    assert_eq!(
        column_type("DOUBLE PRECISION"),
        DataType::ApproximateNumeric {
            kind: ApproxKind::Double,
            precision: None
        }
    );
    round_trip("CREATE TABLE t (x DOUBLE PRECISION)");
}

#[test]
fn datetime_family() {
    assert_eq!(
        column_type("DATE"),
        DataType::Datetime {
            kind: DatetimeKind::Date,
            precision: None,
            with_time_zone: false
        }
    );
    assert_eq!(
        column_type("TIME"),
        DataType::Datetime {
            kind: DatetimeKind::Time,
            precision: None,
            with_time_zone: false
        }
    );
    assert_eq!(
        column_type("TIME(6) WITH TIME ZONE"),
        DataType::Datetime {
            kind: DatetimeKind::Time,
            precision: Some(6),
            with_time_zone: true
        }
    );
    assert_eq!(
        column_type("TIMESTAMP(3) WITH TIME ZONE"),
        DataType::Datetime {
            kind: DatetimeKind::Timestamp,
            precision: Some(3),
            with_time_zone: true
        }
    );
    round_trip("CREATE TABLE t (x TIME(6) WITH TIME ZONE)");
}

#[test]
fn interval_family() {
    assert_eq!(
        column_type("INTERVAL YEAR"),
        DataType::Interval {
            unit: IntervalUnit::Year,
            precision: None
        }
    );
    assert_eq!(
        column_type("INTERVAL MONTH"),
        DataType::Interval {
            unit: IntervalUnit::Month,
            precision: None
        }
    );
    assert_eq!(
        column_type("INTERVAL SECOND(6)"),
        DataType::Interval {
            unit: IntervalUnit::Second,
            precision: Some(6)
        }
    );
    round_trip("CREATE TABLE t (x INTERVAL SECOND(6))");
}

#[test]
fn data_types_are_case_insensitive() {
    assert_eq!(column_type("varchar(5)"), column_type("VARCHAR(5)"));
    assert_eq!(
        column_type("double precision"),
        column_type("DOUBLE PRECISION")
    );
}
