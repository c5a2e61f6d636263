//! Abstract Syntax Tree (AST) types for SQL-92 statements.
//!
//! Statements own all descendant nodes exclusively; identifier and literal
//! text is copied out of the input buffer when a node is built, so the AST
//! does not borrow from the parsed source. `Display` renders a canonical
//! SQL dump of every node.

mod expression;
mod statement;
mod types;

use core::fmt;

pub use expression::{
    ArithOp, ColumnRef, CompOp, Literal, Predicate, RowValue, SearchCondition, SetFunction,
    SetFunctionKind, Sign, ValueExpr, ValueFunction,
};
pub use statement::{
    CreateSchemaStatement, CreateTableStatement, CreateViewStatement, DeleteStatement,
    DropBehavior, DropSchemaStatement, DropTableStatement, DropViewStatement, InsertSource,
    InsertSelectStatement, InsertStatement, JoinSpec, JoinType, OnCommitAction, OrderBy,
    OrderDirection, OrderKey, SelectColumn, SelectStatement, Statement, TableRef, TableType,
    UpdateAssignment, UpdateStatement,
};
pub use types::{
    ApproxKind, BitKind, CharKind, ColumnConstraint, ColumnDef, DataType, DatetimeKind,
    DefaultClause, ExactKind, IntervalUnit, ReferencesSpec, TableConstraint, TableConstraintKind,
};

/// Writes an identifier, quoting it when it would not survive re-lexing
/// bare (embedded spaces, punctuation, or a keyword collision).
pub(crate) fn write_ident(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    let bare = !name.is_empty()
        && name.as_bytes()[0].is_ascii_alphabetic()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'.')
        && crate::lexer::Symbol::keyword(name).is_none();
    if bare {
        f.write_str(name)
    } else {
        write!(f, "\"{}\"", name.replace('"', "\"\""))
    }
}

/// Writes a comma-separated identifier list.
pub(crate) fn write_ident_list(f: &mut fmt::Formatter<'_>, names: &[String]) -> fmt::Result {
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_ident(f, name)?;
    }
    Ok(())
}
