//! SQL statement AST types.

use core::fmt;

use super::{
    write_ident, write_ident_list, ColumnDef, ColumnRef, RowValue, SearchCondition,
    TableConstraint, ValueExpr,
};

/// How a table is materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TableType {
    /// A regular base table.
    #[default]
    Normal,
    /// `GLOBAL TEMPORARY` (also what a bare `TEMPORARY` produces).
    TemporaryGlobal,
    /// `LOCAL TEMPORARY`.
    TemporaryLocal,
}

/// `ON COMMIT` behavior for temporary tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OnCommitAction {
    DeleteRows,
    PreserveRows,
}

/// `CASCADE` / `RESTRICT` on `DROP` statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DropBehavior {
    Cascade,
    Restrict,
}

impl DropBehavior {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Cascade => "CASCADE",
            Self::Restrict => "RESTRICT",
        }
    }
}

/// A `CREATE SCHEMA` statement.
///
/// At least one of `name` and `authorization` is present.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateSchemaStatement {
    /// Schema name, if given.
    pub name: Option<String>,
    /// `AUTHORIZATION` identifier, if given.
    pub authorization: Option<String>,
    /// `DEFAULT CHARACTER SET` identifier, if given.
    pub default_charset: Option<String>,
}

/// A `DROP SCHEMA` statement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropSchemaStatement {
    pub name: String,
    pub behavior: Option<DropBehavior>,
}

/// A `CREATE TABLE` statement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateTableStatement {
    pub table_type: TableType,
    pub name: String,
    pub columns: Vec<ColumnDef>,
    pub constraints: Vec<TableConstraint>,
    pub on_commit: Option<OnCommitAction>,
}

/// A `DROP TABLE` statement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropTableStatement {
    pub name: String,
    pub behavior: Option<DropBehavior>,
}

/// A `CREATE VIEW` statement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateViewStatement {
    pub name: String,
    /// Optional view column list.
    pub columns: Vec<String>,
    pub query: Box<SelectStatement>,
    /// `WITH CHECK OPTION`.
    pub check_option: bool,
}

/// A `DROP VIEW` statement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropViewStatement {
    pub name: String,
}

/// The data source of an `INSERT` statement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InsertSource {
    /// `VALUES (...), (...), ...` row value constructor lists.
    Values(Vec<Vec<RowValue>>),
    /// `DEFAULT VALUES`.
    DefaultValues,
}

/// An `INSERT` statement fed from explicit values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InsertStatement {
    pub table: String,
    /// Insert column list; empty when omitted.
    pub columns: Vec<String>,
    pub source: InsertSource,
}

/// An `INSERT` statement fed from a query expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InsertSelectStatement {
    pub table: String,
    pub columns: Vec<String>,
    pub query: Box<SelectStatement>,
}

/// A join type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
    Cross,
    Natural,
}

impl JoinType {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::Full => "FULL JOIN",
            Self::Cross => "CROSS JOIN",
            Self::Natural => "NATURAL JOIN",
        }
    }
}

/// A join specification: `ON <search condition>` or `USING (<columns>)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JoinSpec {
    On(SearchCondition),
    Using(Vec<String>),
}

/// A table reference in a `FROM` clause.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TableRef {
    /// A named table with an optional correlation name.
    Table { name: String, alias: Option<String> },
    /// A parenthesized subquery; the alias is mandatory.
    Derived {
        query: Box<SelectStatement>,
        alias: String,
    },
    /// Two references combined by a join, left-associatively.
    Joined {
        left: Box<TableRef>,
        right: Box<TableRef>,
        join_type: JoinType,
        spec: Option<JoinSpec>,
    },
}

/// One item of a select list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectColumn {
    /// `*`.
    Wildcard,
    /// A value expression with an optional alias.
    Expr {
        expr: ValueExpr,
        alias: Option<String>,
    },
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

/// A sort key: a column reference or a 1-based select list position.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrderKey {
    Column(ColumnRef),
    Position(u64),
}

/// One `ORDER BY` entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderBy {
    pub key: OrderKey,
    pub direction: OrderDirection,
}

/// A `SELECT` statement (query specification).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectStatement {
    pub distinct: bool,
    pub columns: Vec<SelectColumn>,
    pub from: Vec<TableRef>,
    pub where_clause: Option<SearchCondition>,
    pub group_by: Vec<ColumnRef>,
    pub having: Option<SearchCondition>,
    pub order_by: Vec<OrderBy>,
}

/// One `SET` assignment of an `UPDATE` statement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdateAssignment {
    pub column: String,
    pub value: RowValue,
}

/// An `UPDATE` statement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdateStatement {
    pub table: String,
    pub assignments: Vec<UpdateAssignment>,
    pub where_clause: Option<SearchCondition>,
}

/// A `DELETE` statement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeleteStatement {
    pub table: String,
    pub where_clause: Option<SearchCondition>,
}

/// A SQL statement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Statement {
    CreateSchema(CreateSchemaStatement),
    DropSchema(DropSchemaStatement),
    CreateTable(CreateTableStatement),
    DropTable(DropTableStatement),
    CreateView(CreateViewStatement),
    DropView(DropViewStatement),
    Insert(InsertStatement),
    InsertSelect(InsertSelectStatement),
    Select(SelectStatement),
    Update(UpdateStatement),
    Delete(DeleteStatement),
}

// ===================================================================
// Display implementations
// ===================================================================

impl fmt::Display for CreateSchemaStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CREATE SCHEMA")?;
        if let Some(name) = &self.name {
            f.write_str(" ")?;
            write_ident(f, name)?;
        }
        if let Some(authorization) = &self.authorization {
            f.write_str(" AUTHORIZATION ")?;
            write_ident(f, authorization)?;
        }
        if let Some(charset) = &self.default_charset {
            f.write_str(" DEFAULT CHARACTER SET ")?;
            write_ident(f, charset)?;
        }
        Ok(())
    }
}

impl fmt::Display for DropSchemaStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DROP SCHEMA ")?;
        write_ident(f, &self.name)?;
        if let Some(behavior) = self.behavior {
            write!(f, " {}", behavior.as_str())?;
        }
        Ok(())
    }
}

impl fmt::Display for CreateTableStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CREATE ")?;
        match self.table_type {
            TableType::Normal => {}
            TableType::TemporaryGlobal => f.write_str("GLOBAL TEMPORARY ")?,
            TableType::TemporaryLocal => f.write_str("LOCAL TEMPORARY ")?,
        }
        f.write_str("TABLE ")?;
        write_ident(f, &self.name)?;
        f.write_str(" (")?;
        let mut first = true;
        for column in &self.columns {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{column}")?;
        }
        for constraint in &self.constraints {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{constraint}")?;
        }
        f.write_str(")")?;
        match self.on_commit {
            Some(OnCommitAction::DeleteRows) => f.write_str(" ON COMMIT DELETE ROWS")?,
            Some(OnCommitAction::PreserveRows) => f.write_str(" ON COMMIT PRESERVE ROWS")?,
            None => {}
        }
        Ok(())
    }
}

impl fmt::Display for DropTableStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DROP TABLE ")?;
        write_ident(f, &self.name)?;
        if let Some(behavior) = self.behavior {
            write!(f, " {}", behavior.as_str())?;
        }
        Ok(())
    }
}

impl fmt::Display for CreateViewStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CREATE VIEW ")?;
        write_ident(f, &self.name)?;
        if !self.columns.is_empty() {
            f.write_str(" (")?;
            write_ident_list(f, &self.columns)?;
            f.write_str(")")?;
        }
        write!(f, " AS {}", self.query)?;
        if self.check_option {
            f.write_str(" WITH CHECK OPTION")?;
        }
        Ok(())
    }
}

impl fmt::Display for DropViewStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DROP VIEW ")?;
        write_ident(f, &self.name)
    }
}

fn write_insert_head(f: &mut fmt::Formatter<'_>, table: &str, columns: &[String]) -> fmt::Result {
    f.write_str("INSERT INTO ")?;
    write_ident(f, table)?;
    if !columns.is_empty() {
        f.write_str(" (")?;
        write_ident_list(f, columns)?;
        f.write_str(")")?;
    }
    Ok(())
}

impl fmt::Display for InsertStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_insert_head(f, &self.table, &self.columns)?;
        match &self.source {
            InsertSource::DefaultValues => f.write_str(" DEFAULT VALUES"),
            InsertSource::Values(rows) => {
                f.write_str(" VALUES ")?;
                for (i, row) in rows.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str("(")?;
                    for (j, value) in row.iter().enumerate() {
                        if j > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{value}")?;
                    }
                    f.write_str(")")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for InsertSelectStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_insert_head(f, &self.table, &self.columns)?;
        write!(f, " {}", self.query)
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table { name, alias } => {
                write_ident(f, name)?;
                if let Some(alias) = alias {
                    f.write_str(" AS ")?;
                    write_ident(f, alias)?;
                }
                Ok(())
            }
            Self::Derived { query, alias } => {
                write!(f, "({query}) AS ")?;
                write_ident(f, alias)
            }
            Self::Joined {
                left,
                right,
                join_type,
                spec,
            } => {
                write!(f, "{left} {} {right}", join_type.as_str())?;
                match spec {
                    Some(JoinSpec::On(cond)) => write!(f, " ON {cond}"),
                    Some(JoinSpec::Using(columns)) => {
                        f.write_str(" USING (")?;
                        write_ident_list(f, columns)?;
                        f.write_str(")")
                    }
                    None => Ok(()),
                }
            }
        }
    }
}

impl fmt::Display for SelectColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wildcard => f.write_str("*"),
            Self::Expr { expr, alias } => {
                write!(f, "{expr}")?;
                if let Some(alias) = alias {
                    f.write_str(" AS ")?;
                    write_ident(f, alias)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.key {
            OrderKey::Column(column) => write!(f, "{column}")?,
            OrderKey::Position(position) => write!(f, "{position}")?,
        }
        match self.direction {
            OrderDirection::Asc => f.write_str(" ASC"),
            OrderDirection::Desc => f.write_str(" DESC"),
        }
    }
}

impl fmt::Display for SelectStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT ")?;
        if self.distinct {
            f.write_str("DISTINCT ")?;
        }
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{column}")?;
        }
        f.write_str(" FROM ")?;
        for (i, table) in self.from.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{table}")?;
        }
        if let Some(cond) = &self.where_clause {
            write!(f, " WHERE {cond}")?;
        }
        if !self.group_by.is_empty() {
            f.write_str(" GROUP BY ")?;
            for (i, column) in self.group_by.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{column}")?;
            }
        }
        if let Some(cond) = &self.having {
            write!(f, " HAVING {cond}")?;
        }
        if !self.order_by.is_empty() {
            f.write_str(" ORDER BY ")?;
            for (i, order) in self.order_by.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{order}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for UpdateStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UPDATE ")?;
        write_ident(f, &self.table)?;
        f.write_str(" SET ")?;
        for (i, assignment) in self.assignments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write_ident(f, &assignment.column)?;
            write!(f, " = {}", assignment.value)?;
        }
        if let Some(cond) = &self.where_clause {
            write!(f, " WHERE {cond}")?;
        }
        Ok(())
    }
}

impl fmt::Display for DeleteStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DELETE FROM ")?;
        write_ident(f, &self.table)?;
        if let Some(cond) = &self.where_clause {
            write!(f, " WHERE {cond}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateSchema(stmt) => write!(f, "{stmt}"),
            Self::DropSchema(stmt) => write!(f, "{stmt}"),
            Self::CreateTable(stmt) => write!(f, "{stmt}"),
            Self::DropTable(stmt) => write!(f, "{stmt}"),
            Self::CreateView(stmt) => write!(f, "{stmt}"),
            Self::DropView(stmt) => write!(f, "{stmt}"),
            Self::Insert(stmt) => write!(f, "{stmt}"),
            Self::InsertSelect(stmt) => write!(f, "{stmt}"),
            Self::Select(stmt) => write!(f, "{stmt}"),
            Self::Update(stmt) => write!(f, "{stmt}"),
            Self::Delete(stmt) => write!(f, "{stmt}"),
        }
    }
}
