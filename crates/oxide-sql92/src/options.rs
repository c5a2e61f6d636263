//! Parse options.

/// The SQL dialect to parse.
///
/// Only [`Dialect::Ansi1992`] is fully implemented; the remaining
/// variants are hooks for later grammar variance. Keyword matching is
/// ASCII case-insensitive for every dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// ANSI SQL-92.
    #[default]
    Ansi1992,
    /// ANSI SQL:1999.
    Ansi1999,
    /// ANSI SQL:2003.
    Ansi2003,
    /// MySQL.
    Mysql,
    /// PostgreSQL.
    Postgresql,
}

/// Options controlling a single `parse` call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// The dialect to parse.
    pub dialect: Dialect,
    /// When set, all lexical and syntactic work runs but no statements
    /// are constructed; a successful parse returns an empty statement
    /// list. Useful for syntax validation and fuzzing.
    pub disable_statement_construction: bool,
}

impl ParseOptions {
    /// Options for a plain ANSI SQL-92 parse.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches to syntax-check-only mode.
    #[must_use]
    pub fn syntax_only(mut self) -> Self {
        self.disable_statement_construction = true;
        self
    }
}
