//! The parser driver and statement state machines.

use tracing::trace;

use super::error::{ParseError, SyntaxError};
use crate::ast::{
    ColumnConstraint, ColumnDef, CreateSchemaStatement, CreateTableStatement,
    CreateViewStatement, DefaultClause, DeleteStatement, DropBehavior, DropSchemaStatement,
    DropTableStatement, DropViewStatement, InsertSelectStatement, InsertSource, InsertStatement,
    Literal, OnCommitAction, ReferencesSpec, RowValue, Statement, TableConstraint,
    TableConstraintKind, TableType, UpdateAssignment, UpdateStatement, ValueFunction,
};
use crate::lexer::{LexError, LexErrorKind, Lexer, Symbol, Token, TokenKind};
use crate::options::ParseOptions;

/// Literal subkind symbols, for expected-set diagnostics.
pub(crate) const LITERAL_SYMBOLS: [Symbol; 9] = [
    Symbol::LiteralUnsignedInteger,
    Symbol::LiteralSignedInteger,
    Symbol::LiteralUnsignedNumeric,
    Symbol::LiteralSignedNumeric,
    Symbol::LiteralApproximateNumeric,
    Symbol::LiteralCharacterString,
    Symbol::LiteralNationalCharacterString,
    Symbol::LiteralBitString,
    Symbol::LiteralHexString,
];

fn unescape_identifier(text: &str) -> String {
    if text.contains('"') || text.contains('`') {
        text.replace("\"\"", "\"").replace("``", "`")
    } else {
        text.to_string()
    }
}

fn unescape_string(text: &str) -> String {
    text.replace("''", "'")
}

/// A recursive-descent SQL-92 parser.
///
/// All mutable parse state lives here: the lexer, the current token, and
/// the options. One parser serves one input buffer; distinct parsers are
/// fully independent.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    opts: ParseOptions,
    cur: Token,
}

impl<'a> Parser<'a> {
    /// Creates a parser with default options.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    /// Creates a parser with the given options.
    #[must_use]
    pub fn with_options(input: &'a str, opts: ParseOptions) -> Self {
        Self {
            lexer: Lexer::new(input),
            opts,
            cur: Token::eos(0),
        }
    }

    /// Parses the whole input into a list of statements.
    ///
    /// Statements are separated by `;`; a trailing `;` before the end of
    /// input is optional. Parsing stops at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first lexical or syntax diagnostic encountered.
    pub fn parse_statements(&mut self) -> Result<Vec<Statement>, ParseError> {
        self.bump()?;
        let mut statements = Vec::new();
        loop {
            match self.cur.symbol {
                Symbol::Eos => break,
                Symbol::Semicolon => self.bump()?,
                _ => {
                    if let Some(stmt) = self.parse_statement()? {
                        statements.push(stmt);
                    }
                }
            }
        }
        trace!(count = statements.len(), "parse complete");
        Ok(statements)
    }

    /// Dispatches on the leading symbol of a statement.
    fn parse_statement(&mut self) -> Result<Option<Statement>, ParseError> {
        trace!(symbol = self.cur.symbol.as_str(), "statement dispatch");
        match self.cur.symbol {
            Symbol::Create => self.parse_create(),
            Symbol::Drop => self.parse_drop(),
            Symbol::Insert => self.parse_insert(),
            Symbol::Select => {
                let query = self.parse_query()?;
                self.expect_statement_end()?;
                Ok(self.construct(Statement::Select(query)))
            }
            Symbol::Update => self.parse_update(),
            Symbol::Delete => self.parse_delete(),
            _ => Err(self.expected(&[
                Symbol::Create,
                Symbol::Drop,
                Symbol::Insert,
                Symbol::Select,
                Symbol::Update,
                Symbol::Delete,
            ])),
        }
    }

    fn parse_create(&mut self) -> Result<Option<Statement>, ParseError> {
        self.bump()?;
        match self.cur.symbol {
            Symbol::Schema => self.parse_create_schema(),
            Symbol::Table | Symbol::Global | Symbol::Local | Symbol::Temporary => {
                self.parse_create_table()
            }
            Symbol::View => self.parse_create_view(),
            _ => Err(self.expected(&[
                Symbol::Schema,
                Symbol::Table,
                Symbol::View,
                Symbol::Global,
                Symbol::Local,
                Symbol::Temporary,
            ])),
        }
    }

    /// `CREATE SCHEMA <schema name clause> [DEFAULT CHARACTER SET <cs>]`
    ///
    /// The schema name clause is an identifier, an `AUTHORIZATION`
    /// clause, or both. The schema element list is accepted empty.
    fn parse_create_schema(&mut self) -> Result<Option<Statement>, ParseError> {
        self.bump()?;
        let mut name = None;
        if self.check_identifier() {
            name = Some(self.expect_identifier()?);
        } else if self.cur.symbol != Symbol::Authorization {
            return Err(self.expected(&[Symbol::Identifier, Symbol::Authorization]));
        }
        let mut authorization = None;
        if self.accept(Symbol::Authorization)? {
            authorization = Some(self.expect_identifier()?);
        }
        let mut default_charset = None;
        if self.accept(Symbol::Default)? {
            self.expect(Symbol::Character)?;
            self.expect(Symbol::Set)?;
            default_charset = Some(self.expect_identifier()?);
        }
        if !matches!(self.cur.symbol, Symbol::Semicolon | Symbol::Eos) {
            let mut legal = Vec::new();
            if authorization.is_none() && default_charset.is_none() {
                legal.push(Symbol::Authorization);
            }
            if default_charset.is_none() {
                legal.push(Symbol::Default);
            }
            legal.extend([Symbol::Semicolon, Symbol::Eos]);
            return Err(self.expected(&legal));
        }
        Ok(self.construct(Statement::CreateSchema(CreateSchemaStatement {
            name,
            authorization,
            default_charset,
        })))
    }

    /// `CREATE [{GLOBAL|LOCAL} TEMPORARY] TABLE <name> (<table element
    /// list>) [ON COMMIT {DELETE|PRESERVE} ROWS]`
    fn parse_create_table(&mut self) -> Result<Option<Statement>, ParseError> {
        let table_type = match self.cur.symbol {
            Symbol::Global => {
                self.bump()?;
                self.expect(Symbol::Temporary)?;
                TableType::TemporaryGlobal
            }
            Symbol::Local => {
                self.bump()?;
                self.expect(Symbol::Temporary)?;
                TableType::TemporaryLocal
            }
            Symbol::Temporary => {
                self.bump()?;
                TableType::TemporaryGlobal
            }
            _ => TableType::Normal,
        };
        self.expect(Symbol::Table)?;
        let name = self.expect_identifier()?;
        self.expect(Symbol::Lparen)?;
        let mut columns = Vec::new();
        let mut constraints = Vec::new();
        loop {
            // A table element is a column definition or a table
            // constraint; constraint starter keywords decide which.
            match self.cur.symbol {
                Symbol::Constraint
                | Symbol::Unique
                | Symbol::Primary
                | Symbol::Foreign
                | Symbol::Check => constraints.push(self.parse_table_constraint()?),
                _ if self.check_identifier() => columns.push(self.parse_column_definition()?),
                _ => {
                    return Err(self.expected(&[
                        Symbol::Identifier,
                        Symbol::Constraint,
                        Symbol::Unique,
                        Symbol::Primary,
                        Symbol::Foreign,
                        Symbol::Check,
                    ]));
                }
            }
            match self.cur.symbol {
                Symbol::Comma => self.bump()?,
                Symbol::Rparen => {
                    self.bump()?;
                    break;
                }
                _ => return Err(self.expected(&[Symbol::Comma, Symbol::Rparen])),
            }
        }
        let on_commit = if self.accept(Symbol::On)? {
            self.expect(Symbol::Commit)?;
            let action = match self.cur.symbol {
                Symbol::Delete => {
                    self.bump()?;
                    OnCommitAction::DeleteRows
                }
                Symbol::Preserve => {
                    self.bump()?;
                    OnCommitAction::PreserveRows
                }
                _ => return Err(self.expected(&[Symbol::Delete, Symbol::Preserve])),
            };
            self.expect(Symbol::Rows)?;
            Some(action)
        } else {
            None
        };
        self.expect_statement_end()?;
        Ok(self.construct(Statement::CreateTable(CreateTableStatement {
            table_type,
            name,
            columns,
            constraints,
            on_commit,
        })))
    }

    /// `<column name> <data type> [<default clause>] [<column
    /// constraint>...]`
    fn parse_column_definition(&mut self) -> Result<ColumnDef, ParseError> {
        let name = self.expect_identifier()?;
        let data_type = self.parse_data_type()?;
        let default = if self.accept(Symbol::Default)? {
            Some(self.parse_default_clause()?)
        } else {
            None
        };
        let mut constraints = Vec::new();
        loop {
            match self.cur.symbol {
                Symbol::Not => {
                    self.bump()?;
                    self.expect(Symbol::Null)?;
                    constraints.push(ColumnConstraint::NotNull);
                }
                Symbol::Unique => {
                    self.bump()?;
                    constraints.push(ColumnConstraint::Unique);
                }
                Symbol::Primary => {
                    self.bump()?;
                    self.expect(Symbol::Key)?;
                    constraints.push(ColumnConstraint::PrimaryKey);
                }
                Symbol::References => {
                    self.bump()?;
                    constraints.push(ColumnConstraint::References(self.parse_references_spec()?));
                }
                Symbol::Check => {
                    self.bump()?;
                    self.expect(Symbol::Lparen)?;
                    let cond = self.parse_search_condition()?;
                    self.expect(Symbol::Rparen)?;
                    constraints.push(ColumnConstraint::Check(cond));
                }
                _ => break,
            }
        }
        Ok(ColumnDef {
            name,
            data_type,
            default,
            constraints,
        })
    }

    /// The option following `DEFAULT`: a literal, `NULL`, or a niladic
    /// value function.
    fn parse_default_clause(&mut self) -> Result<DefaultClause, ParseError> {
        match self.cur.symbol {
            Symbol::Null => {
                self.bump()?;
                Ok(DefaultClause::Null)
            }
            Symbol::User => {
                self.bump()?;
                Ok(DefaultClause::Function(ValueFunction::User))
            }
            Symbol::CurrentUser => {
                self.bump()?;
                Ok(DefaultClause::Function(ValueFunction::CurrentUser))
            }
            Symbol::SessionUser => {
                self.bump()?;
                Ok(DefaultClause::Function(ValueFunction::SessionUser))
            }
            Symbol::SystemUser => {
                self.bump()?;
                Ok(DefaultClause::Function(ValueFunction::SystemUser))
            }
            Symbol::CurrentDate => {
                self.bump()?;
                Ok(DefaultClause::Function(ValueFunction::CurrentDate))
            }
            Symbol::CurrentTime => {
                self.bump()?;
                let precision = self.parse_optional_length()?;
                Ok(DefaultClause::Function(ValueFunction::CurrentTime(
                    precision,
                )))
            }
            Symbol::CurrentTimestamp => {
                self.bump()?;
                let precision = self.parse_optional_length()?;
                Ok(DefaultClause::Function(ValueFunction::CurrentTimestamp(
                    precision,
                )))
            }
            _ if self.cur.is_literal() => Ok(DefaultClause::Literal(self.parse_literal()?)),
            _ => {
                let mut legal = vec![
                    Symbol::Null,
                    Symbol::User,
                    Symbol::CurrentUser,
                    Symbol::SessionUser,
                    Symbol::SystemUser,
                    Symbol::CurrentDate,
                    Symbol::CurrentTime,
                    Symbol::CurrentTimestamp,
                ];
                legal.extend(LITERAL_SYMBOLS);
                Err(self.expected(&legal))
            }
        }
    }

    /// `[CONSTRAINT <name>]` then a unique, primary key, foreign key, or
    /// check definition.
    fn parse_table_constraint(&mut self) -> Result<TableConstraint, ParseError> {
        let name = if self.accept(Symbol::Constraint)? {
            Some(self.expect_identifier()?)
        } else {
            None
        };
        let kind = match self.cur.symbol {
            Symbol::Unique => {
                self.bump()?;
                self.expect(Symbol::Lparen)?;
                let columns = self.parse_column_name_list()?;
                self.expect(Symbol::Rparen)?;
                TableConstraintKind::Unique(columns)
            }
            Symbol::Primary => {
                self.bump()?;
                self.expect(Symbol::Key)?;
                self.expect(Symbol::Lparen)?;
                let columns = self.parse_column_name_list()?;
                self.expect(Symbol::Rparen)?;
                TableConstraintKind::PrimaryKey(columns)
            }
            Symbol::Foreign => {
                self.bump()?;
                self.expect(Symbol::Key)?;
                self.expect(Symbol::Lparen)?;
                let columns = self.parse_column_name_list()?;
                self.expect(Symbol::Rparen)?;
                self.expect(Symbol::References)?;
                let references = self.parse_references_spec()?;
                TableConstraintKind::ForeignKey {
                    columns,
                    references,
                }
            }
            Symbol::Check => {
                self.bump()?;
                self.expect(Symbol::Lparen)?;
                let cond = self.parse_search_condition()?;
                self.expect(Symbol::Rparen)?;
                TableConstraintKind::Check(cond)
            }
            _ => {
                return Err(self.expected(&[
                    Symbol::Unique,
                    Symbol::Primary,
                    Symbol::Foreign,
                    Symbol::Check,
                ]));
            }
        };
        Ok(TableConstraint { name, kind })
    }

    /// The table (and optional column list) a `REFERENCES` clause points
    /// at. The `REFERENCES` keyword itself is already consumed.
    fn parse_references_spec(&mut self) -> Result<ReferencesSpec, ParseError> {
        let table = self.expect_identifier()?;
        let columns = if self.accept(Symbol::Lparen)? {
            let columns = self.parse_column_name_list()?;
            self.expect(Symbol::Rparen)?;
            columns
        } else {
            Vec::new()
        };
        Ok(ReferencesSpec { table, columns })
    }

    pub(crate) fn parse_column_name_list(&mut self) -> Result<Vec<String>, ParseError> {
        let mut columns = vec![self.expect_identifier()?];
        while self.accept(Symbol::Comma)? {
            columns.push(self.expect_identifier()?);
        }
        Ok(columns)
    }

    /// `CREATE VIEW <name> [(<columns>)] AS <query> [WITH CHECK OPTION]`
    fn parse_create_view(&mut self) -> Result<Option<Statement>, ParseError> {
        self.bump()?;
        let name = self.expect_identifier()?;
        let columns = if self.accept(Symbol::Lparen)? {
            let columns = self.parse_column_name_list()?;
            self.expect(Symbol::Rparen)?;
            columns
        } else {
            Vec::new()
        };
        self.expect(Symbol::As)?;
        let query = self.parse_query()?;
        let check_option = if self.accept(Symbol::With)? {
            self.expect(Symbol::Check)?;
            self.expect(Symbol::Option)?;
            true
        } else {
            false
        };
        self.expect_statement_end()?;
        Ok(self.construct(Statement::CreateView(CreateViewStatement {
            name,
            columns,
            query: Box::new(query),
            check_option,
        })))
    }

    fn parse_drop(&mut self) -> Result<Option<Statement>, ParseError> {
        self.bump()?;
        match self.cur.symbol {
            Symbol::Schema => {
                self.bump()?;
                let name = self.expect_identifier()?;
                let behavior = self.parse_drop_behavior()?;
                self.expect_statement_end()?;
                Ok(self.construct(Statement::DropSchema(DropSchemaStatement {
                    name,
                    behavior,
                })))
            }
            Symbol::Table => {
                self.bump()?;
                let name = self.expect_identifier()?;
                let behavior = self.parse_drop_behavior()?;
                self.expect_statement_end()?;
                Ok(self.construct(Statement::DropTable(DropTableStatement { name, behavior })))
            }
            Symbol::View => {
                self.bump()?;
                let name = self.expect_identifier()?;
                self.expect_statement_end()?;
                Ok(self.construct(Statement::DropView(DropViewStatement { name })))
            }
            _ => Err(self.expected(&[Symbol::Schema, Symbol::Table, Symbol::View])),
        }
    }

    fn parse_drop_behavior(&mut self) -> Result<Option<DropBehavior>, ParseError> {
        if self.accept(Symbol::Cascade)? {
            Ok(Some(DropBehavior::Cascade))
        } else if self.accept(Symbol::Restrict)? {
            Ok(Some(DropBehavior::Restrict))
        } else {
            Ok(None)
        }
    }

    /// `INSERT INTO <table> <insert columns and source>`
    fn parse_insert(&mut self) -> Result<Option<Statement>, ParseError> {
        self.bump()?;
        self.expect(Symbol::Into)?;
        let table = self.expect_identifier()?;
        match self.cur.symbol {
            Symbol::Default => {
                self.bump()?;
                self.expect(Symbol::Values)?;
                self.expect_statement_end()?;
                Ok(self.construct(Statement::Insert(InsertStatement {
                    table,
                    columns: Vec::new(),
                    source: InsertSource::DefaultValues,
                })))
            }
            Symbol::Lparen => {
                self.bump()?;
                let columns = self.parse_column_name_list()?;
                self.expect(Symbol::Rparen)?;
                match self.cur.symbol {
                    Symbol::Values => {
                        self.bump()?;
                        let rows = self.parse_values_rows()?;
                        self.expect_statement_end()?;
                        Ok(self.construct(Statement::Insert(InsertStatement {
                            table,
                            columns,
                            source: InsertSource::Values(rows),
                        })))
                    }
                    Symbol::Select => {
                        let query = self.parse_query()?;
                        self.expect_statement_end()?;
                        Ok(self.construct(Statement::InsertSelect(InsertSelectStatement {
                            table,
                            columns,
                            query: Box::new(query),
                        })))
                    }
                    _ => Err(self.expected(&[Symbol::Values, Symbol::Select])),
                }
            }
            Symbol::Values => {
                self.bump()?;
                let rows = self.parse_values_rows()?;
                self.expect_statement_end()?;
                Ok(self.construct(Statement::Insert(InsertStatement {
                    table,
                    columns: Vec::new(),
                    source: InsertSource::Values(rows),
                })))
            }
            Symbol::Select => {
                let query = self.parse_query()?;
                self.expect_statement_end()?;
                Ok(self.construct(Statement::InsertSelect(InsertSelectStatement {
                    table,
                    columns: Vec::new(),
                    query: Box::new(query),
                })))
            }
            _ => Err(self.expected(&[
                Symbol::Lparen,
                Symbol::Default,
                Symbol::Values,
                Symbol::Select,
            ])),
        }
    }

    /// One or more parenthesized row value constructor lists.
    fn parse_values_rows(&mut self) -> Result<Vec<Vec<RowValue>>, ParseError> {
        let mut rows = Vec::new();
        loop {
            self.expect(Symbol::Lparen)?;
            let mut row = vec![self.parse_row_value()?];
            while self.accept(Symbol::Comma)? {
                row.push(self.parse_row_value()?);
            }
            self.expect(Symbol::Rparen)?;
            rows.push(row);
            if !self.accept(Symbol::Comma)? {
                break;
            }
        }
        Ok(rows)
    }

    pub(crate) fn parse_row_value(&mut self) -> Result<RowValue, ParseError> {
        match self.cur.symbol {
            Symbol::Null => {
                self.bump()?;
                Ok(RowValue::Null)
            }
            Symbol::Default => {
                self.bump()?;
                Ok(RowValue::Default)
            }
            _ => Ok(RowValue::Expr(self.parse_value_expression()?)),
        }
    }

    /// `UPDATE <table> SET <assignment list> [WHERE <search condition>]`
    fn parse_update(&mut self) -> Result<Option<Statement>, ParseError> {
        self.bump()?;
        let table = self.expect_identifier()?;
        self.expect(Symbol::Set)?;
        let mut assignments = Vec::new();
        loop {
            let column = self.expect_identifier()?;
            self.expect(Symbol::Equals)?;
            let value = self.parse_row_value()?;
            assignments.push(UpdateAssignment { column, value });
            if !self.accept(Symbol::Comma)? {
                break;
            }
        }
        let where_clause = if self.accept(Symbol::Where)? {
            Some(self.parse_search_condition()?)
        } else {
            None
        };
        self.expect_statement_end()?;
        Ok(self.construct(Statement::Update(UpdateStatement {
            table,
            assignments,
            where_clause,
        })))
    }

    /// `DELETE FROM <table> [WHERE <search condition>]`
    fn parse_delete(&mut self) -> Result<Option<Statement>, ParseError> {
        self.bump()?;
        self.expect(Symbol::From)?;
        let table = self.expect_identifier()?;
        let where_clause = if self.accept(Symbol::Where)? {
            Some(self.parse_search_condition()?)
        } else {
            None
        };
        self.expect_statement_end()?;
        Ok(self.construct(Statement::Delete(DeleteStatement {
            table,
            where_clause,
        })))
    }

    // --- Token cursor helpers ---

    /// Advances to the next token, filtering block comments. Surfaces a
    /// lexer failure as a parse error.
    pub(crate) fn bump(&mut self) -> Result<(), ParseError> {
        loop {
            let tok = self.lexer.next();
            match tok.kind {
                TokenKind::Comment => continue,
                TokenKind::Error => {
                    let err = self.lexer.error().unwrap_or(LexError {
                        kind: LexErrorKind::UnexpectedCharacter,
                        position: tok.span.start,
                    });
                    return Err(err.into());
                }
                _ => {
                    self.cur = tok;
                    return Ok(());
                }
            }
        }
    }

    /// The current token's symbol.
    pub(crate) fn peek(&self) -> Symbol {
        self.cur.symbol
    }

    /// Returns true if the current token has the given symbol.
    pub(crate) fn check(&self, symbol: Symbol) -> bool {
        self.cur.symbol == symbol
    }

    /// Returns true if the current token is an identifier.
    pub(crate) fn check_identifier(&self) -> bool {
        self.cur.is_identifier()
    }

    /// Consumes the current token if it has the given symbol.
    pub(crate) fn accept(&mut self, symbol: Symbol) -> Result<bool, ParseError> {
        if self.check(symbol) {
            self.bump()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consumes the current token, which must have the given symbol.
    pub(crate) fn expect(&mut self, symbol: Symbol) -> Result<Token, ParseError> {
        if self.check(symbol) {
            let tok = self.cur;
            self.bump()?;
            Ok(tok)
        } else {
            Err(self.expected(&[symbol]))
        }
    }

    /// Consumes an identifier token and returns its text, with delimiter
    /// escapes resolved.
    pub(crate) fn expect_identifier(&mut self) -> Result<String, ParseError> {
        if self.check_identifier() {
            let text = unescape_identifier(self.lexer.text(self.cur.span));
            self.bump()?;
            Ok(text)
        } else {
            Err(self.expected(&[Symbol::Identifier]))
        }
    }

    /// Consumes an unsigned integer literal as a `u32` (lengths,
    /// precisions, scales).
    pub(crate) fn expect_unsigned_int(&mut self) -> Result<u32, ParseError> {
        if !self.check(Symbol::LiteralUnsignedInteger) {
            return Err(self.expected(&[Symbol::LiteralUnsignedInteger]));
        }
        let text = self.lexer.text(self.cur.span);
        let value = text
            .parse::<u32>()
            .map_err(|_| self.error_at("unsigned integer out of range"))?;
        self.bump()?;
        Ok(value)
    }

    /// Consumes a literal token of any subkind.
    pub(crate) fn parse_literal(&mut self) -> Result<Literal, ParseError> {
        let text = self.lexer.text(self.cur.span);
        let literal = match self.cur.symbol {
            Symbol::LiteralUnsignedInteger => match text.parse::<u64>() {
                Ok(n) => Literal::UnsignedInteger(n),
                Err(_) => return Err(self.error_at("integer literal out of range")),
            },
            Symbol::LiteralSignedInteger => match text.parse::<i64>() {
                Ok(n) => Literal::SignedInteger(n),
                Err(_) => return Err(self.error_at("integer literal out of range")),
            },
            Symbol::LiteralUnsignedNumeric | Symbol::LiteralSignedNumeric => {
                Literal::Numeric(text.to_string())
            }
            Symbol::LiteralApproximateNumeric => Literal::Approximate(text.to_string()),
            Symbol::LiteralCharacterString => Literal::CharacterString(unescape_string(text)),
            Symbol::LiteralNationalCharacterString => {
                Literal::NationalString(unescape_string(text))
            }
            Symbol::LiteralBitString => Literal::BitString(text.to_string()),
            Symbol::LiteralHexString => Literal::HexString(text.to_string()),
            _ => return Err(self.expected(&LITERAL_SYMBOLS)),
        };
        self.bump()?;
        Ok(literal)
    }

    /// Verifies, without consuming, that the statement is followed by a
    /// separator or the end of input.
    pub(crate) fn expect_statement_end(&self) -> Result<(), ParseError> {
        if matches!(self.cur.symbol, Symbol::Semicolon | Symbol::Eos) {
            Ok(())
        } else {
            Err(self.expected(&[Symbol::Semicolon, Symbol::Eos]))
        }
    }

    /// Builds an expected-symbol diagnostic anchored at the current
    /// token.
    pub(crate) fn expected(&self, symbols: &[Symbol]) -> ParseError {
        SyntaxError::expected(symbols, self.cur, self.current_text(), self.lexer.input()).into()
    }

    /// Builds a free-form diagnostic anchored at the current token.
    pub(crate) fn error_at(&self, message: &str) -> ParseError {
        SyntaxError::other(message, self.cur, self.lexer.input()).into()
    }

    fn current_text(&self) -> Option<&str> {
        match self.cur.kind {
            TokenKind::Identifier | TokenKind::Literal => {
                Some(self.lexer.text(self.cur.span))
            }
            _ => None,
        }
    }

    /// Saves the token cursor so an uncommitted parse attempt can
    /// rewind.
    pub(crate) fn snapshot(&self) -> (Lexer<'a>, Token) {
        (self.lexer.clone(), self.cur)
    }

    /// Rewinds to a saved token cursor.
    pub(crate) fn restore(&mut self, saved: (Lexer<'a>, Token)) {
        self.lexer = saved.0;
        self.cur = saved.1;
    }

    /// Wraps a finished statement, or drops it when statement
    /// construction is disabled.
    fn construct(&self, stmt: Statement) -> Option<Statement> {
        if self.opts.disable_statement_construction {
            None
        } else {
            Some(stmt)
        }
    }
}
