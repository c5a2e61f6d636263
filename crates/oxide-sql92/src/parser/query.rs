//! Query specifications, table references, value expressions, and
//! search conditions.

use super::error::ParseError;
use super::parser::{Parser, LITERAL_SYMBOLS};
use crate::ast::{
    ArithOp, ColumnRef, CompOp, JoinSpec, JoinType, OrderBy, OrderDirection, OrderKey, Predicate,
    SearchCondition, SelectColumn, SelectStatement, SetFunction, SetFunctionKind, Sign, TableRef,
    ValueExpr, ValueFunction,
};
use crate::lexer::Symbol;

/// Non-literal symbols that can open a value expression, for
/// expected-set diagnostics.
const EXPR_STARTERS: [Symbol; 15] = [
    Symbol::Identifier,
    Symbol::Lparen,
    Symbol::Plus,
    Symbol::Minus,
    Symbol::Count,
    Symbol::Avg,
    Symbol::Max,
    Symbol::Min,
    Symbol::Sum,
    Symbol::Cast,
    Symbol::User,
    Symbol::CurrentUser,
    Symbol::SessionUser,
    Symbol::SystemUser,
    Symbol::CurrentDate,
];

impl<'a> Parser<'a> {
    /// `SELECT [DISTINCT|ALL] <select list> FROM <table reference list>
    /// [WHERE ...] [GROUP BY ...] [HAVING ...] [ORDER BY ...]`
    pub(crate) fn parse_query(&mut self) -> Result<SelectStatement, ParseError> {
        self.expect(Symbol::Select)?;
        let distinct = if self.accept(Symbol::Distinct)? {
            true
        } else {
            self.accept(Symbol::All)?;
            false
        };
        let columns = if self.accept(Symbol::Asterisk)? {
            vec![SelectColumn::Wildcard]
        } else {
            let mut columns = vec![self.parse_select_column()?];
            while self.accept(Symbol::Comma)? {
                columns.push(self.parse_select_column()?);
            }
            columns
        };
        self.expect(Symbol::From)?;
        let mut from = vec![self.parse_table_reference()?];
        while self.accept(Symbol::Comma)? {
            from.push(self.parse_table_reference()?);
        }
        let where_clause = if self.accept(Symbol::Where)? {
            Some(self.parse_search_condition()?)
        } else {
            None
        };
        let group_by = if self.accept(Symbol::Group)? {
            self.expect(Symbol::By)?;
            let mut columns = vec![ColumnRef::from_lexeme(&self.expect_identifier()?)];
            while self.accept(Symbol::Comma)? {
                columns.push(ColumnRef::from_lexeme(&self.expect_identifier()?));
            }
            columns
        } else {
            Vec::new()
        };
        let having = if self.accept(Symbol::Having)? {
            Some(self.parse_search_condition()?)
        } else {
            None
        };
        let order_by = if self.accept(Symbol::Order)? {
            self.expect(Symbol::By)?;
            let mut order_by = vec![self.parse_sort_spec()?];
            while self.accept(Symbol::Comma)? {
                order_by.push(self.parse_sort_spec()?);
            }
            order_by
        } else {
            Vec::new()
        };
        Ok(SelectStatement {
            distinct,
            columns,
            from,
            where_clause,
            group_by,
            having,
            order_by,
        })
    }

    /// One select list item: a value expression with an optional
    /// `[AS] alias`.
    fn parse_select_column(&mut self) -> Result<SelectColumn, ParseError> {
        let expr = self.parse_value_expression()?;
        let alias = if self.accept(Symbol::As)? {
            Some(self.expect_identifier()?)
        } else if self.check_identifier() {
            Some(self.expect_identifier()?)
        } else {
            None
        };
        Ok(SelectColumn::Expr { expr, alias })
    }

    /// A sort key: a column reference or a 1-based position, with an
    /// optional direction.
    fn parse_sort_spec(&mut self) -> Result<OrderBy, ParseError> {
        let key = if self.check(Symbol::LiteralUnsignedInteger) {
            OrderKey::Position(u64::from(self.expect_unsigned_int()?))
        } else if self.check_identifier() {
            OrderKey::Column(ColumnRef::from_lexeme(&self.expect_identifier()?))
        } else {
            return Err(self.expected(&[Symbol::Identifier, Symbol::LiteralUnsignedInteger]));
        };
        let direction = if self.accept(Symbol::Desc)? {
            OrderDirection::Desc
        } else {
            self.accept(Symbol::Asc)?;
            OrderDirection::Asc
        };
        Ok(OrderBy { key, direction })
    }

    /// A table reference: a primary followed by any number of trailing
    /// join clauses, absorbed left-associatively.
    pub(crate) fn parse_table_reference(&mut self) -> Result<TableRef, ParseError> {
        let mut left = self.parse_table_primary()?;
        loop {
            let join_type = match self.peek() {
                Symbol::Join => {
                    self.bump()?;
                    JoinType::Inner
                }
                Symbol::Inner => {
                    self.bump()?;
                    self.expect(Symbol::Join)?;
                    JoinType::Inner
                }
                Symbol::Left => {
                    self.bump()?;
                    self.accept(Symbol::Outer)?;
                    self.expect(Symbol::Join)?;
                    JoinType::Left
                }
                Symbol::Right => {
                    self.bump()?;
                    self.accept(Symbol::Outer)?;
                    self.expect(Symbol::Join)?;
                    JoinType::Right
                }
                Symbol::Full => {
                    self.bump()?;
                    self.accept(Symbol::Outer)?;
                    self.expect(Symbol::Join)?;
                    JoinType::Full
                }
                Symbol::Cross => {
                    self.bump()?;
                    self.expect(Symbol::Join)?;
                    JoinType::Cross
                }
                Symbol::Natural => {
                    self.bump()?;
                    self.expect(Symbol::Join)?;
                    JoinType::Natural
                }
                _ => break,
            };
            let right = self.parse_table_primary()?;
            // CROSS and NATURAL joins carry no specification; the rest
            // require ON or USING.
            let spec = match join_type {
                JoinType::Cross | JoinType::Natural => None,
                _ => match self.peek() {
                    Symbol::On => {
                        self.bump()?;
                        Some(JoinSpec::On(self.parse_search_condition()?))
                    }
                    Symbol::Using => {
                        self.bump()?;
                        self.expect(Symbol::Lparen)?;
                        let columns = self.parse_column_name_list()?;
                        self.expect(Symbol::Rparen)?;
                        Some(JoinSpec::Using(columns))
                    }
                    _ => return Err(self.expected(&[Symbol::On, Symbol::Using])),
                },
            };
            left = TableRef::Joined {
                left: Box::new(left),
                right: Box::new(right),
                join_type,
                spec,
            };
        }
        Ok(left)
    }

    /// A named table with an optional correlation name, or a derived
    /// table (parenthesized query with a mandatory alias).
    fn parse_table_primary(&mut self) -> Result<TableRef, ParseError> {
        if self.accept(Symbol::Lparen)? {
            let query = self.parse_query()?;
            self.expect(Symbol::Rparen)?;
            self.accept(Symbol::As)?;
            let alias = self.expect_identifier()?;
            return Ok(TableRef::Derived {
                query: Box::new(query),
                alias,
            });
        }
        let name = self.expect_identifier()?;
        let alias = if self.accept(Symbol::As)? {
            Some(self.expect_identifier()?)
        } else if self.check_identifier() {
            Some(self.expect_identifier()?)
        } else {
            None
        };
        Ok(TableRef::Table { name, alias })
    }

    // --- Value expressions ---

    /// Additive chains of terms (`+`, `-`, `||`).
    pub(crate) fn parse_value_expression(&mut self) -> Result<ValueExpr, ParseError> {
        let mut left = self.parse_term()?;
        loop {
            let op = match self.peek() {
                Symbol::Plus => ArithOp::Add,
                Symbol::Minus => ArithOp::Sub,
                Symbol::Concatenation => ArithOp::Concat,
                _ => break,
            };
            self.bump()?;
            let right = self.parse_term()?;
            left = ValueExpr::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    /// Multiplicative chains of factors (`*`, `/`).
    fn parse_term(&mut self) -> Result<ValueExpr, ParseError> {
        let mut left = self.parse_factor()?;
        loop {
            let op = match self.peek() {
                Symbol::Asterisk => ArithOp::Mul,
                Symbol::Solidus => ArithOp::Div,
                _ => break,
            };
            self.bump()?;
            let right = self.parse_factor()?;
            left = ValueExpr::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    /// An optionally signed primary.
    fn parse_factor(&mut self) -> Result<ValueExpr, ParseError> {
        let sign = match self.peek() {
            Symbol::Plus => {
                self.bump()?;
                Some(Sign::Plus)
            }
            Symbol::Minus => {
                self.bump()?;
                Some(Sign::Minus)
            }
            _ => None,
        };
        let primary = self.parse_primary()?;
        Ok(match sign {
            Some(sign) => ValueExpr::Unary {
                sign,
                operand: Box::new(primary),
            },
            None => primary,
        })
    }

    fn parse_primary(&mut self) -> Result<ValueExpr, ParseError> {
        match self.peek() {
            Symbol::Lparen => {
                self.bump()?;
                if self.check(Symbol::Select) {
                    let query = self.parse_query()?;
                    self.expect(Symbol::Rparen)?;
                    return Ok(ValueExpr::Subquery(Box::new(query)));
                }
                let inner = self.parse_value_expression()?;
                self.expect(Symbol::Rparen)?;
                Ok(ValueExpr::Nested(Box::new(inner)))
            }
            Symbol::Count | Symbol::Avg | Symbol::Max | Symbol::Min | Symbol::Sum => {
                self.parse_set_function()
            }
            Symbol::Cast => {
                self.bump()?;
                self.expect(Symbol::Lparen)?;
                let expr = self.parse_value_expression()?;
                self.expect(Symbol::As)?;
                let data_type = self.parse_data_type()?;
                self.expect(Symbol::Rparen)?;
                Ok(ValueExpr::Cast {
                    expr: Box::new(expr),
                    data_type,
                })
            }
            Symbol::User => {
                self.bump()?;
                Ok(ValueExpr::Function(ValueFunction::User))
            }
            Symbol::CurrentUser => {
                self.bump()?;
                Ok(ValueExpr::Function(ValueFunction::CurrentUser))
            }
            Symbol::SessionUser => {
                self.bump()?;
                Ok(ValueExpr::Function(ValueFunction::SessionUser))
            }
            Symbol::SystemUser => {
                self.bump()?;
                Ok(ValueExpr::Function(ValueFunction::SystemUser))
            }
            Symbol::CurrentDate => {
                self.bump()?;
                Ok(ValueExpr::Function(ValueFunction::CurrentDate))
            }
            Symbol::CurrentTime => {
                self.bump()?;
                let precision = self.parse_optional_length()?;
                Ok(ValueExpr::Function(ValueFunction::CurrentTime(precision)))
            }
            Symbol::CurrentTimestamp => {
                self.bump()?;
                let precision = self.parse_optional_length()?;
                Ok(ValueExpr::Function(ValueFunction::CurrentTimestamp(
                    precision,
                )))
            }
            _ if self.cur_is_literal() => Ok(ValueExpr::Literal(self.parse_literal()?)),
            _ if self.check_identifier() => {
                let text = self.expect_identifier()?;
                Ok(ValueExpr::Column(ColumnRef::from_lexeme(&text)))
            }
            _ => {
                let mut legal = EXPR_STARTERS.to_vec();
                legal.extend(LITERAL_SYMBOLS);
                Err(self.expected(&legal))
            }
        }
    }

    /// `COUNT(*)` or `COUNT/AVG/MAX/MIN/SUM ([DISTINCT] <expr>)`.
    fn parse_set_function(&mut self) -> Result<ValueExpr, ParseError> {
        let kind = match self.peek() {
            Symbol::Count => SetFunctionKind::Count,
            Symbol::Avg => SetFunctionKind::Avg,
            Symbol::Max => SetFunctionKind::Max,
            Symbol::Min => SetFunctionKind::Min,
            _ => SetFunctionKind::Sum,
        };
        self.bump()?;
        self.expect(Symbol::Lparen)?;
        if kind == SetFunctionKind::Count && self.accept(Symbol::Asterisk)? {
            self.expect(Symbol::Rparen)?;
            return Ok(ValueExpr::SetFunction(SetFunction {
                kind,
                distinct: false,
                arg: None,
            }));
        }
        let distinct = self.accept(Symbol::Distinct)?;
        let arg = self.parse_value_expression()?;
        self.expect(Symbol::Rparen)?;
        Ok(ValueExpr::SetFunction(SetFunction {
            kind,
            distinct,
            arg: Some(Box::new(arg)),
        }))
    }

    fn cur_is_literal(&self) -> bool {
        LITERAL_SYMBOLS.contains(&self.peek())
    }

    // --- Search conditions ---

    /// `OR`-chains of boolean terms.
    pub(crate) fn parse_search_condition(&mut self) -> Result<SearchCondition, ParseError> {
        let mut left = self.parse_boolean_term()?;
        while self.accept(Symbol::Or)? {
            let right = self.parse_boolean_term()?;
            left = SearchCondition::Or(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    /// `AND`-chains of boolean factors.
    fn parse_boolean_term(&mut self) -> Result<SearchCondition, ParseError> {
        let mut left = self.parse_boolean_factor()?;
        while self.accept(Symbol::And)? {
            let right = self.parse_boolean_factor()?;
            left = SearchCondition::And(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn parse_boolean_factor(&mut self) -> Result<SearchCondition, ParseError> {
        if self.accept(Symbol::Not)? {
            let inner = self.parse_boolean_factor()?;
            return Ok(SearchCondition::Not(Box::new(inner)));
        }
        self.parse_boolean_primary()
    }

    /// A predicate, or a parenthesized search condition.
    ///
    /// An opening paren is ambiguous: it may begin a nested search
    /// condition or a parenthesized value expression inside a predicate.
    /// The nested form is attempted first; an uncommitted failure
    /// rewinds the cursor and retries as a predicate. If both attempts
    /// fail the first diagnostic is reported.
    fn parse_boolean_primary(&mut self) -> Result<SearchCondition, ParseError> {
        if self.check(Symbol::Exists) {
            self.bump()?;
            self.expect(Symbol::Lparen)?;
            let query = self.parse_query()?;
            self.expect(Symbol::Rparen)?;
            return Ok(SearchCondition::predicate(Predicate::Exists(Box::new(
                query,
            ))));
        }
        if self.check(Symbol::Lparen) {
            let saved = self.snapshot();
            self.bump()?;
            let attempt = self
                .parse_search_condition()
                .and_then(|cond| self.expect(Symbol::Rparen).map(|_| cond));
            match attempt {
                Ok(cond) => return Ok(SearchCondition::Nested(Box::new(cond))),
                Err(nested_err) => {
                    self.restore(saved);
                    return match self.parse_predicate() {
                        Ok(pred) => Ok(pred),
                        Err(_) => Err(nested_err),
                    };
                }
            }
        }
        self.parse_predicate()
    }

    /// A predicate anchored on a leading row value expression.
    fn parse_predicate(&mut self) -> Result<SearchCondition, ParseError> {
        let expr = self.parse_value_expression()?;
        let pred = match self.peek() {
            Symbol::Equals
            | Symbol::NotEquals
            | Symbol::LessThan
            | Symbol::GreaterThan
            | Symbol::LessThanOrEquals
            | Symbol::GreaterThanOrEquals => {
                let op = match self.peek() {
                    Symbol::Equals => CompOp::Eq,
                    Symbol::NotEquals => CompOp::NotEq,
                    Symbol::LessThan => CompOp::Lt,
                    Symbol::GreaterThan => CompOp::Gt,
                    Symbol::LessThanOrEquals => CompOp::LtEq,
                    _ => CompOp::GtEq,
                };
                self.bump()?;
                let right = self.parse_value_expression()?;
                Predicate::Comparison {
                    left: expr,
                    op,
                    right,
                }
            }
            Symbol::Is => {
                self.bump()?;
                let negated = self.accept(Symbol::Not)?;
                self.expect(Symbol::Null)?;
                Predicate::IsNull { expr, negated }
            }
            Symbol::Not => {
                self.bump()?;
                match self.peek() {
                    Symbol::Between => self.parse_between(expr, true)?,
                    Symbol::In => self.parse_in(expr, true)?,
                    Symbol::Like => self.parse_like(expr, true)?,
                    _ => {
                        return Err(self.expected(&[
                            Symbol::Between,
                            Symbol::In,
                            Symbol::Like,
                        ]));
                    }
                }
            }
            Symbol::Between => self.parse_between(expr, false)?,
            Symbol::In => self.parse_in(expr, false)?,
            Symbol::Like => self.parse_like(expr, false)?,
            _ => {
                return Err(self.expected(&[
                    Symbol::Equals,
                    Symbol::NotEquals,
                    Symbol::LessThan,
                    Symbol::GreaterThan,
                    Symbol::LessThanOrEquals,
                    Symbol::GreaterThanOrEquals,
                    Symbol::Is,
                    Symbol::Not,
                    Symbol::Between,
                    Symbol::In,
                    Symbol::Like,
                ]));
            }
        };
        Ok(SearchCondition::predicate(pred))
    }

    fn parse_between(&mut self, expr: ValueExpr, negated: bool) -> Result<Predicate, ParseError> {
        self.bump()?;
        let low = self.parse_value_expression()?;
        self.expect(Symbol::And)?;
        let high = self.parse_value_expression()?;
        Ok(Predicate::Between {
            expr,
            low,
            high,
            negated,
        })
    }

    fn parse_in(&mut self, expr: ValueExpr, negated: bool) -> Result<Predicate, ParseError> {
        self.bump()?;
        self.expect(Symbol::Lparen)?;
        if self.check(Symbol::Select) {
            let query = self.parse_query()?;
            self.expect(Symbol::Rparen)?;
            return Ok(Predicate::InSubquery {
                expr,
                query: Box::new(query),
                negated,
            });
        }
        let mut list = vec![self.parse_value_expression()?];
        while self.accept(Symbol::Comma)? {
            list.push(self.parse_value_expression()?);
        }
        self.expect(Symbol::Rparen)?;
        Ok(Predicate::InList {
            expr,
            list,
            negated,
        })
    }

    fn parse_like(&mut self, expr: ValueExpr, negated: bool) -> Result<Predicate, ParseError> {
        self.bump()?;
        let pattern = self.parse_value_expression()?;
        let escape = if self.accept(Symbol::Escape)? {
            Some(self.parse_value_expression()?)
        } else {
            None
        };
        Ok(Predicate::Like {
            expr,
            pattern,
            escape,
            negated,
        })
    }
}
