//! Value expressions, row value constructors, and search conditions.

use core::fmt;

use super::{write_ident, DataType, SelectStatement};

/// A literal value. Exact and approximate numerics keep their source
/// text: the parser classifies, it does not evaluate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Literal {
    /// An unsigned integer, e.g. `42`.
    UnsignedInteger(u64),
    /// A signed integer, e.g. `-7`.
    SignedInteger(i64),
    /// An exact numeric with a fractional part, e.g. `3.14`.
    Numeric(String),
    /// An approximate numeric in exponent notation, e.g. `2.5E-3`.
    Approximate(String),
    /// A character string, stored with quote escapes resolved.
    CharacterString(String),
    /// A national character string, `N'...'`.
    NationalString(String),
    /// A bit string, `B'...'`.
    BitString(String),
    /// A hex string, `X'...'`.
    HexString(String),
}

fn write_quoted(f: &mut fmt::Formatter<'_>, prefix: &str, body: &str) -> fmt::Result {
    write!(f, "{prefix}'{}'", body.replace('\'', "''"))
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsignedInteger(n) => write!(f, "{n}"),
            Self::SignedInteger(n) => write!(f, "{n}"),
            Self::Numeric(text) | Self::Approximate(text) => f.write_str(text),
            Self::CharacterString(body) => write_quoted(f, "", body),
            Self::NationalString(body) => write_quoted(f, "N", body),
            Self::BitString(body) => write_quoted(f, "B", body),
            Self::HexString(body) => write_quoted(f, "X", body),
        }
    }
}

/// A column reference, optionally qualified (`t.c` or `c`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnRef {
    /// Qualifier (table or correlation name), if any.
    pub qualifier: Option<String>,
    /// Column name.
    pub name: String,
}

impl ColumnRef {
    /// Creates an unqualified column reference.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            qualifier: None,
            name: name.into(),
        }
    }

    /// Creates a qualified column reference.
    #[must_use]
    pub fn qualified(qualifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            qualifier: Some(qualifier.into()),
            name: name.into(),
        }
    }

    /// Splits an identifier lexeme on its last object boundary: `db.t.c`
    /// qualifies `c` with `db.t`.
    #[must_use]
    pub(crate) fn from_lexeme(text: &str) -> Self {
        match text.rsplit_once('.') {
            Some((qualifier, name)) if !qualifier.is_empty() && !name.is_empty() => {
                Self::qualified(qualifier, name)
            }
            _ => Self::new(text),
        }
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(qualifier) = &self.qualifier {
            write_ident(f, qualifier)?;
            f.write_str(".")?;
        }
        write_ident(f, &self.name)
    }
}

/// An arithmetic or concatenation operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Concat,
}

impl ArithOp {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Concat => "||",
        }
    }
}

/// A unary sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    Plus,
    Minus,
}

/// A comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompOp {
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
}

impl CompOp {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "<>",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
        }
    }
}

/// A set function kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SetFunctionKind {
    Count,
    Avg,
    Max,
    Min,
    Sum,
}

impl SetFunctionKind {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Count => "COUNT",
            Self::Avg => "AVG",
            Self::Max => "MAX",
            Self::Min => "MIN",
            Self::Sum => "SUM",
        }
    }
}

/// A set function specification. An absent argument stands for
/// `COUNT(*)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetFunction {
    pub kind: SetFunctionKind,
    pub distinct: bool,
    pub arg: Option<Box<ValueExpr>>,
}

impl fmt::Display for SetFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.kind.as_str())?;
        match &self.arg {
            None => f.write_str("*")?,
            Some(arg) => {
                if self.distinct {
                    f.write_str("DISTINCT ")?;
                }
                write!(f, "{arg}")?;
            }
        }
        f.write_str(")")
    }
}

/// A niladic user function or a datetime value function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueFunction {
    User,
    CurrentUser,
    SessionUser,
    SystemUser,
    CurrentDate,
    CurrentTime(Option<u32>),
    CurrentTimestamp(Option<u32>),
}

impl fmt::Display for ValueFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => f.write_str("USER"),
            Self::CurrentUser => f.write_str("CURRENT_USER"),
            Self::SessionUser => f.write_str("SESSION_USER"),
            Self::SystemUser => f.write_str("SYSTEM_USER"),
            Self::CurrentDate => f.write_str("CURRENT_DATE"),
            Self::CurrentTime(precision) => {
                f.write_str("CURRENT_TIME")?;
                if let Some(p) = precision {
                    write!(f, "({p})")?;
                }
                Ok(())
            }
            Self::CurrentTimestamp(precision) => {
                f.write_str("CURRENT_TIMESTAMP")?;
                if let Some(p) = precision {
                    write!(f, "({p})")?;
                }
                Ok(())
            }
        }
    }
}

/// A value expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueExpr {
    /// A literal value.
    Literal(Literal),
    /// A column reference.
    Column(ColumnRef),
    /// A parenthesized expression.
    Nested(Box<ValueExpr>),
    /// A signed expression.
    Unary {
        sign: Sign,
        operand: Box<ValueExpr>,
    },
    /// An arithmetic or concatenation chain node.
    Binary {
        left: Box<ValueExpr>,
        op: ArithOp,
        right: Box<ValueExpr>,
    },
    /// A set function such as `COUNT(*)`.
    SetFunction(SetFunction),
    /// A niladic value function such as `CURRENT_USER`.
    Function(ValueFunction),
    /// `CAST (expr AS type)`.
    Cast {
        expr: Box<ValueExpr>,
        data_type: DataType,
    },
    /// A scalar subquery.
    Subquery(Box<SelectStatement>),
}

impl fmt::Display for ValueExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(lit) => write!(f, "{lit}"),
            Self::Column(col) => write!(f, "{col}"),
            Self::Nested(inner) => write!(f, "({inner})"),
            Self::Unary { sign, operand } => {
                let c = match sign {
                    Sign::Plus => '+',
                    Sign::Minus => '-',
                };
                write!(f, "{c} {operand}")
            }
            Self::Binary { left, op, right } => write!(f, "{left} {} {right}", op.as_str()),
            Self::SetFunction(func) => write!(f, "{func}"),
            Self::Function(func) => write!(f, "{func}"),
            Self::Cast { expr, data_type } => write!(f, "CAST ({expr} AS {data_type})"),
            Self::Subquery(query) => write!(f, "({query})"),
        }
    }
}

/// A row value constructor element: a value expression, `NULL`, or
/// `DEFAULT`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowValue {
    Expr(ValueExpr),
    Null,
    Default,
}

impl fmt::Display for RowValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expr(expr) => write!(f, "{expr}"),
            Self::Null => f.write_str("NULL"),
            Self::Default => f.write_str("DEFAULT"),
        }
    }
}

/// A predicate inside a search condition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Predicate {
    /// `left <op> right`.
    Comparison {
        left: ValueExpr,
        op: CompOp,
        right: ValueExpr,
    },
    /// `expr IS [NOT] NULL`.
    IsNull { expr: ValueExpr, negated: bool },
    /// `expr [NOT] BETWEEN low AND high`.
    Between {
        expr: ValueExpr,
        low: ValueExpr,
        high: ValueExpr,
        negated: bool,
    },
    /// `expr [NOT] IN (v1, v2, ...)`.
    InList {
        expr: ValueExpr,
        list: Vec<ValueExpr>,
        negated: bool,
    },
    /// `expr [NOT] IN (SELECT ...)`.
    InSubquery {
        expr: ValueExpr,
        query: Box<SelectStatement>,
        negated: bool,
    },
    /// `expr [NOT] LIKE pattern [ESCAPE escape]`.
    Like {
        expr: ValueExpr,
        pattern: ValueExpr,
        escape: Option<ValueExpr>,
        negated: bool,
    },
    /// `EXISTS (SELECT ...)`.
    Exists(Box<SelectStatement>),
}

fn not(negated: bool) -> &'static str {
    if negated {
        "NOT "
    } else {
        ""
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comparison { left, op, right } => {
                write!(f, "{left} {} {right}", op.as_str())
            }
            Self::IsNull { expr, negated } => {
                write!(f, "{expr} IS {}NULL", not(*negated))
            }
            Self::Between {
                expr,
                low,
                high,
                negated,
            } => write!(f, "{expr} {}BETWEEN {low} AND {high}", not(*negated)),
            Self::InList {
                expr,
                list,
                negated,
            } => {
                write!(f, "{expr} {}IN (", not(*negated))?;
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
            Self::InSubquery {
                expr,
                query,
                negated,
            } => write!(f, "{expr} {}IN ({query})", not(*negated)),
            Self::Like {
                expr,
                pattern,
                escape,
                negated,
            } => {
                write!(f, "{expr} {}LIKE {pattern}", not(*negated))?;
                if let Some(escape) = escape {
                    write!(f, " ESCAPE {escape}")?;
                }
                Ok(())
            }
            Self::Exists(query) => write!(f, "EXISTS ({query})"),
        }
    }
}

/// A search condition: `OR`-chains of `AND`-terms over predicates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchCondition {
    Or(Box<SearchCondition>, Box<SearchCondition>),
    And(Box<SearchCondition>, Box<SearchCondition>),
    Not(Box<SearchCondition>),
    Nested(Box<SearchCondition>),
    Predicate(Box<Predicate>),
}

impl SearchCondition {
    /// Wraps a predicate.
    #[must_use]
    pub fn predicate(pred: Predicate) -> Self {
        Self::Predicate(Box::new(pred))
    }
}

impl fmt::Display for SearchCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Or(left, right) => write!(f, "{left} OR {right}"),
            Self::And(left, right) => write!(f, "{left} AND {right}"),
            Self::Not(inner) => write!(f, "NOT {inner}"),
            Self::Nested(inner) => write!(f, "({inner})"),
            Self::Predicate(pred) => write!(f, "{pred}"),
        }
    }
}
