//! SQL-92 Parser
//!
//! A hand-written recursive descent parser over the token stream of
//! [`crate::lexer::Lexer`]. Each statement kind is parsed by a dedicated
//! method implementing its grammar as an explicit sequence of states:
//! every state either consumes a token and moves on, or reports a
//! diagnostic carrying the full set of symbols legal at that point and
//! aborts the parse. The first diagnostic wins; nothing overwrites it.
//!
//! # Supported statements
//!
//! | Statement | Notes |
//! |-----------|-------|
//! | `CREATE SCHEMA` | name and/or `AUTHORIZATION`, `DEFAULT CHARACTER SET` |
//! | `CREATE TABLE` | temporary table modifiers, column definitions, table constraints, `ON COMMIT` |
//! | `CREATE VIEW` | column list, `AS` query, `WITH CHECK OPTION` |
//! | `DROP SCHEMA` / `DROP TABLE` | optional `CASCADE` / `RESTRICT` |
//! | `DROP VIEW` | |
//! | `INSERT` | column list, multi-row `VALUES`, `DEFAULT VALUES`, sub-`SELECT` |
//! | `SELECT` | `DISTINCT`/`ALL`, joins, `WHERE`, `GROUP BY`, `HAVING`, `ORDER BY` |
//! | `UPDATE` | `SET` assignments, `WHERE` |
//! | `DELETE` | `WHERE` |
//!
//! # Not supported
//!
//! Set operations (`UNION` / `INTERSECT` / `EXCEPT`), common table
//! expressions, `GRANT`, `ALTER`, transaction statements, and window
//! functions.

mod data_type;
mod error;
mod parser;
mod query;

pub use error::{describe_token, error_marker, ParseError, SyntaxError};
pub use parser::Parser;
