//! # sqlclause
//!
//! Clause-level extraction for single SQL statements: `SELECT`,
//! `CREATE TABLE`, `INSERT` and `ALTER TABLE`. Statements are not executed
//! or validated; each parse slices the statement into its clauses (table,
//! fields, `where`, `order by`, table options, tuple data, ...) and returns
//! them as an immutable statement value.
//!
//! ```
//! use sqlclause::{parse_select, Statement};
//!
//! let select = parse_select("select id, name from users where id > 10 limit 5;").unwrap();
//! assert_eq!(select.table_name(), "users");
//! assert_eq!(select.field_names(), ["id", "name"]);
//! assert_eq!(select.get_by_keyword("where").unwrap().as_deref(), Some("id > 10"));
//! ```
//!
//! Every statement must end with `;`. Keywords are case-insensitive, and
//! parentheses or keywords inside quoted string literals are not recognised
//! as such.

pub mod error;
pub mod keyword;
pub mod pattern;
pub mod statement;
pub mod parser;
pub mod registry;

pub use error::{ParseError, Result};
pub use keyword::{StatementKind, TERMINATOR};
pub use parser::subquery::SUB_QUERY_PLACEHOLDER;
pub use parser::{
    AlterParser, CreateParser, DynParser, InsertParser, ParsedStatement, SelectParser, SqlParser,
};
pub use registry::ParserRegistry;
pub use statement::{
    AddTarget, AlterMode, AlterStatement, AlterStatementBuilder, Builder, CreateStatement,
    CreateStatementBuilder, InsertStatement, InsertStatementBuilder, Merge, SelectStatement,
    SelectStatementBuilder, SortOrder, Statement,
};

/// Parse a `SELECT` statement.
pub fn parse_select(sql: &str) -> Result<SelectStatement> {
    SelectParser.parse_sql(sql)
}

/// Parse a `CREATE TABLE` statement.
pub fn parse_create(sql: &str) -> Result<CreateStatement> {
    CreateParser.parse_sql(sql)
}

/// Parse an `INSERT` statement.
pub fn parse_insert(sql: &str) -> Result<InsertStatement> {
    InsertParser.parse_sql(sql)
}

/// Parse an `ALTER TABLE` statement.
pub fn parse_alter(sql: &str) -> Result<AlterStatement> {
    AlterParser.parse_sql(sql)
}
