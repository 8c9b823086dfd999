//! Keyword-driven clause parsers.
//!
//! Each statement kind has one parser. A parse is a chain of recursive
//! [`SqlParser::parse_by_word`] calls: the expected keyword is classified,
//! its clause pattern is matched at or after the scan offset, the captured
//! payload is folded into the builder, and the call recurses with the
//! keyword the pattern saw next. The terminator `;` ends the chain by
//! finalizing the builder.
//!
//! # Key types
//!
//! - [`SqlParser`]: the statically typed parser contract.
//! - [`DynParser`]: its object-safe form, used by the
//!   [`ParserRegistry`](crate::registry::ParserRegistry).
//! - [`ParsedStatement`]: the result of a dynamically dispatched parse.

pub mod alter;
pub mod create;
pub mod insert;
pub mod select;
pub mod subquery;

pub use alter::AlterParser;
pub use create::CreateParser;
pub use insert::InsertParser;
pub use select::SelectParser;

use std::fmt;

use log::trace;

use crate::error::{ParseError, Result};
use crate::keyword::{Keyword, StatementKind};
use crate::pattern::{ClauseMatch, ClausePattern};
use crate::statement::{
    AlterStatement, Builder, CreateStatement, InsertStatement, SelectStatement, Statement,
};

/// A parser for one statement kind.
///
/// Implementations are stateless: one value may serve any number of
/// concurrent parse calls.
pub trait SqlParser: Send + Sync {
    type Statement: Statement;
    type Builder: Builder<Product = Self::Statement>;

    /// The statement kind this parser understands.
    fn kind(&self) -> StatementKind;

    /// Parse one complete statement. The statement's `sql()` is `sql`.
    fn parse_sql(&self, sql: &str) -> Result<Self::Statement>;

    /// Continue a parse: match the clause introduced by `word` at or after
    /// byte offset `position` of `sql`, fold it into `builder`, and recurse
    /// until the terminator.
    fn parse_by_word(
        &self,
        builder: Self::Builder,
        position: usize,
        sql: &str,
        word: &str,
    ) -> Result<Self::Statement>;
}

/// Find the clause for `keyword` at or after `position`.
pub(crate) fn match_clause<'t, K: Keyword>(
    keyword: K,
    word: &str,
    position: usize,
    sql: &'t str,
    pattern_for: fn(K) -> Option<&'static ClausePattern>,
) -> Result<ClauseMatch<'t>> {
    trace!("{} clause {:?} at offset {}", K::KIND, keyword, position);
    let pattern = pattern_for(keyword).ok_or_else(|| ParseError::unknown_keyword(K::KIND, word))?;
    pattern
        .find_at(sql, position)
        .ok_or_else(|| ParseError::clause_mismatch(K::KIND, word, position, sql))
}

// ===========================================================================
// Dynamic dispatch
// ===========================================================================

/// A statement of any supported kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedStatement {
    Select(SelectStatement),
    Create(CreateStatement),
    Insert(InsertStatement),
    Alter(AlterStatement),
}

impl ParsedStatement {
    pub fn kind(&self) -> StatementKind {
        match self {
            ParsedStatement::Select(_) => StatementKind::Select,
            ParsedStatement::Create(_) => StatementKind::Create,
            ParsedStatement::Insert(_) => StatementKind::Insert,
            ParsedStatement::Alter(_) => StatementKind::Alter,
        }
    }

    pub fn table_name(&self) -> &str {
        match self {
            ParsedStatement::Select(s) => s.table_name(),
            ParsedStatement::Create(s) => s.table_name(),
            ParsedStatement::Insert(s) => s.table_name(),
            ParsedStatement::Alter(s) => s.table_name(),
        }
    }

    pub fn field_names(&self) -> &[String] {
        match self {
            ParsedStatement::Select(s) => s.field_names(),
            ParsedStatement::Create(s) => s.field_names(),
            ParsedStatement::Insert(s) => s.field_names(),
            ParsedStatement::Alter(s) => s.field_names(),
        }
    }

    pub fn sql(&self) -> &str {
        match self {
            ParsedStatement::Select(s) => s.sql(),
            ParsedStatement::Create(s) => s.sql(),
            ParsedStatement::Insert(s) => s.sql(),
            ParsedStatement::Alter(s) => s.sql(),
        }
    }

    pub fn get_by_keyword(&self, word: &str) -> Result<Option<String>> {
        match self {
            ParsedStatement::Select(s) => s.get_by_keyword(word),
            ParsedStatement::Create(s) => s.get_by_keyword(word),
            ParsedStatement::Insert(s) => s.get_by_keyword(word),
            ParsedStatement::Alter(s) => s.get_by_keyword(word),
        }
    }

    pub fn get_array_by_keyword(&self, word: &str) -> Result<Vec<String>> {
        match self {
            ParsedStatement::Select(s) => s.get_array_by_keyword(word),
            ParsedStatement::Create(s) => s.get_array_by_keyword(word),
            ParsedStatement::Insert(s) => s.get_array_by_keyword(word),
            ParsedStatement::Alter(s) => s.get_array_by_keyword(word),
        }
    }

    pub fn as_select(&self) -> Option<&SelectStatement> {
        match self {
            ParsedStatement::Select(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_create(&self) -> Option<&CreateStatement> {
        match self {
            ParsedStatement::Create(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_insert(&self) -> Option<&InsertStatement> {
        match self {
            ParsedStatement::Insert(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_alter(&self) -> Option<&AlterStatement> {
        match self {
            ParsedStatement::Alter(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ParsedStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql())
    }
}

impl From<SelectStatement> for ParsedStatement {
    fn from(statement: SelectStatement) -> Self {
        ParsedStatement::Select(statement)
    }
}

impl From<CreateStatement> for ParsedStatement {
    fn from(statement: CreateStatement) -> Self {
        ParsedStatement::Create(statement)
    }
}

impl From<InsertStatement> for ParsedStatement {
    fn from(statement: InsertStatement) -> Self {
        ParsedStatement::Insert(statement)
    }
}

impl From<AlterStatement> for ParsedStatement {
    fn from(statement: AlterStatement) -> Self {
        ParsedStatement::Alter(statement)
    }
}

/// Object-safe parser interface, implemented for every [`SqlParser`] whose
/// statement converts into a [`ParsedStatement`].
pub trait DynParser: Send + Sync {
    fn kind(&self) -> StatementKind;

    fn parse(&self, sql: &str) -> Result<ParsedStatement>;
}

impl<P> DynParser for P
where
    P: SqlParser,
    P::Statement: Into<ParsedStatement>,
{
    fn kind(&self) -> StatementKind {
        SqlParser::kind(self)
    }

    fn parse(&self, sql: &str) -> Result<ParsedStatement> {
        self.parse_sql(sql).map(Into::into)
    }
}
