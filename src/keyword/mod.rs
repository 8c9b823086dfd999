//! Keyword classification.
//!
//! Every statement kind owns a small keyword enum. [`Keyword::classify`]
//! resolves a word to its dispatch class by exact, ASCII case-insensitive
//! comparison against the kind's static word table. Parsers use the class to
//! pick the next clause pattern; statements use the same classifier to route
//! [`get_by_keyword`](crate::statement::Statement::get_by_keyword) lookups, so
//! parse-time and read-time dispatch always agree.
//!
//! Classifiers are never shared between kinds: `table` is a different class
//! for INSERT than for ALTER, and `(` means "subquery" to SELECT but "field
//! list" to CREATE.

use std::fmt;

use crate::error::{ParseError, Result};

/// The keyword that terminates every statement.
pub const TERMINATOR: &str = ";";

/// The four statement kinds understood by the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Select,
    Create,
    Insert,
    Alter,
}

impl StatementKind {
    pub const ALL: [StatementKind; 4] = [
        StatementKind::Select,
        StatementKind::Create,
        StatementKind::Insert,
        StatementKind::Alter,
    ];

    /// The name under which the kind's parser is registered; also the seed
    /// keyword of the statement.
    pub fn name(self) -> &'static str {
        match self {
            StatementKind::Select => "select",
            StatementKind::Create => "create",
            StatementKind::Insert => "insert",
            StatementKind::Alter => "alter",
        }
    }

    /// Detect the statement kind from the first word of `sql`.
    pub fn detect(sql: &str) -> Option<StatementKind> {
        let word = sql
            .trim_start_matches(|c: char| c.is_whitespace() || c == '(')
            .split(|c: char| !c.is_ascii_alphabetic())
            .next()?;
        StatementKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(word))
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A per-kind keyword class.
pub trait Keyword: Copy + Eq + fmt::Debug + 'static {
    /// The statement kind this keyword set belongs to.
    const KIND: StatementKind;

    /// Word table: each spelling and the class it maps to.
    const WORDS: &'static [(&'static str, Self)];

    /// Resolve `word` to its class, ignoring ASCII case and surrounding
    /// whitespace.
    fn classify(word: &str) -> Option<Self> {
        let word = word.trim();
        Self::WORDS
            .iter()
            .find(|(spelling, _)| spelling.eq_ignore_ascii_case(word))
            .map(|&(_, class)| class)
    }

    /// Like [`classify`](Self::classify), but an unknown word is an error.
    fn require(word: &str) -> Result<Self> {
        Self::classify(word).ok_or_else(|| ParseError::unknown_keyword(Self::KIND, word))
    }
}

// ===========================================================================
// Per-kind keyword sets
// ===========================================================================

/// SELECT keywords. `on` shares the `where` class; `(` opens a subquery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectKeyword {
    Select,
    From,
    Where,
    Group,
    Order,
    Limit,
    Subquery,
}

impl Keyword for SelectKeyword {
    const KIND: StatementKind = StatementKind::Select;
    const WORDS: &'static [(&'static str, Self)] = &[
        ("select", SelectKeyword::Select),
        ("from", SelectKeyword::From),
        ("where", SelectKeyword::Where),
        ("on", SelectKeyword::Where),
        ("group", SelectKeyword::Group),
        ("order", SelectKeyword::Order),
        ("limit", SelectKeyword::Limit),
        ("(", SelectKeyword::Subquery),
    ];
}

/// CREATE TABLE keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreateKeyword {
    Create,
    Table,
    Field,
    Option,
    Like,
    As,
    OpenParen,
    CloseParen,
}

impl Keyword for CreateKeyword {
    const KIND: StatementKind = StatementKind::Create;
    const WORDS: &'static [(&'static str, Self)] = &[
        ("create", CreateKeyword::Create),
        ("table", CreateKeyword::Table),
        ("field", CreateKeyword::Field),
        ("option", CreateKeyword::Option),
        ("like", CreateKeyword::Like),
        ("as", CreateKeyword::As),
        ("(", CreateKeyword::OpenParen),
        (")", CreateKeyword::CloseParen),
    ];
}

/// INSERT keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsertKeyword {
    Insert,
    Table,
    Value,
    Values,
}

impl Keyword for InsertKeyword {
    const KIND: StatementKind = StatementKind::Insert;
    const WORDS: &'static [(&'static str, Self)] = &[
        ("insert", InsertKeyword::Insert),
        ("table", InsertKeyword::Table),
        ("value", InsertKeyword::Value),
        ("values", InsertKeyword::Values),
    ];
}

/// ALTER TABLE keywords, including the `add` sub-targets and the accessor
/// pseudo-keywords `mod` and `addinfo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlterKeyword {
    Alter,
    Table,
    Add,
    Drop,
    Rename,
    Change,
    Index,
    Unique,
    Primary,
    Field,
    Mode,
    AddInfo,
}

impl Keyword for AlterKeyword {
    const KIND: StatementKind = StatementKind::Alter;
    const WORDS: &'static [(&'static str, Self)] = &[
        ("alter", AlterKeyword::Alter),
        ("table", AlterKeyword::Table),
        ("add", AlterKeyword::Add),
        ("drop", AlterKeyword::Drop),
        ("rename", AlterKeyword::Rename),
        ("change", AlterKeyword::Change),
        ("index", AlterKeyword::Index),
        ("unique", AlterKeyword::Unique),
        ("primary", AlterKeyword::Primary),
        ("field", AlterKeyword::Field),
        ("mod", AlterKeyword::Mode),
        ("addinfo", AlterKeyword::AddInfo),
    ];
}
