//! ALTER TABLE clause patterns.

use std::sync::LazyLock;

use super::ClausePattern;
use crate::keyword::AlterKeyword;

/// `alter table <name> add|drop|rename|change`.
/// Groups: 1 alter text, 2 table name, 3 mode (next keyword).
pub static HEAD: LazyLock<ClausePattern> = LazyLock::new(|| {
    ClausePattern::new(
        r"(?i)\balter\s+(table\s+(\S+)\s+(add|drop|rename|change))\b",
        Some(3),
    )
});

/// The token following `add`. Groups: 1 the token.
pub static ADD_TARGET: LazyLock<ClausePattern> =
    LazyLock::new(|| ClausePattern::new(r"(?i)\badd\s+([^\s(;]+)", None));

/// `add index <name> (<columns>);`. Groups: 1 index name, 2 columns.
pub static ADD_INDEX: LazyLock<ClausePattern> = LazyLock::new(|| {
    ClausePattern::new(
        r"(?i)\badd\s+index\s+([^\s(]+)\s*\(([\s\S]+?)\)\s*;",
        None,
    )
});

/// `add unique|primary ... (<columns>);`. Groups: 1 columns.
pub static ADD_CONSTRAINT: LazyLock<ClausePattern> = LazyLock::new(|| {
    ClausePattern::new(
        r"(?i)\badd\s+(?:unique|primary)\b[^(;]*\(([\s\S]+?)\)\s*;",
        None,
    )
});

/// `add [column] <definition>;`. Groups: 1 column definition.
pub static ADD_COLUMN: LazyLock<ClausePattern> = LazyLock::new(|| {
    ClausePattern::new(r"(?i)\badd\s+(?:column\s+)?([\s\S]+?)\s*;", None)
});

/// `drop [column] <column>;`. Groups: 1 column.
pub static DROP: LazyLock<ClausePattern> = LazyLock::new(|| {
    ClausePattern::new(r"(?i)\bdrop\s+(?:column\s+)?([^\s;]+)\s*;", None)
});

/// `rename [to|as] <new name>;`. Groups: 1 new table name.
pub static RENAME: LazyLock<ClausePattern> = LazyLock::new(|| {
    ClausePattern::new(r"(?i)\brename\s+(?:(?:to|as)\s+)?([^\s;]+)\s*;", None)
});

/// `change [column] <old> <new definition>;`. Groups: 1 old column, 2 new
/// definition.
pub static CHANGE: LazyLock<ClausePattern> = LazyLock::new(|| {
    ClausePattern::new(
        r"(?i)\bchange\s+(?:column\s+)?(\S+)\s+([\s\S]+?)\s*;",
        None,
    )
});

/// The clause pattern for `keyword`. `add` first resolves its target with
/// [`ADD_TARGET`]; the target class then selects the payload pattern.
pub fn pattern_for(keyword: AlterKeyword) -> Option<&'static ClausePattern> {
    match keyword {
        AlterKeyword::Alter => Some(&HEAD),
        AlterKeyword::Add => Some(&ADD_TARGET),
        AlterKeyword::Index => Some(&ADD_INDEX),
        AlterKeyword::Unique | AlterKeyword::Primary => Some(&ADD_CONSTRAINT),
        AlterKeyword::Field => Some(&ADD_COLUMN),
        AlterKeyword::Drop => Some(&DROP),
        AlterKeyword::Rename => Some(&RENAME),
        AlterKeyword::Change => Some(&CHANGE),
        AlterKeyword::Table | AlterKeyword::Mode | AlterKeyword::AddInfo => None,
    }
}
