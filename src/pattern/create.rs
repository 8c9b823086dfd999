//! CREATE TABLE clause patterns.

use std::sync::LazyLock;

use super::ClausePattern;
use crate::keyword::CreateKeyword;

/// `create [temporary] table [if not exists] <name>` followed by `(`, `as`
/// or `like`. Groups: 1 create text, 2 table kind, 3 name, 4 next keyword.
pub static TABLE: LazyLock<ClausePattern> = LazyLock::new(|| {
    ClausePattern::new(
        r"(?i)\bcreate\s+((temporary\s+table|table)\s+(?:if\s+not\s+exists\s+)?(\S+?))\s*(\(|\bas\b|\blike\b)",
        Some(4),
    )
});

/// Field list from `(` to the last `)` before the statement's `;`. Not
/// depth-aware. Groups: 1 field list, 2 closing parenthesis.
pub static FIELDS: LazyLock<ClausePattern> =
    LazyLock::new(|| ClausePattern::new(r"\(([^;]*)(\))", Some(2)));

/// Table options after the field list. Groups: 1 options, 2 terminator.
pub static OPTIONS: LazyLock<ClausePattern> =
    LazyLock::new(|| ClausePattern::new(r"\)\s*([\s\S]*?)\s*(;)", Some(2)));

/// `like <table>`. Groups: 1 source table, 2 terminator.
pub static LIKE: LazyLock<ClausePattern> = LazyLock::new(|| {
    ClausePattern::new(r"(?i)\blike\b\s*([\s\S]+?)\s*(;)", Some(2))
});

/// `as select ...`. Groups: 1 the complete SELECT text.
pub static AS_SELECT: LazyLock<ClausePattern> = LazyLock::new(|| {
    ClausePattern::new(r"(?i)\bas\s*(select\b[\s\S]*)", None)
});

pub fn pattern_for(keyword: CreateKeyword) -> Option<&'static ClausePattern> {
    match keyword {
        CreateKeyword::Create => Some(&TABLE),
        CreateKeyword::OpenParen => Some(&FIELDS),
        CreateKeyword::CloseParen => Some(&OPTIONS),
        CreateKeyword::Like => Some(&LIKE),
        CreateKeyword::As => Some(&AS_SELECT),
        CreateKeyword::Table | CreateKeyword::Field | CreateKeyword::Option => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_name_before_field_list() {
        let m = TABLE.find_at("CREATE TEMPORARY TABLE t(a int);", 0).unwrap();
        assert_eq!(m.group(1), Some("TEMPORARY TABLE t"));
        assert_eq!(m.group(2), Some("TEMPORARY TABLE"));
        assert_eq!(m.group(3), Some("t"));
        assert_eq!(m.next_keyword(), Some("("));
    }

    #[test]
    fn table_name_skips_if_not_exists() {
        let m = TABLE
            .find_at("create table if not exists users like people;", 0)
            .unwrap();
        assert_eq!(m.group(3), Some("users"));
        assert_eq!(m.next_keyword(), Some("like"));
    }

    #[test]
    fn field_list_runs_to_last_parenthesis() {
        let text = "create table t (a int, b decimal(10,2)) ENGINE=x;";
        let m = FIELDS.find_at(text, 15).unwrap();
        assert_eq!(m.group(1), Some("a int, b decimal(10,2)"));
        assert_eq!(m.next_keyword(), Some(")"));
        assert_eq!(&text[m.end()..m.end() + 1], ")");
    }

    #[test]
    fn field_list_stops_at_terminator() {
        let m = FIELDS.find_at("(a int); select (1);", 0).unwrap();
        assert_eq!(m.group(1), Some("a int"));
    }

    #[test]
    fn options_may_be_empty() {
        let m = OPTIONS.find_at(") ;", 0).unwrap();
        assert_eq!(m.trimmed(1), None);
        let m = OPTIONS.find_at(")  ENGINE=InnoDB CHARSET=utf8 ;", 0).unwrap();
        assert_eq!(m.group(1), Some("ENGINE=InnoDB CHARSET=utf8"));
    }
}
