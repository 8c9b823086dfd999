//! INSERT clause pattern.
//!
//! INSERT has no intermediate clauses: one pattern covers the whole
//! statement and the parser goes straight to the terminator.

use std::sync::LazyLock;

use super::ClausePattern;
use crate::keyword::InsertKeyword;

/// `insert into <table> [(<fields>)] value|values (<tuples>);`
/// Groups: 1 table, 2 field list, 3 value keyword, 4 tuple data (between the
/// first `(` and the last `)` before the statement's `;`).
pub static INSERT: LazyLock<ClausePattern> = LazyLock::new(|| {
    ClausePattern::new(
        r"(?i)\binsert\s+into\s+(\S+?)\s*(?:\(([\s\S]*?)\)\s*)?\b(values?)\b\s*\(([^;]*)\)\s*;",
        None,
    )
});

/// Tuple boundary inside the data of a multi-row insert.
pub static TUPLE_SEPARATOR: LazyLock<ClausePattern> =
    LazyLock::new(|| ClausePattern::new(r"\)\s*,\s*\(", None));

pub fn pattern_for(keyword: InsertKeyword) -> Option<&'static ClausePattern> {
    match keyword {
        InsertKeyword::Insert => Some(&INSERT),
        InsertKeyword::Table | InsertKeyword::Value | InsertKeyword::Values => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_with_field_list() {
        let m = INSERT
            .find_at("INSERT INTO t (a,b) VALUES (1,2),(3,4);", 0)
            .unwrap();
        assert_eq!(m.group(1), Some("t"));
        assert_eq!(m.group(2), Some("a,b"));
        assert_eq!(m.group(3), Some("VALUES"));
        assert_eq!(m.group(4), Some("1,2),(3,4"));
    }

    #[test]
    fn insert_without_spaces() {
        let m = INSERT.find_at("insert into t(a)value(1);", 0).unwrap();
        assert_eq!(m.group(1), Some("t"));
        assert_eq!(m.group(2), Some("a"));
        assert_eq!(m.group(3), Some("value"));
        assert_eq!(m.group(4), Some("1"));
    }

    #[test]
    fn insert_without_field_list() {
        let m = INSERT.find_at("insert into t values ('x');", 0).unwrap();
        assert_eq!(m.group(1), Some("t"));
        assert_eq!(m.group(2), None);
        assert_eq!(m.group(4), Some("'x'"));
    }

    #[test]
    fn tuple_data_stops_at_terminator() {
        let m = INSERT
            .find_at("insert into t values (1); insert into u values (2);", 0)
            .unwrap();
        assert_eq!(m.group(4), Some("1"));
    }

    #[test]
    fn insert_requires_terminator() {
        assert!(INSERT.find_at("insert into t (a) values (1)", 0).is_none());
    }
}
