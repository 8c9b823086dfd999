//! SELECT clause patterns.

use std::sync::LazyLock;

use super::ClausePattern;
use crate::keyword::SelectKeyword;

/// `select <fields> from <table-region>`, up to the first `(`, `on`,
/// `where`, `group`, `order`, `limit` or `;`.
/// Groups: 1 fields, 2 table region, 3 next keyword.
pub static FIELDS_AND_TABLES: LazyLock<ClausePattern> = LazyLock::new(|| {
    ClausePattern::new(
        r#"(?i)\bselect\b\s*([^;]+?)\s*\bfrom\b\s*([\w\s,.`"]*?)\s*(\(|\bon\b|\bwhere\b|\bgroup\b|\border\b|\blimit\b|;)"#,
        Some(3),
    )
});

/// `where|on <predicate>`. Groups: 1 predicate, 2 next keyword.
pub static WHERE: LazyLock<ClausePattern> = LazyLock::new(|| {
    ClausePattern::new(
        r"(?i)\b(?:on|where)\b\s*([\s\S]+?)\s*(\bgroup\b|\border\b|\blimit\b|;)",
        Some(2),
    )
});

/// `group by <fields>`. Groups: 1 fields, 2 next keyword.
pub static GROUP: LazyLock<ClausePattern> = LazyLock::new(|| {
    ClausePattern::new(
        r"(?i)\bgroup\s+by\b\s*([\s\S]+?)\s*(\border\b|\blimit\b|;)",
        Some(2),
    )
});

/// `order by <fields> [asc|desc]`. Groups: 1 fields, 2 direction, 3 next
/// keyword.
pub static ORDER: LazyLock<ClausePattern> = LazyLock::new(|| {
    ClausePattern::new(
        r"(?i)\border\s+by\b\s*([\s\S]+?)(?:\s+(asc|desc)\b)?\s*(\blimit\b|;)",
        Some(3),
    )
});

/// `limit <count>`. Groups: 1 limit text, 2 terminator.
pub static LIMIT: LazyLock<ClausePattern> = LazyLock::new(|| {
    ClausePattern::new(r"(?i)\blimit\b\s*([\s\S]+?)\s*(;)", Some(2))
});

/// A standalone parenthesised subquery, `( select ... ; )`. Not depth-aware:
/// the span ends at the first `;)`.
pub static SUB_QUERY: LazyLock<ClausePattern> = LazyLock::new(|| {
    ClausePattern::new(r"(?i)\(\s*select\b[\s\S]*?;\s*\)", None)
});

/// The next clause keyword after a resolved subquery region.
/// Groups: 1 next keyword.
pub static CONTINUATION: LazyLock<ClausePattern> = LazyLock::new(|| {
    ClausePattern::new(
        r"(?i)(\bwhere\b|\bon\b|\bgroup\b|\border\b|\blimit\b|;)",
        Some(1),
    )
});

/// The clause pattern dispatched for `keyword`, if the class has one.
/// Subqueries are handled by the resolver, not by a single pattern.
pub fn pattern_for(keyword: SelectKeyword) -> Option<&'static ClausePattern> {
    match keyword {
        SelectKeyword::Select => Some(&FIELDS_AND_TABLES),
        SelectKeyword::Where => Some(&WHERE),
        SelectKeyword::Group => Some(&GROUP),
        SelectKeyword::Order => Some(&ORDER),
        SelectKeyword::Limit => Some(&LIMIT),
        SelectKeyword::From | SelectKeyword::Subquery => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_and_tables_stop_at_where() {
        let m = FIELDS_AND_TABLES
            .find_at("SELECT a, b\nFROM  t1, t2\n WHERE a = 1;", 0)
            .unwrap();
        assert_eq!(m.group(1), Some("a, b"));
        assert_eq!(m.group(2), Some("t1, t2"));
        assert_eq!(m.next_keyword(), Some("WHERE"));
    }

    #[test]
    fn table_region_keywords_are_whole_words() {
        let m = FIELDS_AND_TABLES
            .find_at("select id from orders where id > 2;", 0)
            .unwrap();
        assert_eq!(m.group(2), Some("orders"));
        assert_eq!(m.next_keyword(), Some("where"));
    }

    #[test]
    fn table_region_stops_at_subquery() {
        let m = FIELDS_AND_TABLES
            .find_at("select * from (select * from a;);", 0)
            .unwrap();
        assert_eq!(m.group(2), Some(""));
        assert_eq!(m.next_keyword(), Some("("));
    }

    #[test]
    fn order_direction_is_optional() {
        let with = ORDER.find_at("order by a, b desc limit 3;", 0).unwrap();
        assert_eq!(with.group(1), Some("a, b"));
        assert_eq!(with.group(2), Some("desc"));
        assert_eq!(with.next_keyword(), Some("limit"));

        let without = ORDER.find_at("order by description;", 0).unwrap();
        assert_eq!(without.group(1), Some("description"));
        assert_eq!(without.group(2), None);
        assert_eq!(without.next_keyword(), Some(";"));
    }

    #[test]
    fn where_accepts_join_condition() {
        let m = WHERE.find_at("on a.id = b.id group by a.id;", 0).unwrap();
        assert_eq!(m.group(1), Some("a.id = b.id"));
        assert_eq!(m.next_keyword(), Some("group"));
    }

    #[test]
    fn sub_query_spans_are_not_nested() {
        let text = "select * from (select * from a;) join ( SELECT * from b; );";
        let spans: Vec<&str> = [0, 32]
            .iter()
            .map(|&start| SUB_QUERY.find_at(text, start).unwrap().text())
            .collect();
        assert_eq!(spans, vec!["(select * from a;)", "( SELECT * from b; )"]);
    }

    #[test]
    fn every_clause_class_but_from_has_a_pattern() {
        assert!(pattern_for(SelectKeyword::Select).is_some());
        assert!(pattern_for(SelectKeyword::Limit).is_some());
        assert!(pattern_for(SelectKeyword::From).is_none());
    }
}
