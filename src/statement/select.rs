//! SELECT statement and its builder.

use std::fmt;

use super::{fill, split_list, Builder, Merge, Statement};
use crate::error::{ParseError, Result};
use crate::keyword::{Keyword, SelectKeyword, StatementKind, TERMINATOR};

/// Join keywords removed from the table region by [`SelectStatement::tables`].
const JOIN_WORDS: [&str; 7] = ["join", "left", "right", "inner", "outer", "full", "cross"];

/// Whitespace-separated words of `text` with their byte offsets.
fn words(text: &str) -> Vec<(usize, &str)> {
    let mut words = Vec::new();
    let mut start = None;
    for (index, c) in text.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(begin)) => {
                words.push((begin, &text[begin..index]));
                start = None;
            }
            (false, None) => start = Some(index),
            _ => {}
        }
    }
    if let Some(begin) = start {
        words.push((begin, &text[begin..]));
    }
    words
}

/// Direction of the ORDER BY clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
    /// The statement has no ORDER BY clause.
    Unspecified,
}

/// A parsed `SELECT` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStatement {
    table_name: String,
    field_names: Vec<String>,
    sql: String,
    select_str: Option<String>,
    where_str: Option<String>,
    group_str: Option<String>,
    order_str: Option<String>,
    ascending: bool,
    limit_str: Option<String>,
    sub_queries: Vec<SelectStatement>,
}

impl SelectStatement {
    pub fn builder() -> SelectStatementBuilder {
        SelectStatementBuilder::default()
    }

    pub fn select_str(&self) -> Option<&str> {
        self.select_str.as_deref()
    }

    pub fn where_str(&self) -> Option<&str> {
        self.where_str.as_deref()
    }

    pub fn group_str(&self) -> Option<&str> {
        self.group_str.as_deref()
    }

    pub fn order_str(&self) -> Option<&str> {
        self.order_str.as_deref()
    }

    pub fn limit_str(&self) -> Option<&str> {
        self.limit_str.as_deref()
    }

    pub fn sort_order(&self) -> SortOrder {
        match (&self.order_str, self.ascending) {
            (None, _) => SortOrder::Unspecified,
            (Some(_), true) => SortOrder::Ascending,
            (Some(_), false) => SortOrder::Descending,
        }
    }

    /// Resolved subqueries, in the order they appear in the source.
    pub fn sub_queries(&self) -> &[SelectStatement] {
        &self.sub_queries
    }

    /// Every table named in the FROM region. Separators are spaces and
    /// commas; join keywords are dropped. Aliases are kept as-is.
    pub fn tables(&self) -> Vec<String> {
        self.table_name
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .filter(|token| !JOIN_WORDS.iter().any(|w| w.eq_ignore_ascii_case(token)))
            .map(str::to_string)
            .collect()
    }

    /// The WHERE predicate split at its top-level `and` / `or` words.
    /// Predicates sit at even positions, connectives at odd positions.
    /// Predicate text is kept as written. Parentheses are not interpreted.
    pub fn where_array(&self) -> Vec<String> {
        let Some(where_str) = &self.where_str else {
            return Vec::new();
        };
        let mut parts = Vec::new();
        let mut predicate_start = 0;
        for (start, word) in words(where_str) {
            if word.eq_ignore_ascii_case("and") || word.eq_ignore_ascii_case("or") {
                parts.push(where_str[predicate_start..start].trim().to_string());
                parts.push(word.to_string());
                predicate_start = start + word.len();
            }
        }
        let tail = where_str[predicate_start..].trim();
        if !tail.is_empty() {
            parts.push(tail.to_string());
        }
        parts
    }

    fn render(&self) -> String {
        let mut sql = format!(
            "select {} from {}",
            self.select_str.as_deref().unwrap_or("*"),
            self.table_name
        );
        if let Some(where_str) = &self.where_str {
            sql.push_str(" where ");
            sql.push_str(where_str);
        }
        if let Some(group_str) = &self.group_str {
            sql.push_str(" group by ");
            sql.push_str(group_str);
        }
        if let Some(order_str) = &self.order_str {
            sql.push_str(" order by ");
            sql.push_str(order_str);
            sql.push_str(if self.ascending { " asc" } else { " desc" });
        }
        if let Some(limit_str) = &self.limit_str {
            sql.push_str(" limit ");
            sql.push_str(limit_str);
        }
        sql.push_str(TERMINATOR);
        sql
    }
}

impl Statement for SelectStatement {
    type Keyword = SelectKeyword;

    fn table_name(&self) -> &str {
        &self.table_name
    }

    fn field_names(&self) -> &[String] {
        &self.field_names
    }

    fn sql(&self) -> &str {
        &self.sql
    }

    fn get_by_keyword(&self, word: &str) -> Result<Option<String>> {
        let value = match SelectKeyword::require(word)? {
            SelectKeyword::Select => self.select_str.clone(),
            SelectKeyword::From => Some(self.table_name.clone()),
            SelectKeyword::Where => self.where_str.clone(),
            SelectKeyword::Group => self.group_str.clone(),
            SelectKeyword::Order => self.order_str.clone(),
            SelectKeyword::Limit => self.limit_str.clone(),
            SelectKeyword::Subquery => {
                return Err(ParseError::unknown_keyword(StatementKind::Select, word))
            }
        };
        Ok(value)
    }

    fn get_array_by_keyword(&self, word: &str) -> Result<Vec<String>> {
        let values = match SelectKeyword::require(word)? {
            SelectKeyword::Select => self.field_names.clone(),
            SelectKeyword::From => self.tables(),
            SelectKeyword::Where => self.where_array(),
            SelectKeyword::Group => self.group_str.as_deref().map(split_list).unwrap_or_default(),
            SelectKeyword::Order => self.order_str.as_deref().map(split_list).unwrap_or_default(),
            SelectKeyword::Limit => self.limit_str.as_deref().map(split_list).unwrap_or_default(),
            SelectKeyword::Subquery => {
                return Err(ParseError::unknown_keyword(StatementKind::Select, word))
            }
        };
        Ok(values)
    }
}

impl Merge for SelectStatement {
    fn merge(&self, other: &Self) -> Self {
        // Direction travels with the ORDER BY text it belongs to.
        let ascending = if self.order_str.is_some() {
            self.ascending
        } else {
            other.ascending
        };
        let select_str = fill(&self.select_str, &other.select_str);
        let mut merged = SelectStatement {
            table_name: self.table_name.clone(),
            field_names: select_str.as_deref().map(split_list).unwrap_or_default(),
            sql: String::new(),
            select_str,
            where_str: fill(&self.where_str, &other.where_str),
            group_str: fill(&self.group_str, &other.group_str),
            order_str: fill(&self.order_str, &other.order_str),
            ascending,
            limit_str: fill(&self.limit_str, &other.limit_str),
            sub_queries: self
                .sub_queries
                .iter()
                .chain(&other.sub_queries)
                .cloned()
                .collect(),
        };
        merged.sql = merged.render();
        merged
    }
}

impl fmt::Display for SelectStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

// ===========================================================================
// Builder
// ===========================================================================

/// Staging accumulator for [`SelectStatement`].
#[derive(Debug, Clone)]
pub struct SelectStatementBuilder {
    table_name: Option<String>,
    sql: Option<String>,
    select_str: Option<String>,
    where_str: Option<String>,
    group_str: Option<String>,
    order_str: Option<String>,
    ascending: bool,
    limit_str: Option<String>,
    sub_queries: Vec<SelectStatement>,
}

impl Default for SelectStatementBuilder {
    fn default() -> Self {
        SelectStatementBuilder {
            table_name: None,
            sql: None,
            select_str: None,
            where_str: None,
            group_str: None,
            order_str: None,
            ascending: true,
            limit_str: None,
            sub_queries: Vec::new(),
        }
    }
}

impl SelectStatementBuilder {
    pub fn set_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    /// Append a resolved subquery's table to the table region. `separator`
    /// is the literal source text between this subquery and the previous
    /// one; a comma is used when it is blank.
    pub fn add_table_name(mut self, separator: &str, table_name: &str) -> Self {
        let region = self.table_name.get_or_insert_with(String::new);
        let separator = separator.trim();
        let region_end = region.trim_end().len();
        if region_end > 0 {
            region.truncate(region_end);
            if !separator.is_empty() {
                region.push(' ');
                region.push_str(separator);
            } else if !region.ends_with(',') {
                region.push(',');
            }
            region.push(' ');
        }
        region.push_str(table_name);
        self
    }

    pub fn set_sql(mut self, sql: impl Into<String>) -> Self {
        self.sql = Some(sql.into());
        self
    }

    pub fn set_select_str(mut self, select_str: impl Into<String>) -> Self {
        self.select_str = Some(select_str.into());
        self
    }

    pub fn set_where_str(mut self, where_str: impl Into<String>) -> Self {
        self.where_str = Some(where_str.into());
        self
    }

    pub fn set_group_str(mut self, group_str: impl Into<String>) -> Self {
        self.group_str = Some(group_str.into());
        self
    }

    pub fn set_order_str(mut self, order_str: impl Into<String>) -> Self {
        self.order_str = Some(order_str.into());
        self
    }

    pub fn set_ascending(mut self, ascending: bool) -> Self {
        self.ascending = ascending;
        self
    }

    pub fn set_limit_str(mut self, limit_str: impl Into<String>) -> Self {
        self.limit_str = Some(limit_str.into());
        self
    }

    pub fn add_sub_query(mut self, sub_query: SelectStatement) -> Self {
        self.sub_queries.push(sub_query);
        self
    }
}

impl Builder for SelectStatementBuilder {
    type Product = SelectStatement;

    fn create(self) -> Result<SelectStatement> {
        let table_name = self
            .table_name
            .map(|name| name.trim().to_string())
            .ok_or(ParseError::Incomplete {
                kind: StatementKind::Select,
                missing: "table name",
            })?;
        let mut statement = SelectStatement {
            table_name,
            field_names: self.select_str.as_deref().map(split_list).unwrap_or_default(),
            sql: String::new(),
            select_str: self.select_str,
            where_str: self.where_str,
            group_str: self.group_str,
            order_str: self.order_str,
            ascending: self.ascending,
            limit_str: self.limit_str,
            sub_queries: self.sub_queries,
        };
        statement.sql = match self.sql {
            Some(sql) => sql,
            None => statement.render(),
        };
        Ok(statement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statement(table: &str, select: &str) -> SelectStatement {
        SelectStatement::builder()
            .set_table_name(table)
            .set_select_str(select)
            .create()
            .unwrap()
    }

    #[test]
    fn create_requires_table_name() {
        let err = SelectStatement::builder().set_select_str("a").create().unwrap_err();
        assert_eq!(
            err,
            ParseError::Incomplete {
                kind: StatementKind::Select,
                missing: "table name",
            }
        );
    }

    #[test]
    fn unset_clauses_are_absent() {
        let s = statement("t", "a, b");
        assert_eq!(s.field_names(), ["a", "b"]);
        assert_eq!(s.where_str(), None);
        assert_eq!(s.get_by_keyword("limit").unwrap(), None);
        assert!(s.get_array_by_keyword("group").unwrap().is_empty());
        assert_eq!(s.sort_order(), SortOrder::Unspecified);
    }

    #[test]
    fn built_statement_renders_sql() {
        let s = SelectStatement::builder()
            .set_table_name("t")
            .set_select_str("a")
            .set_where_str("a > 1")
            .set_order_str("a")
            .set_ascending(false)
            .set_limit_str("5")
            .create()
            .unwrap();
        assert_eq!(s.sql(), "select a from t where a > 1 order by a desc limit 5;");
        assert_eq!(s.to_string(), s.sql());
    }

    #[test]
    fn tables_strip_join_keywords() {
        let s = statement("a LEFT OUTER JOIN b, c cross join d", "*");
        assert_eq!(s.tables(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn where_array_alternates_predicates_and_connectives() {
        let s = SelectStatement::builder()
            .set_table_name("t")
            .set_select_str("*")
            .set_where_str("a = 1 AND b  >  2 or c like 'x'")
            .create()
            .unwrap();
        assert_eq!(
            s.where_array(),
            vec!["a = 1", "AND", "b  >  2", "or", "c like 'x'"]
        );
    }

    #[test]
    fn where_array_keeps_literal_spacing() {
        let s = SelectStatement::builder()
            .set_table_name("t")
            .set_where_str("name = 'a  b' or\tnote = 'x'")
            .create()
            .unwrap();
        assert_eq!(s.where_array(), vec!["name = 'a  b'", "or", "note = 'x'"]);
    }

    #[test]
    fn add_table_name_joins_with_separators() {
        let s = SelectStatement::builder()
            .set_table_name("")
            .add_table_name("", "a")
            .add_table_name(" join ", "b")
            .add_table_name("", "c")
            .create()
            .unwrap();
        assert_eq!(s.table_name(), "a join b, c");
        assert_eq!(s.tables(), vec!["a", "b", "c"]);

        let s = SelectStatement::builder()
            .set_table_name("x,")
            .add_table_name("", "a")
            .create()
            .unwrap();
        assert_eq!(s.table_name(), "x, a");
    }

    #[test]
    fn subquery_class_has_no_accessor() {
        let s = statement("t", "*");
        assert!(matches!(
            s.get_by_keyword("("),
            Err(ParseError::UnknownKeyword { .. })
        ));
        assert!(matches!(
            s.get_by_keyword("having"),
            Err(ParseError::UnknownKeyword { .. })
        ));
    }

    #[test]
    fn merge_fills_only_unset_clauses() {
        let a = statement("t", "a");
        let b = SelectStatement::builder()
            .set_table_name("t")
            .set_select_str("z")
            .set_where_str("x = 1")
            .set_order_str("x")
            .set_ascending(false)
            .set_limit_str("10")
            .create()
            .unwrap();
        let merged = a.merge(&b);
        assert_eq!(merged.select_str(), Some("a"));
        assert_eq!(merged.where_str(), Some("x = 1"));
        assert_eq!(merged.limit_str(), Some("10"));
        assert_eq!(merged.sort_order(), SortOrder::Descending);
        assert_eq!(a.where_str(), None);
        assert_eq!(b.select_str(), Some("z"));
    }

    #[test]
    fn merge_concatenates_sub_queries_in_order() {
        let a = SelectStatement::builder()
            .set_table_name("outer")
            .add_sub_query(statement("a", "*"))
            .create()
            .unwrap();
        let b = SelectStatement::builder()
            .set_table_name("outer")
            .add_sub_query(statement("b", "*"))
            .create()
            .unwrap();
        let merged = a.merge(&b);
        let names: Vec<&str> = merged.sub_queries().iter().map(|s| s.table_name()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(a.sub_queries().len(), 1);
    }
}
