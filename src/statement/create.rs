//! CREATE TABLE statement and its builder.

use std::fmt;

use super::{fill, single, split_list, split_words, Builder, Merge, SelectStatement, Statement};
use crate::error::{ParseError, Result};
use crate::keyword::{CreateKeyword, Keyword, StatementKind, TERMINATOR};

/// A parsed `CREATE TABLE` statement, in one of three shapes: a field list
/// with optional table options, `LIKE <table>`, or `AS SELECT ...`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateStatement {
    table_name: String,
    field_names: Vec<String>,
    sql: String,
    create_str: Option<String>,
    field_str: Option<String>,
    options_str: Option<String>,
    temporary: bool,
    like_str: Option<String>,
    select: Option<SelectStatement>,
}

impl CreateStatement {
    pub fn builder() -> CreateStatementBuilder {
        CreateStatementBuilder::default()
    }

    pub fn is_temporary(&self) -> bool {
        self.temporary
    }

    /// The `[temporary] table <name>` text following `create`.
    pub fn create_str(&self) -> Option<&str> {
        self.create_str.as_deref()
    }

    /// The raw field list, without the enclosing parentheses.
    pub fn field_str(&self) -> Option<&str> {
        self.field_str.as_deref()
    }

    /// Table options after the field list (engine, charset, ...).
    pub fn options_str(&self) -> Option<&str> {
        self.options_str.as_deref()
    }

    pub fn like_str(&self) -> Option<&str> {
        self.like_str.as_deref()
    }

    /// The query of a `CREATE TABLE ... AS SELECT` statement.
    pub fn select_statement(&self) -> Option<&SelectStatement> {
        self.select.as_ref()
    }

    fn render(&self) -> String {
        let mut sql = String::from("create ");
        match &self.create_str {
            Some(create_str) => sql.push_str(create_str),
            None => {
                if self.temporary {
                    sql.push_str("temporary ");
                }
                sql.push_str("table ");
                sql.push_str(&self.table_name);
            }
        }
        if let Some(field_str) = &self.field_str {
            sql.push_str(" (");
            sql.push_str(field_str);
            sql.push(')');
        } else if let Some(like_str) = &self.like_str {
            sql.push_str(" like ");
            sql.push_str(like_str);
        }
        if let Some(options_str) = &self.options_str {
            sql.push(' ');
            sql.push_str(options_str);
        }
        match &self.select {
            Some(select) => {
                sql.push_str(" as ");
                sql.push_str(select.sql());
            }
            None => sql.push_str(TERMINATOR),
        }
        sql
    }
}

impl Statement for CreateStatement {
    type Keyword = CreateKeyword;

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
        let value = match CreateKeyword::require(word)? {
            CreateKeyword::Create => self.create_str.clone(),
            CreateKeyword::Table => Some(self.table_name.clone()),
            CreateKeyword::Field => self.field_str.clone(),
            CreateKeyword::Option => self.options_str.clone(),
            CreateKeyword::Like => self.like_str.clone(),
            CreateKeyword::As => self.select.as_ref().map(|s| s.sql().to_string()),
            CreateKeyword::OpenParen | CreateKeyword::CloseParen => {
                return Err(ParseError::unknown_keyword(StatementKind::Create, word))
            }
        };
        Ok(value)
    }

    fn get_array_by_keyword(&self, word: &str) -> Result<Vec<String>> {
        let values = match CreateKeyword::require(word)? {
            CreateKeyword::Create => self.create_str.as_deref().map(split_words).unwrap_or_default(),
            CreateKeyword::Table => vec![self.table_name.clone()],
            CreateKeyword::Field => self.field_names.clone(),
            CreateKeyword::Option => self.options_str.as_deref().map(split_words).unwrap_or_default(),
            CreateKeyword::Like => single(self.like_str.as_deref()),
            CreateKeyword::As => single(self.select.as_ref().map(|s| s.sql())),
            CreateKeyword::OpenParen | CreateKeyword::CloseParen => {
                return Err(ParseError::unknown_keyword(StatementKind::Create, word))
            }
        };
        Ok(values)
    }
}

impl Merge for CreateStatement {
    fn merge(&self, other: &Self) -> Self {
        let field_str = fill(&self.field_str, &other.field_str);
        let mut merged = CreateStatement {
            table_name: self.table_name.clone(),
            field_names: field_str.as_deref().map(split_list).unwrap_or_default(),
            sql: String::new(),
            create_str: fill(&self.create_str, &other.create_str),
            field_str,
            options_str: fill(&self.options_str, &other.options_str),
            temporary: self.temporary,
            like_str: fill(&self.like_str, &other.like_str),
            select: self.select.clone().or_else(|| other.select.clone()),
        };
        merged.sql = merged.render();
        merged
    }
}

impl fmt::Display for CreateStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

// ===========================================================================
// Builder
// ===========================================================================

/// Staging accumulator for [`CreateStatement`].
#[derive(Debug, Clone, Default)]
pub struct CreateStatementBuilder {
    table_name: Option<String>,
    sql: Option<String>,
    create_str: Option<String>,
    field_str: Option<String>,
    options_str: Option<String>,
    temporary: bool,
    like_str: Option<String>,
    select: Option<SelectStatement>,
}

impl CreateStatementBuilder {
    pub fn set_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    pub fn set_sql(mut self, sql: impl Into<String>) -> Self {
        self.sql = Some(sql.into());
        self
    }

    pub fn set_create_str(mut self, create_str: impl Into<String>) -> Self {
        self.create_str = Some(create_str.into());
        self
    }

    pub fn set_field_str(mut self, field_str: impl Into<String>) -> Self {
        self.field_str = Some(field_str.into());
        self
    }

    pub fn set_options_str(mut self, options_str: impl Into<String>) -> Self {
        self.options_str = Some(options_str.into());
        self
    }

    pub fn set_temporary(mut self, temporary: bool) -> Self {
        self.temporary = temporary;
        self
    }

    pub fn set_like_str(mut self, like_str: impl Into<String>) -> Self {
        self.like_str = Some(like_str.into());
        self
    }

    pub fn set_select_statement(mut self, select: SelectStatement) -> Self {
        self.select = Some(select);
        self
    }
}

impl Builder for CreateStatementBuilder {
    type Product = CreateStatement;

    fn create(self) -> Result<CreateStatement> {
        let table_name = self.table_name.ok_or(ParseError::Incomplete {
            kind: StatementKind::Create,
            missing: "table name",
        })?;
        let mut statement = CreateStatement {
            table_name,
            field_names: self.field_str.as_deref().map(split_list).unwrap_or_default(),
            sql: String::new(),
            create_str: self.create_str,
            field_str: self.field_str,
            options_str: self.options_str,
            temporary: self.temporary,
            like_str: self.like_str,
            select: self.select,
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

    #[test]
    fn create_requires_table_name() {
        assert!(matches!(
            CreateStatement::builder().set_field_str("a int").create(),
            Err(ParseError::Incomplete { kind: StatementKind::Create, .. })
        ));
    }

    #[test]
    fn field_names_split_on_commas() {
        let s = CreateStatement::builder()
            .set_table_name("t")
            .set_field_str("\n  id int,\n  name text\n")
            .create()
            .unwrap();
        assert_eq!(s.field_names(), ["id int", "name text"]);
        assert_eq!(s.get_array_by_keyword("FIELD").unwrap(), vec!["id int", "name text"]);
    }

    #[test]
    fn like_statement_has_no_fields() {
        let s = CreateStatement::builder()
            .set_table_name("t")
            .set_like_str("u")
            .create()
            .unwrap();
        assert!(s.field_names().is_empty());
        assert_eq!(s.get_array_by_keyword("like").unwrap(), vec!["u"]);
        assert_eq!(s.get_by_keyword("option").unwrap(), None);
        assert_eq!(s.sql(), "create table t like u;");
    }

    #[test]
    fn parentheses_have_no_accessor() {
        let s = CreateStatement::builder().set_table_name("t").create().unwrap();
        assert!(matches!(
            s.get_array_by_keyword(")"),
            Err(ParseError::UnknownKeyword { kind: StatementKind::Create, .. })
        ));
    }

    #[test]
    fn merge_keeps_own_fields_and_flag() {
        let a = CreateStatement::builder()
            .set_table_name("t")
            .set_temporary(true)
            .set_field_str("a int")
            .create()
            .unwrap();
        let b = CreateStatement::builder()
            .set_table_name("t")
            .set_field_str("b int")
            .set_options_str("ENGINE=x")
            .create()
            .unwrap();
        let merged = a.merge(&b);
        assert!(merged.is_temporary());
        assert_eq!(merged.field_names(), ["a int"]);
        assert_eq!(merged.options_str(), Some("ENGINE=x"));
        assert_eq!(merged.sql(), "create temporary table t (a int) ENGINE=x;");
        assert_eq!(a.options_str(), None);
    }
}
