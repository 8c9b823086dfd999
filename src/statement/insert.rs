//! INSERT statement and its builder.

use std::fmt;

use super::{fill, split_list, Builder, Merge, Statement};
use crate::error::{ParseError, Result};
use crate::keyword::{InsertKeyword, Keyword, StatementKind, TERMINATOR};
use crate::pattern::insert::TUPLE_SEPARATOR;

/// A parsed `INSERT INTO` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertStatement {
    table_name: String,
    field_names: Vec<String>,
    sql: String,
    field_str: Option<String>,
    data_str: Option<String>,
    multiline: bool,
}

impl InsertStatement {
    pub fn builder() -> InsertStatementBuilder {
        InsertStatementBuilder::default()
    }

    /// True when the statement used the plural `values` keyword.
    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    pub fn field_str(&self) -> Option<&str> {
        self.field_str.as_deref()
    }

    /// Tuple data between the first `(` and the last `)`.
    pub fn data_str(&self) -> Option<&str> {
        self.data_str.as_deref()
    }

    /// The inserted tuples, without their parentheses.
    pub fn values(&self) -> Vec<String> {
        self.data_str
            .as_deref()
            .map(|data| {
                TUPLE_SEPARATOR
                    .split(data)
                    .into_iter()
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn render(&self) -> String {
        let mut sql = format!("insert into {}", self.table_name);
        if let Some(field_str) = &self.field_str {
            sql.push_str(" (");
            sql.push_str(field_str);
            sql.push(')');
        }
        sql.push_str(if self.multiline { " values (" } else { " value (" });
        sql.push_str(self.data_str.as_deref().unwrap_or_default());
        sql.push(')');
        sql.push_str(TERMINATOR);
        sql
    }
}

impl Statement for InsertStatement {
    type Keyword = InsertKeyword;

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
        let value = match InsertKeyword::require(word)? {
            InsertKeyword::Insert => self.field_str.clone(),
            InsertKeyword::Table => Some(self.table_name.clone()),
            InsertKeyword::Value | InsertKeyword::Values => {
                self.data_str.as_ref().map(|data| format!("({data})"))
            }
        };
        Ok(value)
    }

    fn get_array_by_keyword(&self, word: &str) -> Result<Vec<String>> {
        let values = match InsertKeyword::require(word)? {
            InsertKeyword::Insert => self.field_names.clone(),
            InsertKeyword::Table => vec![self.table_name.clone()],
            InsertKeyword::Value | InsertKeyword::Values => self.values(),
        };
        Ok(values)
    }
}

impl Merge for InsertStatement {
    fn merge(&self, other: &Self) -> Self {
        let field_str = fill(&self.field_str, &other.field_str);
        // Plurality belongs to the data it describes.
        let multiline = if self.data_str.is_some() {
            self.multiline
        } else {
            other.multiline
        };
        let mut merged = InsertStatement {
            table_name: self.table_name.clone(),
            field_names: field_str.as_deref().map(split_list).unwrap_or_default(),
            sql: String::new(),
            field_str,
            data_str: fill(&self.data_str, &other.data_str),
            multiline,
        };
        merged.sql = merged.render();
        merged
    }
}

impl fmt::Display for InsertStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

// ===========================================================================
// Builder
// ===========================================================================

/// Staging accumulator for [`InsertStatement`].
#[derive(Debug, Clone, Default)]
pub struct InsertStatementBuilder {
    table_name: Option<String>,
    sql: Option<String>,
    field_str: Option<String>,
    data_str: Option<String>,
    multiline: bool,
}

impl InsertStatementBuilder {
    pub fn set_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    pub fn set_sql(mut self, sql: impl Into<String>) -> Self {
        self.sql = Some(sql.into());
        self
    }

    pub fn set_field_str(mut self, field_str: impl Into<String>) -> Self {
        self.field_str = Some(field_str.into());
        self
    }

    pub fn set_data_str(mut self, data_str: impl Into<String>) -> Self {
        self.data_str = Some(data_str.into());
        self
    }

    pub fn set_multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }
}

impl Builder for InsertStatementBuilder {
    type Product = InsertStatement;

    fn create(self) -> Result<InsertStatement> {
        let table_name = self.table_name.ok_or(ParseError::Incomplete {
            kind: StatementKind::Insert,
            missing: "table name",
        })?;
        let mut statement = InsertStatement {
            table_name,
            field_names: self.field_str.as_deref().map(split_list).unwrap_or_default(),
            sql: String::new(),
            field_str: self.field_str,
            data_str: self.data_str,
            multiline: self.multiline,
        };
        statement.sql = match self.sql {
            Some(sql) => sql,
            None => statement.render(),
        };
        Ok(statement)
    }
}
