//! ALTER TABLE statement and its builder.

use std::fmt;

use super::{single, split_list, Builder, Statement};
use crate::error::{ParseError, Result};
use crate::keyword::{AlterKeyword, Keyword, StatementKind, TERMINATOR};

/// The operation an ALTER TABLE statement performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlterMode {
    Add,
    Drop,
    Rename,
    Change,
}

impl AlterMode {
    pub fn as_str(self) -> &'static str {
        match self {
            AlterMode::Add => "add",
            AlterMode::Drop => "drop",
            AlterMode::Rename => "rename",
            AlterMode::Change => "change",
        }
    }

    /// The mode introduced by `keyword`, if it is one of the four modes.
    pub fn from_keyword(keyword: AlterKeyword) -> Option<AlterMode> {
        match keyword {
            AlterKeyword::Add => Some(AlterMode::Add),
            AlterKeyword::Drop => Some(AlterMode::Drop),
            AlterKeyword::Rename => Some(AlterMode::Rename),
            AlterKeyword::Change => Some(AlterMode::Change),
            _ => None,
        }
    }
}

/// What an `add` clause adds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddTarget {
    Index,
    Unique,
    Primary,
    /// A plain column.
    Field,
}

impl AddTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            AddTarget::Index => "index",
            AddTarget::Unique => "unique",
            AddTarget::Primary => "primary",
            AddTarget::Field => "field",
        }
    }

    /// Classify the token following `add`. Anything that is not `index`,
    /// `unique` or `primary` starts a column definition.
    pub fn from_token(token: &str) -> AddTarget {
        match AlterKeyword::classify(token) {
            Some(AlterKeyword::Index) => AddTarget::Index,
            Some(AlterKeyword::Unique) => AddTarget::Unique,
            Some(AlterKeyword::Primary) => AddTarget::Primary,
            _ => AddTarget::Field,
        }
    }
}

/// A parsed `ALTER TABLE` statement. Payloads that do not belong to the
/// statement's [`AlterMode`] are always absent.
#[derive(Debug, Clone, PartialEq)]
pub struct AlterStatement {
    table_name: String,
    field_names: Vec<String>,
    sql: String,
    mode: AlterMode,
    alter_str: Option<String>,
    add_str: Option<String>,
    add_info: Option<AddTarget>,
    index_name: Option<String>,
    drop_str: Option<String>,
    rename_str: Option<String>,
    change_str: Option<String>,
    field_str: Option<String>,
}

impl AlterStatement {
    pub fn builder() -> AlterStatementBuilder {
        AlterStatementBuilder::default()
    }

    pub fn mode(&self) -> AlterMode {
        self.mode
    }

    /// The `table <name> <mode>` text following `alter`.
    pub fn alter_str(&self) -> Option<&str> {
        self.alter_str.as_deref()
    }

    /// The complete `add ...` clause.
    pub fn add_str(&self) -> Option<&str> {
        self.add_str.as_deref()
    }

    pub fn add_info(&self) -> Option<AddTarget> {
        self.add_info
    }

    pub fn index_name(&self) -> Option<&str> {
        self.index_name.as_deref()
    }

    pub fn drop_str(&self) -> Option<&str> {
        self.drop_str.as_deref()
    }

    /// The new table name of a `rename`.
    pub fn rename_str(&self) -> Option<&str> {
        self.rename_str.as_deref()
    }

    /// The new column definition of a `change`.
    pub fn change_str(&self) -> Option<&str> {
        self.change_str.as_deref()
    }

    pub fn field_str(&self) -> Option<&str> {
        self.field_str.as_deref()
    }

    fn render(&self) -> String {
        let mut sql = format!("alter table {} ", self.table_name);
        match self.mode {
            AlterMode::Add => match (&self.add_str, self.add_info) {
                (Some(add_str), _) => sql.push_str(add_str),
                (None, Some(AddTarget::Index)) => sql.push_str(&format!(
                    "add index {} ({})",
                    self.index_name.as_deref().unwrap_or_default(),
                    self.field_str.as_deref().unwrap_or_default()
                )),
                (None, Some(target @ (AddTarget::Unique | AddTarget::Primary))) => {
                    sql.push_str(&format!(
                        "add {} ({})",
                        target.as_str(),
                        self.field_str.as_deref().unwrap_or_default()
                    ))
                }
                (None, _) => {
                    sql.push_str("add ");
                    sql.push_str(self.field_str.as_deref().unwrap_or_default());
                }
            },
            AlterMode::Drop => {
                sql.push_str("drop ");
                sql.push_str(self.drop_str.as_deref().unwrap_or_default());
            }
            AlterMode::Rename => {
                sql.push_str("rename ");
                sql.push_str(self.rename_str.as_deref().unwrap_or_default());
            }
            AlterMode::Change => {
                sql.push_str("change ");
                sql.push_str(self.field_str.as_deref().unwrap_or_default());
                sql.push(' ');
                sql.push_str(self.change_str.as_deref().unwrap_or_default());
            }
        }
        sql.push_str(TERMINATOR);
        sql
    }
}

impl Statement for AlterStatement {
    type Keyword = AlterKeyword;

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
        let value = match AlterKeyword::require(word)? {
            AlterKeyword::Alter => self.alter_str.clone(),
            AlterKeyword::Table => Some(self.table_name.clone()),
            AlterKeyword::Add => self.add_str.clone(),
            AlterKeyword::Drop => self.drop_str.clone(),
            AlterKeyword::Rename => self.rename_str.clone(),
            AlterKeyword::Change => self.change_str.clone(),
            AlterKeyword::Index => self.index_name.clone(),
            AlterKeyword::Field => self.field_str.clone(),
            AlterKeyword::Mode => Some(self.mode.as_str().to_string()),
            AlterKeyword::AddInfo => self.add_info.map(|info| info.as_str().to_string()),
            AlterKeyword::Unique | AlterKeyword::Primary => {
                return Err(ParseError::unknown_keyword(StatementKind::Alter, word))
            }
        };
        Ok(value)
    }

    fn get_array_by_keyword(&self, word: &str) -> Result<Vec<String>> {
        if AlterKeyword::require(word)? == AlterKeyword::Field {
            return Ok(self.field_names.clone());
        }
        Ok(single(self.get_by_keyword(word)?.as_deref()))
    }
}

impl fmt::Display for AlterStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

// ===========================================================================
// Builder
// ===========================================================================

/// Staging accumulator for [`AlterStatement`].
#[derive(Debug, Clone, Default)]
pub struct AlterStatementBuilder {
    table_name: Option<String>,
    sql: Option<String>,
    mode: Option<AlterMode>,
    alter_str: Option<String>,
    add_str: Option<String>,
    add_info: Option<AddTarget>,
    index_name: Option<String>,
    drop_str: Option<String>,
    rename_str: Option<String>,
    change_str: Option<String>,
    field_str: Option<String>,
}

impl AlterStatementBuilder {
    pub fn set_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    pub fn set_sql(mut self, sql: impl Into<String>) -> Self {
        self.sql = Some(sql.into());
        self
    }

    pub fn set_mode(mut self, mode: AlterMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn set_alter_str(mut self, alter_str: impl Into<String>) -> Self {
        self.alter_str = Some(alter_str.into());
        self
    }

    pub fn set_add_str(mut self, add_str: impl Into<String>) -> Self {
        self.add_str = Some(add_str.into());
        self
    }

    pub fn set_add_info(mut self, add_info: AddTarget) -> Self {
        self.add_info = Some(add_info);
        self
    }

    pub fn set_index_name(mut self, index_name: impl Into<String>) -> Self {
        self.index_name = Some(index_name.into());
        self
    }

    pub fn set_drop_str(mut self, drop_str: impl Into<String>) -> Self {
        self.drop_str = Some(drop_str.into());
        self
    }

    pub fn set_rename_str(mut self, rename_str: impl Into<String>) -> Self {
        self.rename_str = Some(rename_str.into());
        self
    }

    pub fn set_change_str(mut self, change_str: impl Into<String>) -> Self {
        self.change_str = Some(change_str.into());
        self
    }

    pub fn set_field_str(mut self, field_str: impl Into<String>) -> Self {
        self.field_str = Some(field_str.into());
        self
    }
}

impl Builder for AlterStatementBuilder {
    type Product = AlterStatement;

    fn create(self) -> Result<AlterStatement> {
        let incomplete = |missing| ParseError::Incomplete {
            kind: StatementKind::Alter,
            missing,
        };
        let table_name = self.table_name.ok_or_else(|| incomplete("table name"))?;
        let mode = self.mode.ok_or_else(|| incomplete("mode"))?;

        let is_add = mode == AlterMode::Add;
        let add_info = self.add_info.filter(|_| is_add);
        let mut statement = AlterStatement {
            table_name,
            field_names: self.field_str.as_deref().map(split_list).unwrap_or_default(),
            sql: String::new(),
            mode,
            alter_str: self.alter_str,
            add_str: self.add_str.filter(|_| is_add),
            add_info,
            index_name: self.index_name.filter(|_| add_info == Some(AddTarget::Index)),
            drop_str: self.drop_str.filter(|_| mode == AlterMode::Drop),
            rename_str: self.rename_str.filter(|_| mode == AlterMode::Rename),
            change_str: self.change_str.filter(|_| mode == AlterMode::Change),
            field_str: self.field_str,
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
    fn create_requires_mode() {
        let err = AlterStatement::builder().set_table_name("t").create().unwrap_err();
        assert_eq!(
            err,
            ParseError::Incomplete {
                kind: StatementKind::Alter,
                missing: "mode",
            }
        );
    }

    #[test]
    fn foreign_mode_payloads_are_dropped() {
        let s = AlterStatement::builder()
            .set_table_name("t")
            .set_mode(AlterMode::Drop)
            .set_drop_str("a")
            .set_rename_str("u")
            .set_index_name("idx")
            .set_add_info(AddTarget::Index)
            .create()
            .unwrap();
        assert_eq!(s.drop_str(), Some("a"));
        assert_eq!(s.rename_str(), None);
        assert_eq!(s.index_name(), None);
        assert_eq!(s.add_info(), None);
        assert_eq!(s.sql(), "alter table t drop a;");
    }

    #[test]
    fn index_name_requires_index_target() {
        let s = AlterStatement::builder()
            .set_table_name("t")
            .set_mode(AlterMode::Add)
            .set_add_info(AddTarget::Unique)
            .set_index_name("u_a")
            .set_field_str("a")
            .create()
            .unwrap();
        assert_eq!(s.index_name(), None);
        assert_eq!(s.sql(), "alter table t add unique (a);");
    }

    #[test]
    fn add_target_from_token() {
        assert_eq!(AddTarget::from_token("INDEX"), AddTarget::Index);
        assert_eq!(AddTarget::from_token("unique"), AddTarget::Unique);
        assert_eq!(AddTarget::from_token("Primary"), AddTarget::Primary);
        assert_eq!(AddTarget::from_token("email"), AddTarget::Field);
    }

    #[test]
    fn keyed_access_covers_pseudo_keywords() {
        let s = AlterStatement::builder()
            .set_table_name("t")
            .set_mode(AlterMode::Add)
            .set_add_info(AddTarget::Index)
            .set_index_name("idx")
            .set_field_str("a, b")
            .create()
            .unwrap();
        assert_eq!(s.get_by_keyword("mod").unwrap(), Some("add".to_string()));
        assert_eq!(s.get_by_keyword("addINFO").unwrap(), Some("index".to_string()));
        assert_eq!(s.get_array_by_keyword("index").unwrap(), vec!["idx"]);
        assert_eq!(s.get_array_by_keyword("field").unwrap(), vec!["a", "b"]);
        assert!(s.get_array_by_keyword("drop").unwrap().is_empty());
        assert!(matches!(
            s.get_by_keyword("unique"),
            Err(ParseError::UnknownKeyword { .. })
        ));
    }
}
