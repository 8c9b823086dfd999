//! ALTER TABLE parser.
//!
//! `alter table <name> <mode>` selects one of four modes. `add` takes a
//! second dispatch step: the token after `add` is classified (`index`,
//! `unique`, `primary`, anything else is a column) and the parse continues
//! with the payload pattern for that target.

use super::{match_clause, SqlParser};
use crate::error::{ParseError, Result};
use crate::keyword::{AlterKeyword, Keyword, StatementKind, TERMINATOR};
use crate::pattern::alter::pattern_for;
use crate::pattern::ClauseMatch;
use crate::statement::{AddTarget, AlterMode, AlterStatement, AlterStatementBuilder, Builder};

/// Parses `alter table <name> add|drop|rename|change ...;`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlterParser;

impl SqlParser for AlterParser {
    type Statement = AlterStatement;
    type Builder = AlterStatementBuilder;

    fn kind(&self) -> StatementKind {
        StatementKind::Alter
    }

    fn parse_sql(&self, sql: &str) -> Result<AlterStatement> {
        let builder = AlterStatementBuilder::default().set_sql(sql);
        self.parse_by_word(builder, 0, sql, StatementKind::Alter.name())
    }

    fn parse_by_word(
        &self,
        builder: AlterStatementBuilder,
        position: usize,
        sql: &str,
        word: &str,
    ) -> Result<AlterStatement> {
        if word == TERMINATOR {
            return builder.create();
        }
        let keyword = AlterKeyword::require(word)?;
        let clause = match_clause(keyword, word, position, sql, pattern_for)?;

        let builder = match keyword {
            AlterKeyword::Alter => {
                let mode_word = clause.group(3).unwrap_or_default();
                let mode = AlterKeyword::classify(mode_word)
                    .and_then(AlterMode::from_keyword)
                    .ok_or_else(|| ParseError::unknown_keyword(StatementKind::Alter, mode_word))?;
                let builder = builder
                    .set_alter_str(clause.group(1).unwrap_or_default())
                    .set_table_name(clause.group(2).unwrap_or_default())
                    .set_mode(mode);
                return self.parse_by_word(builder, clause.end(), sql, mode_word);
            }
            AlterKeyword::Add => {
                let token = clause.group(1).unwrap_or_default();
                let target = AddTarget::from_token(token);
                // Column additions have no keyword of their own in the text.
                let target_word = match target {
                    AddTarget::Field => AddTarget::Field.as_str(),
                    _ => token,
                };
                let builder = builder.set_add_info(target);
                return self.parse_by_word(builder, clause.start(), sql, target_word);
            }
            AlterKeyword::Index => add_clause(builder, &clause)
                .set_index_name(clause.group(1).unwrap_or_default())
                .set_field_str(clause.group(2).unwrap_or_default().trim()),
            AlterKeyword::Unique | AlterKeyword::Primary | AlterKeyword::Field => {
                add_clause(builder, &clause).set_field_str(clause.group(1).unwrap_or_default().trim())
            }
            AlterKeyword::Drop => {
                let column = clause.group(1).unwrap_or_default();
                builder.set_drop_str(column).set_field_str(column)
            }
            AlterKeyword::Rename => builder.set_rename_str(clause.group(1).unwrap_or_default()),
            AlterKeyword::Change => builder
                .set_field_str(clause.group(1).unwrap_or_default())
                .set_change_str(clause.group(2).unwrap_or_default().trim()),
            // No pattern; rejected by `match_clause`.
            AlterKeyword::Table | AlterKeyword::Mode | AlterKeyword::AddInfo => builder,
        };

        // Every payload pattern runs through the terminator.
        self.parse_by_word(builder, clause.end(), sql, TERMINATOR)
    }
}

/// Record the complete `add ...` clause text, without its terminator.
fn add_clause(builder: AlterStatementBuilder, clause: &ClauseMatch<'_>) -> AlterStatementBuilder {
    builder.set_add_str(clause.text().trim_end().trim_end_matches(TERMINATOR).trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::Statement;

    fn parse(sql: &str) -> AlterStatement {
        AlterParser.parse_sql(sql).unwrap()
    }

    #[test]
    fn add_index() {
        let s = parse("alter table t add index idx (a,b);");
        assert_eq!(s.mode(), AlterMode::Add);
        assert_eq!(s.add_info(), Some(AddTarget::Index));
        assert_eq!(s.index_name(), Some("idx"));
        assert_eq!(s.field_names(), ["a", "b"]);
        assert_eq!(s.add_str(), Some("add index idx (a,b)"));
        assert_eq!(s.alter_str(), Some("table t add"));
    }

    #[test]
    fn add_unique_and_primary() {
        let s = parse("ALTER TABLE t ADD UNIQUE (email);");
        assert_eq!(s.add_info(), Some(AddTarget::Unique));
        assert_eq!(s.index_name(), None);
        assert_eq!(s.field_names(), ["email"]);

        let s = parse("alter table t add primary key (id, region);");
        assert_eq!(s.add_info(), Some(AddTarget::Primary));
        assert_eq!(s.field_names(), ["id", "region"]);
    }

    #[test]
    fn add_column() {
        let s = parse("alter table users add column email varchar(255) not null;");
        assert_eq!(s.add_info(), Some(AddTarget::Field));
        assert_eq!(s.field_str(), Some("email varchar(255) not null"));
        assert_eq!(s.get_by_keyword("addinfo").unwrap().as_deref(), Some("field"));
    }

    #[test]
    fn drop_rename_change() {
        let s = parse("alter table t drop column c;");
        assert_eq!(s.mode(), AlterMode::Drop);
        assert_eq!(s.drop_str(), Some("c"));
        assert_eq!(s.field_names(), ["c"]);
        assert_eq!(s.add_info(), None);

        let s = parse("alter table t rename to u;");
        assert_eq!(s.mode(), AlterMode::Rename);
        assert_eq!(s.rename_str(), Some("u"));
        assert_eq!(s.table_name(), "t");

        let s = parse("alter table t change old_name new_name int;");
        assert_eq!(s.mode(), AlterMode::Change);
        assert_eq!(s.field_str(), Some("old_name"));
        assert_eq!(s.change_str(), Some("new_name int"));
    }

    #[test]
    fn unsupported_mode_is_clause_mismatch() {
        assert!(matches!(
            AlterParser.parse_sql("alter table t modify a int;"),
            Err(ParseError::ClauseMismatch { .. })
        ));
    }

    #[test]
    fn missing_terminator_is_clause_mismatch() {
        let err = AlterParser.parse_sql("alter table t drop c").unwrap_err();
        assert!(matches!(err, ParseError::ClauseMismatch { ref keyword, .. } if keyword == "drop"));
    }
}
