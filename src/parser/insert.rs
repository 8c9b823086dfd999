//! INSERT parser.

use super::{match_clause, SqlParser};
use crate::error::Result;
use crate::keyword::{InsertKeyword, Keyword, StatementKind, TERMINATOR};
use crate::pattern::insert::pattern_for;
use crate::statement::{Builder, InsertStatement, InsertStatementBuilder};

/// Parses `insert into <table> [(<fields>)] value|values (<tuples>);`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertParser;

impl SqlParser for InsertParser {
    type Statement = InsertStatement;
    type Builder = InsertStatementBuilder;

    fn kind(&self) -> StatementKind {
        StatementKind::Insert
    }

    fn parse_sql(&self, sql: &str) -> Result<InsertStatement> {
        let builder = InsertStatementBuilder::default().set_sql(sql);
        self.parse_by_word(builder, 0, sql, StatementKind::Insert.name())
    }

    fn parse_by_word(
        &self,
        builder: InsertStatementBuilder,
        position: usize,
        sql: &str,
        word: &str,
    ) -> Result<InsertStatement> {
        if word == TERMINATOR {
            return builder.create();
        }
        let keyword = InsertKeyword::require(word)?;
        let clause = match_clause(keyword, word, position, sql, pattern_for)?;

        let mut builder = builder
            .set_table_name(clause.group(1).unwrap_or_default())
            .set_data_str(clause.group(4).unwrap_or_default().trim())
            .set_multiline(
                clause
                    .group(3)
                    .is_some_and(|value| value.eq_ignore_ascii_case("values")),
            );
        if let Some(fields) = clause.group(2) {
            builder = builder.set_field_str(fields.trim());
        }

        // The single INSERT pattern runs through the terminator.
        self.parse_by_word(builder, clause.end(), sql, TERMINATOR)
    }
}
