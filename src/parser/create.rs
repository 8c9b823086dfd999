//! CREATE TABLE parser.

use super::{match_clause, SelectParser, SqlParser};
use crate::error::Result;
use crate::keyword::{CreateKeyword, Keyword, StatementKind, TERMINATOR};
use crate::pattern::create::pattern_for;
use crate::statement::{Builder, CreateStatement, CreateStatementBuilder};

/// Parses `create [temporary] table <name>` followed by a field list and
/// options, `like <table>`, or `as select ...`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateParser;

impl SqlParser for CreateParser {
    type Statement = CreateStatement;
    type Builder = CreateStatementBuilder;

    fn kind(&self) -> StatementKind {
        StatementKind::Create
    }

    fn parse_sql(&self, sql: &str) -> Result<CreateStatement> {
        let builder = CreateStatementBuilder::default().set_sql(sql);
        self.parse_by_word(builder, 0, sql, StatementKind::Create.name())
    }

    fn parse_by_word(
        &self,
        builder: CreateStatementBuilder,
        position: usize,
        sql: &str,
        word: &str,
    ) -> Result<CreateStatement> {
        if word == TERMINATOR {
            return builder.create();
        }
        let keyword = CreateKeyword::require(word)?;
        let clause = match_clause(keyword, word, position, sql, pattern_for)?;

        let builder = match keyword {
            CreateKeyword::Create => {
                let temporary = clause
                    .group(2)
                    .and_then(|kind| kind.split_whitespace().next())
                    .is_some_and(|first| first.eq_ignore_ascii_case("temporary"));
                builder
                    .set_create_str(clause.group(1).unwrap_or_default().trim())
                    .set_table_name(clause.group(3).unwrap_or_default())
                    .set_temporary(temporary)
            }
            CreateKeyword::OpenParen => {
                builder.set_field_str(clause.group(1).unwrap_or_default().trim())
            }
            CreateKeyword::CloseParen => match clause.trimmed(1) {
                Some(options) => builder.set_options_str(options),
                None => builder,
            },
            CreateKeyword::Like => builder.set_like_str(clause.group(1).unwrap_or_default().trim()),
            CreateKeyword::As => {
                let select = SelectParser.parse_sql(clause.group(1).unwrap_or_default().trim())?;
                builder.set_select_statement(select)
            }
            // No pattern; rejected by `match_clause`.
            CreateKeyword::Table | CreateKeyword::Field | CreateKeyword::Option => builder,
        };

        let next = clause.next_keyword().unwrap_or(TERMINATOR);
        self.parse_by_word(builder, clause.end(), sql, next)
    }
}
