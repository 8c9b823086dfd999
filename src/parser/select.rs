//! SELECT parser.

use super::{match_clause, subquery, SqlParser};
use crate::error::Result;
use crate::keyword::{Keyword, SelectKeyword, StatementKind, TERMINATOR};
use crate::pattern::select::pattern_for;
use crate::statement::{Builder, SelectStatement, SelectStatementBuilder};

/// Parses `select <fields> from <tables> [where|on ...] [group by ...]
/// [order by ... [asc|desc]] [limit ...];`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectParser;

impl SqlParser for SelectParser {
    type Statement = SelectStatement;
    type Builder = SelectStatementBuilder;

    fn kind(&self) -> StatementKind {
        StatementKind::Select
    }

    fn parse_sql(&self, sql: &str) -> Result<SelectStatement> {
        let builder = SelectStatementBuilder::default().set_sql(sql);
        self.parse_by_word(builder, 0, sql, StatementKind::Select.name())
    }

    fn parse_by_word(
        &self,
        builder: SelectStatementBuilder,
        position: usize,
        sql: &str,
        word: &str,
    ) -> Result<SelectStatement> {
        if word == TERMINATOR {
            return builder.create();
        }
        let keyword = SelectKeyword::require(word)?;
        if keyword == SelectKeyword::Subquery {
            return subquery::resolve(self, builder, position, sql);
        }

        let clause = match_clause(keyword, word, position, sql, pattern_for)?;
        let payload = clause.group(1).unwrap_or_default().trim();
        let builder = match keyword {
            SelectKeyword::Select => builder
                .set_select_str(payload)
                .set_table_name(clause.group(2).unwrap_or_default().trim()),
            SelectKeyword::Where => builder.set_where_str(payload),
            SelectKeyword::Group => builder.set_group_str(payload),
            SelectKeyword::Order => {
                let descending = clause
                    .group(2)
                    .is_some_and(|direction| direction.eq_ignore_ascii_case("desc"));
                builder.set_order_str(payload).set_ascending(!descending)
            }
            SelectKeyword::Limit => builder.set_limit_str(payload),
            // Rejected by `match_clause` or handled above.
            SelectKeyword::From | SelectKeyword::Subquery => builder,
        };

        let next = clause.next_keyword().unwrap_or(TERMINATOR);
        self.parse_by_word(builder, clause.end(), sql, next)
    }
}
