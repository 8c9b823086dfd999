//! Subquery resolution for the SELECT table region.
//!
//! When the table region of a SELECT ends at `(`, every parenthesised
//! `(select ... ;)` span that follows is parsed as a statement of its own.
//! Each resolved subquery is recorded on the outer builder and its table name
//! is appended to the outer table region, joined by whatever text separated
//! it from the previous span (`join`, a comma, ...). The outer parse then
//! resumes at the first clause keyword after the last span.
//!
//! Spans are found by a non-nesting pattern: a subquery that itself contains
//! a parenthesised subquery is cut at the first `;)`.

use log::debug;

use super::{SelectParser, SqlParser};
use crate::error::{ParseError, Result};
use crate::keyword::{StatementKind, TERMINATOR};
use crate::pattern::select::{CONTINUATION, SUB_QUERY};
use crate::statement::{SelectStatement, SelectStatementBuilder, Statement};

/// Text that replaces the first resolved subquery span in the working copy
/// of the statement.
pub const SUB_QUERY_PLACEHOLDER: &str = "SUB_QUERY";

/// Resolve the subqueries at or after `position` and continue the outer
/// parse after them.
pub(crate) fn resolve(
    parser: &SelectParser,
    mut builder: SelectStatementBuilder,
    position: usize,
    sql: &str,
) -> Result<SelectStatement> {
    let spans = find_spans(sql, position);
    let (Some(&(first_start, first_end)), Some(&(_, last_end))) = (spans.first(), spans.last())
    else {
        return Err(ParseError::clause_mismatch(
            StatementKind::Select,
            "(",
            position,
            sql,
        ));
    };

    let mut previous_end = None;
    for &(start, end) in &spans {
        let span = &sql[start..end];
        // Skip the opening parenthesis; the span ends with its own `;)`.
        let sub_query = parser.parse_by_word(
            SelectStatementBuilder::default(),
            1,
            span,
            StatementKind::Select.name(),
        )?;
        debug!(
            "resolved subquery at offset {} on table {:?}",
            start,
            sub_query.table_name()
        );
        let separator = previous_end.map_or("", |previous| &sql[previous..start]);
        builder = builder
            .add_table_name(separator, sub_query.table_name())
            .add_sub_query(sub_query);
        previous_end = Some(end);
    }

    let rewritten = format!(
        "{}{}{}",
        &sql[..first_start],
        SUB_QUERY_PLACEHOLDER,
        &sql[first_end..]
    );
    let resume = last_end + SUB_QUERY_PLACEHOLDER.len() - (first_end - first_start);
    let continuation = CONTINUATION
        .find_at(&rewritten, resume)
        .ok_or_else(|| ParseError::clause_mismatch(StatementKind::Select, "(", resume, &rewritten))?;
    let next = continuation.next_keyword().unwrap_or(TERMINATOR);
    parser.parse_by_word(builder, continuation.end(), &rewritten, next)
}

/// Byte ranges of consecutive subquery spans. The first span must open at
/// `position`, after optional whitespace. Collection stops at the first span
/// preceded by a clause keyword, which belongs to a later clause.
fn find_spans(sql: &str, position: usize) -> Vec<(usize, usize)> {
    let mut spans: Vec<(usize, usize)> = Vec::new();
    let mut cursor = position;
    while let Some(span) = SUB_QUERY.find_at(sql, cursor) {
        match spans.last() {
            Some(&(_, previous_end)) => {
                let gap = &sql[previous_end..span.start()];
                if CONTINUATION.find_at(gap, 0).is_some() {
                    break;
                }
            }
            None if !sql[position..span.start()].trim().is_empty() => break,
            None => {}
        }
        spans.push((span.start(), span.end()));
        cursor = span.end();
    }
    spans
}
