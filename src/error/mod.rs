//! Unified error handling for sqlclause.
//!
//! This module defines [`ParseError`], the single error type propagated by
//! every parser, builder and accessor in the crate. Every failure is fatal
//! for the call that produced it: no partially populated statement is ever
//! handed back to the caller.
//!
//! A convenience [`Result<T>`] type alias is re-exported so that callers can
//! write `Result<T>` instead of `std::result::Result<T, ParseError>`.

use thiserror::Error;

use crate::keyword::StatementKind;

/// The canonical error type for all sqlclause operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The clause introduced by `keyword` could not be located at or after
    /// `position`. `remainder` holds the unparsed tail of the input.
    #[error("cannot match {kind} `{keyword}` clause at offset {position}: {remainder:?}")]
    ClauseMismatch {
        kind: StatementKind,
        keyword: String,
        position: usize,
        remainder: String,
    },

    /// The keyword has no dispatch class, or its class has no clause
    /// pattern / accessor for this statement kind.
    #[error("unknown {kind} keyword: {keyword:?}")]
    UnknownKeyword { kind: StatementKind, keyword: String },

    /// A builder was finalized before a structurally required field was set.
    #[error("incomplete {kind} statement: missing {missing}")]
    Incomplete {
        kind: StatementKind,
        missing: &'static str,
    },

    /// No parser is registered under the requested name.
    #[error("no parser registered as {0:?}")]
    UnknownParser(String),

    /// An internal invariant was violated (e.g. a poisoned registry lock).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ParseError {
    /// Build a [`ParseError::ClauseMismatch`] for `keyword`, capturing the
    /// text that remained unparsed from `position` onwards.
    pub(crate) fn clause_mismatch(
        kind: StatementKind,
        keyword: &str,
        position: usize,
        sql: &str,
    ) -> Self {
        ParseError::ClauseMismatch {
            kind,
            keyword: keyword.to_string(),
            position,
            remainder: sql.get(position..).unwrap_or_default().to_string(),
        }
    }

    pub(crate) fn unknown_keyword(kind: StatementKind, keyword: &str) -> Self {
        ParseError::UnknownKeyword {
            kind,
            keyword: keyword.to_string(),
        }
    }
}

/// A specialised [`Result`] type for sqlclause operations.
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clause_mismatch_keeps_remainder() {
        let err = ParseError::clause_mismatch(StatementKind::Select, "where", 9, "select a where;");
        match err {
            ParseError::ClauseMismatch { position, ref remainder, .. } => {
                assert_eq!(position, 9);
                assert_eq!(remainder, "where;");
            }
            other => panic!("expected ClauseMismatch, got {other:?}"),
        }
    }

    #[test]
    fn clause_mismatch_past_end_has_empty_remainder() {
        let err = ParseError::clause_mismatch(StatementKind::Alter, "drop", 99, "alter table t;");
        assert!(matches!(err, ParseError::ClauseMismatch { ref remainder, .. } if remainder.is_empty()));
    }

    #[test]
    fn display_messages_are_human_readable() {
        let cases: Vec<(ParseError, &str)> = vec![
            (
                ParseError::unknown_keyword(StatementKind::Insert, "update"),
                "unknown insert keyword: \"update\"",
            ),
            (
                ParseError::Incomplete {
                    kind: StatementKind::Alter,
                    missing: "mode",
                },
                "incomplete alter statement: missing mode",
            ),
            (
                ParseError::UnknownParser("merge".into()),
                "no parser registered as \"merge\"",
            ),
            (
                ParseError::Internal("registry lock poisoned".into()),
                "internal error: registry lock poisoned",
            ),
            (
                ParseError::clause_mismatch(StatementKind::Create, "like", 0, "x;"),
                "cannot match create `like` clause at offset 0: \"x;\"",
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected);
        }
    }
}
