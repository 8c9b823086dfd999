//! Parsed statement types.
//!
//! A parser never exposes half-built results. Clause fragments are collected
//! in a per-call builder (the staging accumulator) which is moved through the
//! parse, one clause at a time, and consumed by [`Builder::create`] into an
//! immutable statement. Statements are only ever combined through
//! [`Merge::merge`], which returns a new value and leaves both inputs intact.
//!
//! # Key types
//!
//! - [`Statement`]: keyed, read-only access shared by all four kinds.
//! - [`SelectStatement`], [`CreateStatement`], [`InsertStatement`],
//!   [`AlterStatement`]: the per-kind results and their builders.

pub mod alter;
pub mod create;
pub mod insert;
pub mod select;

pub use alter::{AddTarget, AlterMode, AlterStatement, AlterStatementBuilder};
pub use create::{CreateStatement, CreateStatementBuilder};
pub use insert::{InsertStatement, InsertStatementBuilder};
pub use select::{SelectStatement, SelectStatementBuilder, SortOrder};

use std::fmt;

use crate::error::Result;
use crate::keyword::Keyword;

/// Read access common to every parsed statement.
pub trait Statement: fmt::Display {
    /// The classifier that routes keyed lookups for this kind.
    type Keyword: Keyword;

    /// Name of the table the statement acts on.
    fn table_name(&self) -> &str;

    /// The statement's fields, in source order. Empty when there are none.
    fn field_names(&self) -> &[String];

    /// The statement text: the parsed input, or a canonical rendering for
    /// statements that were built or merged rather than parsed.
    fn sql(&self) -> &str;

    /// The clause text stored under `word`. `Ok(None)` means the clause is
    /// absent from this statement.
    fn get_by_keyword(&self, word: &str) -> Result<Option<String>>;

    /// The clause stored under `word`, split into its elements.
    fn get_array_by_keyword(&self, word: &str) -> Result<Vec<String>>;
}

/// The staging accumulator of one parse call.
pub trait Builder: Default {
    type Product;

    /// Finalize into an immutable statement. Unset optional clauses become
    /// `None`; a missing structural field is [`ParseError::Incomplete`].
    ///
    /// [`ParseError::Incomplete`]: crate::error::ParseError::Incomplete
    fn create(self) -> Result<Self::Product>;
}

/// Non-destructive field filling.
pub trait Merge {
    /// A new statement holding `self`'s clauses, with every clause that is
    /// unset in `self` filled from `other`.
    fn merge(&self, other: &Self) -> Self;
}

// ===========================================================================
// Shared helpers
// ===========================================================================

/// Split a comma-separated list, trimming each element. A blank input is an
/// empty list.
pub(crate) fn split_list(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }
    text.split(',').map(|item| item.trim().to_string()).collect()
}

/// Split on runs of whitespace.
pub(crate) fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// `Some(text)` as a one-element list, `None` as an empty one.
pub(crate) fn single(text: Option<&str>) -> Vec<String> {
    text.map(|t| vec![t.to_string()]).unwrap_or_default()
}

/// `this` if set, otherwise `other`.
pub(crate) fn fill(this: &Option<String>, other: &Option<String>) -> Option<String> {
    this.as_ref().or(other.as_ref()).cloned()
}
