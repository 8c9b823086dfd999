//! Clause pattern table.
//!
//! Each clause of each statement kind is recognised by one case-insensitive
//! regular expression. A pattern exposes the clause payload through numbered
//! capture groups and, optionally, a *next-keyword* group: the literal text of
//! the keyword that follows the clause. The next-keyword group behaves as a
//! lookahead. It is reported to the parser but the scan resumes at its start,
//! so the following clause pattern sees its own keyword.
//!
//! Patterns are compiled once, on first use, and shared process-wide.

pub mod alter;
pub mod create;
pub mod insert;
pub mod select;

use regex::{Captures, Regex};

/// A compiled clause pattern.
#[derive(Debug)]
pub struct ClausePattern {
    regex: Regex,
    next: Option<usize>,
}

impl ClausePattern {
    /// Compile `source`. `next` is the index of the next-keyword group, if
    /// the clause is followed by one.
    ///
    /// Only called from the static pattern tables with literal sources.
    pub(crate) fn new(source: &str, next: Option<usize>) -> Self {
        let regex = Regex::new(source).expect("clause pattern must compile");
        ClausePattern { regex, next }
    }

    /// Find the first match starting at or after byte offset `start`.
    /// Word boundaries at `start` are judged against the full text.
    pub fn find_at<'t>(&self, text: &'t str, start: usize) -> Option<ClauseMatch<'t>> {
        if start > text.len() {
            return None;
        }
        self.regex
            .captures_at(text, start)
            .map(|captures| ClauseMatch {
                captures,
                next: self.next,
            })
    }

    /// Split `text` on every match of the pattern.
    pub fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.regex.split(text).collect()
    }
}

/// A successful clause match.
#[derive(Debug)]
pub struct ClauseMatch<'t> {
    captures: Captures<'t>,
    next: Option<usize>,
}

impl<'t> ClauseMatch<'t> {
    /// Capture group `index`, if it participated in the match.
    pub fn group(&self, index: usize) -> Option<&'t str> {
        self.captures.get(index).map(|m| m.as_str())
    }

    /// Capture group `index` trimmed, treating an empty capture as absent.
    pub fn trimmed(&self, index: usize) -> Option<&'t str> {
        self.group(index).map(str::trim).filter(|s| !s.is_empty())
    }

    /// Byte offset where the match starts.
    pub fn start(&self) -> usize {
        self.whole_match().start()
    }

    /// Continuation offset: the start of the next-keyword group when the
    /// pattern has one, otherwise the end of the match.
    pub fn end(&self) -> usize {
        self.next
            .and_then(|index| self.captures.get(index))
            .map_or_else(|| self.whole_match().end(), |m| m.start())
    }

    /// The matched text, excluding the next-keyword lookahead.
    pub fn text(&self) -> &'t str {
        let whole = self.whole_match();
        &whole.as_str()[..self.end() - whole.start()]
    }

    /// The literal next keyword captured by the lookahead group.
    pub fn next_keyword(&self) -> Option<&'t str> {
        self.next.and_then(|index| self.group(index))
    }

    fn whole_match(&self) -> regex::Match<'t> {
        // Group 0 is always present in a successful match.
        self.captures
            .get(0)
            .expect("group 0 is present in every match")
    }
}
