//! Document search (literal or regex, case-insensitive by default)

use crate::domain::position::CharCounter;
use crate::error::{ParmdError, Result};
use regex::RegexBuilder;

/// What to look for
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub term: String,
    /// Treat `term` as a regular expression
    pub regex: bool,
    pub case_sensitive: bool,
}

impl SearchQuery {
    pub fn literal(term: &str) -> Self {
        SearchQuery {
            term: term.to_string(),
            ..Default::default()
        }
    }

    pub fn regex(term: &str) -> Self {
        SearchQuery {
            term: term.to_string(),
            regex: true,
            ..Default::default()
        }
    }
}

/// A match as a character range, `end` exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub start: usize,
    pub end: usize,
}

/// Find every non-empty, non-overlapping match of `query` in `text`.
///
/// An invalid user pattern is reported as `InvalidPattern`.
pub fn find_matches(text: &str, query: &SearchQuery) -> Result<Vec<Match>> {
    if query.term.is_empty() {
        return Ok(Vec::new());
    }

    let pattern = if query.regex {
        query.term.clone()
    } else {
        regex::escape(&query.term)
    };

    let regex = RegexBuilder::new(&pattern)
        .case_insensitive(!query.case_sensitive)
        .build()
        .map_err(|e| ParmdError::InvalidPattern(e.to_string()))?;

    let mut counter = CharCounter::new(text);
    let matches = regex
        .find_iter(text)
        .filter(|found| !found.is_empty())
        .map(|found| Match {
            start: counter.char_offset(found.start()),
            end: counter.char_offset(found.end()),
        })
        .collect();

    Ok(matches)
}

/// Matches with a wrap-around cursor for next/previous navigation
#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    matches: Vec<Match>,
    current: Option<usize>,
}

impl SearchResults {
    pub fn new(matches: Vec<Match>) -> Self {
        SearchResults {
            matches,
            current: None,
        }
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Index of the selected match
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Advance to the next match, wrapping to the first
    pub fn next(&mut self) -> Option<Match> {
        if self.matches.is_empty() {
            return None;
        }
        let idx = match self.current {
            Some(current) => (current + 1) % self.matches.len(),
            None => 0,
        };
        self.current = Some(idx);
        Some(self.matches[idx])
    }

    /// Step back to the previous match, wrapping to the last
    pub fn prev(&mut self) -> Option<Match> {
        if self.matches.is_empty() {
            return None;
        }
        let len = self.matches.len();
        let idx = match self.current {
            Some(current) => (current + len - 1) % len,
            None => len - 1,
        };
        self.current = Some(idx);
        Some(self.matches[idx])
    }
}
