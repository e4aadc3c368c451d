//! Filter to keep only films in at least one requested genre.
//!
//! The request is a comma-separated list such as `"Action,Sci-Fi"`.
//! Tokens are trimmed and matched case-sensitively.

use crate::traits::Filter;
use anyhow::Result;
use data_loader::MovieRecord;
use std::collections::BTreeSet;

/// How a requested genre token is compared against a film's genres
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GenreMatch {
    /// The token equals one of the film's genre tokens
    #[default]
    Exact,
    /// The token occurs anywhere in the film's comma-joined genre string,
    /// so "Sci" matches "Sci-Fi". Opt-in only.
    Substring,
}

/// Keeps records whose genres intersect the requested set (any-match).
///
/// An empty request passes every record through unchanged.
#[derive(Debug, Clone, Default)]
pub struct GenreFilter {
    requested: BTreeSet<String>,
    mode: GenreMatch,
}

impl GenreFilter {
    /// Build a filter from the raw request string
    ///
    /// Example: " Action, Sci-Fi ," -> {"Action", "Sci-Fi"}
    pub fn parse(genre_filter: &str) -> Self {
        let requested = genre_filter
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            requested,
            mode: GenreMatch::Exact,
        }
    }

    /// Switch the comparison mode (builder pattern)
    pub fn with_match(mut self, mode: GenreMatch) -> Self {
        self.mode = mode;
        self
    }

    /// Requested tokens in sorted order
    pub fn requested(&self) -> impl Iterator<Item = &str> {
        self.requested.iter().map(String::as_str)
    }

    /// True when the request names no genre at all
    pub fn is_unrestricted(&self) -> bool {
        self.requested.is_empty()
    }

    /// Whether a single record passes
    pub fn matches(&self, record: &MovieRecord) -> bool {
        if self.is_unrestricted() {
            return true;
        }
        match self.mode {
            GenreMatch::Exact => self.requested.iter().any(|token| record.has_genre(token)),
            GenreMatch::Substring => {
                let joined = record.joined_genres();
                self.requested.iter().any(|token| joined.contains(token.as_str()))
            }
        }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply<'a>(&self, records: Vec<&'a MovieRecord>) -> Result<Vec<&'a MovieRecord>> {
        if self.is_unrestricted() {
            return Ok(records);
        }
        let filtered: Vec<&MovieRecord> = records
            .into_iter()
            .filter(|record| self.matches(record))
            .collect();
        Ok(filtered)
    }
}
