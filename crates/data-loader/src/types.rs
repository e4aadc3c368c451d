//! Core domain types for the film catalog.
//!
//! A catalog line carries twelve fields; only a handful drive ranking
//! (title, genres, cast, year, rating). The rest are kept so a record
//! round-trips the information it was loaded from.

use serde::{Deserialize, Serialize};

/// Opaque identifier from the first catalog column
pub type MovieId = String;

/// Release year of a film
pub type Year = u16;

/// One film from the catalog.
///
/// Records are created once by the parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: MovieId,
    pub title: String,
    /// Genres in the order the catalog declares them
    pub genres: Vec<String>,
    pub description: String,
    pub director: String,
    /// Actor names, trimmed, in billing order
    pub cast: Vec<String>,
    pub release_year: Year,
    pub runtime_minutes: Option<u32>,
    /// The film's own score; finite and non-negative
    pub rating: f64,
    pub votes: Option<u64>,
    /// Revenue in millions, blank for many films
    pub revenue: Option<f64>,
    pub metascore: Option<f64>,
}

impl MovieRecord {
    /// Whether `genre` is one of this film's genre tokens (exact, case-sensitive)
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }

    /// Genres re-joined the way the catalog stores them ("Action,Adventure")
    pub fn joined_genres(&self) -> String {
        self.genres.join(",")
    }
}
