//! Ranking engine.
//!
//! Turns a catalog into an ordered top-N list:
//! 1. Keep records matching the genre request
//! 2. Score each survivor with its blended score
//! 3. Sort by score (highest first), then title (ascending)
//! 4. Truncate to the requested limit
//!
//! The actor index always comes from the whole catalog, never from the
//! genre-filtered subset.

use std::cmp::Ordering;
use std::fmt;

use anyhow::Result;
use data_loader::{ActorRatingIndex, Catalog, MovieRecord};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{GenreFilter, GenreMatch};
use crate::scoring::blended_score;

/// One line of a ranking result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub title: String,
    /// Full-precision blended score; round only when presenting
    pub score: f64,
}

impl RankedEntry {
    pub fn new(title: impl Into<String>, score: f64) -> Self {
        Self {
            title: title.into(),
            // Adding 0.0 turns -0.0 into 0.0 so equal scores tie on title
            score: score + 0.0,
        }
    }

    /// Score rounded to one decimal place, exactly as it is written out
    ///
    /// Example: 8.25 -> 8.2 (same digits as `Display`)
    pub fn rounded_score(&self) -> f64 {
        format!("{:.1}", self.score).parse().unwrap_or(self.score)
    }

    /// Ranking order: higher score first, then title by byte order
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        rank_order(self.score, &self.title, other.score, &other.title)
    }
}

/// A matching record with its blended score, before it is reduced to an entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredRecord<'a> {
    pub record: &'a MovieRecord,
    pub score: f64,
}

impl ScoredRecord<'_> {
    pub fn to_entry(&self) -> RankedEntry {
        RankedEntry::new(self.record.title.as_str(), self.score)
    }
}

/// Higher score first, then title by byte order.
///
/// Scores are compared numerically, so 0.0 and -0.0 tie.
fn rank_order(score_a: f64, title_a: &str, score_b: f64, title_b: &str) -> Ordering {
    score_b
        .partial_cmp(&score_a)
        .unwrap_or_else(|| score_b.total_cmp(&score_a))
        .then_with(|| title_a.cmp(title_b))
}

/// Renders as `"<title>, <score to one decimal>"`
impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {:.1}", self.title, self.score)
    }
}

/// Sort entries into ranking order.
///
/// The sort is stable, so duplicate titles with equal scores keep their
/// input order.
pub fn sort_entries(entries: &mut [RankedEntry]) {
    entries.sort_by(RankedEntry::rank_cmp);
}

/// Ranks records of one catalog against genre requests.
///
/// Holds only borrows; building an engine is free and it carries no state
/// between calls, so ranking the same request twice gives the same output.
#[derive(Debug, Clone, Copy)]
pub struct RankingEngine<'a> {
    records: &'a [MovieRecord],
    actor_index: &'a ActorRatingIndex,
    genre_match: GenreMatch,
}

impl<'a> RankingEngine<'a> {
    /// Engine over a loaded catalog and its prebuilt actor index
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::from_parts(catalog.records(), catalog.actor_index())
    }

    /// Engine over records and an index built from those same records
    pub fn from_parts(records: &'a [MovieRecord], actor_index: &'a ActorRatingIndex) -> Self {
        Self {
            records,
            actor_index,
            genre_match: GenreMatch::default(),
        }
    }

    /// Configure genre matching (default: exact token match)
    pub fn with_genre_match(mut self, genre_match: GenreMatch) -> Self {
        self.genre_match = genre_match;
        self
    }

    /// Rank the catalog.
    ///
    /// `genre_filter` is a comma-separated genre list, empty for all genres.
    /// `limit == 0` returns every matching film.
    #[instrument(skip(self), fields(catalog_size = self.records.len()))]
    pub fn rank(&self, genre_filter: &str, limit: usize) -> Result<Vec<RankedEntry>> {
        let entries: Vec<RankedEntry> = self
            .rank_records(genre_filter, limit)?
            .iter()
            .map(ScoredRecord::to_entry)
            .collect();

        info!("Ranked {} films", entries.len());
        Ok(entries)
    }

    /// Same ordering and truncation as [`rank`](Self::rank), keeping the records.
    ///
    /// The sort is stable: records with equal score and title stay in
    /// catalog order.
    pub fn rank_records(&self, genre_filter: &str, limit: usize) -> Result<Vec<ScoredRecord<'a>>> {
        let genre_filter = GenreFilter::parse(genre_filter).with_match(self.genre_match);
        let requested: Vec<&str> = genre_filter.requested().collect();
        debug!(genres = ?requested, "Filtering by genre");
        let pipeline = FilterPipeline::new().add_filter(genre_filter);

        let candidates = pipeline.apply(self.records.iter().collect())?;
        debug!("{} films match genre request", candidates.len());

        let mut scored: Vec<ScoredRecord<'a>> = candidates
            .into_iter()
            .map(|record| ScoredRecord {
                record,
                score: blended_score(record, self.actor_index) + 0.0,
            })
            .collect();

        scored.sort_by(|a, b| rank_order(a.score, &a.record.title, b.score, &b.record.title));
        if limit > 0 {
            scored.truncate(limit);
        }
        Ok(scored)
    }
}

/// Rank a record set in one call.
///
/// Builds the actor index from all of `records` first, then filters by
/// genre, scores, sorts and truncates.
pub fn rank(records: &[MovieRecord], genre_filter: &str, limit: usize) -> Result<Vec<RankedEntry>> {
    let actor_index = ActorRatingIndex::build(records);
    RankingEngine::from_parts(records, &actor_index).rank(genre_filter, limit)
}
