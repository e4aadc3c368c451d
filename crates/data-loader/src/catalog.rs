//! The loaded catalog: all records plus the actor index built from them.
//!
//! Loading is the first phase of every ranking request. The index is built
//! here, once, from the complete record set; later phases only read it.

use crate::error::Result;
use crate::index::ActorRatingIndex;
use crate::parser::{self, LoadReport};
use crate::types::{MovieRecord, Year};
use std::path::Path;

/// Immutable record set with its actor rating index.
///
/// Records cannot be changed through a `Catalog`, so the cached index always
/// matches the data it was built from.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<MovieRecord>,
    actor_index: ActorRatingIndex,
    report: LoadReport,
}

impl Catalog {
    /// Wrap an already-parsed record set and index it
    pub fn from_records(records: Vec<MovieRecord>) -> Self {
        let actor_index = ActorRatingIndex::build(&records);
        let report = LoadReport {
            accepted: records.len(),
            ..LoadReport::default()
        };
        Self {
            records,
            actor_index,
            report,
        }
    }

    /// Load a catalog file, keeping films released in `min_year` or later
    pub fn load_from_file(path: &Path, min_year: Year) -> Result<Self> {
        let (records, report) = parser::read_records(path, min_year)?;
        Ok(Self::with_report(records, report))
    }

    /// Parse a catalog held in memory
    pub fn load_from_str(content: &str, min_year: Year) -> Result<Self> {
        let (records, report) = parser::parse_str(content, min_year)?;
        Ok(Self::with_report(records, report))
    }

    fn with_report(records: Vec<MovieRecord>, report: LoadReport) -> Self {
        let actor_index = ActorRatingIndex::build(&records);
        Self {
            records,
            actor_index,
            report,
        }
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn actor_index(&self) -> &ActorRatingIndex {
        &self.actor_index
    }

    /// Counters from the load that produced this catalog
    pub fn report(&self) -> LoadReport {
        self.report
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
