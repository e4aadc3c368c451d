//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a catalog's records.

use anyhow::Result;
use data_loader::MovieRecord;

/// Core trait for filtering records.
///
/// All filters must implement this trait to be used in the FilterPipeline.
/// Filters work on borrowed records: the catalog keeps ownership, and a
/// filter only decides which references survive.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of records.
    ///
    /// # Arguments
    /// * `records` - The records to filter (takes ownership of the Vec)
    ///
    /// # Returns
    /// * `Ok(Vec<&MovieRecord>)` - The surviving records, in input order
    /// * `Err` - If filtering fails
    fn apply<'a>(&self, records: Vec<&'a MovieRecord>) -> Result<Vec<&'a MovieRecord>>;
}
