//! Actor rating index.
//!
//! Maps every actor in a catalog to the highest rating among the films they
//! appear in. The index must be built from the complete record set, before
//! any genre filtering, so an actor's score does not depend on the request.

use crate::types::MovieRecord;
use std::collections::HashMap;
use std::collections::hash_map;

/// Highest film rating per actor name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActorRatingIndex {
    best_rating: HashMap<String, f64>,
}

impl ActorRatingIndex {
    /// Creates a new, empty index
    pub fn new() -> Self {
        Self {
            best_rating: HashMap::new(),
        }
    }

    /// Build the index from a full record set.
    ///
    /// Runs in O(total cast appearances); the result does not depend on record order.
    pub fn build(records: &[MovieRecord]) -> Self {
        let mut index = Self::new();
        for record in records {
            index.insert_record(record);
        }
        index
    }

    /// Fold one record's rating into the entries of its cast
    pub fn insert_record(&mut self, record: &MovieRecord) {
        for actor in &record.cast {
            let actor = actor.trim();
            if actor.is_empty() {
                continue;
            }
            let best = self.best_rating.entry(actor.to_string()).or_insert(0.0);
            *best = best.max(record.rating);
        }
    }

    /// Highest rating for an actor, if the actor appears anywhere in the catalog
    pub fn get(&self, actor: &str) -> Option<f64> {
        self.best_rating.get(actor.trim()).copied()
    }

    /// Number of distinct actors
    pub fn len(&self) -> usize {
        self.best_rating.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best_rating.is_empty()
    }

    /// Iterate over `(actor, highest rating)` pairs in arbitrary order
    pub fn iter(&self) -> hash_map::Iter<'_, String, f64> {
        self.best_rating.iter()
    }
}

impl<'a> FromIterator<&'a MovieRecord> for ActorRatingIndex {
    fn from_iter<I: IntoIterator<Item = &'a MovieRecord>>(iter: I) -> Self {
        let mut index = Self::new();
        for record in iter {
            index.insert_record(record);
        }
        index
    }
}
