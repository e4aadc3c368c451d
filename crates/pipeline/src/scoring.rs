//! Blended score computation.
//!
//! A film's blended score is the mean of its own rating and its actor
//! rating, where the actor rating averages each cast member's best rating
//! anywhere in the catalog.

use data_loader::{ActorRatingIndex, MovieRecord};

/// Mean of the index entries for the film's cast.
///
/// Cast members missing from the index are left out of the mean. When no
/// cast member resolves (or the cast is empty) the film's own rating is used.
pub fn actor_rating(record: &MovieRecord, index: &ActorRatingIndex) -> f64 {
    let (total, resolved) = record
        .cast
        .iter()
        .filter_map(|actor| index.get(actor))
        .fold((0.0, 0usize), |(total, count), rating| (total + rating, count + 1));

    if resolved == 0 {
        record.rating
    } else {
        total / resolved as f64
    }
}

/// `(rating + actor_rating) / 2`, at full precision
pub fn blended_score(record: &MovieRecord, index: &ActorRatingIndex) -> f64 {
    (record.rating + actor_rating(record, index)) / 2.0
}
