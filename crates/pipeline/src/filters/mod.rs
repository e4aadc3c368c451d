//! Filter implementations for the ranking pipeline.
//!
//! This module contains the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod genre;

// Re-export for convenience
pub use genre::{GenreFilter, GenreMatch};
