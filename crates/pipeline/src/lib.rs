//! Pipeline for filtering, scoring and ranking catalog records.
//!
//! This crate provides:
//! - Filter trait and the genre filter
//! - FilterPipeline for composing filters
//! - Blended scoring against the actor rating index
//! - RankingEngine producing the ordered top-N list
//!
//! ## Architecture
//! Ranking is a two-phase process:
//! 1. Load the whole catalog and build its actor index (data-loader)
//! 2. Per request: filter by genre, score, sort, truncate (this crate)
//!
//! ## Example Usage
//! ```ignore
//! use data_loader::Catalog;
//! use pipeline::RankingEngine;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/films.csv"), 2014)?;
//! let top = RankingEngine::new(&catalog).rank("Action", 5)?;
//! for entry in &top {
//!     println!("{entry}");
//! }
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod scoring;
pub mod ranking;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use filters::{GenreFilter, GenreMatch};
pub use scoring::{actor_rating, blended_score};
pub use ranking::{rank, sort_entries, RankedEntry, RankingEngine, ScoredRecord};
