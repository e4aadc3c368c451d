//! # Data Loader Crate
//!
//! This crate loads the semicolon-delimited film catalog and indexes it.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieRecord)
//! - **parser**: Parse catalog lines into records, skipping malformed ones
//! - **index**: ActorRatingIndex, each actor's best film rating
//! - **catalog**: Catalog, the record set together with its index
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//! use std::path::Path;
//!
//! // Load every film released in 2014 or later
//! let catalog = Catalog::load_from_file(Path::new("data/films.csv"), 2014)?;
//!
//! let best = catalog.actor_index().get("Chris Pratt");
//! println!("{} films, Chris Pratt peaks at {:?}", catalog.len(), best);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;
pub mod catalog;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{MovieId, MovieRecord, Year};
pub use parser::LoadReport;
pub use index::ActorRatingIndex;
pub use catalog::Catalog;
