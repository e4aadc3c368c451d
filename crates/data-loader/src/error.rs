//! Error types for the data-loader crate.
//!
//! Two kinds of failure matter to callers:
//! - a missing or unreadable catalog file, which is fatal
//! - a malformed data line, which the loader recovers from by skipping it

use thiserror::Error;

/// Errors that can occur during catalog loading and parsing
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// Catalog file could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in the catalog couldn't be parsed
    #[error("Parse error at line {line}: {reason}")]
    ParseError { line: usize, reason: String },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Expected number of fields in a line doesn't match actual
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },
}

impl DataLoadError {
    /// True for errors that only affect a single record.
    ///
    /// The loader skips such lines and keeps going; everything else aborts the load.
    pub fn is_malformed_record(&self) -> bool {
        matches!(
            self,
            DataLoadError::ParseError { .. }
                | DataLoadError::InvalidValue { .. }
                | DataLoadError::FieldCountMismatch { .. }
        )
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
