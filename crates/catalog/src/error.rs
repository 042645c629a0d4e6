//! Error types for the catalog crate.
//!
//! Loading a catalog from disk can fail on I/O, on malformed JSON, or on
//! records that break the catalog invariants (unique ids, ratings within
//! 0.0-5.0, non-negative prices).

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building or loading a course catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be opened or read
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not a valid JSON course list
    #[error("Failed to parse catalog file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Two courses share the same id
    #[error("Duplicate course id: {0}")]
    DuplicateId(String),

    /// A course field had an invalid value
    #[error("Invalid value for {field} in course {course_id}: {value}")]
    InvalidValue {
        course_id: String,
        field: &'static str,
        value: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
