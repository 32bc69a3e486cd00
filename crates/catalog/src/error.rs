//! Error types for the catalog crate.
//!
//! Only catalog construction can fail. Once a `Catalog` exists every
//! lookup is infallible and returns `Option` or a (possibly empty) list.

use thiserror::Error;

use crate::types::MovieId;

/// Errors that can occur while building or loading a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading a catalog file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Catalog file is not a JSON array of movies
    #[error("Failed to parse catalog JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Two entries share the same id
    #[error("Duplicate movie id {id}")]
    DuplicateId { id: MovieId },

    /// A movie field had an invalid value
    #[error("Invalid value for {field} of movie {id}: {value}")]
    InvalidValue {
        id: MovieId,
        field: String,
        value: String,
    },

    /// Genre literal outside the closed genre set
    #[error("Unknown genre: {0}")]
    UnknownGenre(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
