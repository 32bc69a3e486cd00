//! # Catalog Crate
//!
//! The static movie catalog shared by the rating recorder and the
//! recommendation ranker.
//!
//! ## Main Components
//!
//! - **types**: `Movie`, `Genre`, `MovieId`
//! - **builtin**: the fixed 50-movie table
//! - **index**: `Catalog`, the ordered table with title/series/genre lookups
//! - **error**: errors raised while building or loading a catalog
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(Catalog::builtin());
//! let matrix = catalog.find_by_title("matrix").unwrap();
//! let series = catalog.series_members(matrix.series.as_deref().unwrap());
//! assert_eq!(series.len(), 4);
//! ```

pub mod builtin;
pub mod index;
pub mod error;
pub mod types;

// Re-export commonly used types for convenience
pub use index::Catalog;
pub use error::{CatalogError, Result};
pub use types::{join_genres, Genre, Movie, MovieId};
