//! Filter implementations for the candidate pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod already_rated;
pub mod disliked_genre;
pub mod genre_filter;

// Re-export for convenience
pub use already_rated::AlreadyRatedFilter;
pub use disliked_genre::DislikedGenreFilter;
pub use genre_filter::GenreFilter;
