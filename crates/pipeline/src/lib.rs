//! Pipeline for filtering and scoring movie candidates.
//!
//! This crate provides:
//! - Filter trait and implementations for candidate filtering
//! - FilterPipeline for composing filters
//! - Scorer and `rank` for ordering what survives
//!
//! ## Architecture
//! A personalized request processes the catalog in stages:
//! 1. Filters remove unwanted candidates (wrong genre, already rated, disliked genre)
//! 2. Scorer computes a score and a reason for each remaining candidate
//! 3. `rank` sorts by score and keeps the top N
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterPipeline, RankingContext, Scorer, rank};
//! use pipeline::filters::*;
//!
//! let pipeline = FilterPipeline::new()
//!     .add_filter(GenreFilter::new(catalog.clone()))
//!     .add_filter(AlreadyRatedFilter)
//!     .add_filter(DislikedGenreFilter::new(catalog.clone()));
//!
//! let filtered = pipeline.apply(candidates, &context)?;
//! let scored = Scorer::new(catalog.clone()).score(filtered, &context)?;
//! let top = rank(scored, 5);
//! ```

pub mod context;
pub mod filter_pipeline;
pub mod filters;
pub mod scoring;
pub mod traits;

// Re-export main types
pub use context::{normalize_genre_filter, Candidate, RankingContext};
pub use filter_pipeline::FilterPipeline;
pub use scoring::{rank, Scorer, ScoringConfig};
pub use traits::Filter;
