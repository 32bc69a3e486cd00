//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::context::{Candidate, RankingContext};
use crate::traits::Filter;
use anyhow::Result;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(GenreFilter::new(catalog.clone()))
///     .add_filter(AlreadyRatedFilter)
///     .add_filter(DislikedGenreFilter::new(catalog.clone()));
///
/// let filtered = pipeline.apply(candidates, &context)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// # Returns
    /// * `Ok(Vec<Candidate>)` - The filtered candidates after all filters
    /// * `Err` - If any filter fails
    pub fn apply(
        &self,
        candidates: Vec<Candidate>,
        context: &RankingContext,
    ) -> Result<Vec<Candidate>> {
        let mut current = candidates;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, context)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{AlreadyRatedFilter, DislikedGenreFilter};
    use catalog::{Catalog, Genre};
    use std::sync::Arc;

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let context = RankingContext::default();

        let candidates = vec![Candidate::new(1), Candidate::new(2)];

        let filtered = pipeline.apply(candidates, &context).unwrap();
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_single_filter() {
        let mut context = RankingContext::default();
        context.signals.rated_movies.insert(1);

        let pipeline = FilterPipeline::new().add_filter(AlreadyRatedFilter);

        let candidates = vec![Candidate::new(1), Candidate::new(2)];

        let filtered = pipeline.apply(candidates, &context).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].movie_id, 2);
    }

    #[test]
    fn test_filters_run_in_order() {
        let catalog = Arc::new(Catalog::builtin());
        let mut context = RankingContext::default();
        context.signals.rated_movies.insert(8);
        context.signals.disliked_genres.push(Genre::Horror);

        let pipeline = FilterPipeline::new()
            .add_filter(AlreadyRatedFilter)
            .add_filter(DislikedGenreFilter::new(catalog));
        assert_eq!(
            pipeline.filter_names(),
            vec!["AlreadyRatedFilter", "DislikedGenreFilter"]
        );

        // Inception (rated), Get Out (horror), Parasite (kept)
        let candidates = vec![Candidate::new(8), Candidate::new(12), Candidate::new(10)];
        let filtered = pipeline.apply(candidates, &context).unwrap();
        assert_eq!(filtered, vec![Candidate::new(10)]);
    }
}
