//! Filter restricting candidates to a requested genre.
//!
//! Matching is a case-insensitive substring test of the filter text against
//! each genre literal, so "sci" keeps sci-fi movies. A filter that matches
//! no genre literal empties the candidate set.

use crate::context::{Candidate, RankingContext};
use crate::traits::Filter;
use anyhow::Result;
use catalog::Catalog;
use std::sync::Arc;

/// Keeps only candidates with a genre matching `context.genre_filter`.
/// Pass-through when no filter is set.
pub struct GenreFilter {
    catalog: Arc<Catalog>,
}

impl GenreFilter {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply(
        &self,
        candidates: Vec<Candidate>,
        context: &RankingContext,
    ) -> Result<Vec<Candidate>> {
        let Some(genre_filter) = context.genre_filter.as_deref() else {
            return Ok(candidates);
        };

        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| {
                self.catalog
                    .get_movie(candidate.movie_id)
                    .map(|movie| movie.matches_genre_fragment(genre_filter))
                    .unwrap_or(false) // Exclude if movie not found
            })
            .collect();
        Ok(filtered)
    }
}
