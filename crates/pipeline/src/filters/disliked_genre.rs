//! Filter vetoing movies in a disliked genre.
//!
//! The veto is unconditional: one disliked genre removes the movie no
//! matter how many liked genres it also carries.

use crate::context::{Candidate, RankingContext};
use crate::traits::Filter;
use anyhow::Result;
use catalog::Catalog;
use std::sync::Arc;

/// Removes candidates sharing any genre with `context.signals.disliked_genres`.
pub struct DislikedGenreFilter {
    catalog: Arc<Catalog>,
}

impl DislikedGenreFilter {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl Filter for DislikedGenreFilter {
    fn name(&self) -> &str {
        "DislikedGenreFilter"
    }

    fn apply(
        &self,
        candidates: Vec<Candidate>,
        context: &RankingContext,
    ) -> Result<Vec<Candidate>> {
        if context.signals.disliked_genres.is_empty() {
            return Ok(candidates);
        }

        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| match self.catalog.get_movie(candidate.movie_id) {
                Some(movie) => !movie
                    .genres
                    .iter()
                    .any(|genre| context.signals.dislikes(*genre)),
                None => false,
            })
            .collect();
        Ok(filtered)
    }
}
