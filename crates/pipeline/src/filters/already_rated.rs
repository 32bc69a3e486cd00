//! Filter to remove movies the user has already rated.
//!
//! A movie counts as rated when its title appears anywhere in the user's
//! fact history, so this is applied before scoring.

use crate::context::{Candidate, RankingContext};
use crate::traits::Filter;
use anyhow::Result;

/// Removes candidates found in `context.signals.rated_movies`.
pub struct AlreadyRatedFilter;

impl Filter for AlreadyRatedFilter {
    fn name(&self) -> &str {
        "AlreadyRatedFilter"
    }

    fn apply(
        &self,
        candidates: Vec<Candidate>,
        context: &RankingContext,
    ) -> Result<Vec<Candidate>> {
        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| !context.signals.has_rated(candidate.movie_id))
            .collect();
        Ok(filtered)
    }
}
