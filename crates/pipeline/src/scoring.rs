//! Scoring and ranking of filtered candidates.
//!
//! Score of a candidate:
//!
//! ```text
//! score = rating / rating_scale                   (0.0 - 1.0)
//!       + liked_genre_bonus   if any genre is liked
//! ```
//!
//! Disliked genres never reach the scorer; `DislikedGenreFilter` removes
//! them first.

use crate::context::{Candidate, RankingContext};
use anyhow::{Context, Result};
use catalog::{join_genres, Catalog, Genre, Movie};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::sync::Arc;

/// Weights used by the `Scorer`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    /// Added once when the movie shares at least one genre with the liked set
    pub liked_genre_bonus: f32,
    /// Baseline ratings are divided by this to land in 0..=1
    pub rating_scale: f32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            liked_genre_bonus: 0.5,
            rating_scale: 10.0,
        }
    }
}

/// Scores candidates and attaches a reason to each.
#[derive(Clone)]
pub struct Scorer {
    catalog: Arc<Catalog>,
    config: ScoringConfig,
}

impl Scorer {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_config(catalog, ScoringConfig::default())
    }

    pub fn with_config(catalog: Arc<Catalog>, config: ScoringConfig) -> Self {
        Self { catalog, config }
    }

    pub fn config(&self) -> ScoringConfig {
        self.config
    }

    /// Score all candidates in parallel.
    ///
    /// The output keeps the input order, so ranking ties stay deterministic.
    pub fn score(
        &self,
        candidates: Vec<Candidate>,
        context: &RankingContext,
    ) -> Result<Vec<Candidate>> {
        candidates
            .into_par_iter()
            .map(|candidate| self.score_single(candidate, context))
            .collect()
    }

    fn score_single(&self, mut candidate: Candidate, context: &RankingContext) -> Result<Candidate> {
        let movie = self
            .catalog
            .get_movie(candidate.movie_id)
            .with_context(|| format!("Candidate {} is not in the catalog", candidate.movie_id))?;

        candidate.score = movie.rating / self.config.rating_scale;

        let liked = liked_overlap(movie, context);
        candidate.reason = if liked.is_empty() {
            default_reason(context.genre_filter.as_deref())
        } else {
            candidate.score += self.config.liked_genre_bonus;
            format!("You like {}", join_genres(&liked))
        };

        Ok(candidate)
    }
}

/// The movie's liked genres, in the movie's own genre order
fn liked_overlap(movie: &Movie, context: &RankingContext) -> Vec<Genre> {
    movie
        .genres
        .iter()
        .copied()
        .filter(|genre| context.signals.likes(*genre))
        .collect()
}

fn default_reason(genre_filter: Option<&str>) -> String {
    match genre_filter {
        Some(filter) => format!("Highly rated {} movie", filter),
        None => "Highly rated movie".to_string(),
    }
}

/// Stable sort by score descending, then keep the first `limit`.
///
/// Equal scores keep their incoming order.
pub fn rank(mut candidates: Vec<Candidate>, limit: usize) -> Vec<Candidate> {
    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    candidates.truncate(limit);
    candidates
}
