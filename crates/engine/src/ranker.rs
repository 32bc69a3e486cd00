//! # Recommendation Ranker
//!
//! A pure function of (fact text, count, genre filter) and the catalog.
//!
//! - **Cold start** (empty fact text): highest baseline ratings in the
//!   genre-filtered pool, no personalization.
//! - **Personalized**: signals extracted from the text drive three filters
//!   (genre, already rated, disliked-genre veto), then the scorer adds a
//!   bonus for liked genres and the top `count` are returned.
//!
//! Ties always keep catalog order, so repeated calls return identical output.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use catalog::{Catalog, Genre, MovieId};
use pipeline::filters::{AlreadyRatedFilter, DislikedGenreFilter, GenreFilter};
use pipeline::{rank, Candidate, FilterPipeline, RankingContext, Scorer, ScoringConfig};
use preferences::PreferenceSignals;

/// One recommended movie
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub movie_id: MovieId,
    pub title: String,
    pub year: u16,
    pub genres: Vec<Genre>,
    /// Baseline catalog rating (0-10)
    pub rating: f32,
    pub reason: String,
}

/// Diagnostics for a cold-start answer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColdStartInfo {
    pub note: String,
    pub total_movies: usize,
    pub filtered_movies: usize,
    pub genre_filter: Option<String>,
}

/// What personalization was applied
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalizationFactors {
    pub liked_genres: Vec<Genre>,
    pub disliked_genres: Vec<Genre>,
    /// Catalog movies excluded because their title appears in the history
    pub rated_movies_count: usize,
    pub genre_filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecommendationBasis {
    ColdStart(ColdStartInfo),
    Personalized(PersonalizationFactors),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResult {
    /// Best first
    pub recommendations: Vec<Recommendation>,
    pub basis: RecommendationBasis,
}

impl RecommendationResult {
    pub fn titles(&self) -> Vec<&str> {
        self.recommendations
            .iter()
            .map(|rec| rec.title.as_str())
            .collect()
    }

    pub fn is_cold_start(&self) -> bool {
        matches!(self.basis, RecommendationBasis::ColdStart(_))
    }
}

/// Ranks the shared catalog for a user's preference history
#[derive(Clone)]
pub struct RecommendationRanker {
    catalog: Arc<Catalog>,
    genre_filter: Arc<FilterPipeline>,
    personal_filters: Arc<FilterPipeline>,
    scorer: Scorer,
}

impl RecommendationRanker {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_config(catalog, ScoringConfig::default())
    }

    /// Build a ranker with custom scoring weights
    pub fn with_config(catalog: Arc<Catalog>, config: ScoringConfig) -> Self {
        let genre_filter = Arc::new(FilterPipeline::new().add_filter(GenreFilter::new(catalog.clone())));
        let personal_filters = Arc::new(
            FilterPipeline::new()
                .add_filter(GenreFilter::new(catalog.clone()))
                .add_filter(AlreadyRatedFilter)
                .add_filter(DislikedGenreFilter::new(catalog.clone())),
        );
        let scorer = Scorer::with_config(catalog.clone(), config);
        Self {
            catalog,
            genre_filter,
            personal_filters,
            scorer,
        }
    }

    /// Recommend up to `count` movies.
    ///
    /// # Arguments
    /// * `preference_text` - The user's concatenated preference facts; empty means cold start
    /// * `count` - Maximum number of recommendations
    /// * `genre_filter` - Optional genre fragment, matched as a substring of genre literals
    ///
    /// No input makes this fail: an unknown genre filter simply yields an
    /// empty list. Errors only surface an inconsistent pipeline.
    pub fn recommend(
        &self,
        preference_text: &str,
        count: usize,
        genre_filter: Option<&str>,
    ) -> Result<RecommendationResult> {
        let start = Instant::now();

        let result = if preference_text.is_empty() {
            self.cold_start(count, genre_filter)
        } else {
            self.personalized(preference_text, count, genre_filter)
        }?;

        info!(
            "Recommended {} movie(s) ({}) in {:.2?}",
            result.recommendations.len(),
            if result.is_cold_start() { "cold start" } else { "personalized" },
            start.elapsed()
        );
        Ok(result)
    }

    fn cold_start(&self, count: usize, genre_filter: Option<&str>) -> Result<RecommendationResult> {
        let context = RankingContext::default().with_genre_filter(genre_filter);
        let pool = self
            .genre_filter
            .apply(self.all_candidates(), &context)
            .context("Failed to apply genre filter")?;
        let filtered_movies = pool.len();

        let genre_msg = match context.genre_filter.as_deref() {
            Some(filter) => format!("{} movies", filter),
            None => "movies".to_string(),
        };
        let reason = format!("Highly rated {}", genre_msg);

        let by_rating = pool
            .into_iter()
            .map(|mut candidate| {
                candidate.score = self.rating_of(candidate.movie_id);
                candidate.reason = reason.clone();
                candidate
            })
            .collect();
        let top = rank(by_rating, count);

        Ok(RecommendationResult {
            recommendations: self.to_recommendations(top),
            basis: RecommendationBasis::ColdStart(ColdStartInfo {
                note: format!("No preferences found. Showing popular {}.", genre_msg),
                total_movies: self.catalog.len(),
                filtered_movies,
                genre_filter: context.genre_filter,
            }),
        })
    }

    fn personalized(
        &self,
        preference_text: &str,
        count: usize,
        genre_filter: Option<&str>,
    ) -> Result<RecommendationResult> {
        let signals = PreferenceSignals::extract(preference_text, &self.catalog);
        let context = RankingContext::new(signals).with_genre_filter(genre_filter);

        let filtered = self
            .personal_filters
            .apply(self.all_candidates(), &context)
            .context("Failed to apply filters")?;
        debug!("{} candidates survived filtering", filtered.len());

        let scored = self
            .scorer
            .score(filtered, &context)
            .context("Failed to score candidates")?;
        let top = rank(scored, count);

        Ok(RecommendationResult {
            recommendations: self.to_recommendations(top),
            basis: RecommendationBasis::Personalized(PersonalizationFactors {
                rated_movies_count: context.signals.rated_movies.len(),
                liked_genres: context.signals.liked_genres,
                disliked_genres: context.signals.disliked_genres,
                genre_filter: context.genre_filter,
            }),
        })
    }

    fn all_candidates(&self) -> Vec<Candidate> {
        self.catalog
            .movies()
            .iter()
            .map(|movie| Candidate::new(movie.id))
            .collect()
    }

    fn rating_of(&self, movie_id: MovieId) -> f32 {
        self.catalog
            .get_movie(movie_id)
            .map(|movie| movie.rating)
            .unwrap_or(0.0)
    }

    fn to_recommendations(&self, ranked: Vec<Candidate>) -> Vec<Recommendation> {
        ranked
            .into_iter()
            .filter_map(|candidate| {
                let movie = self.catalog.get_movie(candidate.movie_id)?;
                Some(Recommendation {
                    movie_id: movie.id,
                    title: movie.title.clone(),
                    year: movie.year,
                    genres: movie.genres.clone(),
                    rating: movie.rating,
                    reason: candidate.reason,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranker() -> RecommendationRanker {
        RecommendationRanker::new(Arc::new(Catalog::builtin()))
    }

    #[test]
    fn test_cold_start_top_five() {
        let result = ranker().recommend("", 5, None).unwrap();
        assert_eq!(
            result.titles(),
            vec![
                "Spirited Away",
                "Inception",
                "The Matrix",
                "Star Wars: The Empire Strikes Back",
                "Spider-Man: Across the Spider-Verse",
            ]
        );
        assert!(result.recommendations.iter().all(|r| r.reason == "Highly rated movies"));

        let RecommendationBasis::ColdStart(info) = result.basis else {
            panic!("expected cold start");
        };
        assert_eq!(info.total_movies, 50);
        assert_eq!(info.filtered_movies, 50);
        assert_eq!(info.note, "No preferences found. Showing popular movies.");
    }

    #[test]
    fn test_cold_start_with_filter() {
        let result = ranker().recommend("", 5, Some("horror")).unwrap();
        assert_eq!(
            result.titles(),
            vec!["Get Out", "The Conjuring", "Hereditary", "Beetlejuice Beetlejuice", "Blade"]
        );
        assert_eq!(result.recommendations[0].reason, "Highly rated horror movies");

        let RecommendationBasis::ColdStart(info) = result.basis else {
            panic!("expected cold start");
        };
        assert_eq!(info.filtered_movies, 8);
        assert_eq!(info.genre_filter.as_deref(), Some("horror"));
    }

    #[test]
    fn test_personalized_liked_genre_boost() {
        let result = ranker()
            .recommend("User likes romance movies.", 3, None)
            .unwrap();
        // Romance movies in rating order: Wicked 8.2, La La Land 8.0, Her 8.0
        assert_eq!(result.titles(), vec!["Wicked: Part One", "La La Land", "Her"]);
        assert_eq!(result.recommendations[0].reason, "You like romance");

        let RecommendationBasis::Personalized(factors) = result.basis else {
            panic!("expected personalized");
        };
        assert_eq!(factors.liked_genres, vec![Genre::Romance]);
        assert!(factors.disliked_genres.is_empty());
        assert_eq!(factors.rated_movies_count, 0);
    }

    #[test]
    fn test_personalized_without_signals_uses_default_reason() {
        let result = ranker().recommend("nothing useful", 2, Some("drama")).unwrap();
        assert_eq!(result.titles(), vec!["Parasite", "Oppenheimer"]);
        assert_eq!(result.recommendations[0].reason, "Highly rated drama movie");
    }

    #[test]
    fn test_unknown_filter_yields_nothing() {
        let result = ranker().recommend("", 5, Some("western")).unwrap();
        assert!(result.recommendations.is_empty());
        let result = ranker().recommend("User likes comedy movies.", 5, Some("western")).unwrap();
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn test_empty_filter_means_unfiltered() {
        let unfiltered = ranker().recommend("", 5, None).unwrap();
        let empty = ranker().recommend("", 5, Some("")).unwrap();
        assert_eq!(unfiltered, empty);
    }

    #[test]
    fn test_zero_count() {
        let result = ranker().recommend("User likes comedy movies.", 0, None).unwrap();
        assert!(result.recommendations.is_empty());
    }
}
