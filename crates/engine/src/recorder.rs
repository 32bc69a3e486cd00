//! # Rating Recorder
//!
//! Turns one opinion about one movie into preference facts:
//!
//! 1. Resolve the title (first case-insensitive substring match in catalog order)
//! 2. Expand to the whole series when the movie belongs to one
//! 3. Emit one rating fact per target movie, each with its own genres
//! 4. Emit exactly one genre-preference fact from the matched movie's genres
//!
//! The recorder never stores anything. Callers persist `RatingResult::facts`.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use catalog::{Catalog, Movie};
use preferences::{GenrePolarity, PreferenceFact};

/// Number of titles offered when a title cannot be resolved
pub const SUGGESTION_COUNT: usize = 5;

/// Outcome of a successful rating
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingResult {
    pub success: bool,
    /// Titles of every movie the rating was applied to, in catalog order
    pub rated_movies: Vec<String>,
    /// Rating facts followed by the single genre-preference fact
    pub facts: Vec<PreferenceFact>,
    pub message: String,
    /// True iff the rating was applied to more than one movie
    pub applied_to_series: bool,
}

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum RecordError {
    /// No catalog title contains the requested title
    #[error("Movie '{title}' not found")]
    NotFound {
        title: String,
        /// The first titles of the catalog, offered as alternatives
        suggestions: Vec<String>,
    },
}

/// Records ratings against a shared catalog
#[derive(Debug, Clone)]
pub struct RatingRecorder {
    catalog: Arc<Catalog>,
}

impl RatingRecorder {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Rate a movie (and its series) and produce the facts to store.
    ///
    /// # Arguments
    /// * `movie_title` - Full or partial title, e.g. "Matrix"
    /// * `rating` - Star rating from 1 to 5
    /// * `liked` - Whether the user liked the movie
    ///
    /// # Errors
    /// `RecordError::NotFound` with up to five suggested titles when nothing matches.
    pub fn record_rating(
        &self,
        movie_title: &str,
        rating: f32,
        liked: bool,
    ) -> Result<RatingResult, RecordError> {
        let matched = self
            .catalog
            .find_by_title(movie_title)
            .ok_or_else(|| RecordError::NotFound {
                title: movie_title.to_string(),
                suggestions: self.catalog.suggestions(SUGGESTION_COUNT),
            })?;
        debug!("Resolved '{}' to '{}'", movie_title, matched.title);

        let targets = self.targets_for(matched);

        let mut facts: Vec<PreferenceFact> = targets
            .iter()
            .map(|movie| PreferenceFact::rating(movie, rating, liked))
            .collect();
        let polarity = GenrePolarity::from_rating(liked, rating);
        facts.push(PreferenceFact::genre_preference(&matched.genres, polarity));

        info!(
            "Rated {} movie(s) from '{}' with {}/5 ({})",
            targets.len(),
            matched.title,
            rating,
            polarity.as_str()
        );

        Ok(RatingResult {
            success: true,
            rated_movies: targets.iter().map(|movie| movie.title.clone()).collect(),
            facts,
            message: format!("Rated {} movie(s) with {}/5 stars", targets.len(), rating),
            applied_to_series: targets.len() > 1,
        })
    }

    /// The matched movie alone, or every member of its series
    fn targets_for<'a>(&'a self, matched: &'a Movie) -> Vec<&'a Movie> {
        match matched.series.as_deref() {
            Some(series) => {
                let members = self.catalog.series_members(series);
                if members.is_empty() { vec![matched] } else { members }
            }
            None => vec![matched],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> RatingRecorder {
        RatingRecorder::new(Arc::new(Catalog::builtin()))
    }

    #[test]
    fn test_series_rating_propagates() {
        let result = recorder().record_rating("Matrix", 5.0, true).unwrap();

        assert!(result.success);
        assert!(result.applied_to_series);
        assert_eq!(
            result.rated_movies,
            vec![
                "The Matrix",
                "Matrix Reloaded",
                "Matrix Revolutions",
                "Matrix Resurrections",
            ]
        );
        assert_eq!(result.facts.len(), 5);
        assert_eq!(result.facts[4].as_str(), "User likes sci-fi, action movies.");
        assert_eq!(result.message, "Rated 4 movie(s) with 5/5 stars");
    }

    #[test]
    fn test_single_movie_rating() {
        let result = recorder().record_rating("inception", 4.0, true).unwrap();

        assert!(!result.applied_to_series);
        assert_eq!(result.rated_movies, vec!["Inception"]);
        assert_eq!(
            result.facts,
            vec![
                PreferenceFact::new(
                    "User rated 'Inception' 4/5 stars. User liked this movie. Genres: sci-fi, thriller."
                ),
                PreferenceFact::new("User likes sci-fi, thriller movies."),
            ]
        );
    }

    #[test]
    fn test_low_rating_overrides_liked() {
        let result = recorder().record_rating("Parasite", 3.0, true).unwrap();
        assert_eq!(result.facts[1].as_str(), "User dislikes thriller, drama movies.");
        // The rating fact still records that the user liked it
        assert!(result.facts[0].as_str().contains("User liked this movie."));
    }

    #[test]
    fn test_not_found_offers_suggestions() {
        let err = recorder()
            .record_rating("Nonexistent Movie XYZ", 5.0, true)
            .unwrap_err();

        let RecordError::NotFound { title, suggestions } = err;
        assert_eq!(title, "Nonexistent Movie XYZ");
        assert_eq!(suggestions.len(), SUGGESTION_COUNT);
        assert_eq!(suggestions[0], "The Matrix");
    }
}
