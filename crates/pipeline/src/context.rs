//! Candidate and per-request context types shared by filters and the scorer.

use catalog::MovieId;
use preferences::PreferenceSignals;

/// A movie under consideration for recommendation
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub movie_id: MovieId,
    /// Zero until the scorer runs
    pub score: f32,
    /// Human-readable reason; empty until the scorer runs
    pub reason: String,
}

impl Candidate {
    pub fn new(movie_id: MovieId) -> Self {
        Self {
            movie_id,
            score: 0.0,
            reason: String::new(),
        }
    }
}

/// Everything a ranking request knows about the user
#[derive(Debug, Clone, Default)]
pub struct RankingContext {
    pub signals: PreferenceSignals,
    /// Raw genre filter text as the caller wrote it; never empty
    pub genre_filter: Option<String>,
}

impl RankingContext {
    pub fn new(signals: PreferenceSignals) -> Self {
        Self {
            signals,
            genre_filter: None,
        }
    }

    /// Set the genre filter. An empty string means no filter.
    pub fn with_genre_filter(mut self, genre_filter: Option<&str>) -> Self {
        self.genre_filter = normalize_genre_filter(genre_filter);
        self
    }
}

/// Treat `Some("")` the same as `None`
pub fn normalize_genre_filter(genre_filter: Option<&str>) -> Option<String> {
    genre_filter
        .filter(|filter| !filter.is_empty())
        .map(str::to_string)
}
