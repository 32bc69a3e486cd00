//! # Movie Assistant
//!
//! One user's session: wires the recorder and the ranker to a preference
//! store.
//!
//! - `rate` records a rating and appends every produced fact to the store
//! - `recommend` reads the user's whole history back and ranks from scratch
//! - `memories`, `forget` and `reset_memory` manage the stored facts

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tracing::{info, warn};

use catalog::Catalog;
use preferences::{FactId, InMemoryPreferenceStore, PreferenceStore, StoreError, StoredFact};

use crate::ranker::{RecommendationRanker, RecommendationResult};
use crate::recorder::{RatingRecorder, RatingResult, RecordError};

/// Default user id for single-user sessions
pub const DEFAULT_USER_ID: &str = "user_1";

/// Per-user session over a preference store
pub struct MovieAssistant<S: PreferenceStore = InMemoryPreferenceStore> {
    user_id: String,
    store: S,
    recorder: RatingRecorder,
    ranker: RecommendationRanker,
}

impl MovieAssistant<InMemoryPreferenceStore> {
    /// Session backed by a fresh in-memory store
    pub fn in_memory(catalog: Arc<Catalog>, user_id: impl Into<String>) -> Self {
        Self::new(catalog, InMemoryPreferenceStore::new(), user_id)
    }
}

impl<S: PreferenceStore> MovieAssistant<S> {
    pub fn new(catalog: Arc<Catalog>, store: S, user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            store,
            recorder: RatingRecorder::new(catalog.clone()),
            ranker: RecommendationRanker::new(catalog),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Rate a movie and persist the resulting facts.
    ///
    /// Nothing is stored when the title is not found.
    pub fn rate(&mut self, movie_title: &str, rating: f32, liked: bool) -> Result<RatingResult, RecordError> {
        let result = match self.recorder.record_rating(movie_title, rating, liked) {
            Ok(result) => result,
            Err(err) => {
                warn!("Rating rejected for {}: {}", self.user_id, err);
                return Err(err);
            }
        };

        for fact in &result.facts {
            self.store.append(&self.user_id, fact.clone());
        }
        info!(
            "Stored {} fact(s) for {}",
            result.facts.len(),
            self.user_id
        );
        Ok(result)
    }

    /// Recommend from the user's stored history
    pub fn recommend(&self, count: usize, genre_filter: Option<&str>) -> Result<RecommendationResult> {
        let start = Instant::now();
        let history = self.store.read_all(&self.user_id);
        info!(
            "Read {} bytes of preference history for {}",
            history.len(),
            self.user_id
        );

        let result = self.ranker.recommend(&history, count, genre_filter)?;
        info!(
            "Total time to get recommendations for {}: {:.2?}",
            self.user_id,
            start.elapsed()
        );
        Ok(result)
    }

    /// Everything stored for this user, oldest first
    pub fn memories(&self) -> Vec<StoredFact> {
        self.store.list(&self.user_id)
    }

    /// Delete one stored fact
    pub fn forget(&mut self, id: FactId) -> Result<(), StoreError> {
        self.store.delete(&self.user_id, id)
    }

    /// Delete every stored fact, returning how many were removed
    pub fn reset_memory(&mut self) -> usize {
        self.store.reset(&self.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assistant() -> MovieAssistant {
        MovieAssistant::in_memory(Arc::new(Catalog::builtin()), DEFAULT_USER_ID)
    }

    #[test]
    fn test_rate_appends_all_facts() {
        let mut assistant = assistant();
        let result = assistant.rate("Star Wars", 5.0, true).unwrap();

        assert_eq!(result.facts.len(), 4);
        assert_eq!(assistant.memories().len(), 4);
        assert!(assistant
            .store()
            .read_all(DEFAULT_USER_ID)
            .ends_with("User likes sci-fi, action movies."));
    }

    #[test]
    fn test_not_found_stores_nothing() {
        let mut assistant = assistant();
        assert!(assistant.rate("Nonexistent Movie XYZ", 5.0, true).is_err());
        assert!(assistant.memories().is_empty());
    }

    #[test]
    fn test_recommend_uses_history() {
        let mut assistant = assistant();
        assert!(assistant.recommend(5, None).unwrap().is_cold_start());

        assistant.rate("Inception", 5.0, true).unwrap();
        let result = assistant.recommend(5, None).unwrap();
        assert!(!result.is_cold_start());
        assert!(!result.titles().contains(&"Inception"));
    }

    #[test]
    fn test_forget_and_reset() {
        let mut assistant = assistant();
        assistant.rate("Inception", 5.0, true).unwrap();

        let first = assistant.memories()[0].id;
        assistant.forget(first).unwrap();
        assert_eq!(assistant.memories().len(), 1);
        assert!(assistant.forget(first).is_err());

        assert_eq!(assistant.reset_memory(), 1);
        assert!(assistant.recommend(5, None).unwrap().is_cold_start());
    }
}
