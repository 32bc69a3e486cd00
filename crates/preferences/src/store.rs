//! Append-only preference storage keyed by user id.
//!
//! The recorder only appends and the ranker only reads the concatenated
//! blob. Listing, deleting and resetting exist for session management and
//! for clean evaluation runs.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, info};

use crate::fact::PreferenceFact;

/// Identifier assigned to a fact when it is stored
pub type FactId = u64;

/// A fact as held by a store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredFact {
    pub id: FactId,
    pub fact: PreferenceFact,
}

#[derive(Error, Debug, PartialEq)]
pub enum StoreError {
    #[error("No fact {id} stored for user {user_id}")]
    FactNotFound { user_id: String, id: FactId },
}

/// Text-fact storage. Facts are never edited once appended.
pub trait PreferenceStore {
    /// Append a fact and return its id
    fn append(&mut self, user_id: &str, fact: PreferenceFact) -> FactId;

    /// All of a user's facts joined by newlines, in append order.
    /// Empty when the user has none.
    fn read_all(&self, user_id: &str) -> String;

    /// All of a user's facts with their ids, in append order
    fn list(&self, user_id: &str) -> Vec<StoredFact>;

    /// Delete one fact
    fn delete(&mut self, user_id: &str, id: FactId) -> Result<(), StoreError>;

    /// Delete every fact of a user, returning how many were removed
    fn reset(&mut self, user_id: &str) -> usize;
}

/// Process-local store backed by a `HashMap`
#[derive(Debug, Default)]
pub struct InMemoryPreferenceStore {
    facts: HashMap<String, Vec<StoredFact>>,
    next_id: FactId,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with at least one fact
    pub fn user_count(&self) -> usize {
        self.facts.values().filter(|facts| !facts.is_empty()).count()
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn append(&mut self, user_id: &str, fact: PreferenceFact) -> FactId {
        self.next_id += 1;
        let id = self.next_id;
        debug!("Storing fact {} for {}: {}", id, user_id, fact);
        self.facts
            .entry(user_id.to_string())
            .or_default()
            .push(StoredFact { id, fact });
        id
    }

    fn read_all(&self, user_id: &str) -> String {
        self.facts
            .get(user_id)
            .map(|facts| {
                facts
                    .iter()
                    .map(|stored| stored.fact.as_str())
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .unwrap_or_default()
    }

    fn list(&self, user_id: &str) -> Vec<StoredFact> {
        self.facts.get(user_id).cloned().unwrap_or_default()
    }

    fn delete(&mut self, user_id: &str, id: FactId) -> Result<(), StoreError> {
        let not_found = || StoreError::FactNotFound {
            user_id: user_id.to_string(),
            id,
        };
        let facts = self.facts.get_mut(user_id).ok_or_else(not_found)?;
        let position = facts
            .iter()
            .position(|stored| stored.id == id)
            .ok_or_else(not_found)?;
        facts.remove(position);
        Ok(())
    }

    fn reset(&mut self, user_id: &str) -> usize {
        let removed = self.facts.remove(user_id).map(|facts| facts.len()).unwrap_or(0);
        info!("Deleted {} facts for {}", removed, user_id);
        removed
    }
}
