//! # Preferences Crate
//!
//! Everything about a user's accumulated movie preferences:
//!
//! - **fact**: the free-text `PreferenceFact` sentences and the likes/dislikes rule
//! - **signals**: `PreferenceSignals`, liked/disliked genres and already-rated
//!   movies derived from the concatenated fact text
//! - **store**: the `PreferenceStore` trait and an in-memory implementation
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use preferences::{InMemoryPreferenceStore, PreferenceSignals, PreferenceStore, PreferenceFact};
//!
//! let catalog = Catalog::builtin();
//! let mut store = InMemoryPreferenceStore::new();
//! store.append("user_1", PreferenceFact::new("User likes comedy movies."));
//!
//! let signals = PreferenceSignals::extract(&store.read_all("user_1"), &catalog);
//! assert!(signals.likes(catalog::Genre::Comedy));
//! ```

pub mod fact;
pub mod signals;
pub mod store;

pub use fact::{GenrePolarity, PreferenceFact};
pub use signals::{PreferenceSignals, SIGNAL_GENRES};
pub use store::{FactId, InMemoryPreferenceStore, PreferenceStore, StoreError, StoredFact};
