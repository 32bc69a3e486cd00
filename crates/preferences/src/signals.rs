//! Derive coarse preference signals from a user's fact history.
//!
//! This is a literal substring heuristic over the lower-cased text, not a
//! parser. It recomputes everything from scratch on every call.
//!
//! ## Algorithm
//! 1. Lower-case the whole blob
//! 2. For each signal genre: liked if `"likes <genre>"` occurs, else
//!    disliked if `"dislikes <genre>"` occurs
//! 3. Any catalog title (lower-cased) found anywhere in the blob marks that
//!    movie as already rated
//!
//! Only the genre written directly after "likes"/"dislikes" is picked up:
//! "User likes sci-fi, action movies." yields sci-fi but not action.

use catalog::{Catalog, Genre, MovieId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Genres probed in the fact text, in probe order.
///
/// Documentary is never probed.
pub const SIGNAL_GENRES: [Genre; 9] = [
    Genre::SciFi,
    Genre::Action,
    Genre::Comedy,
    Genre::Drama,
    Genre::Thriller,
    Genre::Horror,
    Genre::Romance,
    Genre::Fantasy,
    Genre::Animation,
];

/// Signals extracted from one fact blob
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceSignals {
    /// In `SIGNAL_GENRES` order
    pub liked_genres: Vec<Genre>,
    /// In `SIGNAL_GENRES` order; disjoint from `liked_genres`
    pub disliked_genres: Vec<Genre>,
    /// Catalog movies whose title appears in the text
    pub rated_movies: HashSet<MovieId>,
}

impl PreferenceSignals {
    /// Extract signals from `text` against `catalog`
    pub fn extract(text: &str, catalog: &Catalog) -> Self {
        let text = text.to_lowercase();
        let mut signals = Self::default();

        for genre in SIGNAL_GENRES {
            if mentions_like(&text, genre) {
                signals.liked_genres.push(genre);
            } else if text.contains(&format!("dislikes {}", genre.as_str())) {
                signals.disliked_genres.push(genre);
            }
        }

        signals.rated_movies = catalog
            .movies()
            .iter()
            .filter(|movie| text.contains(&movie.title.to_lowercase()))
            .map(|movie| movie.id)
            .collect();

        debug!(
            "Extracted signals: liked={:?}, disliked={:?}, rated={}",
            signals.liked_genres,
            signals.disliked_genres,
            signals.rated_movies.len()
        );

        signals
    }

    pub fn likes(&self, genre: Genre) -> bool {
        self.liked_genres.contains(&genre)
    }

    pub fn dislikes(&self, genre: Genre) -> bool {
        self.disliked_genres.contains(&genre)
    }

    pub fn has_rated(&self, movie_id: MovieId) -> bool {
        self.rated_movies.contains(&movie_id)
    }
}

/// `"likes <genre>"` occurs somewhere other than as the tail of
/// `"dislikes <genre>"`
fn mentions_like(text: &str, genre: Genre) -> bool {
    let needle = format!("likes {}", genre.as_str());
    text.match_indices(&needle)
        .any(|(start, _)| !text[..start].ends_with("dis"))
}
