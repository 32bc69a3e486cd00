//! Preference facts: the free-text sentences stored per user.
//!
//! Two kinds of fact exist, both plain sentences:
//!
//! ```text
//! User rated 'The Matrix' 5/5 stars. User liked this movie. Genres: sci-fi, action.
//! User likes sci-fi, action movies.
//! ```
//!
//! The ranker reads them back as one text blob and matches on substrings,
//! so the exact wording here is part of the contract.

use catalog::{join_genres, Genre, Movie};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a rating event counts as liking the rated genres
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenrePolarity {
    Likes,
    Dislikes,
}

impl GenrePolarity {
    /// Minimum star rating that can produce `Likes`
    pub const LIKE_THRESHOLD: f32 = 4.0;

    /// `Likes` only when the user liked the movie *and* rated it 4 or more
    pub fn from_rating(liked: bool, rating: f32) -> Self {
        if liked && rating >= Self::LIKE_THRESHOLD {
            GenrePolarity::Likes
        } else {
            GenrePolarity::Dislikes
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GenrePolarity::Likes => "likes",
            GenrePolarity::Dislikes => "dislikes",
        }
    }
}

/// One immutable preference sentence. Identity is its text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreferenceFact(String);

impl PreferenceFact {
    /// Wrap existing text, e.g. a fact read back from a store
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Fact recording one rating of one movie, using that movie's genres
    pub fn rating(movie: &Movie, rating: f32, liked: bool) -> Self {
        Self(format!(
            "User rated '{}' {}/5 stars. User {} this movie. Genres: {}.",
            movie.title,
            rating,
            if liked { "liked" } else { "disliked" },
            movie.genre_list()
        ))
    }

    /// Fact summarizing a genre preference
    pub fn genre_preference(genres: &[Genre], polarity: GenrePolarity) -> Self {
        Self(format!(
            "User {} {} movies.",
            polarity.as_str(),
            join_genres(genres)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PreferenceFact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PreferenceFact {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
