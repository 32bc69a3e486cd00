//! Core domain types for the movie catalog.
//!
//! - `MovieId` keeps ids distinct from other integers in signatures
//! - `Genre` is a closed enum with a canonical lower-case literal per variant
//! - `Movie` is an immutable catalog entry

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a movie in the catalog
pub type MovieId = u32;

// =============================================================================
// Genre
// =============================================================================

/// Movie genres known to the catalog.
///
/// Serialized as the canonical literal (`"sci-fi"`, `"action"`, ...), which is
/// also the text used inside preference facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Genre {
    Action,
    Comedy,
    Drama,
    Horror,
    Romance,
    SciFi,
    Thriller,
    Fantasy,
    Documentary,
    Animation,
}

impl Genre {
    /// Every genre, in declaration order
    pub const ALL: [Genre; 10] = [
        Genre::Action,
        Genre::Comedy,
        Genre::Drama,
        Genre::Horror,
        Genre::Romance,
        Genre::SciFi,
        Genre::Thriller,
        Genre::Fantasy,
        Genre::Documentary,
        Genre::Animation,
    ];

    /// Canonical lower-case literal
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "action",
            Genre::Comedy => "comedy",
            Genre::Drama => "drama",
            Genre::Horror => "horror",
            Genre::Romance => "romance",
            Genre::SciFi => "sci-fi",
            Genre::Thriller => "thriller",
            Genre::Fantasy => "fantasy",
            Genre::Documentary => "documentary",
            Genre::Animation => "animation",
        }
    }

    /// True if `fragment` (case-insensitive) is a substring of this genre's
    /// literal. `"sci"` matches `SciFi`.
    pub fn matches_fragment(&self, fragment: &str) -> bool {
        self.as_str().contains(&fragment.to_lowercase())
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Genre::ALL
            .iter()
            .copied()
            .find(|genre| genre.as_str() == lower)
            .ok_or_else(|| CatalogError::UnknownGenre(s.to_string()))
    }
}

/// Join genre literals with `", "`, the format used in facts and reasons
pub fn join_genres<'a>(genres: impl IntoIterator<Item = &'a Genre>) -> String {
    genres
        .into_iter()
        .map(Genre::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Movie
// =============================================================================

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: u16,
    /// Never empty in a validated catalog
    pub genres: Vec<Genre>,
    /// Baseline quality rating on a 0-10 scale
    pub rating: f32,
    /// Movies sharing a series id are sequels/prequels of one another
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
}

impl Movie {
    pub fn new(id: MovieId, title: impl Into<String>, year: u16, genres: Vec<Genre>, rating: f32) -> Self {
        Self {
            id,
            title: title.into(),
            year,
            genres,
            rating,
            series: None,
        }
    }

    /// Attach a series id (builder style)
    pub fn in_series(mut self, series: impl Into<String>) -> Self {
        self.series = Some(series.into());
        self
    }

    pub fn has_genre(&self, genre: Genre) -> bool {
        self.genres.contains(&genre)
    }

    /// True if any genre literal contains `fragment` (case-insensitive)
    pub fn matches_genre_fragment(&self, fragment: &str) -> bool {
        self.genres.iter().any(|genre| genre.matches_fragment(fragment))
    }

    /// Genre literals joined with `", "`
    pub fn genre_list(&self) -> String {
        join_genres(&self.genres)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_literals_round_trip_through_from_str() {
        for genre in Genre::ALL {
            assert_eq!(genre.as_str().parse::<Genre>().unwrap(), genre);
        }
        assert_eq!("SCI-FI".parse::<Genre>().unwrap(), Genre::SciFi);
        assert!("western".parse::<Genre>().is_err());
    }

    #[test]
    fn test_genre_serializes_as_literal() {
        let json = serde_json::to_string(&Genre::SciFi).unwrap();
        assert_eq!(json, "\"sci-fi\"");
        let genre: Genre = serde_json::from_str("\"documentary\"").unwrap();
        assert_eq!(genre, Genre::Documentary);
    }

    #[test]
    fn test_fragment_matching_is_substring() {
        assert!(Genre::SciFi.matches_fragment("sci"));
        assert!(Genre::SciFi.matches_fragment("Sci-Fi"));
        assert!(Genre::Horror.matches_fragment("horror"));
        assert!(!Genre::Horror.matches_fragment("horrors"));
    }

    #[test]
    fn test_movie_genre_list() {
        let movie = Movie::new(1, "The Matrix", 1999, vec![Genre::SciFi, Genre::Action], 8.7)
            .in_series("matrix");
        assert_eq!(movie.genre_list(), "sci-fi, action");
        assert_eq!(movie.series.as_deref(), Some("matrix"));
        assert!(movie.has_genre(Genre::Action));
        assert!(!movie.has_genre(Genre::Drama));
    }
}
