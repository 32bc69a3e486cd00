//! The in-memory movie catalog.
//!
//! `Catalog` owns the ordered movie table plus a few lookup indices. It is
//! built once, wrapped in an `Arc`, and shared read-only by every component.
//! Methods return references into the table; nothing mutates after
//! construction.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::builtin::builtin_movies;
use crate::error::{CatalogError, Result};
use crate::types::{Genre, Movie, MovieId};

/// Ordered, immutable movie table with lookup indices
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Catalog order is the order of this vector
    movies: Vec<Movie>,
    /// Position of each movie in `movies`
    by_id: HashMap<MovieId, usize>,
    /// Positions of the members of each series, in catalog order
    series_index: HashMap<String, Vec<usize>>,
    /// Positions of the movies tagged with each genre, in catalog order
    genre_index: HashMap<Genre, Vec<usize>>,
}

impl Catalog {
    /// The built-in 50-movie catalog
    pub fn builtin() -> Self {
        // The built-in table is validated by the test suite
        Self::index(builtin_movies())
    }

    /// Build a catalog from movies in the given order, validating every entry.
    ///
    /// # Errors
    /// * `DuplicateId` - two entries share an id
    /// * `InvalidValue` - empty title, empty genre list, or rating outside 0..=10
    pub fn from_movies(movies: Vec<Movie>) -> Result<Self> {
        let mut seen = HashSet::new();
        for movie in &movies {
            if !seen.insert(movie.id) {
                return Err(CatalogError::DuplicateId { id: movie.id });
            }
            validate_movie(movie)?;
        }
        Ok(Self::index(movies))
    }

    /// Parse a JSON array of movies
    pub fn from_json_str(json: &str) -> Result<Self> {
        let movies: Vec<Movie> = serde_json::from_str(json)?;
        Self::from_movies(movies)
    }

    /// Load a JSON catalog file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading catalog from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&contents)?;
        info!("Loaded {} movies", catalog.len());
        Ok(catalog)
    }

    fn index(movies: Vec<Movie>) -> Self {
        let mut by_id = HashMap::with_capacity(movies.len());
        let mut series_index: HashMap<String, Vec<usize>> = HashMap::new();
        let mut genre_index: HashMap<Genre, Vec<usize>> = HashMap::new();

        for (position, movie) in movies.iter().enumerate() {
            by_id.insert(movie.id, position);
            if let Some(series) = &movie.series {
                series_index.entry(series.clone()).or_default().push(position);
            }
            for genre in &movie.genres {
                genre_index.entry(*genre).or_default().push(position);
            }
        }

        debug!(
            "Indexed catalog: {} movies, {} series, {} genres",
            movies.len(),
            series_index.len(),
            genre_index.len()
        );

        Self {
            movies,
            by_id,
            series_index,
            genre_index,
        }
    }

    /// All movies in catalog order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn get_movie(&self, id: MovieId) -> Option<&Movie> {
        self.by_id.get(&id).map(|&position| &self.movies[position])
    }

    /// First movie (in catalog order) whose title contains `query`,
    /// compared case-insensitively.
    ///
    /// "Matrix" resolves to "The Matrix" because it comes first, even though
    /// three other titles also contain it.
    pub fn find_by_title(&self, query: &str) -> Option<&Movie> {
        let query = query.to_lowercase();
        self.movies
            .iter()
            .find(|movie| movie.title.to_lowercase().contains(&query))
    }

    /// Every movie whose title contains `query` (case-insensitive), in catalog order
    pub fn search(&self, query: &str) -> Vec<&Movie> {
        let query = query.to_lowercase();
        self.movies
            .iter()
            .filter(|movie| movie.title.to_lowercase().contains(&query))
            .collect()
    }

    /// All members of a series in catalog order; empty for an unknown series
    pub fn series_members(&self, series: &str) -> Vec<&Movie> {
        self.series_index
            .get(series)
            .map(|positions| positions.iter().map(|&p| &self.movies[p]).collect())
            .unwrap_or_default()
    }

    /// All movies tagged with `genre`, in catalog order
    pub fn movies_by_genre(&self, genre: Genre) -> Vec<&Movie> {
        self.genre_index
            .get(&genre)
            .map(|positions| positions.iter().map(|&p| &self.movies[p]).collect())
            .unwrap_or_default()
    }

    /// The first `n` titles in catalog order
    pub fn suggestions(&self, n: usize) -> Vec<String> {
        self.movies
            .iter()
            .take(n)
            .map(|movie| movie.title.clone())
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_movie(movie: &Movie) -> Result<()> {
    let invalid = |field: &str, value: String| CatalogError::InvalidValue {
        id: movie.id,
        field: field.to_string(),
        value,
    };

    if movie.title.trim().is_empty() {
        return Err(invalid("title", format!("{:?}", movie.title)));
    }
    if movie.genres.is_empty() {
        return Err(invalid("genres", "[]".to_string()));
    }
    if !(0.0..=10.0).contains(&movie.rating) {
        return Err(invalid("rating", movie.rating.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 50);
        assert_eq!(catalog.movies()[0].title, "The Matrix");
        assert_eq!(catalog.movies()[49].title, "Won't You Be My Neighbor?");
    }

    #[test]
    fn test_builtin_catalog_passes_validation() {
        let catalog = Catalog::from_movies(builtin_movies()).unwrap();
        assert_eq!(catalog.len(), 50);
    }

    #[test]
    fn test_find_by_title_first_match_wins() {
        let catalog = Catalog::builtin();
        let movie = catalog.find_by_title("matrix").unwrap();
        assert_eq!(movie.id, 1);
        assert_eq!(catalog.search("Matrix").len(), 4);
    }

    #[test]
    fn test_find_by_title_is_case_insensitive() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.find_by_title("INCEPTION").unwrap().id, 8);
        assert!(catalog.find_by_title("Nonexistent Movie XYZ").is_none());
    }

    #[test]
    fn test_series_members() {
        let catalog = Catalog::builtin();
        let titles: Vec<&str> = catalog
            .series_members("star_wars")
            .iter()
            .map(|m| m.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec![
                "Star Wars: A New Hope",
                "Star Wars: The Empire Strikes Back",
                "Star Wars: Return of the Jedi",
            ]
        );
        assert!(catalog.series_members("unknown").is_empty());
    }

    #[test]
    fn test_movies_by_genre() {
        let catalog = Catalog::builtin();
        let documentaries = catalog.movies_by_genre(Genre::Documentary);
        assert_eq!(documentaries.len(), 1);
        assert_eq!(documentaries[0].id, 50);
        assert_eq!(catalog.movies_by_genre(Genre::Horror).len(), 8);
    }

    #[test]
    fn test_suggestions() {
        let catalog = Catalog::builtin();
        let suggestions = catalog.suggestions(5);
        assert_eq!(suggestions.len(), 5);
        assert_eq!(suggestions[4], "Star Wars: A New Hope");

        let tiny = Catalog::from_movies(vec![Movie::new(1, "Only", 2000, vec![Genre::Drama], 5.0)]).unwrap();
        assert_eq!(tiny.suggestions(5), vec!["Only".to_string()]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let movies = vec![
            Movie::new(1, "A", 2000, vec![Genre::Drama], 5.0),
            Movie::new(1, "B", 2001, vec![Genre::Comedy], 6.0),
        ];
        let err = Catalog::from_movies(movies).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { id: 1 }));
    }

    #[test]
    fn test_invalid_entries_rejected() {
        let no_genres = vec![Movie::new(1, "A", 2000, vec![], 5.0)];
        assert!(matches!(
            Catalog::from_movies(no_genres),
            Err(CatalogError::InvalidValue { .. })
        ));

        let bad_rating = vec![Movie::new(1, "A", 2000, vec![Genre::Drama], 11.0)];
        assert!(matches!(
            Catalog::from_movies(bad_rating),
            Err(CatalogError::InvalidValue { .. })
        ));
    }
}
