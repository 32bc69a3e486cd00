//! Integration tests for the pipeline.
//!
//! These tests verify that filters and scoring work together
//! in a realistic scenario.

use catalog::{Catalog, Genre};
use pipeline::filters::*;
use pipeline::{rank, Candidate, FilterPipeline, RankingContext, Scorer};
use preferences::PreferenceSignals;
use std::sync::Arc;

fn create_test_setup() -> (Arc<Catalog>, Vec<Candidate>) {
    let catalog = Arc::new(Catalog::builtin());
    let candidates = catalog
        .movies()
        .iter()
        .map(|movie| Candidate::new(movie.id))
        .collect();
    (catalog, candidates)
}

fn full_pipeline(catalog: &Arc<Catalog>) -> FilterPipeline {
    FilterPipeline::new()
        .add_filter(GenreFilter::new(catalog.clone()))
        .add_filter(AlreadyRatedFilter)
        .add_filter(DislikedGenreFilter::new(catalog.clone()))
}

#[test]
fn test_full_pipeline_filters_correctly() {
    let (catalog, candidates) = create_test_setup();

    let text = "User rated 'Inception' 5/5 stars. User liked this movie. Genres: sci-fi, thriller.\n\
                User dislikes horror movies.";
    let context = RankingContext::new(PreferenceSignals::extract(text, &catalog));

    let filtered = full_pipeline(&catalog).apply(candidates, &context).unwrap();

    assert!(filtered.iter().all(|c| c.movie_id != 8), "Inception was rated");
    for candidate in &filtered {
        let movie = catalog.get_movie(candidate.movie_id).unwrap();
        assert!(!movie.has_genre(Genre::Horror), "{} is horror", movie.title);
    }
    // 50 movies - Inception - 8 horror movies
    assert_eq!(filtered.len(), 41);
}

#[test]
fn test_complete_pipeline_realistic() {
    let (catalog, candidates) = create_test_setup();

    let context = RankingContext::new(PreferenceSignals::extract(
        "User likes animation movies.",
        &catalog,
    ))
    .with_genre_filter(Some("fantasy"));

    let filtered = full_pipeline(&catalog).apply(candidates, &context).unwrap();
    let scored = Scorer::new(catalog.clone()).score(filtered, &context).unwrap();
    let top = rank(scored, 3);

    let titles: Vec<&str> = top
        .iter()
        .map(|c| catalog.get_movie(c.movie_id).unwrap().title.as_str())
        .collect();

    // Animated fantasy first (bonus), in rating order
    assert_eq!(
        titles,
        vec!["Spirited Away", "How to Train Your Dragon", "Moana 2"]
    );
    assert_eq!(top[0].reason, "You like animation");
}
