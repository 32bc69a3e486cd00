//! Integration tests for loading catalogs from JSON.

use catalog::{Catalog, CatalogError, Genre};
use std::io::Write;

const SMALL_CATALOG: &str = r#"[
    {"id": 10, "title": "Alien", "year": 1979, "genres": ["horror", "sci-fi"], "rating": 8.5, "series": "alien"},
    {"id": 11, "title": "Aliens", "year": 1986, "genres": ["action", "sci-fi"], "rating": 8.4, "series": "alien"},
    {"id": 12, "title": "Amelie", "year": 2001, "genres": ["comedy", "romance"], "rating": 8.3}
]"#;

#[test]
fn test_load_from_json_str_keeps_file_order() {
    let catalog = Catalog::from_json_str(SMALL_CATALOG).unwrap();

    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.movies()[0].title, "Alien");
    assert_eq!(catalog.series_members("alien").len(), 2);
    assert!(catalog.movies()[2].series.is_none());
    assert_eq!(catalog.movies()[0].genres, vec![Genre::Horror, Genre::SciFi]);

    // "alien" is contained in both titles; the first entry wins
    assert_eq!(catalog.find_by_title("ALIEN").unwrap().id, 10);
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("catalog-test-{}.json", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(SMALL_CATALOG.as_bytes()).unwrap();
    }

    let catalog = Catalog::load_from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.get_movie(12).unwrap().title, "Amelie");
}

#[test]
fn test_unknown_genre_is_a_parse_error() {
    let json = r#"[{"id": 1, "title": "Stagecoach", "year": 1939, "genres": ["western"], "rating": 7.8}]"#;
    let err = Catalog::from_json_str(json).unwrap_err();
    assert!(matches!(err, CatalogError::ParseError(_)));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = Catalog::load_from_file(std::path::Path::new("/nonexistent/catalog.json")).unwrap_err();
    assert!(matches!(err, CatalogError::IoError(_)));
}
