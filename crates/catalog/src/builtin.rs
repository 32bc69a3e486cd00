//! The built-in 50-movie catalog.
//!
//! Entry order is significant: title lookup takes the first match in this
//! order and ranking ties keep it.

use crate::types::{Genre, Movie, MovieId};

use Genre::*;

type Entry = (MovieId, &'static str, u16, &'static [Genre], f32, Option<&'static str>);

const ENTRIES: &[Entry] = &[
    // Matrix series
    (1, "The Matrix", 1999, &[SciFi, Action], 8.7, Some("matrix")),
    (2, "Matrix Reloaded", 2003, &[SciFi, Action], 7.2, Some("matrix")),
    (3, "Matrix Revolutions", 2003, &[SciFi, Action], 6.8, Some("matrix")),
    (4, "Matrix Resurrections", 2021, &[SciFi, Action], 5.7, Some("matrix")),
    // Star Wars series
    (5, "Star Wars: A New Hope", 1977, &[SciFi, Action], 8.6, Some("star_wars")),
    (6, "Star Wars: The Empire Strikes Back", 1980, &[SciFi, Action], 8.7, Some("star_wars")),
    (7, "Star Wars: Return of the Jedi", 1983, &[SciFi, Action], 8.3, Some("star_wars")),
    // Classics
    (8, "Inception", 2010, &[SciFi, Thriller], 8.8, None),
    (9, "The Grand Budapest Hotel", 2014, &[Comedy, Drama], 8.1, None),
    (10, "Parasite", 2019, &[Thriller, Drama], 8.6, None),
    (11, "Spirited Away", 2001, &[Animation, Fantasy], 9.3, None),
    (12, "Get Out", 2017, &[Horror, Thriller], 7.7, None),
    (13, "La La Land", 2016, &[Romance, Drama], 8.0, None),
    (14, "Mad Max: Fury Road", 2015, &[Action, Thriller], 8.1, None),
    (15, "Her", 2013, &[Romance, SciFi], 8.0, None),
    // 2023
    (16, "Oppenheimer", 2023, &[Drama, Thriller], 8.3, None),
    (17, "Barbie", 2023, &[Comedy, Fantasy], 6.9, None),
    (18, "Guardians of the Galaxy Vol. 3", 2023, &[Action, SciFi], 7.9, None),
    (19, "Spider-Man: Across the Spider-Verse", 2023, &[Animation, Action], 8.7, None),
    (20, "John Wick: Chapter 4", 2023, &[Action, Thriller], 7.7, None),
    (21, "Scream VI", 2023, &[Horror, Thriller], 6.5, None),
    (22, "The Little Mermaid", 2023, &[Fantasy, Romance], 7.2, None),
    (23, "Fast X", 2023, &[Action, Thriller], 5.8, None),
    (24, "The Super Mario Bros. Movie", 2023, &[Animation, Comedy], 7.0, None),
    (25, "Cocaine Bear", 2023, &[Comedy, Thriller], 5.9, None),
    // 2024
    (26, "Dune: Part Two", 2024, &[SciFi, Action], 8.5, None),
    (27, "Inside Out 2", 2024, &[Animation, Comedy], 7.6, None),
    (28, "Deadpool & Wolverine", 2024, &[Action, Comedy], 7.7, None),
    (29, "Wicked: Part One", 2024, &[Fantasy, Romance], 8.2, None),
    (30, "A Quiet Place: Day One", 2024, &[Horror, Thriller], 6.7, None),
    (31, "Bad Boys: Ride or Die", 2024, &[Action, Comedy], 6.6, None),
    (32, "Beetlejuice Beetlejuice", 2024, &[Comedy, Horror], 7.0, None),
    (33, "Terrifier 3", 2024, &[Horror], 6.9, None),
    (34, "Gladiator II", 2024, &[Action, Drama], 6.8, None),
    (35, "Moana 2", 2024, &[Animation, Fantasy], 7.0, None),
    // 2025
    (36, "Captain America: Brave New World", 2025, &[Action, SciFi], 7.5, None),
    (37, "Thunderbolts", 2025, &[Action, Comedy], 7.2, None),
    (38, "The Fantastic Four: First Steps", 2025, &[Action, SciFi], 7.3, None),
    (39, "Superman", 2025, &[Action, SciFi], 7.8, None),
    (40, "How to Train Your Dragon", 2025, &[Animation, Fantasy], 7.4, None),
    (41, "Lilo & Stitch", 2025, &[Animation, Comedy], 7.1, None),
    (42, "The Batman Part II", 2025, &[Action, Thriller], 8.0, None),
    (43, "Blade", 2025, &[Action, Horror], 7.0, None),
    (44, "Avatar: Fire and Ash", 2025, &[SciFi, Action], 7.9, None),
    (45, "Mission: Impossible 8", 2025, &[Action, Thriller], 7.6, None),
    // Genre coverage
    (46, "The Notebook", 2004, &[Romance, Drama], 7.8, None),
    (47, "Titanic", 1997, &[Romance, Drama], 7.9, None),
    (48, "The Conjuring", 2013, &[Horror, Thriller], 7.5, None),
    (49, "Hereditary", 2018, &[Horror, Thriller], 7.3, None),
    (50, "Won't You Be My Neighbor?", 2018, &[Documentary], 8.4, None),
];

/// Materialize the built-in table in catalog order
pub fn builtin_movies() -> Vec<Movie> {
    ENTRIES
        .iter()
        .map(|&(id, title, year, genres, rating, series)| Movie {
            id,
            title: title.to_string(),
            year,
            genres: genres.to_vec(),
            rating,
            series: series.map(str::to_string),
        })
        .collect()
}
