use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::query::{ensure_in_range, CatalogQuery, Predicate};

use super::Catalog;

/// A movie recommendation
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Movie {
    pub title: String,
    pub genre: String,
    pub language: String,
    pub year: i32,
}

impl Movie {
    fn new(title: &str, genre: &str, language: &str, year: i32) -> Self {
        Self {
            title: title.to_string(),
            genre: genre.to_string(),
            language: language.to_string(),
            year,
        }
    }
}

/// Query parameters for `/recommend`
///
/// Genre and language are both full matches.
#[derive(Debug, Default, Deserialize)]
pub struct MovieQuery {
    pub genre: Option<String>,
    pub language: Option<String>,
    /// Release year
    pub year: Option<i32>,
    pub limit: Option<u32>,
}

impl CatalogQuery for MovieQuery {
    type Record = Movie;

    const ITEMS: &'static str = "movies";
    const NOT_FOUND: &'static str = "No matching movies found.";

    fn records(catalog: &Catalog) -> &[Movie] {
        &catalog.movies
    }

    fn limit(&self) -> Option<u32> {
        self.limit
    }

    fn validate(&self) -> AppResult<()> {
        ensure_in_range("year", self.year, 1900..=2050)
    }

    fn predicate(&self) -> Predicate<Movie> {
        Predicate::<Movie>::builder()
            .exact(self.genre.as_deref(), |m| m.genre.as_str())
            .exact(self.language.as_deref(), |m| m.language.as_str())
            .equals(self.year, |m| m.year)
            .build()
    }
}

pub fn dataset() -> Vec<Movie> {
    vec![
        Movie::new("Inception", "sci-fi", "english", 2010),
        Movie::new("Interstellar", "sci-fi", "english", 2014),
        Movie::new("Parasite", "thriller", "korean", 2019),
        Movie::new("Dangal", "drama", "hindi", 2016),
        Movie::new("Your Name", "romance", "japanese", 2016),
        Movie::new("The Dark Knight", "action", "english", 2008),
        Movie::new("Spirited Away", "fantasy", "japanese", 2001),
        Movie::new("3 Idiots", "comedy", "hindi", 2009),
    ]
}
