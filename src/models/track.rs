use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::query::{ensure_in_range, CatalogQuery, Predicate};

use super::Catalog;

/// A music track for a curated playlist
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub mood: String,
    pub decade: i32,
}

impl Track {
    fn new(title: &str, artist: &str, genre: &str, mood: &str, decade: i32) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
            genre: genre.to_string(),
            mood: mood.to_string(),
            decade,
        }
    }
}

/// Query parameters for `/curate-playlist`
#[derive(Debug, Default, Deserialize)]
pub struct PlaylistQuery {
    pub genre: Option<String>,
    pub mood: Option<String>,
    pub decade: Option<i32>,
    pub limit: Option<u32>,
}

impl CatalogQuery for PlaylistQuery {
    type Record = Track;

    const ITEMS: &'static str = "tracks";
    const NOT_FOUND: &'static str = "No matching tracks found.";

    fn records(catalog: &Catalog) -> &[Track] {
        &catalog.tracks
    }

    fn limit(&self) -> Option<u32> {
        self.limit
    }

    fn validate(&self) -> AppResult<()> {
        ensure_in_range("decade", self.decade, 1950..=2020)
    }

    fn predicate(&self) -> Predicate<Track> {
        Predicate::<Track>::builder()
            .exact(self.genre.as_deref(), |t| t.genre.as_str())
            .exact(self.mood.as_deref(), |t| t.mood.as_str())
            .equals(self.decade, |t| t.decade)
            .build()
    }
}

pub fn dataset() -> Vec<Track> {
    vec![
        Track::new("Blinding Lights", "The Weeknd", "pop", "energetic", 2020),
        Track::new("Someone Like You", "Adele", "pop", "sad", 2010),
        Track::new("Bohemian Rhapsody", "Queen", "rock", "dramatic", 1970),
        Track::new("Smells Like Teen Spirit", "Nirvana", "rock", "angsty", 1990),
        Track::new("Lose Yourself", "Eminem", "hip-hop", "motivational", 2000),
        Track::new("Shape of You", "Ed Sheeran", "pop", "romantic", 2010),
        Track::new("Hallelujah", "Leonard Cohen", "folk", "peaceful", 1980),
        Track::new("Levitating", "Dua Lipa", "pop", "happy", 2020),
        Track::new("Imagine", "John Lennon", "rock", "hopeful", 1970),
        Track::new(
            "Blowin' in the Wind",
            "Bob Dylan",
            "folk",
            "thoughtful",
            1960,
        ),
    ]
}
