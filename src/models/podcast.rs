use serde::{Deserialize, Serialize};

use crate::query::{CatalogQuery, Predicate};

use super::Catalog;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Podcast {
    pub title: String,
    pub genre: String,
}

/// Query parameters for `/suggest-podcasts`
#[derive(Debug, Default, Deserialize)]
pub struct PodcastQuery {
    /// Substring of the podcast genre
    pub genre: Option<String>,
    pub limit: Option<u32>,
}

impl CatalogQuery for PodcastQuery {
    type Record = Podcast;

    const ITEMS: &'static str = "podcasts";
    const NOT_FOUND: &'static str = "No podcasts found for the given genre.";

    fn records(catalog: &Catalog) -> &[Podcast] {
        &catalog.podcasts
    }

    fn limit(&self) -> Option<u32> {
        self.limit
    }

    fn predicate(&self) -> Predicate<Podcast> {
        Predicate::<Podcast>::builder()
            .contains(self.genre.as_deref(), |p| p.genre.as_str())
            .build()
    }
}

pub fn dataset() -> Vec<Podcast> {
    [
        ("Science Vs", "science"),
        ("The Daily", "news"),
        ("Hardcore History", "history"),
        ("99% Invisible", "design"),
        ("Darknet Diaries", "cybersecurity"),
        ("My Favorite Murder", "true crime"),
    ]
    .into_iter()
    .map(|(title, genre)| Podcast {
        title: title.to_string(),
        genre: genre.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_substring() {
        let query = PodcastQuery {
            genre: Some("crime".to_string()),
            limit: None,
        };
        let predicate = query.predicate();
        let matched: Vec<_> = dataset()
            .into_iter()
            .filter(|p| predicate.matches(p))
            .map(|p| p.title)
            .collect();

        assert_eq!(matched, vec!["My Favorite Murder"]);
    }
}
