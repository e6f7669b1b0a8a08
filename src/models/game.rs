use serde::{Deserialize, Serialize};

use crate::query::{CatalogQuery, Predicate};

use super::Catalog;

/// A video game suggestion
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Game {
    pub title: String,
    /// Platform name, or "All" for cross-platform titles
    pub platform: String,
    pub genre: String,
}

impl Game {
    fn new(title: &str, platform: &str, genre: &str) -> Self {
        Self {
            title: title.to_string(),
            platform: platform.to_string(),
            genre: genre.to_string(),
        }
    }
}

/// Query parameters for `/suggest-games`; both filters are substring matches
#[derive(Debug, Default, Deserialize)]
pub struct GameQuery {
    pub platform: Option<String>,
    pub genre: Option<String>,
    pub limit: Option<u32>,
}

impl CatalogQuery for GameQuery {
    type Record = Game;

    const ITEMS: &'static str = "games";
    const NOT_FOUND: &'static str = "No games found for given filters.";

    fn records(catalog: &Catalog) -> &[Game] {
        &catalog.games
    }

    fn limit(&self) -> Option<u32> {
        self.limit
    }

    fn predicate(&self) -> Predicate<Game> {
        Predicate::<Game>::builder()
            .contains(self.platform.as_deref(), |g| g.platform.as_str())
            .contains(self.genre.as_deref(), |g| g.genre.as_str())
            .build()
    }
}

pub fn dataset() -> Vec<Game> {
    vec![
        Game::new(
            "The Legend of Zelda: Breath of the Wild",
            "Nintendo",
            "adventure",
        ),
        Game::new("God of War", "PlayStation", "action"),
        Game::new("Minecraft", "All", "sandbox"),
        Game::new("Hades", "PC", "roguelike"),
        Game::new("Elden Ring", "PC", "RPG"),
        Game::new("Stardew Valley", "All", "simulation"),
        Game::new("Fortnite", "All", "battle royale"),
        Game::new("Celeste", "PC", "platformer"),
    ]
}
