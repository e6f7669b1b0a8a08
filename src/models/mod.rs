use std::sync::Arc;

use serde::Serialize;

pub mod book;
pub mod celebrity;
pub mod event;
pub mod game;
pub mod movie;
pub mod podcast;
pub mod track;
pub mod trivia;
pub mod tv_show;

pub use book::{Book, BookQuery};
pub use celebrity::{CelebrityNews, CelebrityNewsQuery};
pub use event::{Event, EventQuery};
pub use game::{Game, GameQuery};
pub use movie::{Movie, MovieQuery};
pub use podcast::{Podcast, PodcastQuery};
pub use track::{PlaylistQuery, Track};
pub use trivia::{TriviaBank, TriviaItem, TriviaQuery};
pub use tv_show::{
    NextEpisodeQuery, NextEpisodeResponse, ShowCatalog, TrackRequest, TvShow, WatchedResponse,
};

/// Every static dataset, built once at startup and shared read-only
#[derive(Debug, Clone)]
pub struct Catalog {
    pub books: Vec<Book>,
    pub movies: Vec<Movie>,
    pub games: Vec<Game>,
    pub tracks: Vec<Track>,
    pub podcasts: Vec<Podcast>,
    pub events: Vec<Event>,
    pub trivia: TriviaBank,
    pub celebrities: Vec<CelebrityNews>,
    /// Shared with the progress tracker
    pub shows: Arc<ShowCatalog>,
}

impl Catalog {
    /// Loads the built-in datasets
    pub fn load() -> Self {
        Self {
            books: book::dataset(),
            movies: movie::dataset(),
            games: game::dataset(),
            tracks: track::dataset(),
            podcasts: podcast::dataset(),
            events: event::dataset(),
            trivia: trivia::dataset(),
            celebrities: celebrity::dataset(),
            shows: Arc::new(tv_show::dataset()),
        }
    }
}

/// Body of every health endpoint
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub message: &'static str,
}

impl HealthStatus {
    pub fn ok(message: &'static str) -> Self {
        Self {
            status: "ok",
            message,
        }
    }
}
