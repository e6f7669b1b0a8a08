use serde::Deserialize;

/// Prefix shared by every configuration environment variable
const ENV_PREFIX: &str = "CATALOG_";

/// Which catalog service the process exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceKind {
    /// Every service, each nested under its own path prefix
    All,
    Books,
    Movies,
    Games,
    Music,
    Podcasts,
    Events,
    Trivia,
    CelebrityNews,
    TvShows,
}

impl ServiceKind {
    /// Individual services, in mount order
    pub const SERVICES: [ServiceKind; 9] = [
        ServiceKind::Books,
        ServiceKind::Movies,
        ServiceKind::Games,
        ServiceKind::Music,
        ServiceKind::Podcasts,
        ServiceKind::Events,
        ServiceKind::Trivia,
        ServiceKind::CelebrityNews,
        ServiceKind::TvShows,
    ];

    /// Path prefix used when all services share one listener
    pub fn mount_path(&self) -> &'static str {
        match self {
            ServiceKind::All => "/",
            ServiceKind::Books => "/books",
            ServiceKind::Movies => "/movies",
            ServiceKind::Games => "/games",
            ServiceKind::Music => "/music",
            ServiceKind::Podcasts => "/podcasts",
            ServiceKind::Events => "/events",
            ServiceKind::Trivia => "/trivia",
            ServiceKind::CelebrityNews => "/celebrity-news",
            ServiceKind::TvShows => "/tv-shows",
        }
    }

    /// Message returned by the service's health endpoint
    pub fn health_message(&self) -> &'static str {
        match self {
            ServiceKind::All => "Catalog API is online.",
            ServiceKind::Books => "Book Suggestor API is online.",
            ServiceKind::Movies => "Movie Recommender API is running.",
            ServiceKind::Games => "Game Finder API is online.",
            ServiceKind::Music => "Music Playlist Curator API is running.",
            ServiceKind::Podcasts => "Podcast Selector API is online.",
            ServiceKind::Events => "Event Locator API is online.",
            ServiceKind::Trivia => "Trivia Provider API is online.",
            ServiceKind::CelebrityNews => "Celebrity News Updater API is online.",
            ServiceKind::TvShows => "TV Show Tracker API is online.",
        }
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Service to expose on this listener
    #[serde(default = "default_service")]
    pub service: ServiceKind,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_service() -> ServiceKind {
    ServiceKind::All
}

impl Config {
    /// Load configuration from `CATALOG_*` environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX)
            .from_iter(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Socket address string for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
