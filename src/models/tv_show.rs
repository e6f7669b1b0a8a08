use serde::{de, Deserialize, Deserializer, Serialize};

/// A show the tracker knows about
#[derive(Debug, Clone, PartialEq)]
pub struct TvShow {
    pub name: String,
    pub total_episodes: u32,
}

/// Read-only catalog of trackable shows, keyed by exact name
#[derive(Debug, Clone)]
pub struct ShowCatalog {
    shows: Vec<TvShow>,
}

impl ShowCatalog {
    pub fn new(shows: Vec<TvShow>) -> Self {
        Self { shows }
    }

    pub fn get(&self, name: &str) -> Option<&TvShow> {
        self.shows.iter().find(|show| show.name == name)
    }
}

/// Body of `POST /track-episode`
#[derive(Debug, Clone, Deserialize)]
pub struct TrackRequest {
    pub username: String,
    pub show_name: String,
    /// Integers, integral floats and numeric strings are all accepted
    #[serde(deserialize_with = "deserialize_episode")]
    pub episode_watched: i64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EpisodeInput {
    Integer(i64),
    Float(f64),
    Text(String),
}

fn deserialize_episode<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let episode = match EpisodeInput::deserialize(deserializer) {
        Ok(EpisodeInput::Integer(value)) => Some(value),
        Ok(EpisodeInput::Float(value)) if value.is_finite() && value.fract() == 0.0 => {
            Some(value as i64)
        }
        Ok(EpisodeInput::Text(value)) => value.trim().parse().ok(),
        Ok(EpisodeInput::Float(_)) | Err(_) => None,
    };

    episode.ok_or_else(|| de::Error::custom("episode_watched must be an integer"))
}

#[derive(Debug, Serialize)]
pub struct WatchedResponse {
    pub message: String,
}

/// Query parameters of `GET /next-episode`
#[derive(Debug, Deserialize)]
pub struct NextEpisodeQuery {
    pub username: String,
    pub show_name: String,
}

/// Next episode to watch; `next_episode` is null once the show is finished
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NextEpisodeResponse {
    pub next_episode: Option<u32>,
    pub total_episodes: u32,
    pub show_name: String,
}

pub fn dataset() -> ShowCatalog {
    let shows = [
        ("Stranger Things", 8),
        ("The Office", 24),
        ("Breaking Bad", 13),
        ("Game of Thrones", 10),
        ("The Mandalorian", 8),
    ]
    .into_iter()
    .map(|(name, total_episodes)| TvShow {
        name: name.to_string(),
        total_episodes,
    })
    .collect();

    ShowCatalog::new(shows)
}
