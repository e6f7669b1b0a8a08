use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::{NextEpisodeResponse, ShowCatalog, TvShow},
};

/// Storage for per-user watch progress
///
/// Implementations must apply [`ProgressStore::record_watched`] atomically per
/// (username, show) key: the stored value only ever grows.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ProgressStore: Send + Sync {
    /// Raises the stored episode to `episode` if it is higher and returns the
    /// value now stored
    async fn record_watched(
        &self,
        username: &str,
        show_name: &str,
        episode: u32,
    ) -> AppResult<u32>;

    /// Highest episode watched, 0 when nothing has been tracked
    async fn watched(&self, username: &str, show_name: &str) -> AppResult<u32>;
}

/// Process-local progress map, username -> show -> highest episode
#[derive(Debug, Default)]
pub struct InMemoryProgressStore {
    entries: RwLock<HashMap<String, HashMap<String, u32>>>,
}

impl InMemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ProgressStore for InMemoryProgressStore {
    async fn record_watched(
        &self,
        username: &str,
        show_name: &str,
        episode: u32,
    ) -> AppResult<u32> {
        let mut entries = self.entries.write().await;
        let watched = entries
            .entry(username.to_string())
            .or_default()
            .entry(show_name.to_string())
            .or_insert(0);
        *watched = (*watched).max(episode);
        Ok(*watched)
    }

    async fn watched(&self, username: &str, show_name: &str) -> AppResult<u32> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(username)
            .and_then(|shows| shows.get(show_name))
            .copied()
            .unwrap_or(0))
    }
}

/// Validates tracker requests against the show catalog and updates progress
#[derive(Clone)]
pub struct ProgressTracker {
    shows: Arc<ShowCatalog>,
    store: Arc<dyn ProgressStore>,
}

impl ProgressTracker {
    pub fn new(shows: Arc<ShowCatalog>, store: Arc<dyn ProgressStore>) -> Self {
        Self { shows, store }
    }

    fn show(&self, show_name: &str) -> AppResult<&TvShow> {
        self.shows
            .get(show_name)
            .ok_or_else(|| AppError::NotFound("TV show not found.".to_string()))
    }

    /// Records that `username` watched `episode` of `show_name`
    ///
    /// Replaying an episode at or below the stored one leaves progress unchanged.
    pub async fn track(&self, username: &str, show_name: &str, episode: i64) -> AppResult<u32> {
        let show = self.show(show_name)?;
        let total = show.total_episodes;

        let episode = u32::try_from(episode)
            .ok()
            .filter(|ep| (1..=total).contains(ep))
            .ok_or_else(|| {
                AppError::InvalidArgument(format!(
                    "Invalid episode. Must be between 1 and {}.",
                    total
                ))
            })?;

        let watched = self
            .store
            .record_watched(username, show_name, episode)
            .await?;

        tracing::debug!(
            username = %username,
            show_name = %show_name,
            episode,
            watched,
            "Progress updated"
        );

        Ok(watched)
    }

    /// Episode `username` should watch next, or none once the show is complete
    pub async fn next_episode(
        &self,
        username: &str,
        show_name: &str,
    ) -> AppResult<NextEpisodeResponse> {
        let show = self.show(show_name)?;
        let watched = self.store.watched(username, show_name).await?;

        let next_episode = if watched < show.total_episodes {
            Some(watched + 1)
        } else {
            None
        };

        Ok(NextEpisodeResponse {
            next_episode,
            total_episodes: show.total_episodes,
            show_name: show.name.clone(),
        })
    }
}
