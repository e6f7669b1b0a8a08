use std::sync::Arc;

use crate::models::Catalog;
use crate::services::{InMemoryProgressStore, ProgressStore, ProgressTracker};

/// Shared application state
///
/// The catalog is read-only; the tracker owns the only mutable state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub tracker: ProgressTracker,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Built-in datasets with an empty in-memory progress store
    pub fn new() -> Self {
        Self::with_store(Catalog::load(), Arc::new(InMemoryProgressStore::new()))
    }

    /// State backed by a caller-supplied progress store
    pub fn with_store(catalog: Catalog, store: Arc<dyn ProgressStore>) -> Self {
        let tracker = ProgressTracker::new(catalog.shows.clone(), store);
        let catalog = Arc::new(catalog);

        Self { catalog, tracker }
    }
}
