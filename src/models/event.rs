use serde::{Deserialize, Serialize};

use crate::query::{CatalogQuery, Predicate};

use super::Catalog;

/// A local event
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Event {
    pub name: String,
    /// City the event takes place in
    pub location: String,
    pub category: String,
}

/// Query parameters for `/find-events`; both filters are substring matches
#[derive(Debug, Default, Deserialize)]
pub struct EventQuery {
    pub location: Option<String>,
    pub category: Option<String>,
    pub limit: Option<u32>,
}

impl CatalogQuery for EventQuery {
    type Record = Event;

    const ITEMS: &'static str = "events";
    const NOT_FOUND: &'static str = "No events found for given filters.";

    fn records(catalog: &Catalog) -> &[Event] {
        &catalog.events
    }

    fn limit(&self) -> Option<u32> {
        self.limit
    }

    fn predicate(&self) -> Predicate<Event> {
        Predicate::<Event>::builder()
            .contains(self.location.as_deref(), |e| e.location.as_str())
            .contains(self.category.as_deref(), |e| e.category.as_str())
            .build()
    }
}

pub fn dataset() -> Vec<Event> {
    [
        ("Coldplay Concert", "Delhi", "concert"),
        ("Startup Expo", "Bangalore", "business"),
        ("Comic Con", "Mumbai", "entertainment"),
        ("Food Fest", "Chennai", "food"),
        ("AI Summit", "Hyderabad", "tech"),
    ]
    .into_iter()
    .map(|(name, location, category)| Event {
        name: name.to_string(),
        location: location.to_string(),
        category: category.to_string(),
    })
    .collect()
}
