pub mod celebrity_news;
pub mod progress;
pub mod trivia;

pub use progress::{InMemoryProgressStore, ProgressStore, ProgressTracker};
