//! Small catalog query services: random recommendations from static
//! datasets plus a per-user TV episode tracker.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod query;
pub mod routes;
pub mod services;
pub mod state;

pub use config::{Config, ServiceKind};
pub use routes::create_router;
pub use state::AppState;
