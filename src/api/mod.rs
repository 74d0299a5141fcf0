//! HTTP API layer
//!
//! Routers, handlers, extractors, and the shared application state.

pub mod auth;
pub mod health;
pub mod jobs;
pub mod middleware;
pub mod router;
pub mod state;
pub mod types;

pub use router::create_router;
pub use state::AppState;
