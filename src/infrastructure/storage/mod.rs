//! Storage backends

mod migrations;
mod postgres;

pub use migrations::PostgresMigrator;
pub use postgres::{PostgresConfig, connect};
