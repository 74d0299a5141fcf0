//! Job application tracking API
//!
//! A JSON backend for tracking job applications per user, with:
//! - Email/password registration and login issuing JWTs
//! - Per-user job CRUD with filtering, sorting, and pagination
//! - Aggregate status and monthly application statistics
//! - Demo accounts that can browse but never mutate data

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::AppState;
use infrastructure::auth::{JwtConfig, TokenService};
use infrastructure::job::{JobService, PostgresJobRepository};
use infrastructure::storage::{PostgresConfig, PostgresMigrator};
use infrastructure::user::{Argon2Hasher, PostgresUserRepository, UserService};

/// Create the application state with default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
///
/// Selects the storage backend from config: `postgres` connects to the
/// database and runs pending migrations, anything else falls back to
/// in-memory repositories for local development.
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let jwt = JwtConfig::new(resolve_jwt_secret(config), config.auth.jwt_lifetime_hours);

    if config.storage.backend != "postgres" {
        info!("Using in-memory storage");
        return Ok(AppState::in_memory(jwt));
    }

    let database_url = config
        .database_url()
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is required for the postgres backend"))?;

    info!("Connecting to PostgreSQL...");
    let pg_config = PostgresConfig {
        url: database_url,
        max_connections: config.storage.max_connections,
        min_connections: config.storage.min_connections,
        connect_timeout_secs: config.storage.connect_timeout_secs,
    };
    let pool = infrastructure::storage::connect(&pg_config).await?;
    info!("PostgreSQL connection established");

    PostgresMigrator::new(pool.clone()).run().await?;

    build_postgres_state(pool, jwt)
}

fn build_postgres_state(pool: sqlx::PgPool, jwt: JwtConfig) -> anyhow::Result<AppState> {
    Ok(AppState {
        user_service: Arc::new(UserService::new(
            Arc::new(PostgresUserRepository::new(pool.clone())),
            Arc::new(Argon2Hasher::new()),
        )),
        job_service: Arc::new(JobService::new(Arc::new(PostgresJobRepository::new(pool)))),
        token_service: Arc::new(TokenService::new(jwt)),
    })
}

const PLACEHOLDER_JWT_SECRET: &str = "change-me-in-production";

/// Use the configured secret unless it is empty or still the placeholder,
/// in which case generate a random one. Tokens signed with a generated
/// secret do not survive a restart.
fn resolve_jwt_secret(config: &AppConfig) -> String {
    let secret = config.auth.jwt_secret.as_str();

    if !secret.is_empty() && secret != PLACEHOLDER_JWT_SECRET {
        return secret.to_string();
    }

    tracing::warn!(
        "No JWT secret configured. Generating a random secret; \
         set APP__AUTH__JWT_SECRET for persistent sessions."
    );
    generate_random_secret()
}

fn generate_random_secret() -> String {
    use rand::Rng;
    use rand::distributions::Alphanumeric;

    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}
