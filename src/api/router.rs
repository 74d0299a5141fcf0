use std::time::Duration;

use axum::{Router, middleware, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::auth;
use super::health;
use super::jobs;
use super::middleware::{RateLimitState, rate_limit_middleware, security_headers_middleware};
use super::state::AppState;
use super::types::ApiError;
use crate::config::RateLimitConfig;

/// Create the full router with application state
///
/// The global limiter covers every route; login and register carry their own
/// stricter limiter inside the auth router.
pub fn create_router(state: AppState, rate_limit: &RateLimitConfig) -> Router {
    let window = Duration::from_secs(rate_limit.window_secs);
    let global_limiter = RateLimitState::new(rate_limit.global_quota, window);
    let auth_limiter = RateLimitState::new(rate_limit.auth_quota, window);

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1/auth", auth::create_auth_router(auth_limiter))
        .nest("/api/v1/jobs", jobs::create_jobs_router())
        .fallback(route_not_found)
        .with_state(state)
        .layer(middleware::from_fn_with_state(
            global_limiter,
            rate_limit_middleware,
        ))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn route_not_found() -> ApiError {
    ApiError::not_found("Route does not exist")
}
