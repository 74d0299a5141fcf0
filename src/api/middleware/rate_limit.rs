//! Per-source request rate limiting
//!
//! Keyed limiter over the client IP using a 15-minute window by default.
//! Applied globally ahead of the handlers, with a stricter quota layered on
//! the login/register routes.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use governor::{Quota, RateLimiter, clock::DefaultClock, state::keyed::DefaultKeyedStateStore};

use crate::api::types::ApiError;

type KeyedLimiter = RateLimiter<IpAddr, DefaultKeyedStateStore<IpAddr>, DefaultClock>;

/// Shared limiter state, cheap to clone into the middleware
#[derive(Clone)]
pub struct RateLimitState {
    limiter: Arc<KeyedLimiter>,
}

impl RateLimitState {
    /// Allow `quota` requests per source over `window`
    pub fn new(quota: u32, window: Duration) -> Self {
        let burst = NonZeroU32::new(quota).unwrap_or(NonZeroU32::MIN);
        let period = (window / burst.get()).max(Duration::from_millis(1));

        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_hour(burst))
            .allow_burst(burst);

        Self {
            limiter: Arc::new(RateLimiter::keyed(quota)),
        }
    }

    /// Check whether a request from `ip` is within quota
    pub fn check(&self, ip: IpAddr) -> bool {
        self.limiter.check_key(&ip).is_ok()
    }
}

/// Middleware rejecting over-quota sources with 429
pub async fn rate_limit_middleware(
    State(state): State<RateLimitState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));

    if !state.check(ip) {
        return ApiError::rate_limited(
            "Too many requests from this IP. Please try again after 15 minutes",
        )
        .into_response();
    }

    next.run(request).await
}
