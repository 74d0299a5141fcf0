//! API middleware components

pub mod auth;
pub mod demo_guard;
pub mod rate_limit;
pub mod security;

pub use auth::{AuthUser, RequireUser};
pub use demo_guard::RequireWriteAccess;
pub use rate_limit::{RateLimitState, rate_limit_middleware};
pub use security::security_headers_middleware;
