//! Authorization guard for mutating operations
//!
//! A demo account may browse freely but must never corrupt shared data, so
//! every mutating route requires this extractor instead of `RequireUser`.

use axum::{extract::FromRequestParts, http::request::Parts};

use super::auth::{AuthUser, RequireUser};
use crate::api::state::AppState;
use crate::api::types::ApiError;

/// Extractor that requires an authenticated, non-demo identity
///
/// The restriction is carried as a role on the identity itself (in the token
/// claims) rather than by comparing against a well-known account id.
#[derive(Debug, Clone)]
pub struct RequireWriteAccess(pub AuthUser);

impl FromRequestParts<AppState> for RequireWriteAccess {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let RequireUser(user) = RequireUser::from_request_parts(parts, state).await?;

        if !user.can_mutate() {
            return Err(ApiError::bad_request(
                "Not Allowed to edit the jobs in test user mode",
            ));
        }

        Ok(RequireWriteAccess(user))
    }
}
