//! Authentication API endpoints
//!
//! Registration, login, and profile update. Register and login carry a
//! stricter rate limit than the rest of the API.

use axum::{Router, extract::State, http::StatusCode, middleware, routing::post};
use serde::{Deserialize, Serialize};

use crate::api::middleware::{RateLimitState, RequireWriteAccess, rate_limit_middleware};
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::user::User;
use crate::infrastructure::user::{RegisterRequest, UpdateProfileRequest};

/// Create the authentication router
pub fn create_auth_router(auth_limiter: RateLimitState) -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route_layer(middleware::from_fn_with_state(
            auth_limiter,
            rate_limit_middleware,
        ))
        .route("/updateUser", post(update_user))
}

/// Registration request body
#[derive(Debug, Deserialize)]
pub struct RegisterBody {
    pub name: String,
    pub email: String,
    pub password: String,
    pub lastname: Option<String>,
    pub location: Option<String>,
}

/// Login request body; fields optional so an incomplete body yields the
/// domain's own 400 instead of a body-parse failure
#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Profile update request body
#[derive(Debug, Deserialize)]
pub struct UpdateUserBody {
    pub name: String,
    pub email: String,
    pub lastname: String,
    pub location: String,
}

/// User fields safe to expose
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub name: String,
    pub email: String,
    pub lastname: String,
    pub location: String,
}

impl UserResponse {
    fn from_user(user: &User) -> Self {
        Self {
            name: user.name().to_string(),
            email: user.email().to_string(),
            lastname: user.lastname().to_string(),
            location: user.location().to_string(),
        }
    }
}

/// Response for every auth endpoint: the user plus a fresh token
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: String,
}

/// Register a new user
///
/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterBody>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let user = state
        .user_service
        .register(RegisterRequest {
            name: body.name,
            email: body.email,
            password: body.password,
            lastname: body.lastname,
            location: body.location,
        })
        .await?;

    let token = state.token_service.issue(&user)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user: UserResponse::from_user(&user),
            token,
        }),
    ))
}

/// Login with email and password
///
/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> Result<Json<AuthResponse>, ApiError> {
    let (email, password) = match (body.email.as_deref(), body.password.as_deref()) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            (email, password)
        }
        _ => return Err(ApiError::bad_request("Please Provide Email and Password")),
    };

    let user = state.user_service.authenticate(email, password).await?;
    let token = state.token_service.issue(&user)?;

    Ok(Json(AuthResponse {
        user: UserResponse::from_user(&user),
        token,
    }))
}

/// Update the authenticated user's profile and re-issue a token
///
/// POST /api/v1/auth/updateUser
pub async fn update_user(
    State(state): State<AppState>,
    RequireWriteAccess(identity): RequireWriteAccess,
    Json(body): Json<UpdateUserBody>,
) -> Result<Json<AuthResponse>, ApiError> {
    let user = state
        .user_service
        .update_profile(
            identity.user_id,
            UpdateProfileRequest {
                name: body.name,
                email: body.email,
                lastname: body.lastname,
                location: body.location,
            },
        )
        .await?;

    // The name inside the token may have changed; issue a fresh one.
    let token = state.token_service.issue(&user)?;

    Ok(Json(AuthResponse {
        user: UserResponse::from_user(&user),
        token,
    }))
}
