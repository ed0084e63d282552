//! Authentication routes
//!
//! Signup, login, logout and the current-user lookup.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use snake_arena_shared::{AuthResponse, LoginRequest, MessageResponse, SignupRequest, User};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me))
}

/// Register a new user
///
/// POST /api/auth/signup
async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let response = UserService::signup(state.db(), state.jwt(), req).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Login with email and password
///
/// POST /api/auth/login
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let response = UserService::login(state.db(), state.jwt(), req).await?;
    Ok(Json(response))
}

/// POST /api/auth/logout
///
/// Nothing is stored server-side; the token stays valid until it expires.
async fn logout(_auth_user: AuthUser) -> Json<MessageResponse> {
    Json(MessageResponse::new("Logout successful"))
}

/// GET /api/auth/me
async fn me(auth_user: AuthUser) -> Json<User> {
    Json(auth_user.user.into())
}
