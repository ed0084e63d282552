//! Authentication guard
//!
//! An axum extractor that turns a bearer token into the user it belongs to.
//! The token must verify and its subject must still match a stored user.

use crate::error::ApiError;
use crate::repositories::{UserRecord, UserRepository};
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use snake_arena_shared::AuthError;
use tracing::debug;

/// Authenticated user resolved from the bearer token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: UserRecord,
}

/// Pull the raw token out of `Authorization: Bearer <token>`
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::InvalidScheme)
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let token = bearer_token(&parts.headers)?;
        let claims = app_state.jwt().validate(token)?;

        // A valid signature is not enough: the account must still exist
        let user = UserRepository::find_by_email(app_state.db(), &claims.sub)
            .await?
            .ok_or_else(|| {
                debug!("Token subject has no matching user");
                ApiError::from(AuthError::UnknownUser)
            })?;

        Ok(AuthUser { user })
    }
}
