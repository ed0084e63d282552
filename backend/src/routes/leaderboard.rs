//! Leaderboard routes

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::services::LeaderboardService;
use crate::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use snake_arena_shared::{
    LeaderboardEntry, LeaderboardQuery, SubmitScoreRequest, SubmitScoreResponse,
};

/// Create leaderboard routes
pub fn leaderboard_routes() -> Router<AppState> {
    Router::new().route("/", get(get_leaderboard).post(submit_score))
}

/// GET /api/leaderboard?mode=&limit= - Ranked scores, public
async fn get_leaderboard(
    State(state): State<AppState>,
    query: Result<Query<LeaderboardQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<LeaderboardEntry>>> {
    let Query(query) = query.map_err(|e| ApiError::Validation(e.body_text()))?;
    let entries = LeaderboardService::top_scores(state.db(), query).await?;
    Ok(Json(entries))
}

/// POST /api/leaderboard - Submit a score for the authenticated user
async fn submit_score(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<SubmitScoreRequest>,
) -> ApiResult<(StatusCode, Json<SubmitScoreResponse>)> {
    let entry = LeaderboardService::submit_score(state.db(), &auth.user, req).await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitScoreResponse {
            message: "Score submitted successfully".to_string(),
            id: entry.id,
        }),
    ))
}
