//! Active game routes

use crate::error::ApiResult;
use crate::services::GameService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use snake_arena_shared::ActiveGame;

/// Create game routes
pub fn game_routes() -> Router<AppState> {
    Router::new().route("/active", get(list_active_games))
}

/// GET /api/games/active - Games in progress, public
async fn list_active_games(State(state): State<AppState>) -> ApiResult<Json<Vec<ActiveGame>>> {
    let games = GameService::list_active(state.db()).await?;
    Ok(Json(games))
}
