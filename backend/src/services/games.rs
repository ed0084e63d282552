//! Active game service

use crate::error::ApiError;
use crate::repositories::ActiveGameRepository;
use snake_arena_shared::ActiveGame;
use sqlx::PgPool;
use tracing::{debug, instrument};

/// Active game operations
pub struct GameService;

impl GameService {
    /// Every game currently in progress
    #[instrument(skip_all)]
    pub async fn list_active(pool: &PgPool) -> Result<Vec<ActiveGame>, ApiError> {
        let games = ActiveGameRepository::list(pool).await?;
        debug!(count = games.len(), "Listed active games");
        Ok(games)
    }
}
