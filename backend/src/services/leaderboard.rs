//! Leaderboard service
//!
//! Score submission and ranked retrieval.

use crate::error::ApiError;
use crate::repositories::{LeaderboardRepository, UserRecord};
use chrono::Utc;
use snake_arena_shared::validation::validate_leaderboard_limit;
use snake_arena_shared::{GameMode, LeaderboardEntry, LeaderboardQuery, SubmitScoreRequest};
use sqlx::PgPool;
use tracing::{info, instrument};
use uuid::Uuid;

/// Leaderboard operations
pub struct LeaderboardService;

impl LeaderboardService {
    /// Record a score for the authenticated user, timestamped now
    #[instrument(skip_all, fields(user_id = %user.id, mode = %req.mode))]
    pub async fn submit_score(
        pool: &PgPool,
        user: &UserRecord,
        req: SubmitScoreRequest,
    ) -> Result<LeaderboardEntry, ApiError> {
        let entry = LeaderboardEntry {
            id: Uuid::new_v4(),
            username: user.username.clone(),
            score: req.score,
            mode: req.mode,
            timestamp: Utc::now(),
        };

        LeaderboardRepository::add(pool, &entry).await?;
        info!(entry_id = %entry.id, score = entry.score, "Score submitted");

        Ok(entry)
    }

    /// Ranked entries for a query, after resolving and bounding the limit
    pub async fn top_scores(
        pool: &PgPool,
        query: LeaderboardQuery,
    ) -> Result<Vec<LeaderboardEntry>, ApiError> {
        let (mode, limit) = Self::resolve_query(&query)?;
        Ok(LeaderboardRepository::top(pool, mode, limit).await?)
    }

    fn resolve_query(query: &LeaderboardQuery) -> Result<(Option<GameMode>, i64), ApiError> {
        let limit = validate_leaderboard_limit(query.limit)
            .map_err(|msg| ApiError::Validation(format!("Limit: {}", msg)))?;
        Ok((query.mode, limit))
    }
}
