//! Leaderboard repository for database operations
//!
//! Entries are append-only: there is no update or delete.

use super::{StoreError, StoreResult};
use chrono::{DateTime, Utc};
use snake_arena_shared::{GameMode, LeaderboardEntry};
use sqlx::{Acquire, Postgres};
use uuid::Uuid;

/// Leaderboard record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LeaderboardRecord {
    pub id: Uuid,
    pub username: String,
    pub score: i32,
    pub mode: String,
    pub timestamp: DateTime<Utc>,
}

impl TryFrom<LeaderboardRecord> for LeaderboardEntry {
    type Error = StoreError;

    fn try_from(record: LeaderboardRecord) -> Result<Self, Self::Error> {
        let mode = record.mode.parse::<GameMode>().map_err(|e| {
            StoreError::CorruptState(format!("leaderboard entry {}: {}", record.id, e))
        })?;

        Ok(LeaderboardEntry {
            id: record.id,
            username: record.username,
            score: record.score,
            mode,
            timestamp: record.timestamp,
        })
    }
}

/// Leaderboard repository
pub struct LeaderboardRepository;

impl LeaderboardRepository {
    /// Insert a score entry
    pub async fn add<'c, A>(conn: A, entry: &LeaderboardEntry) -> StoreResult<()>
    where
        A: Acquire<'c, Database = Postgres>,
    {
        let mut conn = conn.acquire().await?;

        sqlx::query(
            r#"
            INSERT INTO leaderboard (id, username, score, mode, timestamp)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(entry.id)
        .bind(&entry.username)
        .bind(entry.score)
        .bind(entry.mode.as_str())
        .bind(entry.timestamp)
        .execute(&mut *conn)
        .await?;

        Ok(())
    }

    /// Highest scores first, optionally restricted to one mode
    ///
    /// Ties are broken by earliest submission, then by id, so repeated
    /// queries return the same order. `limit` is trusted; callers bound it.
    pub async fn top<'c, A>(
        conn: A,
        mode: Option<GameMode>,
        limit: i64,
    ) -> StoreResult<Vec<LeaderboardEntry>>
    where
        A: Acquire<'c, Database = Postgres>,
    {
        let mut conn = conn.acquire().await?;

        let records = sqlx::query_as::<_, LeaderboardRecord>(
            r#"
            SELECT id, username, score, mode, timestamp
            FROM leaderboard
            WHERE ($1::text IS NULL OR mode = $1)
            ORDER BY score DESC, timestamp ASC, id ASC
            LIMIT $2
            "#,
        )
        .bind(mode.map(|m| m.as_str()))
        .bind(limit)
        .fetch_all(&mut *conn)
        .await?;

        records.into_iter().map(LeaderboardEntry::try_from).collect()
    }
}
