//! Active game repository for database operations
//!
//! Snake body and food position are stored as JSON text columns. This module
//! is the only writer of those columns, so a decode failure on read means an
//! earlier write went wrong and is reported as [`StoreError::CorruptState`].

use super::{StoreError, StoreResult};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use snake_arena_shared::{ActiveGame, GameMode, Point};
use sqlx::{Acquire, Postgres};
use uuid::Uuid;

/// Active game record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ActiveGameRecord {
    pub id: Uuid,
    pub username: String,
    pub score: i32,
    pub mode: String,
    pub snake: String,
    pub food: String,
    pub updated_at: DateTime<Utc>,
}

fn decode_json<T: DeserializeOwned>(id: Uuid, column: &str, raw: &str) -> StoreResult<T> {
    serde_json::from_str(raw)
        .map_err(|e| StoreError::CorruptState(format!("active game {} {}: {}", id, column, e)))
}

fn encode_json<T: serde::Serialize>(id: Uuid, column: &str, value: &T) -> StoreResult<String> {
    serde_json::to_string(value)
        .map_err(|e| StoreError::CorruptState(format!("active game {} {}: {}", id, column, e)))
}

impl TryFrom<ActiveGameRecord> for ActiveGame {
    type Error = StoreError;

    fn try_from(record: ActiveGameRecord) -> Result<Self, Self::Error> {
        let mode = record
            .mode
            .parse::<GameMode>()
            .map_err(|e| StoreError::CorruptState(format!("active game {}: {}", record.id, e)))?;
        let snake: Vec<Point> = decode_json(record.id, "snake", &record.snake)?;
        let food: Point = decode_json(record.id, "food", &record.food)?;

        Ok(ActiveGame {
            id: record.id,
            username: record.username,
            score: record.score,
            mode,
            snake,
            food,
        })
    }
}

/// Active game repository
pub struct ActiveGameRepository;

impl ActiveGameRepository {
    /// All games currently in progress, most recently updated first
    pub async fn list<'c, A>(conn: A) -> StoreResult<Vec<ActiveGame>>
    where
        A: Acquire<'c, Database = Postgres>,
    {
        let mut conn = conn.acquire().await?;

        let records = sqlx::query_as::<_, ActiveGameRecord>(
            r#"
            SELECT id, username, score, mode, snake, food, updated_at
            FROM active_games
            ORDER BY updated_at DESC, id ASC
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        records.into_iter().map(ActiveGame::try_from).collect()
    }

    /// Insert a game snapshot, or overwrite the stored one with the same id
    pub async fn save<'c, A>(conn: A, game: &ActiveGame) -> StoreResult<()>
    where
        A: Acquire<'c, Database = Postgres>,
    {
        let snake = encode_json(game.id, "snake", &game.snake)?;
        let food = encode_json(game.id, "food", &game.food)?;

        let mut conn = conn.acquire().await?;

        sqlx::query(
            r#"
            INSERT INTO active_games (id, username, score, mode, snake, food, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW())
            ON CONFLICT (id) DO UPDATE SET
                username = EXCLUDED.username,
                score = EXCLUDED.score,
                mode = EXCLUDED.mode,
                snake = EXCLUDED.snake,
                food = EXCLUDED.food,
                updated_at = NOW()
            "#,
        )
        .bind(game.id)
        .bind(&game.username)
        .bind(game.score)
        .bind(game.mode.as_str())
        .bind(snake)
        .bind(food)
        .execute(&mut *conn)
        .await?;

        Ok(())
    }

    /// Remove a finished game; returns whether a row was deleted
    pub async fn remove<'c, A>(conn: A, id: Uuid) -> StoreResult<bool>
    where
        A: Acquire<'c, Database = Postgres>,
    {
        let mut conn = conn.acquire().await?;

        let result = sqlx::query("DELETE FROM active_games WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
