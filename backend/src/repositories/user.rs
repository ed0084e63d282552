//! User repository for database operations

use super::StoreResult;
use chrono::{DateTime, Utc};
use snake_arena_shared::User;
use sqlx::{Acquire, Postgres};
use uuid::Uuid;

/// User record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Public view without the password hash
impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        User {
            id: record.id,
            username: record.username,
            email: record.email,
        }
    }
}

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user
    ///
    /// A duplicate email surfaces as [`StoreError::ConstraintViolation`](super::StoreError).
    pub async fn create<'c, A>(
        conn: A,
        email: &str,
        username: &str,
        password_hash: &str,
    ) -> StoreResult<UserRecord>
    where
        A: Acquire<'c, Database = Postgres>,
    {
        let mut conn = conn.acquire().await?;

        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (id, email, username, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, username, password_hash, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(email)
        .bind(username)
        .bind(password_hash)
        .fetch_one(&mut *conn)
        .await?;

        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email<'c, A>(conn: A, email: &str) -> StoreResult<Option<UserRecord>>
    where
        A: Acquire<'c, Database = Postgres>,
    {
        let mut conn = conn.acquire().await?;

        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, username, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id<'c, A>(conn: A, id: Uuid) -> StoreResult<Option<UserRecord>>
    where
        A: Acquire<'c, Database = Postgres>,
    {
        let mut conn = conn.acquire().await?;

        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, username, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(user)
    }

    /// Check if email exists
    pub async fn email_exists<'c, A>(conn: A, email: &str) -> StoreResult<bool>
    where
        A: Acquire<'c, Database = Postgres>,
    {
        let mut conn = conn.acquire().await?;

        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)
            "#,
        )
        .bind(email)
        .fetch_one(&mut *conn)
        .await?;

        Ok(exists)
    }

    /// Count registered users
    pub async fn count<'c, A>(conn: A) -> StoreResult<i64>
    where
        A: Acquire<'c, Database = Postgres>,
    {
        let mut conn = conn.acquire().await?;

        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&mut *conn)
            .await?;

        Ok(count)
    }
}
