//! Demo data for development databases
//!
//! Runs in one transaction and only when the users table is empty, so a
//! restart never duplicates rows.

use crate::auth::PasswordService;
use crate::repositories::{ActiveGameRepository, LeaderboardRepository, UserRepository};
use anyhow::Result;
use chrono::Utc;
use snake_arena_shared::{ActiveGame, GameMode, LeaderboardEntry, Point};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

const DEMO_PASSWORD: &str = "password123";

const DEMO_USERS: &[(&str, &str)] = &[
    ("alice@example.com", "alice"),
    ("bob@example.com", "bob"),
    ("charlie@example.com", "charlie"),
];

const DEMO_SCORES: &[(&str, i32, GameMode)] = &[
    ("alice", 150, GameMode::Walls),
    ("bob", 120, GameMode::Walls),
    ("charlie", 95, GameMode::Walls),
    ("alice", 200, GameMode::PassThrough),
    ("bob", 175, GameMode::PassThrough),
    ("charlie", 140, GameMode::PassThrough),
];

fn demo_games() -> Vec<ActiveGame> {
    vec![
        ActiveGame {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            score: 75,
            mode: GameMode::Walls,
            snake: vec![Point::new(10, 10), Point::new(9, 10), Point::new(8, 10)],
            food: Point::new(15, 15),
        },
        ActiveGame {
            id: Uuid::new_v4(),
            username: "bob".to_string(),
            score: 50,
            mode: GameMode::PassThrough,
            snake: vec![Point::new(5, 5), Point::new(4, 5)],
            food: Point::new(12, 8),
        },
    ]
}

/// Insert demo users, scores and active games into an empty database
///
/// Returns `false` without writing anything when users already exist.
pub async fn seed_demo_data(pool: &PgPool) -> Result<bool> {
    let mut tx = pool.begin().await?;

    if UserRepository::count(&mut *tx).await? > 0 {
        info!("Database already has users, skipping demo seed");
        return Ok(false);
    }

    for (email, username) in DEMO_USERS {
        let password_hash = PasswordService::hash_async(DEMO_PASSWORD.to_string()).await?;
        UserRepository::create(&mut *tx, email, username, &password_hash).await?;
    }

    for (username, score, mode) in DEMO_SCORES {
        let entry = LeaderboardEntry {
            id: Uuid::new_v4(),
            username: username.to_string(),
            score: *score,
            mode: *mode,
            timestamp: Utc::now(),
        };
        LeaderboardRepository::add(&mut *tx, &entry).await?;
    }

    for game in demo_games() {
        ActiveGameRepository::save(&mut *tx, &game).await?;
    }

    tx.commit().await?;

    info!(
        users = DEMO_USERS.len(),
        scores = DEMO_SCORES.len(),
        "Demo data seeded"
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_demo_scores_belong_to_demo_users() {
        let usernames: HashSet<&str> = DEMO_USERS.iter().map(|(_, name)| *name).collect();
        for (username, _, _) in DEMO_SCORES {
            assert!(usernames.contains(username));
        }
        for game in demo_games() {
            assert!(usernames.contains(game.username.as_str()));
        }
    }

    #[test]
    fn test_demo_scores_cover_both_modes() {
        assert!(DEMO_SCORES.iter().any(|(_, _, mode)| *mode == GameMode::Walls));
        assert!(DEMO_SCORES.iter().any(|(_, _, mode)| *mode == GameMode::PassThrough));
    }
}
