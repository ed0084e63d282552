//! Domain models for Snake Arena

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Ruleset variant a game is played under
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// Hitting an edge ends the game
    #[serde(rename = "walls")]
    Walls,
    /// Edges wrap around to the opposite side
    #[serde(rename = "pass-through")]
    PassThrough,
}

impl GameMode {
    /// Storage and wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Walls => "walls",
            GameMode::PassThrough => "pass-through",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known game mode
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown game mode: {0}")]
pub struct UnknownGameMode(pub String);

impl FromStr for GameMode {
    type Err = UnknownGameMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "walls" => Ok(GameMode::Walls),
            "pass-through" => Ok(GameMode::PassThrough),
            other => Err(UnknownGameMode(other.to_string())),
        }
    }
}

/// Grid coordinate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Public view of a user account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

/// One completed score submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaderboardEntry {
    pub id: Uuid,
    pub username: String,
    pub score: i32,
    pub mode: GameMode,
    pub timestamp: DateTime<Utc>,
}

/// Snapshot of a game in progress
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActiveGame {
    pub id: Uuid,
    pub username: String,
    pub score: i32,
    pub mode: GameMode,
    /// Body segments, head first
    pub snake: Vec<Point>,
    pub food: Point,
}
