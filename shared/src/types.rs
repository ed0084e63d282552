//! API request and response types

use crate::models::{GameMode, User};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Signup request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Returned by signup and login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    /// Bearer token for the `Authorization` header
    pub token: String,
}

/// Plain acknowledgement body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Score submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitScoreRequest {
    pub score: i32,
    pub mode: GameMode,
}

/// Acknowledgement for an accepted score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitScoreResponse {
    pub message: String,
    pub id: Uuid,
}

/// Leaderboard query parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeaderboardQuery {
    #[serde(default)]
    pub mode: Option<GameMode>,
    #[serde(default)]
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaderboard_query_defaults() {
        let query: LeaderboardQuery = serde_json::from_str("{}").unwrap();
        assert!(query.mode.is_none());
        assert!(query.limit.is_none());
    }

    #[test]
    fn test_submit_score_request_parses_mode() {
        let req: SubmitScoreRequest =
            serde_json::from_str(r#"{"score": 120, "mode": "pass-through"}"#).unwrap();
        assert_eq!(req.score, 120);
        assert_eq!(req.mode, GameMode::PassThrough);
    }
}
