//! Health check endpoints
//!
//! `/health` and `/health/live` answer as long as the process is up.
//! `/health/ready` also pings the database and answers 503 when it is down.

use crate::{db, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

const SERVICE_NAME: &str = "snake-arena";

/// Health probe body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseStatus>,
}

/// Result of the database ping
#[derive(Debug, Serialize)]
pub struct DatabaseStatus {
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthResponse {
    fn new(status: &'static str, database: Option<DatabaseStatus>) -> Self {
        Self {
            status,
            service: SERVICE_NAME,
            version: env!("CARGO_PKG_VERSION"),
            database,
        }
    }
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::new("healthy", None))
}

/// GET /health/live
pub async fn liveness_check() -> Json<HealthResponse> {
    Json(HealthResponse::new("alive", None))
}

/// GET /health/ready
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    match db::ping(state.db()).await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse::new(
                "ready",
                Some(DatabaseStatus {
                    healthy: true,
                    error: None,
                }),
            )),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse::new(
                "not_ready",
                Some(DatabaseStatus {
                    healthy: false,
                    error: Some(e.to_string()),
                }),
            )),
        ),
    }
}
