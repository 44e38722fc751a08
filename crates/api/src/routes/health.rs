use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use zengrid_core::types::Timestamp;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Current server time, RFC 3339 UTC.
    pub timestamp: Timestamp,
    /// Seconds since the process started.
    pub uptime: u64,
    /// Human-readable status line.
    pub message: &'static str,
}

/// GET /health -- unauthenticated liveness probe.
///
/// Reports process liveness only; it does not touch the database.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: chrono::Utc::now(),
        uptime: state.started_at.elapsed().as_secs(),
        message: "zengrid api healthy",
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
