//! Health and readiness checks.

use axum::{extract::State, http::StatusCode};

use crate::state::AppState;

/// `GET /health` - liveness probe.
pub async fn health() -> &'static str {
    "OK"
}

/// `GET /health/ready` - readiness probe, pings the database.
pub async fn ready(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").execute(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::error!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
