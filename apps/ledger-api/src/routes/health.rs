//! Health check for monitoring.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use tracing::warn;

use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: bool,
    pub server_time: String,
}

/// 200 when the database answers `SELECT 1`, 503 otherwise.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = state.db.health_check().await;

    let (code, status) = if database {
        (StatusCode::OK, "SERVING")
    } else {
        warn!("Health check failed: database unavailable");
        (StatusCode::SERVICE_UNAVAILABLE, "NOT_SERVING")
    };

    (
        code,
        Json(HealthResponse {
            status,
            database,
            server_time: Utc::now().to_rfc3339(),
        }),
    )
}
