use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status: `UP` or `DOWN`.
    pub status: &'static str,
    /// Check time, RFC 3339.
    pub timestamp: String,
    /// Whether the database round-trip succeeded.
    pub db_status: &'static str,
    /// Present only when the database is unreachable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

/// GET /health -- returns service and database health.
///
/// 200 when the database answers a trivial query, 503 otherwise.
async fn health_check(State(state): State<AppState>) -> Response {
    let timestamp = Utc::now().to_rfc3339();

    match giftlist_db::health_check(&state.pool).await {
        Ok(()) => Json(HealthResponse {
            status: "UP",
            timestamp,
            db_status: "connected",
            error: None,
        })
        .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Database health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "DOWN",
                    timestamp,
                    db_status: "disconnected",
                    error: Some("Failed to connect to the database"),
                }),
            )
                .into_response()
        }
    }
}

/// Mount health check routes (intended for mounting under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
