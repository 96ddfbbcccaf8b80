//! Health check endpoints.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/healthz` - Readiness probe (round-trips the store)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use calbrowse_core::storage::CalendarProvider;

use crate::state::AppState;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting
/// connections without touching the store.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Store round-trip probe.
///
/// Issues a calendar listing against the store. Returns 200 with the
/// calendar count if the store answers, 503 with the error otherwise.
#[axum::debug_handler]
pub async fn healthz(State(state): State<AppState>) -> Response {
    match state.provider.list_calendars().await {
        Ok(calendars) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "healthy": true,
                "calendars": calendars.len(),
            })),
        )
            .into_response(),
        Err(err) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({
                "healthy": false,
                "error": err.to_string(),
            })),
        )
            .into_response(),
    }
}
