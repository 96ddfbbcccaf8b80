//! Event mutation handlers.
//!
//! These handlers are thin wrappers over the provider: insert a payload,
//! insert the fixed test event, delete by row id.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Form, Json,
};
use chrono::Utc;

use calbrowse_core::calendar::NewEvent;
use calbrowse_core::storage::{CalendarProvider, ProviderError};

use crate::{handlers::AppError, models::CreateEvent, state::AppState};

/// Error response with message (for form validation errors).
fn error_response(status: StatusCode, message: impl Into<String>) -> (StatusCode, String) {
    let msg = message.into();
    tracing::warn!(status = %status, message = %msg, "API error");
    (status, msg)
}

/// Create an event on a calendar (POST /api/calendars/{id}/events).
pub async fn create_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(payload): Form<CreateEvent>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    tracing::debug!(calendar_id = id, payload = ?payload, "Received create event request");

    let calendar = state
        .provider
        .get_calendar(id)
        .await
        .map_err(|e| error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    if calendar.is_none() {
        return Err(error_response(
            StatusCode::NOT_FOUND,
            format!("Calendar {id} not found"),
        ));
    }

    let event = payload.into_new_event(id).ok_or_else(|| {
        error_response(
            StatusCode::BAD_REQUEST,
            "Invalid event data: end is before start",
        )
    })?;

    let event_id = state
        .provider
        .insert_event(&event)
        .await
        .map_err(|e| error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    tracing::info!(event_id, calendar_id = id, title = %event.title, "Created new event");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "id": event_id })),
    ))
}

/// Create the fixed demo event (POST /api/calendars/{id}/test-event).
pub async fn create_test_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let calendar = state
        .provider
        .get_calendar(id)
        .await?
        .ok_or(ProviderError::NotFound {
            entity_type: "Calendar",
            id: id.to_string(),
        })?;

    let event = NewEvent::test_event(&calendar, Utc::now());
    let event_id = state.provider.insert_event(&event).await?;

    tracing::info!(event_id, calendar_id = id, "Created test event");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "id": event_id })),
    ))
}

/// Delete an event (DELETE /api/events/{id}).
///
/// Reports the store's deleted-row outcome; deleting an absent id is not
/// an error.
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    tracing::debug!(event_id = id, "Received delete event request");

    let deleted = state.provider.delete_event(id).await?;

    tracing::info!(event_id = id, deleted, "Deleted event");

    Ok(Json(serde_json::json!({ "deleted": deleted })))
}
