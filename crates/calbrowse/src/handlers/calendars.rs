//! Calendar read handlers.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{Duration, Utc};
use serde::Deserialize;

use calbrowse_core::calendar::{Calendar, CalendarEvent};
use calbrowse_core::storage::{CalendarProvider, EventWindow, ProviderError};

use crate::{handlers::AppError, state::AppState};

/// List all calendars (GET /api/calendars).
pub async fn list_calendars(
    State(state): State<AppState>,
) -> Result<Json<Vec<Calendar>>, AppError> {
    let calendars = state.provider.list_calendars().await?;
    Ok(Json(calendars))
}

/// Query parameters for listing a calendar's events.
#[derive(Debug, Deserialize)]
pub struct ListEventsQuery {
    /// Days before now included in the window (default: 365)
    #[serde(default = "default_before")]
    pub before: i64,
    /// Days after now included in the window (default: 365)
    #[serde(default = "default_after")]
    pub after: i64,
}

fn default_before() -> i64 {
    365
}

fn default_after() -> i64 {
    365
}

/// List events for a calendar (GET /api/calendars/{id}/events).
///
/// The window is centered on now; events outside it are not returned.
pub async fn list_calendar_events(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<ListEventsQuery>,
) -> Result<Json<Vec<CalendarEvent>>, AppError> {
    if state.provider.get_calendar(id).await?.is_none() {
        return Err(ProviderError::NotFound {
            entity_type: "Calendar",
            id: id.to_string(),
        }
        .into());
    }

    let now = Utc::now();
    let window = EventWindow::new(
        now - Duration::days(query.before),
        now + Duration::days(query.after),
    )?;

    let events = state.provider.events_for_calendar(id, window).await?;
    Ok(Json(events))
}
