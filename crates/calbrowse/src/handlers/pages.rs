//! The calendar screen and its form actions.
//!
//! The screen is one server-rendered page: a calendar selector, an event
//! list for the selected calendar, an add-test-event button, and a delete
//! button per event. The form actions redirect back to the page with the
//! outcome in query parameters.

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use chrono::Utc;
use serde::Deserialize;

use calbrowse_core::calendar::{Calendar, CalendarEvent, NewEvent};
use calbrowse_core::storage::{CalendarProvider, EventWindow, ProviderError};

use crate::{handlers::AppError, state::AppState};

/// Template wrapper that converts Askama templates into HTML responses.
struct HtmlTemplate<T>(T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template: {err}"),
            )
                .into_response(),
        }
    }
}

/// One option of the calendar selector.
struct CalendarOption {
    id: i64,
    label: String,
    selected: bool,
}

/// One rendered row of the event list.
struct EventRow {
    id: i64,
    calendar_id: i64,
    title: String,
    organizer: String,
    description: String,
    starts: String,
    ends: String,
}

impl EventRow {
    fn from_event(event: &CalendarEvent) -> Self {
        Self {
            id: event.id,
            calendar_id: event.calendar_id,
            title: event.title.clone(),
            organizer: event.organizer.clone().unwrap_or_default(),
            description: event.description.clone().unwrap_or_default(),
            starts: event.start.format("%Y-%m-%d %H:%M").to_string(),
            ends: event.end.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Index page template: selector, notice, event list.
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    calendars: Vec<CalendarOption>,
    selected: Option<i64>,
    events: Vec<EventRow>,
    notice: Option<String>,
}

/// Query parameters for the index page.
#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    /// Selected calendar; defaults to the first registered calendar.
    pub calendar: Option<i64>,
    /// Row id of an event created by the previous action.
    pub created: Option<i64>,
    /// Outcome of a delete performed by the previous action.
    pub deleted: Option<bool>,
}

/// Handler for the calendar screen (GET /).
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> Result<impl IntoResponse, AppError> {
    let calendars = state.provider.list_calendars().await?;

    let selected = query.calendar.or_else(|| calendars.first().map(|c| c.id));

    let events = match selected {
        Some(calendar_id) => {
            let window = EventWindow::around(Utc::now(), state.window_days);
            state
                .provider
                .events_for_calendar(calendar_id, window)
                .await?
        }
        None => Vec::new(),
    };

    let notice = if let Some(event_id) = query.created {
        Some(format!("Created event for now. EventID: {event_id}"))
    } else {
        query
            .deleted
            .map(|deleted| format!("Deleted event: {deleted}"))
    };

    let options = calendars
        .iter()
        .map(|calendar: &Calendar| CalendarOption {
            id: calendar.id,
            label: calendar.label(),
            selected: Some(calendar.id) == selected,
        })
        .collect();

    Ok(HtmlTemplate(IndexTemplate {
        calendars: options,
        selected,
        events: events.iter().map(EventRow::from_event).collect(),
        notice,
    }))
}

/// Add the fixed demo event to a calendar (POST /calendars/{id}/test-event).
pub async fn add_test_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
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

    tracing::info!(event_id, calendar_id = id, "Created test event from screen");

    Ok(Redirect::to(&format!("/?calendar={id}&created={event_id}")))
}

/// Form payload for the screen's delete action.
#[derive(Debug, Deserialize)]
pub struct DeleteEventForm {
    /// Calendar to return to after the delete.
    pub calendar_id: i64,
}

/// Delete an event from the screen (POST /events/{id}/delete).
pub async fn remove_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<DeleteEventForm>,
) -> Result<Redirect, AppError> {
    let deleted = state.provider.delete_event(id).await?;

    tracing::info!(event_id = id, deleted, "Deleted event from screen");

    Ok(Redirect::to(&format!(
        "/?calendar={}&deleted={}",
        form.calendar_id, deleted
    )))
}
