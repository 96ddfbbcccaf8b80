use async_trait::async_trait;

use crate::calendar::{Calendar, CalendarEvent, NewCalendar, NewEvent};

use super::{EventWindow, Result};

/// Access to the calendar store.
///
/// One implementation per storage backend; everything above the storage
/// layer only sees this trait.
#[async_trait]
pub trait CalendarProvider: Send + Sync {
    /// Lists all registered calendars, oldest row first.
    async fn list_calendars(&self) -> Result<Vec<Calendar>>;

    /// Gets a calendar by its row id.
    async fn get_calendar(&self, id: i64) -> Result<Option<Calendar>>;

    /// Registers a calendar and returns the assigned row id.
    async fn insert_calendar(&self, calendar: &NewCalendar) -> Result<i64>;

    /// Events for a calendar whose start instant falls inside the window,
    /// newest row first.
    async fn events_for_calendar(
        &self,
        calendar_id: i64,
        window: EventWindow,
    ) -> Result<Vec<CalendarEvent>>;

    /// Inserts an event and returns the assigned row id.
    async fn insert_event(&self, event: &NewEvent) -> Result<i64>;

    /// Deletes an event, returning true iff exactly one row was removed.
    async fn delete_event(&self, event_id: i64) -> Result<bool>;
}
