//! SQLite provider implementation.
//!
//! Implements the provider trait from `calbrowse_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use calbrowse_core::calendar::{Calendar, CalendarEvent, NewCalendar, NewEvent};
use calbrowse_core::storage::{CalendarProvider, EventWindow, ProviderError, Result};

use super::conversions::{format_instant, row_to_calendar, row_to_event};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-backed calendar store.
///
/// Provides async access to the calendars and events tables.
pub struct SqliteProvider {
    conn: Connection,
}

impl SqliteProvider {
    /// Opens a file-backed store.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path.to_owned())
            .await
            .map_err(|e| ProviderError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Opens an in-memory store.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| ProviderError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| ProviderError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl CalendarProvider for SqliteProvider {
    async fn list_calendars(&self) -> Result<Vec<Calendar>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_CALENDARS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_calendar).map_err(wrap_err)?;

                let mut calendars = Vec::new();
                for row_result in rows {
                    calendars.push(row_result.map_err(wrap_err)?);
                }
                Ok(calendars)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Calendar"))
    }

    async fn get_calendar(&self, id: i64) -> Result<Option<Calendar>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_CALENDAR_BY_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row(rusqlite::params![id], row_to_calendar) {
                    Ok(calendar) => Ok(Some(calendar)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Calendar", id.to_string()))
    }

    async fn insert_calendar(&self, calendar: &NewCalendar) -> Result<i64> {
        let account_name = calendar.account_name.clone();
        let display_name = calendar.display_name.clone();
        let owner_account = calendar.owner_account.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_CALENDAR,
                    rusqlite::params![account_name, display_name, owner_account],
                )
                .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Calendar"))
    }

    async fn events_for_calendar(
        &self,
        calendar_id: i64,
        window: EventWindow,
    ) -> Result<Vec<CalendarEvent>> {
        let start_str = format_instant(&window.start);
        let end_str = format_instant(&window.end);

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_EVENTS_BY_CALENDAR_AND_WINDOW)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map(
                        rusqlite::params![calendar_id, start_str, end_str],
                        row_to_event,
                    )
                    .map_err(wrap_err)?;

                let mut events = Vec::new();
                for row_result in rows {
                    events.push(row_result.map_err(wrap_err)?);
                }
                Ok(events)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "CalendarEvent"))
    }

    async fn insert_event(&self, event: &NewEvent) -> Result<i64> {
        let calendar_id = event.calendar_id;
        let title = event.title.clone();
        let organizer = event.organizer.clone();
        let description = event.description.clone();
        let dtstart = format_instant(&event.start);
        let dtend = format_instant(&event.end);
        let time_zone = event.time_zone.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_EVENT,
                    rusqlite::params![
                        calendar_id,
                        title,
                        organizer,
                        description,
                        dtstart,
                        dtend,
                        time_zone
                    ],
                )
                .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "CalendarEvent"))
    }

    async fn delete_event(&self, event_id: i64) -> Result<bool> {
        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_EVENT, rusqlite::params![event_id])
                    .map_err(wrap_err)?;
                Ok(rows == 1)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "CalendarEvent", event_id.to_string()))
    }
}
