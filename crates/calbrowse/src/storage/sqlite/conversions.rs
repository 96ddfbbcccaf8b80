//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain records.
//! These are testable in isolation without database access.

use calbrowse_core::calendar::{Calendar, CalendarEvent};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::Row;

/// Convert a SQLite row to a Calendar.
///
/// Expected columns: id, account_name, display_name, owner_account
pub fn row_to_calendar(row: &Row) -> rusqlite::Result<Calendar> {
    let id: i64 = row.get(0)?;
    let account_name: String = row.get(1)?;
    let display_name: String = row.get(2)?;
    let owner_account: String = row.get(3)?;

    Ok(Calendar {
        id,
        display_name,
        account_name,
        owner_account,
    })
}

/// Convert a SQLite row to a CalendarEvent.
///
/// Expected columns: id, calendar_id, title, organizer, description,
/// dtstart, dtend, time_zone
pub fn row_to_event(row: &Row) -> rusqlite::Result<CalendarEvent> {
    let id: i64 = row.get(0)?;
    let calendar_id: i64 = row.get(1)?;
    let title: String = row.get(2)?;
    let organizer: Option<String> = row.get(3)?;
    let description: Option<String> = row.get(4)?;
    let dtstart: String = row.get(5)?;
    let dtend: String = row.get(6)?;
    let time_zone: String = row.get(7)?;

    Ok(CalendarEvent {
        id,
        calendar_id,
        title,
        organizer,
        description,
        start: parse_instant(&dtstart)?,
        end: parse_instant(&dtend)?,
        time_zone,
    })
}

/// Parse an instant from an RFC 3339 string.
pub fn parse_instant(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Format an instant for storage.
///
/// Fixed-width RFC 3339 in UTC, so stored values compare the same
/// lexicographically and chronologically.
pub fn format_instant(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}
