//! SQLite schema definitions and SQL query constants.
//!
//! All SQL statements used by the SQLite store live here as constants, one
//! per operation, with fixed column lists.

/// SQL statement to create all tables.
///
/// Foreign keys are enforced so an event cannot reference a missing
/// calendar; instants are stored as fixed-width RFC 3339 text.
pub const CREATE_TABLES: &str = r#"
PRAGMA foreign_keys = ON;

-- Calendars table
CREATE TABLE IF NOT EXISTS calendars (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    account_name TEXT NOT NULL,
    display_name TEXT NOT NULL,
    owner_account TEXT NOT NULL
);

-- Events table
CREATE TABLE IF NOT EXISTS events (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    calendar_id INTEGER NOT NULL,
    title TEXT NOT NULL,
    organizer TEXT,
    description TEXT,
    dtstart TEXT NOT NULL,
    dtend TEXT NOT NULL,
    time_zone TEXT NOT NULL,
    FOREIGN KEY (calendar_id) REFERENCES calendars(id) ON DELETE CASCADE
);

-- Indexes for the event queries
CREATE INDEX IF NOT EXISTS idx_events_calendar_id ON events(calendar_id);
CREATE INDEX IF NOT EXISTS idx_events_calendar_dtstart ON events(calendar_id, dtstart);
"#;

// Calendar queries
pub const INSERT_CALENDAR: &str = r#"
INSERT INTO calendars (account_name, display_name, owner_account)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_CALENDARS: &str = r#"
SELECT id, account_name, display_name, owner_account
FROM calendars
ORDER BY id ASC
"#;

pub const SELECT_CALENDAR_BY_ID: &str = r#"
SELECT id, account_name, display_name, owner_account
FROM calendars
WHERE id = ?1
"#;

// Event queries
pub const INSERT_EVENT: &str = r#"
INSERT INTO events (calendar_id, title, organizer, description, dtstart, dtend, time_zone)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
"#;

pub const SELECT_EVENTS_BY_CALENDAR_AND_WINDOW: &str = r#"
SELECT id, calendar_id, title, organizer, description, dtstart, dtend, time_zone
FROM events
WHERE calendar_id = ?1 AND dtstart >= ?2 AND dtstart <= ?3
ORDER BY id DESC
"#;

pub const DELETE_EVENT: &str = r#"
DELETE FROM events
WHERE id = ?1
"#;
