use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A calendar registered in the store.
///
/// Mirrors one row of the store's calendars table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    pub id: i64,
    /// Name shown in the calendar selector.
    pub display_name: String,
    /// Account the calendar is registered under.
    pub account_name: String,
    /// Account that owns the calendar; used as the organizer of events
    /// created on its behalf.
    pub owner_account: String,
}

impl Calendar {
    /// Selector label, e.g. `Personal [alice@example.com]`.
    pub fn label(&self) -> String {
        format!("{} [{}]", self.display_name, self.account_name)
    }
}

/// A calendar event.
///
/// Mirrors one row of the store's events table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: i64,
    /// The calendar this event belongs to.
    pub calendar_id: i64,
    pub title: String,
    pub organizer: Option<String>,
    pub description: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Zone label stored with the row.
    pub time_zone: String,
}

/// Payload for registering a calendar. The store assigns the row id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCalendar {
    pub display_name: String,
    pub account_name: String,
    pub owner_account: String,
}

impl NewCalendar {
    /// Creates a registration payload.
    pub fn new(
        display_name: impl Into<String>,
        account_name: impl Into<String>,
        owner_account: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            account_name: account_name.into(),
            owner_account: owner_account.into(),
        }
    }
}

/// Payload for inserting an event. The store assigns the row id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    pub calendar_id: i64,
    pub title: String,
    pub organizer: Option<String>,
    pub description: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub time_zone: String,
}

impl NewEvent {
    /// Creates an event payload with no organizer or description.
    ///
    /// Instants are UTC; the stored zone label is `UTC`.
    pub fn new(
        calendar_id: i64,
        title: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            calendar_id,
            title: title.into(),
            organizer: None,
            description: None,
            start,
            end,
            time_zone: "UTC".to_string(),
        }
    }

    /// Sets the organizer for this event.
    pub fn with_organizer(mut self, organizer: impl Into<String>) -> Self {
        self.organizer = Some(organizer.into());
        self
    }

    /// Sets the description for this event.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The fixed demo event the screen's add button creates: one hour
    /// starting at `now`, organized by the calendar's owner account.
    pub fn test_event(calendar: &Calendar, now: DateTime<Utc>) -> Self {
        Self::new(calendar.id, "TestEvent", now, now + Duration::hours(1))
            .with_organizer(calendar.owner_account.clone())
            .with_description("TestDescription")
    }
}
