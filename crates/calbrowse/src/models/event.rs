use chrono::{DateTime, Utc};
use serde::Deserialize;

use calbrowse_core::calendar::NewEvent;
use calbrowse_core::serde::deserialize_optional_string;

/// Request payload for inserting an event.
///
/// Optional fields treat empty form strings as None; instants are RFC 3339.
#[derive(Debug, Deserialize)]
pub struct CreateEvent {
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub organizer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl CreateEvent {
    /// Converts the request into an insert payload for the given calendar.
    /// Returns None if the event ends before it starts.
    pub fn into_new_event(self, calendar_id: i64) -> Option<NewEvent> {
        if self.end < self.start {
            return None;
        }

        let mut event = NewEvent::new(calendar_id, self.title, self.start, self.end);
        event.organizer = self.organizer;
        event.description = self.description;
        Some(event)
    }
}
