mod types;

pub use types::{Calendar, CalendarEvent, NewCalendar, NewEvent};
