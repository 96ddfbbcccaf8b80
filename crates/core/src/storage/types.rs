use chrono::{DateTime, Duration, Utc};

use super::WindowError;

/// An inclusive instant range bounding event queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl EventWindow {
    /// Creates a window, validating that start <= end.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, WindowError> {
        if start > end {
            return Err(WindowError::InvalidWindow);
        }
        Ok(Self { start, end })
    }

    /// Window spanning `days` before and after `center`.
    ///
    /// This is the fixed query window the screen uses; `days` must be
    /// non-negative.
    pub fn around(center: DateTime<Utc>, days: i64) -> Self {
        let span = Duration::days(days);
        Self {
            start: center - span,
            end: center + span,
        }
    }

    /// Returns true if the instant falls inside the window.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}
