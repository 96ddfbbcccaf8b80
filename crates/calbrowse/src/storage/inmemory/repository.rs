//! In-memory provider implementation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use calbrowse_core::calendar::{Calendar, CalendarEvent, NewCalendar, NewEvent};
use calbrowse_core::storage::{CalendarProvider, EventWindow, ProviderError, Result};

/// In-memory calendar store.
///
/// Uses HashMaps wrapped in `Arc<RwLock<_>>` for thread-safe access; row
/// ids come from an atomic counter. Data is not persisted and will be lost
/// when the provider is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryProvider {
    calendars: Arc<RwLock<HashMap<i64, Calendar>>>,
    events: Arc<RwLock<HashMap<i64, CalendarEvent>>>,
    next_id: Arc<AtomicI64>,
}

impl Default for InMemoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryProvider {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            calendars: Arc::new(RwLock::new(HashMap::new())),
            events: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    fn assign_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

#[async_trait]
impl CalendarProvider for InMemoryProvider {
    async fn list_calendars(&self) -> Result<Vec<Calendar>> {
        let calendars = self.calendars.read().await;
        let mut all: Vec<Calendar> = calendars.values().cloned().collect();
        all.sort_by_key(|c| c.id);
        Ok(all)
    }

    async fn get_calendar(&self, id: i64) -> Result<Option<Calendar>> {
        let calendars = self.calendars.read().await;
        Ok(calendars.get(&id).cloned())
    }

    async fn insert_calendar(&self, calendar: &NewCalendar) -> Result<i64> {
        let id = self.assign_id();
        let mut calendars = self.calendars.write().await;
        calendars.insert(
            id,
            Calendar {
                id,
                display_name: calendar.display_name.clone(),
                account_name: calendar.account_name.clone(),
                owner_account: calendar.owner_account.clone(),
            },
        );
        Ok(id)
    }

    async fn events_for_calendar(
        &self,
        calendar_id: i64,
        window: EventWindow,
    ) -> Result<Vec<CalendarEvent>> {
        let events = self.events.read().await;
        let mut matching: Vec<CalendarEvent> = events
            .values()
            .filter(|e| e.calendar_id == calendar_id)
            .filter(|e| window.contains(e.start))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(matching)
    }

    async fn insert_event(&self, event: &NewEvent) -> Result<i64> {
        let calendars = self.calendars.read().await;
        if !calendars.contains_key(&event.calendar_id) {
            return Err(ProviderError::InvalidData(format!(
                "Calendar {} does not exist",
                event.calendar_id
            )));
        }
        drop(calendars);

        let id = self.assign_id();
        let mut events = self.events.write().await;
        events.insert(
            id,
            CalendarEvent {
                id,
                calendar_id: event.calendar_id,
                title: event.title.clone(),
                organizer: event.organizer.clone(),
                description: event.description.clone(),
                start: event.start,
                end: event.end,
                time_zone: event.time_zone.clone(),
            },
        );
        Ok(id)
    }

    async fn delete_event(&self, event_id: i64) -> Result<bool> {
        let mut events = self.events.write().await;
        Ok(events.remove(&event_id).is_some())
    }
}
