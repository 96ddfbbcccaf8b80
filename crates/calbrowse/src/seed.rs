//! Demo data seeding.
//!
//! The screen needs at least one registered calendar to demonstrate
//! anything, and a fresh store starts empty.

use calbrowse_core::calendar::NewCalendar;
use calbrowse_core::storage::{CalendarProvider, Result};

/// Registers demo calendars when the store has none.
///
/// A store that already holds calendars is left untouched.
pub async fn seed_demo_calendars(provider: &dyn CalendarProvider) -> Result<()> {
    if !provider.list_calendars().await?.is_empty() {
        return Ok(());
    }

    let demo = [
        NewCalendar::new("Personal", "alice@example.com", "alice@example.com"),
        NewCalendar::new("Team", "team@example.com", "owner@example.com"),
    ];

    for calendar in &demo {
        let id = provider.insert_calendar(calendar).await?;
        tracing::info!(calendar_id = id, name = %calendar.display_name, "Registered demo calendar");
    }

    Ok(())
}

#[cfg(test)]
#[cfg(feature = "sqlite")]
mod tests {
    use super::*;
    use crate::storage::SqliteProvider;

    #[tokio::test]
    async fn test_seed_populates_empty_store() {
        let provider = SqliteProvider::new_in_memory().await.unwrap();

        seed_demo_calendars(&provider).await.unwrap();

        let calendars = provider.list_calendars().await.unwrap();
        assert_eq!(calendars.len(), 2);
        assert_eq!(calendars[0].display_name, "Personal");
        assert_eq!(calendars[1].display_name, "Team");
    }

    #[tokio::test]
    async fn test_seed_leaves_populated_store_alone() {
        let provider = SqliteProvider::new_in_memory().await.unwrap();
        provider
            .insert_calendar(&NewCalendar::new(
                "Existing",
                "me@example.com",
                "me@example.com",
            ))
            .await
            .unwrap();

        seed_demo_calendars(&provider).await.unwrap();

        let calendars = provider.list_calendars().await.unwrap();
        assert_eq!(calendars.len(), 1);
        assert_eq!(calendars[0].display_name, "Existing");
    }
}
