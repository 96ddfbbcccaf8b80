//! Application state with provider-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It uses a provider trait object for storage abstraction
//! and supports different backends via feature flags.

use std::sync::Arc;

use calbrowse_core::storage::CalendarProvider;

use crate::config::Config;

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!("Cannot enable both 'sqlite' and 'inmemory' storage features");

#[cfg(not(any(feature = "sqlite", feature = "inmemory")))]
compile_error!("Must enable exactly one storage feature: 'sqlite' or 'inmemory'");

/// Shared application state.
///
/// This is cloned for each request handler and contains the provider trait
/// object used for all store access.
#[derive(Clone)]
pub struct AppState {
    /// The calendar store.
    pub provider: Arc<dyn CalendarProvider>,
    /// Half-width in days of the screen's event query window.
    pub window_days: i64,
}

impl AppState {
    fn build(provider: Arc<dyn CalendarProvider>, config: &Config) -> Self {
        Self {
            provider,
            window_days: config.window_days,
        }
    }
}

#[cfg(feature = "sqlite")]
mod sqlite_backend {
    use super::*;
    use crate::storage::SqliteProvider;

    impl AppState {
        /// Creates AppState backed by the SQLite store.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let provider = Arc::new(SqliteProvider::new(&config.sqlite_path).await?);
            Ok(Self::build(provider, config))
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;
    use crate::storage::InMemoryProvider;

    impl AppState {
        /// Creates AppState backed by the in-memory store.
        /// Useful for running without any external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let provider = Arc::new(InMemoryProvider::new());
            Ok(Self::build(provider, config))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================
