//! Storage backend implementations.
//!
//! This module provides concrete implementations of the provider trait
//! defined in `calbrowse_core::storage`. The implementation is selected
//! at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite store using `rusqlite` and `tokio-rusqlite`
//! - `inmemory`: in-memory store, for running without a database file
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time.
//!
//! Build with the in-memory backend:
//! ```bash
//! cargo build -p calbrowse --no-default-features --features inmemory
//! ```

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!(
    "Features 'sqlite' and 'inmemory' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "sqlite", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'sqlite' or 'inmemory' feature. \
    Example: cargo build -p calbrowse --features sqlite"
);

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteProvider;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryProvider;
