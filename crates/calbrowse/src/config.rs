use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "calbrowse.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub sqlite_path: String,
    /// Days before and after now covered by the screen's event query window
    /// (default: 365)
    pub window_days: i64,
    /// Register demo calendars when the store is empty (default: true)
    pub seed_demo_data: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "calbrowse.db")
    /// - `WINDOW_DAYS` - Event window half-width in days (default: 365)
    /// - `SEED_DEMO_DATA` - Register demo calendars on an empty store (default: true)
    pub fn from_env() -> Self {
        Self {
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "calbrowse.db".to_string()),
            window_days: env::var("WINDOW_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(365),
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("SQLITE_PATH");
        env::remove_var("WINDOW_DAYS");
        env::remove_var("SEED_DEMO_DATA");

        let config = Config::from_env();

        assert_eq!(config.sqlite_path, "calbrowse.db");
        assert_eq!(config.window_days, 365);
        assert!(config.seed_demo_data);
    }

    #[test]
    fn test_invalid_window_days_falls_back_to_default() {
        env::set_var("WINDOW_DAYS", "not-a-number");

        let config = Config::from_env();
        assert_eq!(config.window_days, 365);

        env::remove_var("WINDOW_DAYS");
    }
}
