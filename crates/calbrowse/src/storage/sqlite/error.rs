//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `ProviderError`
//! from `calbrowse_core::storage`. Specific errors are mapped to semantic
//! variants (e.g. FOREIGN KEY constraint to InvalidData).

use calbrowse_core::storage::ProviderError;

/// Maps a rusqlite error to a ProviderError.
///
/// - `SQLITE_CONSTRAINT_FOREIGNKEY` → `ProviderError::InvalidData`
/// - Connection errors → `ProviderError::ConnectionFailed`
/// - `QueryReturnedNoRows` → `ProviderError::NotFound`
/// - All other errors → `ProviderError::QueryFailed`
fn map_rusqlite_error(err: &rusqlite::Error, entity_type: &'static str) -> ProviderError {
    match err {
        // Handle FOREIGN KEY constraint violations (invalid reference)
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY =>
        {
            ProviderError::InvalidData(format!(
                "Foreign key constraint violation for {entity_type}"
            ))
        }

        // Connection-related errors
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            ProviderError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        // Query returned no rows (not found)
        rusqlite::Error::QueryReturnedNoRows => ProviderError::NotFound {
            entity_type,
            id: "unknown".to_string(),
        },

        // All other errors
        _ => ProviderError::QueryFailed(err.to_string()),
    }
}

/// Maps a rusqlite error with a known ID to a ProviderError.
fn map_rusqlite_error_with_id(
    err: &rusqlite::Error,
    entity_type: &'static str,
    id: &str,
) -> ProviderError {
    match err {
        rusqlite::Error::QueryReturnedNoRows => ProviderError::NotFound {
            entity_type,
            id: id.to_string(),
        },

        _ => map_rusqlite_error(err, entity_type),
    }
}

/// Maps a tokio_rusqlite error to a ProviderError.
///
/// This is the main entry point for error mapping in async code.
/// It extracts the inner `rusqlite::Error` if present, otherwise
/// maps to a generic `QueryFailed` error.
pub fn map_tokio_rusqlite_error(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
) -> ProviderError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => {
            map_rusqlite_error(rusqlite_err, entity_type)
        }
        tokio_rusqlite::Error::Close(_) => {
            ProviderError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => ProviderError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error with a known ID to a ProviderError.
///
/// Use this variant when the entity ID is known at the call site.
pub fn map_tokio_rusqlite_error_with_id(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
    id: impl Into<String>,
) -> ProviderError {
    let id_str = id.into();
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => {
            map_rusqlite_error_with_id(rusqlite_err, entity_type, &id_str)
        }
        tokio_rusqlite::Error::Close(_) => {
            ProviderError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => ProviderError::QueryFailed(err.to_string()),
    }
}
