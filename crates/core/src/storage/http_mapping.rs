//! Pure functions for mapping store errors to HTTP status codes.

use super::ProviderError;

/// Maps a [`ProviderError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `QueryFailed` -> 500 (Internal Server Error)
/// - `InvalidData` -> 400 (Bad Request)
///
/// # Examples
///
/// ```
/// use calbrowse_core::storage::{provider_error_to_status_code, ProviderError};
///
/// let error = ProviderError::NotFound {
///     entity_type: "Calendar",
///     id: "42".to_string(),
/// };
/// assert_eq!(provider_error_to_status_code(&error), 404);
/// ```
pub fn provider_error_to_status_code(error: &ProviderError) -> u16 {
    match error {
        ProviderError::NotFound { .. } => 404,
        ProviderError::ConnectionFailed(_) => 503,
        ProviderError::QueryFailed(_) => 500,
        ProviderError::InvalidData(_) => 400,
    }
}
