mod error;
mod http_mapping;
mod traits;
mod types;

pub use error::{ProviderError, Result, WindowError};
pub use http_mapping::provider_error_to_status_code;
pub use traits::CalendarProvider;
pub use types::EventWindow;
