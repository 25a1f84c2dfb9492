//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use tracing::{debug, error};

use crate::errors::ApiError;

/// Map any error to a logged API error.
pub(crate) trait ResultExt<T> {
    /// Log at error level and hide the cause behind a 500.
    fn or_500(self, context: &str) -> Result<T, ApiError>;

    /// Reject the request with `message`; the cause is only logged.
    fn or_400(self, message: &str) -> Result<T, ApiError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, ApiError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            ApiError::Internal
        })
    }

    fn or_400(self, message: &str) -> Result<T, ApiError> {
        self.map_err(|error| {
            debug!("{message}: {error}");

            ApiError::BadRequest(message.to_string())
        })
    }
}
