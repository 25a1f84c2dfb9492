//! Request helper extensions.

use salvo::prelude::Request;

use crate::errors::ApiError;

/// Typed access to path parameters.
pub(crate) trait RequestExt {
    /// Parse a path segment as a 64-bit id, rejecting anything else with 400.
    fn id_param_or_400(&self, key: &str) -> Result<i64, ApiError>;
}

impl RequestExt for Request {
    fn id_param_or_400(&self, key: &str) -> Result<i64, ApiError> {
        self.param::<String>(key)
            .and_then(|raw| raw.parse::<i64>().ok())
            .ok_or_else(|| ApiError::BadRequest(format!("{key} must be an integer")))
    }
}
