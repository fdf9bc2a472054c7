//! Lenient JSON body parsing.
//!
//! Bodies are read as raw bytes so that a missing or malformed body still
//! produces a failure envelope instead of the extractor's plain-text rejection.

use axum::body::Bytes;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::ApiError;

pub(crate) const INVALID_JSON: &str = "Invalid JSON body";

/// Parse an optional JSON body. An empty body parses as `T::default()`.
pub(crate) fn parse_body<T>(body: &Bytes) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(body).map_err(|e| {
        warn!("Rejecting request body: {}", e);
        ApiError::Validation(INVALID_JSON.to_string())
    })
}
