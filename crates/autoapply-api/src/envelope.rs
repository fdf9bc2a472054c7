//! The uniform response envelope.
//!
//! `{success, message?, data | error, timestamp?}`. The payload is an enum so
//! a response can never carry both `data` and `error`, and `success` is
//! derived from it.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Fallback detail when a failure carries no message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Payload of an envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome<T> {
    Data(T),
    Error(String),
}

/// Response envelope returned by every endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,

    #[serde(flatten)]
    outcome: Outcome<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            outcome: Outcome::Data(data),
            timestamp: None,
        }
    }

    /// A failure envelope. A blank error is replaced by [`UNKNOWN_ERROR`].
    pub fn failure(error: impl Into<String>) -> Self {
        let error = error.into();
        let error = if error.trim().is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            error
        };

        Self {
            success: false,
            message: None,
            outcome: Outcome::Error(error),
            timestamp: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.timestamp = Some(at.to_rfc3339_opts(SecondsFormat::Millis, true));
        self
    }

    /// Stamp with the current time.
    pub fn stamped(self) -> Self {
        self.with_timestamp(Utc::now())
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn outcome(&self) -> &Outcome<T> {
        &self.outcome
    }

    pub fn data(&self) -> Option<&T> {
        match &self.outcome {
            Outcome::Data(data) => Some(data),
            Outcome::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Data(_) => None,
            Outcome::Error(error) => Some(error),
        }
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }
}

/// Success envelopes answer 200; a bare failure envelope answers 500.
/// Failures with a more specific status go through [`crate::ApiError`].
impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status = if self.success {
            StatusCode::OK
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
#[path = "envelope_tests.rs"]
mod tests;
