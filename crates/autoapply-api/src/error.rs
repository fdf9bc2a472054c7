//! Façade error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::debug;

use autoapply_protocols::error::CollaboratorError;

use crate::envelope::{Envelope, UNKNOWN_ERROR};

/// Errors surfaced by the façade. Each renders as a failure envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input, detected before delegation.
    #[error("{0}")]
    Validation(String),

    /// A collaborator raised an error.
    #[error("{0}")]
    Collaborator(String),

    /// A detached task could not be started.
    #[error("{0}")]
    Launch(String),

    /// No route matches the path.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The path exists but not for this method.
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),
}

impl ApiError {
    /// Translate a collaborator error, falling back to [`UNKNOWN_ERROR`] when it has no message.
    pub fn from_collaborator<E: CollaboratorError + ?Sized>(err: &E) -> Self {
        Self::Collaborator(err.detail().unwrap_or_else(|| UNKNOWN_ERROR.to_string()))
    }

    /// A collaborator failure with no usable message.
    pub fn unknown() -> Self {
        Self::Collaborator(UNKNOWN_ERROR.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Collaborator(_) | Self::Launch(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        debug!("Responding {} with failure envelope: {}", status, self);
        (status, Json(Envelope::<()>::failure(self.to_string()))).into_response()
    }
}
