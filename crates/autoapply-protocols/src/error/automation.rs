//! Automation runner errors.

use thiserror::Error;

use super::CollaboratorError;

#[derive(Debug, Error)]
pub enum AutomationError {
    #[error("Automation service is not configured")]
    NotConfigured,

    #[error("Invalid automation request: {0}")]
    InvalidRequest(String),

    #[error("Automation service error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response from automation service: {0}")]
    InvalidResponse(String),

    /// Failure reported by the automation itself; the message is passed through verbatim.
    #[error("{0}")]
    Failed(String),

    /// Failure without any message attached.
    #[error("opaque automation failure")]
    Opaque,
}

impl CollaboratorError for AutomationError {
    fn detail(&self) -> Option<String> {
        match self {
            Self::Opaque => None,
            Self::Failed(message) | Self::Api { message, .. } if message.trim().is_empty() => None,
            // The status stays in the Display text for logs only.
            Self::Api { message, .. } => Some(message.clone()),
            other => Some(other.to_string()),
        }
    }
}
