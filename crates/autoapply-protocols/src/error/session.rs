//! Session provider errors.

use thiserror::Error;

use super::CollaboratorError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session unavailable: {0}")]
    Unavailable(String),

    #[error("Session expired")]
    Expired,

    /// Failure without any message attached.
    #[error("opaque session failure")]
    Opaque,
}

impl CollaboratorError for SessionError {
    fn detail(&self) -> Option<String> {
        match self {
            Self::Opaque => None,
            other => Some(other.to_string()),
        }
    }
}
