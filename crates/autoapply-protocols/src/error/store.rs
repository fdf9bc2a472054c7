//! Data-access errors.

use thiserror::Error;

use super::CollaboratorError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Failure without any message attached.
    #[error("opaque store failure")]
    Opaque,
}

impl CollaboratorError for StoreError {
    fn detail(&self) -> Option<String> {
        match self {
            Self::Opaque => None,
            other => Some(other.to_string()),
        }
    }
}
