//! Delegation to collaborators.
//!
//! Every collaborator call goes through [`delegate`], which converts both
//! returned errors and panics into an [`ApiError`] and logs them.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tracing::error;

use autoapply_protocols::error::CollaboratorError;

use crate::error::ApiError;

/// Await a collaborator call and translate its failure.
pub(crate) async fn delegate<T, E, F>(operation: &'static str, call: F) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, E>>,
    E: CollaboratorError,
{
    match AssertUnwindSafe(call).catch_unwind().await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => {
            error!(operation, error = %e, "Collaborator call failed");
            Err(ApiError::from_collaborator(&e))
        }
        Err(panic) => {
            error!(operation, panic = %panic_message(panic.as_ref()), "Collaborator panicked");
            Err(ApiError::unknown())
        }
    }
}

/// Best-effort text of a panic payload, for logs only.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
