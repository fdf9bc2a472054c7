//! Error types raised by collaborators.

mod automation;
mod session;
mod store;

pub use automation::*;
pub use session::*;
pub use store::*;

/// An error raised by an external collaborator.
///
/// The request façade only needs a human-readable detail out of it; errors
/// that carry no message return `None`.
pub trait CollaboratorError: std::error::Error + Send + Sync + 'static {
    fn detail(&self) -> Option<String> {
        let text = self.to_string();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
