//! # AutoApply API
//!
//! HTTP request façade for the AutoApply service.
//!
//! Every endpoint follows the same contract: parse an optional JSON body,
//! validate it, delegate to exactly one collaborator, and translate the
//! outcome into an [`Envelope`] with a matching status code.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    autoapply-api (Request Façade)             │
//! │  ┌──────────┐  ┌──────────────┐  ┌─────────────────────────┐  │
//! │  │ Session  │  │  Automation  │  │     Database probes     │  │
//! │  └────┬─────┘  └──────┬───────┘  └───────────┬─────────────┘  │
//! └───────┼───────────────┼──────────────────────┼────────────────┘
//!         ▼               ▼                      ▼
//!  SessionProvider  AutomationRunner /       JobStore
//!                   TestAutomationRunner
//! ```
//!
//! Collaborators are injected once through [`AppState`]; the façade holds no
//! mutable state of its own.

pub mod envelope;
pub mod error;
pub mod http;
pub mod server;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use envelope::{Envelope, Outcome, UNKNOWN_ERROR};
pub use error::ApiError;
pub use http::routes::create_router;
pub use server::{ApiServer, ApiServerConfig};
pub use state::AppState;
