//! HTTP interface module.
//!
//! Provides the façade endpoints:
//! - Session lookup
//! - Automation trigger and automation self-test trigger
//! - Database connectivity and direct query probes
//! - Liveness probe

pub mod automation;
pub mod database;
pub mod routes;
pub mod session;

// Internal modules (not publicly exported)
pub(crate) mod body;
pub(crate) mod delegate;
pub(crate) mod monitoring;
