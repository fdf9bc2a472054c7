//! Mock session provider for AutoApply.
//!
//! Always signs in the configured user. Intended for development and tests
//! until a real identity provider is wired in.

mod provider;

pub use provider::MockSessionProvider;
