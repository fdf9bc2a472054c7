//! # AutoApply Protocols
//!
//! Collaborator protocol definitions (traits) for the AutoApply service.
//! Contains only interface definitions and shared types - no adapters.
//!
//! ## Core Traits
//!
//! - [`SessionProvider`] - Resolves the current user session
//! - [`AutomationRunner`] - Runs the auto-apply automation for a configuration
//! - [`TestAutomationRunner`] - Runs the automation self-test
//! - [`JobStore`] - Data-access layer over stored job listings
//! - [`Toggle`] - Capability set of a two-state UI control

pub mod automation;
pub mod error;
pub mod session;
pub mod store;
pub mod widget;

pub use automation::{AutomationRequest, AutomationResult, AutomationRunner, TestAutomationRunner};
pub use error::{AutomationError, CollaboratorError, SessionError, StoreError};
pub use session::{Session, SessionProvider, SessionUser};
pub use store::{JobStore, JobSummary, Row};
pub use widget::{CheckState, Checkbox, Toggle};
