//! Client adapters for the external automation service.
//!
//! The automation engine runs elsewhere; these adapters only forward
//! requests to it and translate its replies.

mod client;
mod runner;
mod unconfigured;

pub use client::AutomationClient;
pub use runner::{RemoteAutomationRunner, RemoteTestRunner};
pub use unconfigured::UnconfiguredRunner;
