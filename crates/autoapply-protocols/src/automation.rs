//! Automation runner protocol definitions.
//!
//! The automation engine itself is external; these traits describe only the
//! contract the service relies on.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AutomationError;

/// Runs the auto-apply automation for a saved search configuration.
#[async_trait]
pub trait AutomationRunner: Send + Sync {
    /// Returns the runner ID.
    fn id(&self) -> &str;

    /// Run the automation to completion.
    async fn run(&self, request: AutomationRequest) -> Result<AutomationResult, AutomationError>;
}

/// Runs the automation self-test. Takes no input.
#[async_trait]
pub trait TestAutomationRunner: Send + Sync {
    /// Returns the runner ID.
    fn id(&self) -> &str;

    /// Run the self-test. The returned report is opaque.
    async fn run_test(&self) -> Result<Value, AutomationError>;
}

/// Validated input for an automation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationRequest {
    pub config_id: String,

    #[serde(default)]
    pub use_real_automation: bool,
}

impl AutomationRequest {
    pub fn new(config_id: impl Into<String>) -> Self {
        Self {
            config_id: config_id.into(),
            use_real_automation: false,
        }
    }

    pub fn with_real_automation(mut self, enabled: bool) -> Self {
        self.use_real_automation = enabled;
        self
    }
}

/// Outcome of an automation run.
///
/// Only the submitted count is interpreted; everything else the runner
/// reports is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationResult {
    pub applications_submitted: u64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AutomationResult {
    pub fn new(applications_submitted: u64) -> Self {
        Self {
            applications_submitted,
            extra: Map::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

#[cfg(test)]
#[path = "automation_tests.rs"]
mod tests;
