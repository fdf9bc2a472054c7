//! Stand-in runner used when no automation endpoint is configured.

use async_trait::async_trait;
use serde_json::Value;

use autoapply_protocols::automation::{
    AutomationRequest, AutomationResult, AutomationRunner, TestAutomationRunner,
};
use autoapply_protocols::error::AutomationError;

/// Fails every call with [`AutomationError::NotConfigured`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredRunner;

#[async_trait]
impl AutomationRunner for UnconfiguredRunner {
    fn id(&self) -> &str {
        "unconfigured"
    }

    async fn run(&self, _request: AutomationRequest) -> Result<AutomationResult, AutomationError> {
        Err(AutomationError::NotConfigured)
    }
}

#[async_trait]
impl TestAutomationRunner for UnconfiguredRunner {
    fn id(&self) -> &str {
        "unconfigured"
    }

    async fn run_test(&self) -> Result<Value, AutomationError> {
        Err(AutomationError::NotConfigured)
    }
}
