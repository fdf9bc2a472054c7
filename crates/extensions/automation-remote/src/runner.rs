//! Remote automation runners.

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::info;

use autoapply_protocols::automation::{
    AutomationRequest, AutomationResult, AutomationRunner, TestAutomationRunner,
};
use autoapply_protocols::error::AutomationError;

use crate::client::AutomationClient;

/// Forwards automation runs to `<endpoint>/run`.
#[derive(Debug, Clone)]
pub struct RemoteAutomationRunner {
    client: AutomationClient,
}

impl RemoteAutomationRunner {
    pub fn new(client: AutomationClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AutomationRunner for RemoteAutomationRunner {
    fn id(&self) -> &str {
        "remote"
    }

    async fn run(&self, request: AutomationRequest) -> Result<AutomationResult, AutomationError> {
        info!(
            "Forwarding automation run: config={}, real={}",
            request.config_id, request.use_real_automation
        );
        let result: AutomationResult = self.client.post("run", &request).await?;
        info!(
            "Automation run finished: config={}, submitted={}",
            request.config_id, result.applications_submitted
        );
        Ok(result)
    }
}

/// Forwards self-test runs to `<endpoint>/test`.
#[derive(Debug, Clone)]
pub struct RemoteTestRunner {
    client: AutomationClient,
}

impl RemoteTestRunner {
    pub fn new(client: AutomationClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TestAutomationRunner for RemoteTestRunner {
    fn id(&self) -> &str {
        "remote"
    }

    async fn run_test(&self) -> Result<Value, AutomationError> {
        self.client.post("test", &json!({})).await
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
