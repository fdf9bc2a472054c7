//! Automation trigger handlers.
//!
//! `POST /api/automation/run` runs one automation and waits for its result.
//! `POST /api/automation/test` starts the self-test in a detached task and
//! acknowledges immediately; the test's outcome only reaches the logs.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use axum::{body::Bytes, extract::State};
use futures::FutureExt;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use uuid::Uuid;

use autoapply_protocols::automation::{AutomationRequest, AutomationResult, TestAutomationRunner};

use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::http::body::parse_body;
use crate::http::delegate::{delegate, panic_message};
use crate::state::AppState;

pub const CONFIG_ID_REQUIRED: &str = "Configuration ID is required";
pub const TEST_STARTED: &str = "Automation test started. Check server logs for progress.";
pub const TEST_AVAILABLE: &str =
    "Automation test endpoint is available. Send a POST request to start a test run.";

// ============================================================================
// Request / Response Types
// ============================================================================

/// Body of `POST /api/automation/run`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunAutomationBody {
    #[serde(default)]
    pub config_id: Option<String>,
    #[serde(default)]
    pub use_real_automation: Option<bool>,
}

impl RunAutomationBody {
    /// Validate into a collaborator request. A blank `configId` counts as missing.
    pub fn into_request(self) -> Result<AutomationRequest, ApiError> {
        let config_id = self
            .config_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| ApiError::Validation(CONFIG_ID_REQUIRED.to_string()))?;

        Ok(AutomationRequest::new(config_id)
            .with_real_automation(self.use_real_automation.unwrap_or(false)))
    }
}

/// Acknowledgment payload for a started test run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestLaunch {
    pub task_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TestAvailability {
    pub available: bool,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/automation/run
pub async fn run_automation(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Envelope<AutomationResult>, ApiError> {
    let request = parse_body::<RunAutomationBody>(&body)?
        .into_request()
        .inspect_err(|e| warn!("Automation run rejected: {}", e))?;

    info!(
        config_id = %request.config_id,
        real = request.use_real_automation,
        "Running automation"
    );

    let result = delegate("automation.run", state.automation.run(request)).await?;
    let message = format!(
        "Automation completed: {} applications submitted",
        result.applications_submitted
    );

    Ok(Envelope::success(result).with_message(message))
}

/// POST /api/automation/test
pub async fn start_automation_test(
    State(state): State<Arc<AppState>>,
) -> Result<Envelope<TestLaunch>, ApiError> {
    let task_id = Uuid::new_v4().to_string();
    launch_test(state.test_automation.clone(), task_id.clone())?;

    Ok(Envelope::success(TestLaunch { task_id }).with_message(TEST_STARTED))
}

/// GET /api/automation/test
pub async fn automation_test_status() -> Envelope<TestAvailability> {
    Envelope::success(TestAvailability { available: true }).with_message(TEST_AVAILABLE)
}

/// Spawn the self-test on the current runtime without awaiting it.
///
/// Errors and panics inside the test are logged and never reach the caller.
pub(crate) fn launch_test(
    runner: Arc<dyn TestAutomationRunner>,
    task_id: String,
) -> Result<(), ApiError> {
    let handle = tokio::runtime::Handle::try_current().map_err(|e| {
        error!("Cannot start automation test: {}", e);
        ApiError::Launch(format!("Failed to start automation test: {}", e))
    })?;

    info!(task_id = %task_id, runner = runner.id(), "Starting automation test");

    handle.spawn(async move {
        match AssertUnwindSafe(runner.run_test()).catch_unwind().await {
            Ok(Ok(report)) => {
                info!(task_id = %task_id, report = %report, "Automation test completed");
            }
            Ok(Err(e)) => {
                error!(task_id = %task_id, error = %e, "Automation test failed");
            }
            Err(panic) => {
                error!(
                    task_id = %task_id,
                    panic = %panic_message(panic.as_ref()),
                    "Automation test panicked"
                );
            }
        }
    });

    Ok(())
}

#[cfg(test)]
#[path = "automation_tests.rs"]
mod tests;
