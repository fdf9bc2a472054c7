//! Application state.

use std::sync::Arc;
use std::time::Instant;

use autoapply_protocols::automation::{AutomationRunner, TestAutomationRunner};
use autoapply_protocols::session::SessionProvider;
use autoapply_protocols::store::JobStore;

const DEFAULT_PROBE_LIMIT: u32 = 5;

/// Collaborators shared across handlers. Built once at startup, never mutated.
pub struct AppState {
    pub sessions: Arc<dyn SessionProvider>,
    pub automation: Arc<dyn AutomationRunner>,
    pub test_automation: Arc<dyn TestAutomationRunner>,
    pub store: Arc<dyn JobStore>,
    /// Rows returned by the direct query probe.
    pub probe_limit: u32,
    start_time: Instant,
}

impl AppState {
    pub fn new(
        sessions: Arc<dyn SessionProvider>,
        automation: Arc<dyn AutomationRunner>,
        test_automation: Arc<dyn TestAutomationRunner>,
        store: Arc<dyn JobStore>,
    ) -> Self {
        Self {
            sessions,
            automation,
            test_automation,
            store,
            probe_limit: DEFAULT_PROBE_LIMIT,
            start_time: Instant::now(),
        }
    }

    pub fn with_probe_limit(mut self, limit: u32) -> Self {
        self.probe_limit = limit.max(1);
        self
    }

    /// Get uptime.
    pub fn uptime(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("sessions", &self.sessions.id())
            .field("automation", &self.automation.id())
            .field("test_automation", &self.test_automation.id())
            .field("store", &self.store.id())
            .field("probe_limit", &self.probe_limit)
            .finish()
    }
}
