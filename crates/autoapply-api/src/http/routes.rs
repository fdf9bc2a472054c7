//! HTTP route definitions.

use std::sync::Arc;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::http::{automation, database, monitoring, session};
use crate::state::AppState;

/// Create the façade router.
///
/// ## Route Structure
///
/// ```text
/// GET    /api/auth/session     - Current session
/// POST   /api/automation/run   - Run automation for a configuration
/// POST   /api/automation/test  - Start automation self-test (detached)
/// GET    /api/automation/test  - Self-test availability
/// GET    /api/test-db          - Database connectivity probe
/// GET    /api/test-query       - Direct query probe
///
/// /livez - Liveness probe
/// ```
///
/// Unmatched paths answer 404 and known paths with the wrong method answer
/// 405, both as failure envelopes.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Session
        .route("/api/auth/session", get(session::get_session))
        // Automation
        .route("/api/automation/run", post(automation::run_automation))
        .route(
            "/api/automation/test",
            post(automation::start_automation_test).get(automation::automation_test_status),
        )
        // Database probes
        .route("/api/test-db", get(database::probe_database))
        .route("/api/test-query", get(database::probe_query))
        // Monitoring
        .route("/livez", get(monitoring::livez))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

async fn method_not_allowed(uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed(uri.path().to_string())
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
