//! Liveness probe.

use std::sync::Arc;

use axum::extract::State;
use serde::Serialize;

use crate::envelope::Envelope;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Liveness {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
}

/// GET /livez
pub async fn livez(State(state): State<Arc<AppState>>) -> Envelope<Liveness> {
    Envelope::success(Liveness {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.uptime().as_secs(),
    })
}
