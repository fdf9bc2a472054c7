//! Database probe handlers.

use std::sync::Arc;

use axum::extract::State;
use serde::Serialize;
use tracing::debug;

use autoapply_protocols::store::JobSummary;

use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::http::delegate::delegate;
use crate::state::AppState;

pub const DATABASE_OK: &str = "Database connection successful";
pub const QUERY_OK: &str = "Direct query successful";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseProbe {
    pub job_count: u64,
}

/// Query issued by the direct query probe.
pub fn probe_query_sql(limit: u32) -> String {
    format!("SELECT * FROM jobs ORDER BY score DESC LIMIT {}", limit)
}

/// GET /api/test-db
pub async fn probe_database(
    State(state): State<Arc<AppState>>,
) -> Result<Envelope<DatabaseProbe>, ApiError> {
    let job_count = delegate("store.count_jobs", state.store.count_jobs()).await?;
    debug!(job_count, "Database probe succeeded");

    Ok(Envelope::success(DatabaseProbe { job_count })
        .with_message(DATABASE_OK)
        .stamped())
}

/// GET /api/test-query
pub async fn probe_query(
    State(state): State<Arc<AppState>>,
) -> Result<Envelope<Vec<JobSummary>>, ApiError> {
    let sql = probe_query_sql(state.probe_limit);
    let rows = delegate("store.raw_query", state.store.raw_query(&sql)).await?;
    debug!(rows = rows.len(), "Query probe succeeded");

    let jobs: Vec<JobSummary> = rows.iter().map(JobSummary::from_row).collect();
    Ok(Envelope::success(jobs).with_message(QUERY_OK).stamped())
}

#[cfg(test)]
#[path = "database_tests.rs"]
mod tests;
