//! Data-access protocol definitions.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::StoreError;

/// A row-like record keyed by column name.
pub type Row = Map<String, Value>;

/// Data-access layer over stored job listings.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Returns the store ID.
    fn id(&self) -> &str;

    /// Count stored job records.
    async fn count_jobs(&self) -> Result<u64, StoreError>;

    /// Run a raw read query and return its rows.
    async fn raw_query(&self, sql: &str) -> Result<Vec<Row>, StoreError>;
}

/// The public projection of a job row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: Value,
    pub title: Value,
    pub company: Value,
    pub score: Value,
    pub locations: Value,
    pub tags: Value,
}

impl JobSummary {
    /// Project a row onto the summary fields. Missing columns become `null`,
    /// every other column is dropped.
    pub fn from_row(row: &Row) -> Self {
        let field = |name: &str| row.get(name).cloned().unwrap_or(Value::Null);
        Self {
            id: field("id"),
            title: field("title"),
            company: field("company"),
            score: field("score"),
            locations: field("locations"),
            tags: field("tags"),
        }
    }
}

impl From<&Row> for JobSummary {
    fn from(row: &Row) -> Self {
        Self::from_row(row)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
