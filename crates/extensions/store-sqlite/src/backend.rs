//! SQLite job store implementation.

use async_trait::async_trait;
use rusqlite::params;
use std::path::Path;
use tokio_rusqlite::Connection;
use tracing::debug;

use autoapply_protocols::error::StoreError;
use autoapply_protocols::store::{JobStore, Row};

use crate::record::JobRecord;
use crate::schema::init_schema;

#[path = "backend_rows.rs"]
mod backend_rows;
use backend_rows::read_rows;

#[cfg(test)]
#[path = "backend_tests.rs"]
mod tests;

/// SQLite-based job store.
pub struct SqliteJobStore {
    conn: Connection,
}

impl SqliteJobStore {
    /// Create a new in-memory database.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        Self::init(conn).await
    }

    /// Create a new file-backed database.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        debug!("Opening job store at {}", path.display());
        let conn = Connection::open(path)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        Self::init(conn).await
    }

    async fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.call(|conn| Ok(init_schema(conn)?))
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        Ok(Self { conn })
    }

    /// Insert or replace a job record.
    pub async fn insert_job(&self, job: JobRecord) -> Result<(), StoreError> {
        let locations = serde_json::to_string(&job.locations)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        let tags = serde_json::to_string(&job.tags)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        let created_at = job.created_at.to_rfc3339();

        self.conn
            .call(move |conn| {
                conn.execute(
                    "INSERT OR REPLACE INTO jobs
                     (id, title, company, score, locations, tags, url, description, created_at)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                    params![
                        job.id,
                        job.title,
                        job.company,
                        job.score,
                        locations,
                        tags,
                        job.url,
                        job.description,
                        created_at
                    ],
                )?;
                Ok(())
            })
            .await
            .map_err(store_error)
    }
}

/// Map a connection-thread error onto the store taxonomy.
///
/// A [`StoreError`] raised inside a call is passed back unchanged.
fn store_error(err: tokio_rusqlite::Error) -> StoreError {
    match err {
        tokio_rusqlite::Error::ConnectionClosed => {
            StoreError::Connection("connection closed".to_string())
        }
        tokio_rusqlite::Error::Other(inner) => match inner.downcast::<StoreError>() {
            Ok(store) => *store,
            Err(other) => StoreError::Query(other.to_string()),
        },
        other => StoreError::Query(other.to_string()),
    }
}

#[async_trait]
impl JobStore for SqliteJobStore {
    fn id(&self) -> &str {
        "sqlite"
    }

    async fn count_jobs(&self) -> Result<u64, StoreError> {
        let count: i64 = self
            .conn
            .call(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM jobs", [], |row| row.get(0))?))
            .await
            .map_err(store_error)?;

        Ok(count.max(0) as u64)
    }

    async fn raw_query(&self, sql: &str) -> Result<Vec<Row>, StoreError> {
        let sql = sql.to_string();
        self.conn
            .call(move |conn| read_rows(conn, &sql))
            .await
            .map_err(store_error)
    }
}
