use super::*;
use autoapply_protocols::store::JobSummary;

fn sample_job(id: &str, score: f64) -> JobRecord {
    JobRecord::new(format!("Engineer {}", id), "Acme")
        .with_id(id)
        .with_score(score)
        .with_locations(vec!["Berlin".to_string(), "Remote".to_string()])
        .with_tags(vec!["rust".to_string()])
        .with_url(format!("https://jobs.example.com/{}", id))
}

#[tokio::test]
async fn test_store_id() {
    let store = SqliteJobStore::in_memory().await.unwrap();
    assert_eq!(store.id(), "sqlite");
}

#[tokio::test]
async fn test_count_empty() {
    let store = SqliteJobStore::in_memory().await.unwrap();
    assert_eq!(store.count_jobs().await.unwrap(), 0);
}

#[tokio::test]
async fn test_insert_and_count() {
    let store = SqliteJobStore::in_memory().await.unwrap();
    store.insert_job(sample_job("a", 0.4)).await.unwrap();
    store.insert_job(sample_job("b", 0.9)).await.unwrap();
    assert_eq!(store.count_jobs().await.unwrap(), 2);
}

#[tokio::test]
async fn test_insert_replaces_same_id() {
    let store = SqliteJobStore::in_memory().await.unwrap();
    store.insert_job(sample_job("a", 0.4)).await.unwrap();
    store.insert_job(sample_job("a", 0.8)).await.unwrap();
    assert_eq!(store.count_jobs().await.unwrap(), 1);
}

#[tokio::test]
async fn test_raw_query_decodes_columns() {
    let store = SqliteJobStore::in_memory().await.unwrap();
    store.insert_job(sample_job("a", 0.4)).await.unwrap();
    store.insert_job(sample_job("b", 0.9)).await.unwrap();

    let rows = store
        .raw_query("SELECT * FROM jobs ORDER BY score DESC LIMIT 5")
        .await
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], "b");
    assert_eq!(rows[0]["score"], 0.9);
    assert_eq!(rows[0]["locations"], serde_json::json!(["Berlin", "Remote"]));
    assert_eq!(rows[0]["url"], "https://jobs.example.com/b");
    assert!(rows[0]["description"].is_null());
}

#[tokio::test]
async fn test_raw_query_rows_project_to_summary() {
    let store = SqliteJobStore::in_memory().await.unwrap();
    store.insert_job(sample_job("a", 0.4)).await.unwrap();

    let rows = store.raw_query("SELECT * FROM jobs").await.unwrap();
    let summary = JobSummary::from_row(&rows[0]);
    assert_eq!(summary.company, "Acme");
    assert_eq!(summary.tags, serde_json::json!(["rust"]));
}

#[tokio::test]
async fn test_raw_query_rejects_writes() {
    let store = SqliteJobStore::in_memory().await.unwrap();
    let result = store.raw_query("DELETE FROM jobs").await;
    match result {
        Err(err @ StoreError::Query(_)) => assert_eq!(
            err.to_string(),
            "Query error: only read-only statements are allowed"
        ),
        other => panic!("expected query error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_closed_connection_is_connection_error() {
    let store = SqliteJobStore::in_memory().await.unwrap();
    store.conn.clone().close().await.unwrap();

    assert!(matches!(store.count_jobs().await, Err(StoreError::Connection(_))));
    assert!(matches!(
        store.raw_query("SELECT * FROM jobs").await,
        Err(StoreError::Connection(_))
    ));
}

#[test]
fn test_store_error_mapping() {
    assert!(matches!(
        store_error(tokio_rusqlite::Error::ConnectionClosed),
        StoreError::Connection(_)
    ));

    let boxed = tokio_rusqlite::Error::Other(Box::new(StoreError::Serialization("bad".into())));
    assert!(matches!(store_error(boxed), StoreError::Serialization(ref m) if m == "bad"));

    let sql = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::InvalidQuery);
    assert!(matches!(store_error(sql), StoreError::Query(_)));
}

#[tokio::test]
async fn test_raw_query_invalid_sql() {
    let store = SqliteJobStore::in_memory().await.unwrap();
    let result = store.raw_query("SELECT * FROM no_such_table").await;
    match result {
        Err(StoreError::Query(message)) => assert!(message.contains("no_such_table")),
        other => panic!("expected query error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_open_file_backed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jobs.db");

    {
        let store = SqliteJobStore::open(&path).await.unwrap();
        store.insert_job(sample_job("a", 0.1)).await.unwrap();
    }

    let reopened = SqliteJobStore::open(&path).await.unwrap();
    assert_eq!(reopened.count_jobs().await.unwrap(), 1);
}

#[tokio::test]
async fn test_open_missing_directory_fails() {
    let result = SqliteJobStore::open("/nonexistent/dir/jobs.db").await;
    assert!(matches!(result, Err(StoreError::Connection(_))));
}
