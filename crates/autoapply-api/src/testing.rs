//! Scripted collaborators and request helpers for façade tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use serde_json::Value;
use tokio::sync::{mpsc, Notify};
use tower::ServiceExt;

use autoapply_protocols::automation::{
    AutomationRequest, AutomationResult, AutomationRunner, TestAutomationRunner,
};
use autoapply_protocols::error::{AutomationError, SessionError, StoreError};
use autoapply_protocols::session::{Session, SessionProvider, SessionUser};
use autoapply_protocols::store::{JobStore, Row};

use crate::http::routes::create_router;
use crate::state::AppState;

type Script<A, T, E> = Box<dyn Fn(A) -> Result<T, E> + Send + Sync>;

pub(crate) struct StubSession {
    script: Script<(), Session, SessionError>,
}

impl StubSession {
    pub fn ok() -> Self {
        Self::scripted(|_| {
            Ok(Session::new(
                SessionUser::new("user-1").with_name("Test User"),
                "access-token",
                Utc::now() + Duration::hours(1),
            ))
        })
    }

    pub fn scripted(f: impl Fn(()) -> Result<Session, SessionError> + Send + Sync + 'static) -> Self {
        Self { script: Box::new(f) }
    }
}

#[async_trait]
impl SessionProvider for StubSession {
    fn id(&self) -> &str {
        "stub"
    }

    async fn session(&self) -> Result<Session, SessionError> {
        (self.script)(())
    }
}

pub(crate) struct StubRunner {
    script: Script<AutomationRequest, AutomationResult, AutomationError>,
    calls: AtomicUsize,
    last: Mutex<Option<AutomationRequest>>,
}

impl StubRunner {
    pub fn submitting(count: u64) -> Self {
        Self::scripted(move |_| Ok(AutomationResult::new(count)))
    }

    pub fn scripted(
        f: impl Fn(AutomationRequest) -> Result<AutomationResult, AutomationError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        Self {
            script: Box::new(f),
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<AutomationRequest> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl AutomationRunner for StubRunner {
    fn id(&self) -> &str {
        "stub"
    }

    async fn run(&self, request: AutomationRequest) -> Result<AutomationResult, AutomationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(request.clone());
        (self.script)(request)
    }
}

/// Test runner that reports when it starts and can be held on a gate.
pub(crate) struct StubTestRunner {
    script: Script<(), Value, AutomationError>,
    started: Option<mpsc::UnboundedSender<()>>,
    gate: Option<Arc<Notify>>,
}

impl StubTestRunner {
    pub fn ok() -> Self {
        Self::scripted(|_| Ok(serde_json::json!({"passed": true})))
    }

    pub fn scripted(f: impl Fn(()) -> Result<Value, AutomationError> + Send + Sync + 'static) -> Self {
        Self {
            script: Box::new(f),
            started: None,
            gate: None,
        }
    }

    pub fn reporting_to(mut self, started: mpsc::UnboundedSender<()>) -> Self {
        self.started = Some(started);
        self
    }

    pub fn gated_by(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }
}

#[async_trait]
impl TestAutomationRunner for StubTestRunner {
    fn id(&self) -> &str {
        "stub"
    }

    async fn run_test(&self) -> Result<Value, AutomationError> {
        if let Some(ref started) = self.started {
            let _ = started.send(());
        }
        if let Some(ref gate) = self.gate {
            gate.notified().await;
        }
        (self.script)(())
    }
}

pub(crate) struct StubStore {
    count: Script<(), u64, StoreError>,
    rows: Script<String, Vec<Row>, StoreError>,
    last_sql: Mutex<Option<String>>,
}

impl StubStore {
    pub fn with_rows(rows: Vec<Row>) -> Self {
        let count = rows.len() as u64;
        Self {
            count: Box::new(move |_| Ok(count)),
            rows: Box::new(move |_| Ok(rows.clone())),
            last_sql: Mutex::new(None),
        }
    }

    pub fn failing(make: impl Fn() -> StoreError + Send + Sync + 'static) -> Self {
        let make = Arc::new(make);
        let make_rows = make.clone();
        Self {
            count: Box::new(move |_| Err(make())),
            rows: Box::new(move |_| Err(make_rows())),
            last_sql: Mutex::new(None),
        }
    }

    pub fn last_sql(&self) -> Option<String> {
        self.last_sql.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobStore for StubStore {
    fn id(&self) -> &str {
        "stub"
    }

    async fn count_jobs(&self) -> Result<u64, StoreError> {
        (self.count)(())
    }

    async fn raw_query(&self, sql: &str) -> Result<Vec<Row>, StoreError> {
        *self.last_sql.lock().unwrap() = Some(sql.to_string());
        (self.rows)(sql.to_string())
    }
}

/// Assembles an [`AppState`] from stubs, defaulting every collaborator to a healthy one.
pub(crate) struct StateBuilder {
    sessions: Arc<dyn SessionProvider>,
    automation: Arc<dyn AutomationRunner>,
    test_automation: Arc<dyn TestAutomationRunner>,
    store: Arc<dyn JobStore>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(StubSession::ok()),
            automation: Arc::new(StubRunner::submitting(0)),
            test_automation: Arc::new(StubTestRunner::ok()),
            store: Arc::new(StubStore::with_rows(Vec::new())),
        }
    }

    pub fn sessions(mut self, sessions: Arc<dyn SessionProvider>) -> Self {
        self.sessions = sessions;
        self
    }

    pub fn automation(mut self, automation: Arc<dyn AutomationRunner>) -> Self {
        self.automation = automation;
        self
    }

    pub fn test_automation(mut self, runner: Arc<dyn TestAutomationRunner>) -> Self {
        self.test_automation = runner;
        self
    }

    pub fn store(mut self, store: Arc<dyn JobStore>) -> Self {
        self.store = store;
        self
    }

    pub fn build(self) -> AppState {
        AppState::new(self.sessions, self.automation, self.test_automation, self.store)
    }

    pub fn router(self) -> Router {
        create_router(Arc::new(self.build()))
    }
}

/// Send one request through the router and decode the JSON body.
pub(crate) async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub(crate) fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub(crate) fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
