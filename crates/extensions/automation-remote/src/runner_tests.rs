use super::*;
use std::time::Duration;
use autoapply_protocols::error::CollaboratorError;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> AutomationClient {
    AutomationClient::new(server.uri(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_run_posts_request_and_decodes_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/run"))
        .and(body_json(json!({"configId": "cfg-1", "useRealAutomation": true})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"applicationsSubmitted": 4, "skipped": 1})),
        )
        .mount(&server)
        .await;

    let runner = RemoteAutomationRunner::new(client_for(&server));
    let result = runner
        .run(AutomationRequest::new("cfg-1").with_real_automation(true))
        .await
        .unwrap();

    assert_eq!(result.applications_submitted, 4);
    assert_eq!(result.extra["skipped"], 1);
}

#[tokio::test]
async fn test_run_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/run"))
        .and(header("authorization", "Bearer secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"applicationsSubmitted": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).with_api_key(Some("secret".to_string()));
    let runner = RemoteAutomationRunner::new(client);
    runner.run(AutomationRequest::new("cfg-1")).await.unwrap();
}

#[tokio::test]
async fn test_run_api_error_uses_error_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/run"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
        .mount(&server)
        .await;

    let runner = RemoteAutomationRunner::new(client_for(&server));
    let err = runner.run(AutomationRequest::new("cfg-1")).await.unwrap_err();

    assert_eq!(err.detail(), Some("boom".to_string()));
    match err {
        AutomationError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_run_empty_error_body_is_opaque() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/run"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let runner = RemoteAutomationRunner::new(client_for(&server));
    let err = runner.run(AutomationRequest::new("cfg-1")).await.unwrap_err();
    assert!(matches!(err, AutomationError::Opaque));
}

#[tokio::test]
async fn test_run_malformed_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/run"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let runner = RemoteAutomationRunner::new(client_for(&server));
    let err = runner.run(AutomationRequest::new("cfg-1")).await.unwrap_err();
    assert!(matches!(err, AutomationError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_run_unreachable_service() {
    // Port 9 (discard) is not expected to accept HTTP connections.
    let client = AutomationClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
    let runner = RemoteAutomationRunner::new(client);
    let err = runner.run(AutomationRequest::new("cfg-1")).await.unwrap_err();
    assert!(matches!(err, AutomationError::Network(_)));
}

#[tokio::test]
async fn test_run_test_returns_report() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"passed": true})))
        .expect(1)
        .mount(&server)
        .await;

    let runner = RemoteTestRunner::new(client_for(&server));
    let report = runner.run_test().await.unwrap();
    assert_eq!(report["passed"], true);
}

#[test]
fn test_runner_ids() {
    let client = AutomationClient::new("http://localhost:7000", Duration::from_secs(1)).unwrap();
    assert_eq!(RemoteAutomationRunner::new(client.clone()).id(), "remote");
    assert_eq!(RemoteTestRunner::new(client).id(), "remote");
}
