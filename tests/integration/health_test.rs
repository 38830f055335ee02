//! Integration tests for the health endpoint.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health_reports_backends() {
    let app = TestApp::new().await;

    let response = app.get("/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], true);
    assert_eq!(response.body["cache"], true);
    assert!(response.body["version"].is_string());
}

#[tokio::test]
async fn test_request_id_is_assigned_and_echoed() {
    let app = TestApp::new().await;

    let assigned = app.get("/health", None).await;
    let id = assigned
        .headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("request id header");
    assert!(!id.is_empty());

    let echoed = app
        .get_with_header("/health", Some(("x-request-id", "trace-42")))
        .await;
    assert_eq!(echoed.headers.get("x-request-id").unwrap(), "trace-42");
}
