//! Health endpoint integration tests.

mod common;

use common::{server_without_payments, TestHarness};

#[tokio::test]
async fn health_check_returns_ok() {
    let harness = TestHarness::new();

    let response = harness.server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["paymentsConfigured"], true);
}

#[tokio::test]
async fn health_check_reports_disabled_payments() {
    let server = server_without_payments();

    let body: serde_json::Value = server.get("/health").await.json();

    assert_eq!(body["paymentsConfigured"], false);
}

#[tokio::test]
async fn unknown_path_without_frontend_is_not_found() {
    let harness = TestHarness::new();

    let response = harness.server.get("/no-such-page").await;

    response.assert_status_not_found();
}
