//! Token service integration tests.

mod common;

use axum::http::StatusCode;
use common::TestHarness;
use serde_json::json;
use wiremock::matchers::{basic_auth, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn token_endpoint_exchanges_client_credentials() {
    let harness = TestHarness::new().await;

    Mock::given(method("POST"))
        .and(path("/v2/oauth/token"))
        .and(basic_auth("test-client", "test-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok-1",
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&harness.gateway)
        .await;

    let response = harness.server.get("/pixup-token").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["token"], "tok-1");
}

#[tokio::test]
async fn token_endpoint_reports_gateway_refusal() {
    let harness = TestHarness::new().await;

    Mock::given(method("POST"))
        .and(path("/v2/oauth/token"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "invalid_client" })),
        )
        .mount(&harness.gateway)
        .await;

    let response = harness.server.get("/pixup-token").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "failed to obtain gateway token");
}

#[tokio::test]
async fn token_endpoint_requires_credentials() {
    let harness = TestHarness::without_pixup_credentials().await;

    let response = harness.server.get("/pixup-token").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("not configured"));
}
