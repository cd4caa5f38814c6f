//! Common test utilities for pix-charge-service integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use axum::Router;
use axum_test::TestServer;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pix_charge_service::{create_router, AppState, ServiceConfig};

/// Test harness containing everything needed for integration tests.
///
/// All three collaborators (token service, PixUp gateway, Supabase) are
/// wiremock servers, so every test exercises the real HTTP surface with no
/// live credentials.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Mock token service.
    pub token_service: MockServer,
    /// Mock PixUp gateway.
    pub gateway: MockServer,
    /// Mock Supabase auth endpoint.
    pub supabase: MockServer,
}

impl TestHarness {
    /// Create a fully configured test harness.
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Harness with no auth provider configured.
    pub async fn without_supabase() -> Self {
        Self::with_config(|config| {
            config.supabase_url = None;
            config.supabase_anon_key = None;
        })
        .await
    }

    /// Harness with no PixUp OAuth credentials configured.
    pub async fn without_pixup_credentials() -> Self {
        Self::with_config(|config| {
            config.pixup_client_id = None;
            config.pixup_client_secret = None;
        })
        .await
    }

    /// Harness whose token service URL points at a dead port.
    pub async fn with_unreachable_token_service() -> Self {
        Self::with_config(|config| {
            // Discard port; nothing listens there.
            config.token_service_url = "http://127.0.0.1:9".into();
        })
        .await
    }

    async fn with_config(tweak: impl FnOnce(&mut ServiceConfig)) -> Self {
        let token_service = MockServer::start().await;
        let gateway = MockServer::start().await;
        let supabase = MockServer::start().await;

        let mut config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            public_base_url: "http://localhost:8080".into(),
            token_service_url: token_service.uri(),
            pixup_api_url: gateway.uri(),
            pixup_client_id: Some("test-client".into()),
            pixup_client_secret: Some("test-secret".into()),
            supabase_url: Some(supabase.uri()),
            supabase_anon_key: Some("test-anon-key".into()),
            frontend_url: "http://localhost:3000".into(),
            cors_origins: vec!["*".into()],
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 30,
        };
        tweak(&mut config);

        let state = AppState::new(config);
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self {
            server,
            token_service,
            gateway,
            supabase,
        }
    }

    /// The postback URL the service hands to the gateway by default.
    pub fn default_postback_url(&self) -> &'static str {
        "http://localhost:8080/pixup-webhook"
    }

    /// Mount a token service answering with the given bearer token.
    pub async fn mock_token(&self, token: &str) {
        Mock::given(method("GET"))
            .and(path("/pixup-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": token })))
            .mount(&self.token_service)
            .await;
    }

    /// Mount a token service answering with an error object instead of a
    /// token.
    pub async fn mock_token_error(&self, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/pixup-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.token_service)
            .await;
    }

    /// Assert neither the token service nor the gateway saw any traffic.
    pub async fn assert_no_outbound_calls(&self) {
        let token_requests = self
            .token_service
            .received_requests()
            .await
            .expect("request recording enabled");
        assert!(
            token_requests.is_empty(),
            "token service was called {} time(s)",
            token_requests.len()
        );

        let gateway_requests = self
            .gateway
            .received_requests()
            .await
            .expect("request recording enabled");
        assert!(
            gateway_requests.is_empty(),
            "gateway was called {} time(s)",
            gateway_requests.len()
        );
    }
}
