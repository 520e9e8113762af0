//! Common test utilities for cutline-server integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use axum_test::TestServer;

use cutline_payments::{
    InMemoryGateway, IntentStatus, MockCryptoPayout, NewIntent, PaymentGateway,
};
use cutline_server::{create_router, AppState, ServerConfig};

/// Test harness wrapping a server backed by the in-memory gateway.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Handle on the gateway the server talks to.
    pub gateway: Arc<InMemoryGateway>,
}

impl TestHarness {
    /// Server with a fresh in-memory gateway.
    pub fn new() -> Self {
        Self::with_gateway(InMemoryGateway::new())
    }

    /// Server whose gateway fails every call.
    pub fn with_failing_gateway() -> Self {
        Self::with_gateway(InMemoryGateway::unavailable())
    }

    fn with_gateway(gateway: InMemoryGateway) -> Self {
        let gateway = Arc::new(gateway);
        let dyn_gateway: Arc<dyn PaymentGateway> = gateway.clone();
        let state = AppState::new(Some(dyn_gateway), MockCryptoPayout::new("bc1qtestwallet"));

        Self {
            server: build_server(state),
            gateway,
        }
    }

    /// Create an intent directly on the gateway and force its status.
    pub async fn intent_with_status(&self, amount: i64, service: &str, status: IntentStatus) -> String {
        let intent = self
            .gateway
            .create_intent(NewIntent::new(amount).service(Some(service.to_string())))
            .await
            .expect("Failed to create intent");
        self.gateway
            .set_status(&intent.id, status)
            .expect("Failed to set intent status");
        intent.id
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Server with no payment gateway configured.
pub fn server_without_payments() -> TestServer {
    build_server(AppState::new(None, MockCryptoPayout::default()))
}

fn build_server(state: AppState) -> TestServer {
    let config = ServerConfig {
        static_dir: "tests/does-not-exist".into(),
        ..ServerConfig::default()
    };
    TestServer::new(create_router(state, &config)).expect("Failed to create test server")
}
