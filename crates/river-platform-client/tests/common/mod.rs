/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for river-platform-client tests

use river_platform_client::{Cancellation, ClientConfig, PlatformClient};
use wiremock::MockServer;

pub const ACCOUNT_ID: &str = "acc_test";
pub const API_KEY: &str = "apisecret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server with default configuration
pub fn client_for(server: &MockServer) -> PlatformClient {
    PlatformClient::new(server.uri(), ACCOUNT_ID, API_KEY).expect("client init")
}

/// Client pointed at the mock server with custom configuration
#[allow(dead_code)]
pub fn client_with(
    server: &MockServer,
    config: ClientConfig,
    cancellation: Option<Cancellation>,
) -> PlatformClient {
    PlatformClient::with_config(server.uri(), ACCOUNT_ID, API_KEY, config, cancellation)
        .expect("client init")
}

/// Account summary fixture used across tests
#[allow(dead_code)]
pub fn account_summary_json() -> serde_json::Value {
    serde_json::json!({
        "id": "acc_satoshi",
        "balance": 21000000,
        "available_balance": 3092009
    })
}
