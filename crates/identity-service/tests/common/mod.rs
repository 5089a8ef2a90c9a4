//! Common test utilities for integration tests.

use identity_client::{Credential, IdentityConfig};
use identity_service::IdentityService;
use std::time::Duration;
use wiremock::MockServer;

/// Start a mock identity backend.
pub async fn mock_identity_server() -> MockServer {
    MockServer::start().await
}

/// Create a service talking to a mock backend.
pub fn test_remote_service(mock_server: &MockServer) -> IdentityService {
    let mut config = IdentityConfig::remote(mock_server.uri());
    config.timeout = Duration::from_secs(5);
    IdentityService::new(&config, Credential::new("test-token")).unwrap()
}

/// Create a service backed by the in-process mock.
pub fn test_mock_service(latency: Duration) -> IdentityService {
    IdentityService::new(&IdentityConfig::mock(latency), Credential::anonymous()).unwrap()
}
