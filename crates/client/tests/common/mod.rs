//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Every mock server is started per test; nothing is shared between tests
//!
//! # What this does NOT handle
//! - Mock setup for individual endpoints (use wiremock directly in tests)

#[allow(unused_imports)]
pub use role_strategy_client::testing::load_fixture;

#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use role_strategy_client::endpoints;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use role_strategy_client::{Credentials, RoleStrategyClient};
use secrecy::SecretString;

pub const TEST_USER: &str = "admin";
pub const TEST_TOKEN: &str = "test-token";

/// Path of a Role Strategy endpoint on the mock server root.
#[allow(dead_code)]
pub fn strategy_path(endpoint: &str) -> String {
    format!("/role-strategy/strategy/{}", endpoint)
}

#[allow(dead_code)]
pub fn credentials() -> Credentials {
    Credentials::new(TEST_USER, SecretString::new(TEST_TOKEN.into()))
}

/// Client pointed at the mock server, base URL given without a trailing slash.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> RoleStrategyClient {
    RoleStrategyClient::builder()
        .base_url(server.uri())
        .credentials(credentials())
        .build()
        .expect("client should build")
}
