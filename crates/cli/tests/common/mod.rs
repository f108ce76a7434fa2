//! Shared test utilities for role-strategy integration tests.
//!
//! Invariants / Assumptions:
//! - `DOTENV_DISABLED=1` keeps a local `.env` from leaking into tests.
//! - `JENKINS_USER`/`JENKINS_API_TOKEN` are set to dummy values that the
//!   mocks expect as Basic credentials.

use assert_cmd::Command;

#[allow(dead_code)]
pub const TEST_USER: &str = "admin";
#[allow(dead_code)]
pub const TEST_TOKEN: &str = "test-token";

/// Returns a hermetic `role-strategy` command for integration testing.
pub fn role_strategy_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("role-strategy");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env("JENKINS_USER", TEST_USER);
    cmd.env("JENKINS_API_TOKEN", TEST_TOKEN);

    // Clear potential host leakage
    cmd.env_remove("JENKINS_URL")
        .env_remove("JENKINS_TIMEOUT")
        .env_remove("JENKINS_SKIP_VERIFY")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `role-strategy` command pointed at `base_url`.
#[allow(dead_code)]
pub fn role_strategy_cmd_with_url(base_url: &str) -> Command {
    let mut cmd = role_strategy_cmd();
    cmd.env("JENKINS_URL", base_url);
    cmd
}

/// Path of a Role Strategy endpoint on the mock server root.
#[allow(dead_code)]
pub fn strategy_path(endpoint: &str) -> String {
    format!("/role-strategy/strategy/{}", endpoint)
}
