//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests touching the process environment are `#[serial]` and scope
//!   variables with `temp_env`.
//! - Tests that change the working directory also hold `env_lock()`.

use std::sync::Mutex;

mod dotenv_tests;
mod validation_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable the loader reads, unset.
pub fn cleared_env() -> Vec<(&'static str, Option<&'static str>)> {
    vec![
        ("JENKINS_URL", None),
        ("JENKINS_USER", None),
        ("JENKINS_API_TOKEN", None),
        ("JENKINS_TIMEOUT", None),
        ("JENKINS_SKIP_VERIFY", None),
    ]
}
