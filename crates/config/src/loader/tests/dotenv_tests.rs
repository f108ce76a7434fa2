//! Tests for dotenv loading behavior.
//!
//! Invariants / Assumptions:
//! - Tests hold `env_lock()` and are `#[serial]` since they change the cwd.
//! - Error messages must never contain secret values from `.env` files.

use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use super::{cleared_env, env_lock};
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

/// RAII guard for temporarily changing the current working directory.
struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    fn new(temp_dir: &TempDir) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(temp_dir.path()).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}

fn dotenv_enabled_env() -> Vec<(&'static str, Option<&'static str>)> {
    let mut env = cleared_env();
    env.push(("DOTENV_DISABLED", None));
    env
}

#[test]
#[serial]
fn test_missing_dotenv_is_ok() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    temp_env::with_vars(dotenv_enabled_env(), || {
        let result = ConfigLoader::new().load_dotenv();
        assert!(result.is_ok(), "Missing .env file should be silently ignored");
    });
}

#[test]
#[serial]
fn test_dotenv_values_feed_from_env() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".env"),
        "JENKINS_USER=dotenv-user\nJENKINS_API_TOKEN=dotenv-token\n",
    )
    .unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    temp_env::with_vars(dotenv_enabled_env(), || {
        let config = ConfigLoader::new()
            .load_dotenv()
            .unwrap()
            .from_env()
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.auth.username, "dotenv-user");
    });
}

#[test]
#[serial]
fn test_invalid_dotenv_does_not_leak_contents() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".env"),
        "JENKINS_API_TOKEN super-secret-value\n",
    )
    .unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    temp_env::with_vars(dotenv_enabled_env(), || {
        let err = ConfigLoader::new().load_dotenv().unwrap_err();
        assert!(matches!(err, ConfigError::DotenvParse { .. }));
        assert!(!err.to_string().contains("super-secret-value"));
    });
}

#[test]
#[serial]
fn test_dotenv_disabled_skips_invalid_file() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".env"), "not valid dotenv\n").unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    for value in ["1", "true"] {
        let mut env = cleared_env();
        env.push(("DOTENV_DISABLED", Some(value)));
        temp_env::with_vars(env, || {
            assert!(ConfigLoader::new().load_dotenv().is_ok());
        });
    }
}
