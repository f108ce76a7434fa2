//! Validation tests for base URL and timeout settings.

use std::time::Duration;

use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

fn loader_with_url(url: &str) -> ConfigLoader {
    ConfigLoader::new()
        .with_base_url(url.to_string())
        .with_username("admin".to_string())
        .with_api_token("test-token".to_string())
}

#[test]
fn test_base_url_trailing_slash_is_stripped() {
    let config = loader_with_url("https://ci.example.com/jenkins/").build().unwrap();
    assert_eq!(config.connection.base_url, "https://ci.example.com/jenkins");
}

#[test]
fn test_base_url_surrounding_whitespace_is_trimmed() {
    let config = loader_with_url("  http://jenkins:8080  ").build().unwrap();
    assert_eq!(config.connection.base_url, "http://jenkins:8080");
}

#[test]
fn test_blank_base_url_uses_default() {
    let config = loader_with_url("   ").build().unwrap();
    assert_eq!(config.connection.base_url, "http://localhost:8080/jenkins");
}

#[test]
fn test_relative_base_url_is_rejected() {
    let result = loader_with_url("jenkins/ci").build();
    assert!(matches!(
        result,
        Err(ConfigError::InvalidValue { ref var, .. }) if var == "base_url"
    ));
}

#[test]
fn test_non_http_scheme_is_rejected() {
    let err = loader_with_url("ftp://ci.example.com").build().unwrap_err();
    assert!(err.to_string().contains("scheme must be http or https"));
}

#[test]
fn test_zero_timeout_is_rejected() {
    let result = loader_with_url("https://ci.example.com")
        .with_timeout(Duration::from_secs(0))
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
}

#[test]
fn test_timeout_above_maximum_is_rejected() {
    let result = loader_with_url("https://ci.example.com")
        .with_timeout(Duration::from_secs(3601))
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
}

#[test]
fn test_timeout_bounds_are_inclusive() {
    for secs in [1, 3600] {
        let config = loader_with_url("https://ci.example.com")
            .with_timeout(Duration::from_secs(secs))
            .build()
            .unwrap();
        assert_eq!(config.connection.timeout, Some(Duration::from_secs(secs)));
    }
}
