//! Main Role Strategy REST API client and API methods.
//!
//! This module provides the primary [`RoleStrategyClient`] for interacting
//! with the Jenkins Role Strategy plugin.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `templates`: Permission template methods
//! - `roles`: Role methods and role-name helpers
//! - `assignments`: User/group assignment methods
//! - `lookups`: Job and agent pattern lookups
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Retries, caching or session management (there are none)
//!
//! # Invariants
//! - `base_url` always ends with exactly one `/`
//! - Every method issues exactly one HTTP request

pub mod builder;

// API method submodules
mod assignments;
mod lookups;
mod roles;
mod templates;

use crate::auth::Credentials;

/// Jenkins Role Strategy REST API client.
///
/// The client is a read-only bundle of base URL, credentials and a
/// `reqwest::Client`. It holds no mutable state, so one instance can be
/// shared across tasks (for example behind an `Arc`) as freely as the
/// underlying `reqwest::Client` allows.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use role_strategy_client::{Credentials, RoleStrategyClient};
/// use secrecy::SecretString;
///
/// let client = RoleStrategyClient::builder()
///     .base_url("https://jenkins.example.com/jenkins".to_string())
///     .credentials(Credentials::new("admin", SecretString::new("api-token".into())))
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct RoleStrategyClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) credentials: Credentials,
}

impl RoleStrategyClient {
    /// Create a new client builder.
    pub fn builder() -> builder::RoleStrategyClientBuilder {
        builder::RoleStrategyClientBuilder::new()
    }

    /// Get the normalized base URL (always ends with `/`).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the username requests are authenticated as.
    pub fn username(&self) -> &str {
        self.credentials.username()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use secrecy::SecretString;

    fn credentials() -> Credentials {
        Credentials::new("admin", SecretString::new("test-token".into()))
    }

    #[test]
    fn test_client_builder_with_credentials() {
        let client = RoleStrategyClient::builder()
            .base_url("https://jenkins.example.com".to_string())
            .credentials(credentials())
            .build();

        assert!(client.is_ok());
        let client = client.unwrap();
        assert_eq!(client.base_url(), "https://jenkins.example.com/");
        assert_eq!(client.username(), "admin");
    }

    #[test]
    fn test_client_builder_missing_credentials() {
        let client = RoleStrategyClient::builder()
            .base_url("https://jenkins.example.com".to_string())
            .build();

        assert!(matches!(client.unwrap_err(), ClientError::MissingCredentials));
    }

    #[test]
    fn test_client_builder_defaults_base_url() {
        let client = RoleStrategyClient::builder()
            .credentials(credentials())
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "http://localhost:8080/jenkins/");
    }

    #[test]
    fn test_client_builder_rejects_invalid_url() {
        let client = RoleStrategyClient::builder()
            .base_url("not a url".to_string())
            .credentials(credentials())
            .build();

        assert!(matches!(client.unwrap_err(), ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_skip_verify_with_http_url() {
        // Should succeed but log warning about ineffective skip_verify
        let client = RoleStrategyClient::builder()
            .base_url("http://localhost:8080".to_string())
            .credentials(credentials())
            .skip_verify(true)
            .build();

        assert!(client.is_ok());
    }
}
