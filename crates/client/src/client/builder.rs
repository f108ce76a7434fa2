//! Client builder for constructing [`RoleStrategyClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (credentials, parseable base URL)
//! - Normalizing the base URL (exactly one trailing slash)
//! - Configuring or accepting the underlying HTTP client
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`RoleStrategyClient`] methods)
//! - Loading settings from the environment (handled by `role_strategy_config`)
//!
//! # Invariants
//! - An empty or missing base URL falls back to [`DEFAULT_BASE_URL`]
//! - The base URL is always normalized to end with a single `/`
//! - Without an explicit timeout the transport's own default applies
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use reqwest::Url;
use role_strategy_config::Config;
use role_strategy_config::constants::{DEFAULT_BASE_URL, DEFAULT_MAX_REDIRECTS};

use crate::auth::Credentials;
use crate::client::RoleStrategyClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`RoleStrategyClient`].
///
/// # Example
///
/// ```rust,ignore
/// use role_strategy_client::{Credentials, RoleStrategyClient};
/// use secrecy::SecretString;
///
/// let client = RoleStrategyClient::builder()
///     .base_url("https://jenkins.example.com".to_string())
///     .credentials(Credentials::new("admin", SecretString::new("token".into())))
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// ```
#[derive(Default)]
pub struct RoleStrategyClientBuilder {
    base_url: Option<String>,
    credentials: Option<Credentials>,
    http: Option<reqwest::Client>,
    skip_verify: bool,
    timeout: Option<Duration>,
}

impl RoleStrategyClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Jenkins root URL, e.g. `https://ci.example.com/jenkins`.
    ///
    /// A trailing slash is added if missing.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the username and API token used for HTTP Basic auth.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Use an existing HTTP client instead of building one.
    ///
    /// When set, `timeout` and `skip_verify` are ignored; configure them on
    /// the injected client instead.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this in development or testing environments. Disabling TLS
    /// verification makes the connection vulnerable to man-in-the-middle attacks.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set a request timeout. Unset by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Create a client builder from configuration.
    ///
    /// ```rust,ignore
    /// use role_strategy_client::RoleStrategyClient;
    /// use role_strategy_config::ConfigLoader;
    ///
    /// let config = ConfigLoader::new().from_env()?.build()?;
    /// let client = RoleStrategyClient::builder().from_config(&config).build()?;
    /// ```
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.credentials = Some(Credentials::new(
            config.auth.username.clone(),
            config.auth.api_token.clone(),
        ));
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self
    }

    /// Normalize a base URL so that relative paths can be appended directly.
    ///
    /// # Examples
    ///
    /// - `""` -> `"http://localhost:8080/jenkins/"`
    /// - `"https://ci.example.com/jenkins"` -> `"https://ci.example.com/jenkins/"`
    /// - `"https://ci.example.com/jenkins//"` -> `"https://ci.example.com/jenkins/"`
    fn normalize_base_url(url: &str) -> String {
        let url = url.trim();
        let url = if url.is_empty() { DEFAULT_BASE_URL } else { url };
        format!("{}/", url.trim_end_matches('/'))
    }

    /// Build the [`RoleStrategyClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingCredentials`] if no credentials were provided.
    /// Returns [`ClientError::InvalidUrl`] if the base URL does not parse.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<RoleStrategyClient> {
        let base_url = Self::normalize_base_url(self.base_url.as_deref().unwrap_or_default());
        Url::parse(&base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        let credentials = self.credentials.ok_or(ClientError::MissingCredentials)?;

        let http = match self.http {
            Some(http) => http,
            None => {
                let mut http_builder = reqwest::Client::builder()
                    .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

                if let Some(timeout) = self.timeout {
                    http_builder = http_builder.timeout(timeout);
                }

                if self.skip_verify {
                    if base_url.starts_with("https://") {
                        http_builder = http_builder.danger_accept_invalid_certs(true);
                    } else {
                        tracing::warn!(
                            "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                        );
                    }
                }

                http_builder.build()?
            }
        };

        Ok(RoleStrategyClient {
            http,
            base_url,
            credentials,
        })
    }
}
