//! Connection configuration types.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeout).
//! - Define the main `Config` structure combining connection and auth.
//!
//! Invariants:
//! - `timeout: None` leaves the transport default in place.

use secrecy::SecretString;
use std::time::Duration;

use crate::constants::DEFAULT_BASE_URL;
use crate::types::auth::AuthConfig;

/// Connection settings for a Jenkins server.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Jenkins root URL (e.g., https://ci.example.com/jenkins)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Per-request timeout
    pub timeout: Option<Duration>,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            skip_verify: false,
            timeout: None,
        }
    }
}

/// Main configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub auth: AuthConfig,
}

impl Config {
    /// Create a config with default connection options.
    pub fn new(base_url: String, username: String, api_token: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                ..ConnectionConfig::default()
            },
            auth: AuthConfig {
                username,
                api_token,
            },
        }
    }
}
