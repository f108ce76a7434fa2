//! HTTP Basic credentials for Jenkins.

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

/// Username and API token sent with every request.
///
/// The token is kept in a [`SecretString`] so it never shows up in `Debug`
/// output or logs.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    api_token: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, api_token: SecretString) -> Self {
        Self {
            username: username.into(),
            api_token,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Attach the credentials to an outbound request as HTTP Basic auth.
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.basic_auth(&self.username, Some(self.api_token.expose_secret()))
    }
}
