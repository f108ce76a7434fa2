//! Error types for the Role Strategy client.
//!
//! Every public operation returns exactly one of these on failure. Nothing is
//! retried locally; the caller decides what to do with the error.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Role Strategy client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request could not be sent or no response was received.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The server answered with a status other than 200.
    ///
    /// `body` is only populated for the operations that capture the response
    /// body on failure (see `endpoints::request::FailureBody`).
    #[error("{operation} failed: {status} {status_text}{}", .body.as_ref().filter(|b| !b.is_empty()).map(|b| format!(": {b}")).unwrap_or_default())]
    ApiError {
        operation: &'static str,
        status: u16,
        status_text: String,
        body: Option<String>,
    },

    /// A read endpoint returned a body that is not the expected JSON shape.
    #[error("{operation}: failed to decode response: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The client was built without a username and API token.
    #[error("Credentials are required (username and API token)")]
    MissingCredentials,

    /// The configured base URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// HTTP status code of a non-success response, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this error indicates rejected credentials or missing permissions.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    /// Check if the server reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
