//! Request construction and response handling shared by every endpoint.
//!
//! This module is the only place that touches `reqwest` request builders:
//! - [`new_request`] resolves a relative path against the base URL and
//!   attaches HTTP Basic credentials.
//! - [`post_form`] is the shape of every write operation.
//! - [`get_json`] is the shape of every read operation.
//!
//! # Invariants
//! - The base URL always ends with `/` (normalized by the client builder).
//! - Relative paths never start with `/`; a leading slash is stripped here.
//! - One request per call. No retries, no backoff.
//! - Only HTTP 200 counts as success.

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::auth::Credentials;
use crate::error::{ClientError, Result};

/// Path prefix of the Role Strategy REST API under the Jenkins root.
pub const STRATEGY_PREFIX: &str = "role-strategy/strategy";

/// What to do with the response body when a write operation fails.
///
/// `addTemplate` has always reported the server's explanation, the other
/// write endpoints never did. The difference is kept, but made explicit at
/// each call site instead of hidden in copy-pasted code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureBody {
    Capture,
    Discard,
}

/// Path of a Role Strategy endpoint relative to the Jenkins root.
pub fn strategy_path(endpoint: &str) -> String {
    format!("{}/{}", STRATEGY_PREFIX, endpoint.trim_start_matches('/'))
}

/// Build an authenticated request for `path` relative to `base_url`.
pub fn new_request(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    method: Method,
    path: &str,
) -> RequestBuilder {
    let url = format!("{}{}", base_url, path.trim_start_matches('/'));
    credentials.apply(client.request(method, url))
}

/// Issue a form-encoded POST and treat anything but 200 as a failure.
pub async fn post_form(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    operation: &'static str,
    endpoint: &str,
    form: &[(&str, String)],
    on_failure: FailureBody,
) -> Result<()> {
    let path = strategy_path(endpoint);
    debug!(operation, method = "POST", path = %path, "Sending Role Strategy request");

    // `.form()` sets Content-Type: application/x-www-form-urlencoded.
    let builder = new_request(client, base_url, credentials, Method::POST, &path).form(form);
    let response = builder.send().await?;

    check_status(response, operation, on_failure).await?;
    Ok(())
}

/// Issue a GET with query parameters and decode the JSON body.
pub async fn get_json<T: DeserializeOwned>(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    operation: &'static str,
    endpoint: &str,
    query: &[(&str, String)],
) -> Result<T> {
    let path = strategy_path(endpoint);
    debug!(operation, method = "GET", path = %path, "Sending Role Strategy request");

    let builder = new_request(client, base_url, credentials, Method::GET, &path).query(query);
    let response = builder.send().await?;
    let response = check_status(response, operation, FailureBody::Discard).await?;

    let body = response.text().await?;
    debug!(operation, bytes = body.len(), "Decoding Role Strategy response");
    serde_json::from_str(&body).map_err(|source| ClientError::Decode { operation, source })
}

/// Pass a 200 response through, turn anything else into [`ClientError::ApiError`].
async fn check_status(
    response: Response,
    operation: &'static str,
    on_failure: FailureBody,
) -> Result<Response> {
    let status = response.status();
    if status == StatusCode::OK {
        return Ok(response);
    }

    let body = match on_failure {
        FailureBody::Capture => Some(
            response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response body".to_string()),
        ),
        FailureBody::Discard => None,
    };

    debug!(operation, status = status.as_u16(), "Role Strategy request failed");

    Err(ClientError::ApiError {
        operation,
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or("").to_string(),
        body,
    })
}
