//! Client construction and transport behaviour tests.
//!
//! # Invariants
//! - A base URL with or without a trailing slash targets the same endpoint
//! - Every request carries HTTP Basic credentials
//! - Transport failures surface as `ClientError::HttpError`, not as status errors
//! - One client can serve concurrent callers

mod common;

use std::sync::Arc;

use common::*;
use role_strategy_client::{ClientError, RoleStrategyClient, RoleType};
use wiremock::matchers::{basic_auth, method, path};

async fn mount_get_all_roles(server: &MockServer, prefix: &str, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(format!("{}/role-strategy/strategy/getAllRoles", prefix)))
        .and(basic_auth(TEST_USER, TEST_TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"admin": []})))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_trailing_slash_does_not_change_request_target() {
    let mock_server = MockServer::start().await;
    mount_get_all_roles(&mock_server, "/jenkins", 2).await;

    for base_url in [
        format!("{}/jenkins", mock_server.uri()),
        format!("{}/jenkins/", mock_server.uri()),
    ] {
        let client = RoleStrategyClient::builder()
            .base_url(base_url.clone())
            .credentials(credentials())
            .build()
            .unwrap();

        assert_eq!(client.base_url(), format!("{}/jenkins/", mock_server.uri()));

        let roles = client.get_all_roles(RoleType::Global).await;
        assert!(roles.is_ok(), "request via {} failed: {:?}", base_url, roles);
    }
}

#[tokio::test]
async fn test_injected_http_client_is_used() {
    let mock_server = MockServer::start().await;
    mount_get_all_roles(&mock_server, "", 1).await;

    let client = RoleStrategyClient::builder()
        .base_url(mock_server.uri())
        .credentials(credentials())
        .http_client(Client::new())
        .build()
        .unwrap();

    let names = client.get_global_role_names().await.unwrap();
    assert_eq!(names, vec!["admin".to_string()]);
}

#[tokio::test]
async fn test_wrong_credentials_are_rejected_by_server() {
    let mock_server = MockServer::start().await;
    mount_get_all_roles(&mock_server, "", 0).await;

    Mock::given(method("GET"))
        .and(path(strategy_path("getAllRoles")))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let client = RoleStrategyClient::builder()
        .base_url(mock_server.uri())
        .credentials(role_strategy_client::Credentials::new(
            "admin",
            secrecy::SecretString::new("wrong".into()),
        ))
        .build()
        .unwrap();

    let err = client.get_all_roles(RoleType::Global).await.unwrap_err();
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Nothing listens on port 1.
    let client = RoleStrategyClient::builder()
        .base_url("http://localhost:1".to_string())
        .credentials(credentials())
        .timeout(std::time::Duration::from_millis(100))
        .build()
        .unwrap();

    let err = client.get_role(RoleType::Global, "admin").await.unwrap_err();
    assert!(
        matches!(err, ClientError::HttpError(_)),
        "Expected HttpError, got {:?}",
        err
    );
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_client_is_shareable_across_tasks() {
    let mock_server = MockServer::start().await;
    mount_get_all_roles(&mock_server, "", 8).await;

    let client = Arc::new(client_for(&mock_server));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.get_global_role_names().await })
        })
        .collect();

    for handle in handles {
        let names = handle.await.unwrap().unwrap();
        assert_eq!(names, vec!["admin".to_string()]);
    }
}
