//! Integration tests for structured exit codes.

mod common;

use common::{role_strategy_cmd, role_strategy_cmd_with_url, strategy_path};
use predicates::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn server_answering_get_role(status: u16, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(strategy_path("getRole")))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&server)
        .await;
    server
}

async fn assert_get_role_exit_code(status: u16, body: &str, expected: i32) {
    let server = server_answering_get_role(status, body).await;
    role_strategy_cmd_with_url(&server.uri())
        .args(["role", "get", "global", "admin"])
        .assert()
        .code(expected);
}

#[tokio::test]
async fn test_success_returns_exit_code_0() {
    assert_get_role_exit_code(200, r#"{"permissionIds": {}, "sids": []}"#, 0).await;
}

#[tokio::test]
async fn test_unauthorized_returns_exit_code_2() {
    assert_get_role_exit_code(401, "", 2).await;
}

#[test]
fn test_connection_refused_returns_exit_code_3() {
    role_strategy_cmd_with_url("http://127.0.0.1:1")
        .args(["role", "get", "global", "admin"])
        .assert()
        .code(3);
}

#[tokio::test]
async fn test_not_found_returns_exit_code_4() {
    assert_get_role_exit_code(404, "", 4).await;
}

#[tokio::test]
async fn test_malformed_json_returns_exit_code_5() {
    assert_get_role_exit_code(200, "<html>login</html>", 5).await;
}

#[tokio::test]
async fn test_forbidden_returns_exit_code_6() {
    let server = server_answering_get_role(403, "").await;
    role_strategy_cmd_with_url(&server.uri())
        .args(["role", "get", "global", "admin"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("get role failed: 403 Forbidden"));
}

#[tokio::test]
async fn test_service_unavailable_returns_exit_code_8() {
    assert_get_role_exit_code(503, "", 8).await;
}

#[tokio::test]
async fn test_other_server_error_returns_exit_code_1() {
    assert_get_role_exit_code(500, "", 1).await;
}

#[test]
fn test_missing_api_token_returns_exit_code_1() {
    role_strategy_cmd()
        .env_remove("JENKINS_API_TOKEN")
        .args(["role", "list", "global"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("API token is required"));
}

#[test]
fn test_invalid_output_format_returns_exit_code_1() {
    role_strategy_cmd_with_url("http://127.0.0.1:1")
        .args(["role", "list", "global", "--output", "xml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid output format"));
}
