//! Integration tests for `assign`, `unassign`, `delete-sid` and `assignments`.

mod common;

use common::{role_strategy_cmd, role_strategy_cmd_with_url, strategy_path};
use predicates::prelude::*;
use wiremock::matchers::{body_string, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_assign_group() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(strategy_path("assignGroupRole")))
        .and(body_string("type=projectRoles&roleName=team-a&group=developers"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    role_strategy_cmd_with_url(&server.uri())
        .args(["assign", "project", "team-a", "--group", "developers"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Assigned role 'team-a' to group 'developers'.",
        ));
}

#[tokio::test]
async fn test_unassign_user() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(strategy_path("unassignUserRole")))
        .and(body_string("type=globalRoles&roleName=admin&user=alice"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    role_strategy_cmd_with_url(&server.uri())
        .args(["unassign", "global", "admin", "--user", "alice"])
        .assert()
        .success();
}

#[tokio::test]
async fn test_delete_sid_group_sends_user_param() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(strategy_path("deleteGroup")))
        .and(body_string("type=slaveRoles&user=builders"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    role_strategy_cmd_with_url(&server.uri())
        .args(["delete-sid", "agent", "--group", "builders"])
        .assert()
        .success();
}

#[tokio::test]
async fn test_assignments_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(strategy_path("getRoleAssignments")))
        .and(query_param("type", "globalRoles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"name": "alice", "type": "USER", "roles": ["admin", "reader"]},
            {"name": "devs", "type": "GROUP", "roles": ["reader"]}
        ])))
        .mount(&server)
        .await;

    role_strategy_cmd_with_url(&server.uri())
        .args(["assignments", "global"])
        .assert()
        .success()
        .stdout("alice\tUSER\tadmin,reader\ndevs\tGROUP\treader\n");
}

#[test]
fn test_assign_requires_user_or_group() {
    role_strategy_cmd()
        .args(["assign", "global", "admin"])
        .assert()
        .failure();
}

#[test]
fn test_assign_rejects_user_and_group_together() {
    role_strategy_cmd()
        .args(["assign", "global", "admin", "--user", "a", "--group", "b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
