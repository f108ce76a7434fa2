//! SID assignment endpoints.

use reqwest::Client;

use crate::auth::Credentials;
use crate::endpoints::request::{FailureBody, get_json, post_form};
use crate::error::Result;
use crate::models::{RoleAssignment, RoleType, SidKind};

/// Grant `role_name` to a user or group.
///
/// Posts to `assignUserRole` / `assignGroupRole` with the SID in the `user` /
/// `group` parameter respectively.
pub async fn assign_role(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    role_type: RoleType,
    role_name: &str,
    kind: SidKind,
    sid: &str,
) -> Result<()> {
    let (operation, endpoint) = match kind {
        SidKind::User => ("assign user", "assignUserRole"),
        SidKind::Group => ("assign group", "assignGroupRole"),
    };

    let form = sid_role_form(role_type, role_name, kind, sid);
    post_form(
        client,
        base_url,
        credentials,
        operation,
        endpoint,
        &form,
        FailureBody::Discard,
    )
    .await
}

/// Revoke `role_name` from a user or group.
pub async fn unassign_role(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    role_type: RoleType,
    role_name: &str,
    kind: SidKind,
    sid: &str,
) -> Result<()> {
    let (operation, endpoint) = match kind {
        SidKind::User => ("unassign user", "unassignUserRole"),
        SidKind::Group => ("unassign group", "unassignGroupRole"),
    };

    let form = sid_role_form(role_type, role_name, kind, sid);
    post_form(
        client,
        base_url,
        credentials,
        operation,
        endpoint,
        &form,
        FailureBody::Discard,
    )
    .await
}

/// Remove a user or group from every role of the given type.
pub async fn delete_sid(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    role_type: RoleType,
    kind: SidKind,
    sid: &str,
) -> Result<()> {
    let (operation, endpoint) = match kind {
        SidKind::User => ("delete user", "deleteUser"),
        SidKind::Group => ("delete group", "deleteGroup"),
    };

    let mut form: Vec<(&str, String)> = vec![];

    // The plugin reads the SID from `user` on deleteGroup too.
    crate::form_params! { form =>
        "type" => required role_type,
        "user" => required sid,
    }

    post_form(
        client,
        base_url,
        credentials,
        operation,
        endpoint,
        &form,
        FailureBody::Discard,
    )
    .await
}

/// Fetch every SID of the given type together with the roles it holds.
pub async fn get_role_assignments(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    role_type: RoleType,
) -> Result<Vec<RoleAssignment>> {
    let mut query: Vec<(&str, String)> = vec![];

    crate::form_params! { query =>
        "type" => required role_type,
    }

    get_json(
        client,
        base_url,
        credentials,
        "get role assignments",
        "getRoleAssignments",
        &query,
    )
    .await
}

fn sid_role_form(
    role_type: RoleType,
    role_name: &str,
    kind: SidKind,
    sid: &str,
) -> Vec<(&'static str, String)> {
    vec![
        ("type", role_type.to_string()),
        ("roleName", role_name.to_string()),
        (kind.param_name(), sid.to_string()),
    ]
}
