//! Role management endpoints.

use reqwest::Client;

use crate::auth::Credentials;
use crate::endpoints::request::{FailureBody, get_json, post_form};
use crate::error::Result;
use crate::models::roles::AllRolesResponse;
use crate::models::{AddRoleParams, AllRoles, RoleInfo, RoleType};

/// Create or overwrite a role.
///
/// `pattern` and `template` are only sent when non-empty.
pub async fn add_role(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    params: &AddRoleParams,
) -> Result<()> {
    let mut form: Vec<(&str, String)> = vec![];

    crate::form_params! { form =>
        "type" => required params.role_type,
        "roleName" => required params.role_name,
        "permissionIds" => join params.permission_ids,
        "overwrite" => bool params.overwrite,
        "pattern" => non_empty params.pattern,
        "template" => non_empty params.template,
    }

    post_form(
        client,
        base_url,
        credentials,
        "add role",
        "addRole",
        &form,
        FailureBody::Discard,
    )
    .await
}

/// Remove one or more roles of the given type.
pub async fn remove_roles(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    role_type: RoleType,
    role_names: &[String],
) -> Result<()> {
    let mut form: Vec<(&str, String)> = vec![];

    crate::form_params! { form =>
        "type" => required role_type,
        "roleNames" => join role_names,
    }

    post_form(
        client,
        base_url,
        credentials,
        "remove roles",
        "removeRoles",
        &form,
        FailureBody::Discard,
    )
    .await
}

/// Fetch a single role's permissions, SIDs, pattern and template.
pub async fn get_role(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    role_type: RoleType,
    role_name: &str,
) -> Result<RoleInfo> {
    let mut query: Vec<(&str, String)> = vec![];

    crate::form_params! { query =>
        "type" => required role_type,
        "roleName" => required role_name,
    }

    get_json(client, base_url, credentials, "get role", "getRole", &query).await
}

/// Fetch every role of the given type, keyed by role name.
pub async fn get_all_roles(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    role_type: RoleType,
) -> Result<AllRoles> {
    let mut query: Vec<(&str, String)> = vec![];

    crate::form_params! { query =>
        "type" => required role_type,
    }

    let response: AllRolesResponse = get_json(
        client,
        base_url,
        credentials,
        "get all roles",
        "getAllRoles",
        &query,
    )
    .await?;
    Ok(response.into_all_roles())
}
