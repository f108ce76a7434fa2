//! Permission template endpoints.

use reqwest::Client;

use crate::auth::Credentials;
use crate::endpoints::request::{FailureBody, get_json, post_form};
use crate::error::Result;
use crate::models::{AddTemplateParams, PermissionTemplate};

/// Create or overwrite a permission template.
///
/// On failure the server's response body is attached to the error; this is
/// the only write endpoint that does so.
pub async fn add_template(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    params: &AddTemplateParams,
) -> Result<()> {
    let mut form: Vec<(&str, String)> = vec![];

    crate::form_params! { form =>
        "name" => required params.name,
        "permissionIds" => join params.permission_ids,
        "overwrite" => bool params.overwrite,
    }

    post_form(
        client,
        base_url,
        credentials,
        "add template",
        "addTemplate",
        &form,
        FailureBody::Capture,
    )
    .await
}

/// Remove one or more templates. `force` removes templates still in use.
pub async fn remove_templates(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    names: &[String],
    force: bool,
) -> Result<()> {
    let mut form: Vec<(&str, String)> = vec![];

    crate::form_params! { form =>
        "names" => join names,
        "force" => bool force,
    }

    post_form(
        client,
        base_url,
        credentials,
        "remove templates",
        "removeTemplates",
        &form,
        FailureBody::Discard,
    )
    .await
}

/// Fetch one template by name.
pub async fn get_template(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    name: &str,
) -> Result<PermissionTemplate> {
    let mut query: Vec<(&str, String)> = vec![];

    crate::form_params! { query =>
        "name" => required name,
    }

    get_json(
        client,
        base_url,
        credentials,
        "get template",
        "getTemplate",
        &query,
    )
    .await
}
