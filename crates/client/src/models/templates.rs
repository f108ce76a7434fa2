//! Permission template models.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::common::{SidEntry, null_as_default};

/// A named, reusable set of permissions as returned by `getTemplate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermissionTemplate {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Permission id to enabled flag.
    #[serde(rename = "permissionIds", default, deserialize_with = "null_as_default")]
    pub permission_ids: HashMap<String, bool>,
    /// Whether any role is derived from this template.
    #[serde(rename = "isUsed", default)]
    pub is_used: bool,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub sids: Vec<SidEntry>,
}

/// Parameters for `addTemplate`.
#[derive(Debug, Clone, Default)]
pub struct AddTemplateParams {
    /// Template name (required).
    pub name: String,
    /// Permission ids, sent comma-joined.
    pub permission_ids: Vec<String>,
    /// Replace an existing template of the same name.
    pub overwrite: bool,
}
