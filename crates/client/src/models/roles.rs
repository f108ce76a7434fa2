//! Role models for the Role Strategy plugin.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::common::{SidEntry, null_as_default};
use super::role_type::RoleType;

/// Detail of a single role as returned by `getRole`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleInfo {
    /// Permission id to enabled flag.
    #[serde(rename = "permissionIds", default, deserialize_with = "null_as_default")]
    pub permission_ids: HashMap<String, bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sids: Vec<SidEntry>,
    /// Job/folder or agent name pattern (project and agent roles only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Template this role was derived from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

/// Every role of one type, keyed by role name, as returned by `getAllRoles`.
///
/// The value side is left untyped; the plugin reports the role's SIDs there
/// but the shape varies between plugin versions.
pub type AllRoles = HashMap<String, Vec<serde_json::Value>>;

/// `getAllRoles` body as sent; a `null` role value decodes to an empty list.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub(crate) struct AllRolesResponse(HashMap<String, Option<Vec<serde_json::Value>>>);

impl AllRolesResponse {
    pub(crate) fn into_all_roles(self) -> AllRoles {
        self.0
            .into_iter()
            .map(|(name, sids)| (name, sids.unwrap_or_default()))
            .collect()
    }
}

/// Parameters for `addRole`.
#[derive(Debug, Clone)]
pub struct AddRoleParams {
    pub role_type: RoleType,
    /// Role name (required).
    pub role_name: String,
    /// Permission ids, sent comma-joined.
    pub permission_ids: Vec<String>,
    /// Replace an existing role of the same name.
    pub overwrite: bool,
    /// Name pattern; omitted from the request when `None` or empty.
    pub pattern: Option<String>,
    /// Template to derive from; omitted from the request when `None` or empty.
    pub template: Option<String>,
}

impl AddRoleParams {
    /// Parameters for a role with no pattern and no template.
    pub fn new(
        role_type: RoleType,
        role_name: impl Into<String>,
        permission_ids: Vec<String>,
    ) -> Self {
        Self {
            role_type,
            role_name: role_name.into(),
            permission_ids,
            overwrite: false,
            pattern: None,
            template: None,
        }
    }
}
