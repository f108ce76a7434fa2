//! Role assignment models.

use serde::{Deserialize, Serialize};

use super::common::{SidType, null_as_default};

/// One user or group and the roles it holds, as returned by `getRoleAssignments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    /// The SID
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", default)]
    pub sid_type: SidType,
    /// Role names, in server order
    #[serde(default, deserialize_with = "null_as_default")]
    pub roles: Vec<String>,
}
