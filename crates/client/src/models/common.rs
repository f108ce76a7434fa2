//! Security identifier types shared by templates, roles and assignments.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Deserialize `null` as the field type's default.
///
/// Pair with `#[serde(default)]` so a missing field behaves the same way.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Kind of a security identifier as reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SidType {
    #[serde(rename = "USER")]
    User,
    #[serde(rename = "GROUP")]
    Group,
    /// SID not yet bound to a concrete kind (older plugin data).
    #[serde(rename = "EITHER")]
    Either,
    /// Unknown or unrecognized SID type.
    #[serde(other)]
    #[default]
    Unknown,
}

impl fmt::Display for SidType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "USER"),
            Self::Group => write!(f, "GROUP"),
            Self::Either => write!(f, "EITHER"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// A user or group assigned to a role or template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidEntry {
    #[serde(rename = "type", default)]
    pub sid_type: SidType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sid: String,
}

/// Which parameter family an assign/unassign/delete call targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidKind {
    User,
    Group,
}

impl SidKind {
    /// Form parameter carrying the identifier on assign/unassign calls.
    pub fn param_name(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Group => "group",
        }
    }
}

impl fmt::Display for SidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.param_name())
    }
}
