//! Role namespaces understood by the Role Strategy plugin.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Namespace a role lives in. Sent verbatim as the `type` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleType {
    #[serde(rename = "globalRoles")]
    Global,
    /// Project roles, scoped to jobs and folders by pattern.
    #[serde(rename = "projectRoles")]
    Project,
    /// Agent roles. The plugin still calls these "slave" roles on the wire.
    #[serde(rename = "slaveRoles")]
    Agent,
}

impl RoleType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Global => "globalRoles",
            Self::Project => "projectRoles",
            Self::Agent => "slaveRoles",
        }
    }
}

impl fmt::Display for RoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleType {
    type Err = String;

    /// Accepts the short names (`global`, `project`, `agent`, `slave`) as well
    /// as the wire names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "global" | "globalroles" => Ok(Self::Global),
            "project" | "projectroles" => Ok(Self::Project),
            "agent" | "slave" | "slaveroles" => Ok(Self::Agent),
            other => Err(format!(
                "unknown role type '{other}' (expected global, project or agent)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(RoleType::Global.as_str(), "globalRoles");
        assert_eq!(RoleType::Project.as_str(), "projectRoles");
        assert_eq!(RoleType::Agent.as_str(), "slaveRoles");
    }

    #[test]
    fn test_serde_matches_wire_names() {
        for role_type in [RoleType::Global, RoleType::Project, RoleType::Agent] {
            let json = serde_json::to_string(&role_type).unwrap();
            assert_eq!(json, format!("\"{}\"", role_type.as_str()));
        }
    }

    #[test]
    fn test_from_str_short_and_wire_names() {
        assert_eq!("global".parse::<RoleType>().unwrap(), RoleType::Global);
        assert_eq!("projectRoles".parse::<RoleType>().unwrap(), RoleType::Project);
        assert_eq!("slave".parse::<RoleType>().unwrap(), RoleType::Agent);
        assert_eq!(" Agent ".parse::<RoleType>().unwrap(), RoleType::Agent);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "folder".parse::<RoleType>().unwrap_err();
        assert!(err.contains("folder"));
    }
}
