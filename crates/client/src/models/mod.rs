//! Data models for Role Strategy API requests and responses.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod assignments;
pub mod common;
pub mod lookups;
pub mod role_type;
pub mod roles;
pub mod templates;

pub use assignments::RoleAssignment;
pub use common::{SidEntry, SidKind, SidType};
pub use lookups::MatchingItem;
pub use role_type::RoleType;
pub use roles::{AddRoleParams, AllRoles, RoleInfo};
pub use templates::{AddTemplateParams, PermissionTemplate};
