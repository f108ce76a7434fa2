//! Jenkins Role Strategy REST API client.
//!
//! This crate exposes the administrative endpoints of the Jenkins
//! "Role Strategy" plugin (templates, roles, assignments and lookups) as
//! typed async calls. Requests are form- or query-encoded, authenticated
//! with HTTP Basic (username + API token), and JSON responses are decoded
//! into plain structs.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::Credentials;
pub use client::RoleStrategyClient;
pub use client::builder::RoleStrategyClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    AddRoleParams, AddTemplateParams, AllRoles, MatchingItem, PermissionTemplate,
    RoleAssignment, RoleInfo, RoleType, SidEntry, SidKind, SidType,
};
