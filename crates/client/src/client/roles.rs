//! Role management API methods for [`RoleStrategyClient`].
//!
//! # What this module handles:
//! - Creating and removing roles
//! - Fetching one role or all roles of a type
//! - Listing global and project role names
//!
//! # What this module does NOT handle:
//! - Assigning roles to users or groups (in `assignments`)
//! - Low-level role endpoint HTTP calls (in [`crate::endpoints`])

use crate::client::RoleStrategyClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{AddRoleParams, AllRoles, RoleInfo, RoleType};

impl RoleStrategyClient {
    /// Create or overwrite a role.
    pub async fn add_role(&self, params: &AddRoleParams) -> Result<()> {
        endpoints::add_role(&self.http, &self.base_url, &self.credentials, params).await
    }

    /// Remove roles of the given type by name.
    pub async fn remove_roles(&self, role_type: RoleType, role_names: &[String]) -> Result<()> {
        endpoints::remove_roles(
            &self.http,
            &self.base_url,
            &self.credentials,
            role_type,
            role_names,
        )
        .await
    }

    /// Fetch a single role.
    pub async fn get_role(&self, role_type: RoleType, role_name: &str) -> Result<RoleInfo> {
        endpoints::get_role(
            &self.http,
            &self.base_url,
            &self.credentials,
            role_type,
            role_name,
        )
        .await
    }

    /// Fetch every role of the given type, keyed by role name.
    pub async fn get_all_roles(&self, role_type: RoleType) -> Result<AllRoles> {
        endpoints::get_all_roles(&self.http, &self.base_url, &self.credentials, role_type).await
    }

    /// Names of all global roles, in no particular order.
    pub async fn get_global_role_names(&self) -> Result<Vec<String>> {
        self.get_role_names(RoleType::Global).await
    }

    /// Names of all project roles, in no particular order.
    pub async fn get_project_role_names(&self) -> Result<Vec<String>> {
        self.get_role_names(RoleType::Project).await
    }

    /// Names of all roles of the given type, in no particular order.
    pub async fn get_role_names(&self, role_type: RoleType) -> Result<Vec<String>> {
        let roles = self.get_all_roles(role_type).await?;
        Ok(roles.into_keys().collect())
    }
}
