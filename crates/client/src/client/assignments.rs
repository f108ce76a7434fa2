//! User and group assignment API methods for [`RoleStrategyClient`].

use crate::client::RoleStrategyClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{RoleAssignment, RoleType, SidKind};

impl RoleStrategyClient {
    /// Grant a role to a user.
    pub async fn assign_user_role(
        &self,
        role_type: RoleType,
        role_name: &str,
        user: &str,
    ) -> Result<()> {
        self.assign_role(role_type, role_name, SidKind::User, user)
            .await
    }

    /// Grant a role to a group.
    pub async fn assign_group_role(
        &self,
        role_type: RoleType,
        role_name: &str,
        group: &str,
    ) -> Result<()> {
        self.assign_role(role_type, role_name, SidKind::Group, group)
            .await
    }

    /// Grant a role to a user or group.
    pub async fn assign_role(
        &self,
        role_type: RoleType,
        role_name: &str,
        kind: SidKind,
        sid: &str,
    ) -> Result<()> {
        endpoints::assign_role(
            &self.http,
            &self.base_url,
            &self.credentials,
            role_type,
            role_name,
            kind,
            sid,
        )
        .await
    }

    /// Revoke a role from a user.
    pub async fn unassign_user_role(
        &self,
        role_type: RoleType,
        role_name: &str,
        user: &str,
    ) -> Result<()> {
        self.unassign_role(role_type, role_name, SidKind::User, user)
            .await
    }

    /// Revoke a role from a group.
    pub async fn unassign_group_role(
        &self,
        role_type: RoleType,
        role_name: &str,
        group: &str,
    ) -> Result<()> {
        self.unassign_role(role_type, role_name, SidKind::Group, group)
            .await
    }

    /// Revoke a role from a user or group.
    pub async fn unassign_role(
        &self,
        role_type: RoleType,
        role_name: &str,
        kind: SidKind,
        sid: &str,
    ) -> Result<()> {
        endpoints::unassign_role(
            &self.http,
            &self.base_url,
            &self.credentials,
            role_type,
            role_name,
            kind,
            sid,
        )
        .await
    }

    /// Remove a user from every role of the given type.
    pub async fn delete_user(&self, role_type: RoleType, user: &str) -> Result<()> {
        self.delete_sid(role_type, SidKind::User, user).await
    }

    /// Remove a group from every role of the given type.
    pub async fn delete_group(&self, role_type: RoleType, group: &str) -> Result<()> {
        self.delete_sid(role_type, SidKind::Group, group).await
    }

    /// Remove a user or group from every role of the given type.
    pub async fn delete_sid(&self, role_type: RoleType, kind: SidKind, sid: &str) -> Result<()> {
        endpoints::delete_sid(
            &self.http,
            &self.base_url,
            &self.credentials,
            role_type,
            kind,
            sid,
        )
        .await
    }

    /// Fetch every SID of the given type with the roles it holds.
    pub async fn get_role_assignments(&self, role_type: RoleType) -> Result<Vec<RoleAssignment>> {
        endpoints::get_role_assignments(&self.http, &self.base_url, &self.credentials, role_type)
            .await
    }
}
