//! Permission template API methods for [`RoleStrategyClient`].
//!
//! # What this module handles:
//! - Creating or overwriting templates
//! - Removing templates
//! - Fetching a template
//!
//! # What this module does NOT handle:
//! - Low-level template endpoint HTTP calls (in [`crate::endpoints`])

use crate::client::RoleStrategyClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{AddTemplateParams, PermissionTemplate};

impl RoleStrategyClient {
    /// Create or overwrite a permission template.
    pub async fn add_template(&self, params: &AddTemplateParams) -> Result<()> {
        endpoints::add_template(&self.http, &self.base_url, &self.credentials, params).await
    }

    /// Remove templates by name. With `force`, templates still used by roles
    /// are removed as well.
    pub async fn remove_templates(&self, names: &[String], force: bool) -> Result<()> {
        endpoints::remove_templates(&self.http, &self.base_url, &self.credentials, names, force)
            .await
    }

    /// Fetch a permission template by name.
    pub async fn get_template(&self, name: &str) -> Result<PermissionTemplate> {
        endpoints::get_template(&self.http, &self.base_url, &self.credentials, name).await
    }
}
