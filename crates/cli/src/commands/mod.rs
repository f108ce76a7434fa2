//! CLI command implementations.

pub mod assignments;
pub mod lookups;
pub mod roles;
pub mod templates;

use anyhow::{Context, Result};
use role_strategy_client::RoleStrategyClient;
use role_strategy_config::Config;

/// Build a Role Strategy client from the loaded configuration.
pub fn build_client_from_config(config: &Config) -> Result<RoleStrategyClient> {
    RoleStrategyClient::builder()
        .from_config(config)
        .build()
        .context("Failed to create Role Strategy client")
}
