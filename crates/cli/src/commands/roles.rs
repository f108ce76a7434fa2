//! Role commands.
//!
//! Responsibilities:
//! - Add, remove, show and list roles of every type.
//! - List global or project role names.
//!
//! Does NOT handle:
//! - Assigning roles to users or groups (see assignments module).
//!
//! Invariants:
//! - Empty `--pattern`/`--template` values are treated as absent.
//! - Confirmation lines go to stderr; stdout carries only results.

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use role_strategy_client::{AddRoleParams, RoleStrategyClient, RoleType};
use tracing::info;

use crate::cancellation::{CancellationToken, cancellable};
use crate::formatters::{OutputFormat, get_formatter, output_result};

#[derive(Debug, Subcommand)]
pub enum RolesCommand {
    /// Create or replace a role
    Add {
        /// Role type (global, project, agent)
        role_type: RoleType,
        /// Role name
        name: String,
        /// Permission ids (comma-separated)
        #[arg(short, long, value_delimiter = ',', required = true)]
        permissions: Vec<String>,
        /// Replace an existing role of the same name
        #[arg(long)]
        overwrite: bool,
        /// Job/folder or agent name pattern (project and agent roles)
        #[arg(long)]
        pattern: Option<String>,
        /// Permission template to derive the role from
        #[arg(long)]
        template: Option<String>,
    },
    /// Remove one or more roles
    Remove {
        /// Role type (global, project, agent)
        role_type: RoleType,
        /// Role names
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Show a role
    Get {
        /// Role type (global, project, agent)
        role_type: RoleType,
        /// Role name
        name: String,
    },
    /// List every role of a type with its assigned users and groups
    List {
        /// Role type (global, project, agent)
        role_type: RoleType,
    },
    /// List role names
    Names {
        /// Which role names to list
        scope: NameScope,
    },
}

/// Role types that have a dedicated name listing.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum NameScope {
    Global,
    Project,
}

pub async fn run(
    client: &RoleStrategyClient,
    command: RolesCommand,
    format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    let formatter = get_formatter(format);
    match command {
        RolesCommand::Add {
            role_type,
            name,
            permissions,
            overwrite,
            pattern,
            template,
        } => {
            info!("Adding {} role: {}", role_type, name);
            let params = AddRoleParams {
                overwrite,
                pattern,
                template,
                ..AddRoleParams::new(role_type, name, permissions)
            };
            cancellable(client.add_role(&params), cancel).await?;
            eprintln!("Role '{}' saved.", params.role_name);
        }
        RolesCommand::Remove { role_type, names } => {
            info!("Removing {} roles: {:?}", role_type, names);
            cancellable(client.remove_roles(role_type, &names), cancel).await?;
            eprintln!("Removed {} role(s).", names.len());
        }
        RolesCommand::Get { role_type, name } => {
            let role = cancellable(client.get_role(role_type, &name), cancel).await?;
            output_result(&formatter.format_role(&name, &role)?);
        }
        RolesCommand::List { role_type } => {
            let roles = cancellable(client.get_all_roles(role_type), cancel).await?;
            output_result(&formatter.format_all_roles(&roles)?);
        }
        RolesCommand::Names { scope } => {
            let mut names = match scope {
                NameScope::Global => cancellable(client.get_global_role_names(), cancel).await?,
                NameScope::Project => {
                    cancellable(client.get_project_role_names(), cancel).await?
                }
            };
            names.sort();
            output_result(&formatter.format_role_names(&names)?);
        }
    }
    Ok(())
}
