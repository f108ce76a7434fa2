//! Permission template commands.
//!
//! Responsibilities:
//! - Add, remove and show permission templates.
//!
//! Invariants:
//! - Confirmation lines go to stderr; stdout carries only results.

use anyhow::Result;
use clap::Subcommand;
use role_strategy_client::{AddTemplateParams, RoleStrategyClient};
use tracing::info;

use crate::cancellation::{CancellationToken, cancellable};
use crate::formatters::{OutputFormat, get_formatter, output_result};

#[derive(Debug, Subcommand)]
pub enum TemplatesCommand {
    /// Create or replace a permission template
    Add {
        /// Template name
        name: String,
        /// Permission ids (comma-separated)
        #[arg(short, long, value_delimiter = ',', required = true)]
        permissions: Vec<String>,
        /// Replace an existing template of the same name
        #[arg(long)]
        overwrite: bool,
    },
    /// Remove one or more templates
    Remove {
        /// Template names
        #[arg(required = true)]
        names: Vec<String>,
        /// Remove templates even if roles still use them
        #[arg(short, long)]
        force: bool,
    },
    /// Show a template
    Get {
        /// Template name
        name: String,
    },
}

pub async fn run(
    client: &RoleStrategyClient,
    command: TemplatesCommand,
    format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    match command {
        TemplatesCommand::Add {
            name,
            permissions,
            overwrite,
        } => {
            info!("Adding template: {}", name);
            let params = AddTemplateParams {
                name,
                permission_ids: permissions,
                overwrite,
            };
            cancellable(client.add_template(&params), cancel).await?;
            eprintln!("Template '{}' saved.", params.name);
        }
        TemplatesCommand::Remove { names, force } => {
            info!("Removing templates: {:?}", names);
            cancellable(client.remove_templates(&names, force), cancel).await?;
            eprintln!("Removed {} template(s).", names.len());
        }
        TemplatesCommand::Get { name } => {
            let template = cancellable(client.get_template(&name), cancel).await?;
            output_result(&get_formatter(format).format_template(&template)?);
        }
    }
    Ok(())
}
