//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).
//!
//! Invariants:
//! - One client is built per invocation and shared by the handler.

use anyhow::Result;
use role_strategy_config::Config;

use crate::args::{Cli, Commands};
use crate::cancellation::CancellationToken;
use crate::commands;
use crate::formatters::OutputFormat;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(
    cli: Cli,
    config: Config,
    cancel: &CancellationToken,
) -> Result<()> {
    let format = OutputFormat::from_str(&cli.output)?;
    let client = commands::build_client_from_config(&config)?;

    match cli.command {
        Commands::Template { command } => {
            commands::templates::run(&client, command, format, cancel).await?;
        }
        Commands::Role { command } => {
            commands::roles::run(&client, command, format, cancel).await?;
        }
        Commands::Assign {
            role_type,
            role_name,
            sid,
        } => {
            commands::assignments::run_assign(&client, role_type, &role_name, sid, cancel).await?;
        }
        Commands::Unassign {
            role_type,
            role_name,
            sid,
        } => {
            commands::assignments::run_unassign(&client, role_type, &role_name, sid, cancel)
                .await?;
        }
        Commands::DeleteSid { role_type, sid } => {
            commands::assignments::run_delete_sid(&client, role_type, sid, cancel).await?;
        }
        Commands::Assignments { role_type } => {
            commands::assignments::run_list(&client, role_type, format, cancel).await?;
        }
        Commands::Match { command } => {
            commands::lookups::run(&client, command, format, cancel).await?;
        }
    }

    Ok(())
}
