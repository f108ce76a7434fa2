//! Pattern preview commands.

use anyhow::Result;
use clap::Subcommand;
use role_strategy_client::RoleStrategyClient;
use role_strategy_config::constants::DEFAULT_MAX_MATCHES;

use crate::cancellation::{CancellationToken, cancellable};
use crate::formatters::{OutputFormat, get_formatter, output_result};

#[derive(Debug, Subcommand)]
pub enum MatchCommand {
    /// Jobs whose full name matches a pattern
    Jobs {
        /// Regular expression, as used in project role patterns
        pattern: String,
        /// Maximum number of jobs to return
        #[arg(short, long, default_value_t = DEFAULT_MAX_MATCHES)]
        max: usize,
    },
    /// Agents whose name matches a pattern
    Agents {
        /// Regular expression, as used in agent role patterns
        pattern: String,
        /// Maximum number of agents to return
        #[arg(short, long, default_value_t = DEFAULT_MAX_MATCHES)]
        max: usize,
    },
}

pub async fn run(
    client: &RoleStrategyClient,
    command: MatchCommand,
    format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    let items = match command {
        MatchCommand::Jobs { pattern, max } => {
            cancellable(client.get_matching_jobs(&pattern, max), cancel).await?
        }
        MatchCommand::Agents { pattern, max } => {
            cancellable(client.get_matching_agents(&pattern, max), cancel).await?
        }
    };
    output_result(&get_formatter(format).format_matches(&items)?);
    Ok(())
}
