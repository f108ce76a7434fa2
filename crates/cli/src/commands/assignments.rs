//! User and group assignment commands.
//!
//! Responsibilities:
//! - Assign and unassign roles for a user or group.
//! - Remove a user or group from every role of a type.
//! - List current assignments.
//!
//! Invariants:
//! - Exactly one of `--user`/`--group` is given (enforced by clap).

use anyhow::Result;
use role_strategy_client::{RoleStrategyClient, RoleType};
use tracing::info;

use crate::args::SidArgs;
use crate::cancellation::{CancellationToken, cancellable};
use crate::formatters::{OutputFormat, get_formatter, output_result};

pub async fn run_assign(
    client: &RoleStrategyClient,
    role_type: RoleType,
    role_name: &str,
    sid: SidArgs,
    cancel: &CancellationToken,
) -> Result<()> {
    let (kind, sid) = sid.into_sid()?;
    info!("Assigning {} role {} to {} {}", role_type, role_name, kind, sid);
    cancellable(client.assign_role(role_type, role_name, kind, &sid), cancel).await?;
    eprintln!("Assigned role '{}' to {} '{}'.", role_name, kind, sid);
    Ok(())
}

pub async fn run_unassign(
    client: &RoleStrategyClient,
    role_type: RoleType,
    role_name: &str,
    sid: SidArgs,
    cancel: &CancellationToken,
) -> Result<()> {
    let (kind, sid) = sid.into_sid()?;
    info!("Unassigning {} role {} from {} {}", role_type, role_name, kind, sid);
    cancellable(client.unassign_role(role_type, role_name, kind, &sid), cancel).await?;
    eprintln!("Unassigned role '{}' from {} '{}'.", role_name, kind, sid);
    Ok(())
}

pub async fn run_delete_sid(
    client: &RoleStrategyClient,
    role_type: RoleType,
    sid: SidArgs,
    cancel: &CancellationToken,
) -> Result<()> {
    let (kind, sid) = sid.into_sid()?;
    info!("Removing {} {} from all {}", kind, sid, role_type);
    cancellable(client.delete_sid(role_type, kind, &sid), cancel).await?;
    eprintln!("Removed {} '{}' from all {}.", kind, sid, role_type);
    Ok(())
}

pub async fn run_list(
    client: &RoleStrategyClient,
    role_type: RoleType,
    format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    let assignments = cancellable(client.get_role_assignments(role_type), cancel).await?;
    output_result(&get_formatter(format).format_assignments(&assignments)?);
    Ok(())
}
