//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not validate configuration (see `role_strategy_config::ConfigLoader`).

use clap::{Args, Parser, Subcommand};
use role_strategy_client::{RoleType, SidKind};

use crate::commands;

#[derive(Parser)]
#[command(name = "role-strategy")]
#[command(about = "Manage Jenkins Role Strategy roles, templates and assignments", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  role-strategy role list global\n  role-strategy role add project team-a --permissions hudson.model.Item.Read --pattern 'team-a/.*'\n  role-strategy assign project team-a --group developers\n  role-strategy template get developer --output json\n  role-strategy match jobs 'team-a/.*' --max 20\n"
)]
pub struct Cli {
    /// Jenkins root URL (e.g., https://ci.example.com/jenkins)
    #[arg(long, global = true, env = "JENKINS_URL")]
    pub url: Option<String>,

    /// Jenkins user name for HTTP Basic authentication
    #[arg(long, global = true, env = "JENKINS_USER")]
    pub username: Option<String>,

    /// Jenkins API token for HTTP Basic authentication
    #[arg(long, global = true, env = "JENKINS_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "JENKINS_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification (for self-signed certificates).
    /// `JENKINS_SKIP_VERIFY=true|false` is read by the config loader.
    #[arg(long, global = true)]
    pub skip_verify: bool,

    /// Output format (json, text)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage permission templates
    Template {
        #[command(subcommand)]
        command: commands::templates::TemplatesCommand,
    },

    /// Manage global, project and agent roles
    Role {
        #[command(subcommand)]
        command: commands::roles::RolesCommand,
    },

    /// Assign a role to a user or group
    Assign {
        /// Role type (global, project, agent)
        role_type: RoleType,
        /// Role name
        role_name: String,
        #[command(flatten)]
        sid: SidArgs,
    },

    /// Remove a role from a user or group
    Unassign {
        /// Role type (global, project, agent)
        role_type: RoleType,
        /// Role name
        role_name: String,
        #[command(flatten)]
        sid: SidArgs,
    },

    /// Remove a user or group from every role of a type
    DeleteSid {
        /// Role type (global, project, agent)
        role_type: RoleType,
        #[command(flatten)]
        sid: SidArgs,
    },

    /// List users and groups with their roles
    Assignments {
        /// Role type (global, project, agent)
        role_type: RoleType,
    },

    /// Preview which jobs or agents a pattern matches
    Match {
        #[command(subcommand)]
        command: commands::lookups::MatchCommand,
    },
}

/// Exactly one of `--user` or `--group`.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct SidArgs {
    /// User ID
    #[arg(long)]
    pub user: Option<String>,
    /// Group name
    #[arg(long)]
    pub group: Option<String>,
}

impl SidArgs {
    /// Resolve to the SID kind and identifier.
    pub fn into_sid(self) -> anyhow::Result<(SidKind, String)> {
        match (self.user, self.group) {
            (Some(user), None) => Ok((SidKind::User, user)),
            (None, Some(group)) => Ok((SidKind::Group, group)),
            _ => anyhow::bail!("exactly one of --user or --group is required"),
        }
    }
}
