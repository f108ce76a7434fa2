//! Output formatters for CLI results.
//!
//! Responsibilities:
//! - Define the `Formatter` trait, one method per result shape.
//! - Select a formatter from the `--output` value.
//!
//! Does NOT handle:
//! - Confirmation messages for write commands (printed to stderr by the commands).
//!
//! Invariants:
//! - Map-backed results are printed in sorted order so output is stable.
//! - Formatters never include credentials.

mod json;
mod text;

use anyhow::Result;
use role_strategy_client::{AllRoles, MatchingItem, PermissionTemplate, RoleAssignment, RoleInfo};

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: json, text", s),
        }
    }
}

/// Renders client results for display.
pub trait Formatter {
    fn format_template(&self, template: &PermissionTemplate) -> Result<String>;
    fn format_role(&self, role_name: &str, role: &RoleInfo) -> Result<String>;
    fn format_all_roles(&self, roles: &AllRoles) -> Result<String>;
    fn format_role_names(&self, names: &[String]) -> Result<String>;
    fn format_assignments(&self, assignments: &[RoleAssignment]) -> Result<String>;
    fn format_matches(&self, items: &[MatchingItem]) -> Result<String>;
}

/// Get a formatter for the specified format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Text => Box::new(TextFormatter),
    }
}

/// Print formatted output to stdout. Empty output prints nothing.
pub fn output_result(output: &str) {
    if !output.is_empty() {
        println!("{}", output.trim_end_matches('\n'));
    }
}
