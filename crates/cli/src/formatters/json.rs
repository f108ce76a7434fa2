//! JSON formatter implementation.
//!
//! Pretty-prints results. Map-backed models go through `serde_json::Value`,
//! whose object map keeps keys sorted.

use anyhow::Result;
use role_strategy_client::{AllRoles, MatchingItem, PermissionTemplate, RoleAssignment, RoleInfo};
use std::collections::BTreeMap;

use crate::formatters::Formatter;

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_template(&self, template: &PermissionTemplate) -> Result<String> {
        Ok(serde_json::to_string_pretty(&serde_json::to_value(template)?)?)
    }

    fn format_role(&self, _role_name: &str, role: &RoleInfo) -> Result<String> {
        Ok(serde_json::to_string_pretty(&serde_json::to_value(role)?)?)
    }

    fn format_all_roles(&self, roles: &AllRoles) -> Result<String> {
        let sorted: BTreeMap<_, _> = roles.iter().collect();
        Ok(serde_json::to_string_pretty(&sorted)?)
    }

    fn format_role_names(&self, names: &[String]) -> Result<String> {
        Ok(serde_json::to_string_pretty(names)?)
    }

    fn format_assignments(&self, assignments: &[RoleAssignment]) -> Result<String> {
        Ok(serde_json::to_string_pretty(assignments)?)
    }

    fn format_matches(&self, items: &[MatchingItem]) -> Result<String> {
        Ok(serde_json::to_string_pretty(items)?)
    }
}
