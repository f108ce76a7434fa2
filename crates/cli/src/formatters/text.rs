//! Plain text formatter implementation.
//!
//! One item per line, tab-separated where a line carries several fields, so
//! output can be piped into `cut`/`awk`.

use anyhow::Result;
use role_strategy_client::{
    AllRoles, MatchingItem, PermissionTemplate, RoleAssignment, RoleInfo, SidEntry,
};
use std::collections::HashMap;
use std::fmt::Write;

use crate::formatters::Formatter;

/// Plain text formatter.
pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format_template(&self, template: &PermissionTemplate) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "Template: {}", template.name)?;
        writeln!(out, "In use: {}", if template.is_used { "yes" } else { "no" })?;
        write_permissions(&mut out, &template.permission_ids)?;
        write_sids(&mut out, &template.sids)?;
        Ok(out)
    }

    fn format_role(&self, role_name: &str, role: &RoleInfo) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "Role: {}", role_name)?;
        if let Some(pattern) = &role.pattern {
            writeln!(out, "Pattern: {}", pattern)?;
        }
        if let Some(template) = &role.template {
            writeln!(out, "Template: {}", template)?;
        }
        write_permissions(&mut out, &role.permission_ids)?;
        write_sids(&mut out, &role.sids)?;
        Ok(out)
    }

    fn format_all_roles(&self, roles: &AllRoles) -> Result<String> {
        let mut names: Vec<&String> = roles.keys().collect();
        names.sort();

        let mut out = String::new();
        for name in names {
            let sids = roles[name].iter().map(sid_label).collect::<Vec<_>>();
            writeln!(out, "{}\t{}", name, sids.join(","))?;
        }
        Ok(out)
    }

    fn format_role_names(&self, names: &[String]) -> Result<String> {
        let mut sorted = names.to_vec();
        sorted.sort();
        Ok(lines(sorted.iter()))
    }

    fn format_assignments(&self, assignments: &[RoleAssignment]) -> Result<String> {
        let mut out = String::new();
        for assignment in assignments {
            writeln!(
                out,
                "{}\t{}\t{}",
                assignment.name,
                assignment.sid_type,
                assignment.roles.join(",")
            )?;
        }
        Ok(out)
    }

    fn format_matches(&self, items: &[MatchingItem]) -> Result<String> {
        Ok(lines(items.iter().map(|item| &item.name)))
    }
}

fn lines<'a>(items: impl Iterator<Item = &'a String>) -> String {
    items.fold(String::new(), |mut out, item| {
        out.push_str(item);
        out.push('\n');
        out
    })
}

/// Permission ids in sorted order; disabled ones are marked.
fn write_permissions(out: &mut String, permissions: &HashMap<String, bool>) -> Result<()> {
    let mut ids: Vec<(&String, &bool)> = permissions.iter().collect();
    ids.sort();

    writeln!(out, "Permissions:")?;
    for (id, enabled) in ids {
        if *enabled {
            writeln!(out, "  {}", id)?;
        } else {
            writeln!(out, "  {} (disabled)", id)?;
        }
    }
    Ok(())
}

fn write_sids(out: &mut String, sids: &[SidEntry]) -> Result<()> {
    writeln!(out, "Assigned:")?;
    for entry in sids {
        writeln!(out, "  {}\t{}", entry.sid_type, entry.sid)?;
    }
    Ok(())
}

/// `getAllRoles` values are untyped: a SID entry object or a bare string.
fn sid_label(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Object(map) => match map.get("sid").and_then(|s| s.as_str()) {
            Some(sid) => sid.to_string(),
            None => value.to_string(),
        },
        other => other.to_string(),
    }
}
