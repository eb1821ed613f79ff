//! Install commands for a (package manager, tag selection) pair.
//!
//! Nothing here executes; see [`crate::runner`] for that.

use crate::catalog::{Catalog, Platform};
use serde::Serialize;
use std::collections::HashSet;

/// One program to install and the command that installs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedInstall {
    /// Program name from the catalog.
    pub program: String,
    /// Command taken verbatim from the program's install mapping.
    pub command: String,
}

/// Programs selected by `selected_tags` that `manager` can install.
///
/// A program is included when it has an install mapping for
/// `platform_key`/`manager` and shares at least one tag with the selection.
/// Output is ordered by program name.
pub fn plan_installs<S>(
    catalog: &Catalog,
    platform_key: &str,
    manager: &str,
    selected_tags: &[S],
) -> Vec<PlannedInstall>
where
    S: AsRef<str>,
{
    if !Platform::is_supported(platform_key) || selected_tags.is_empty() {
        return Vec::new();
    }

    let wanted: HashSet<&str> = selected_tags.iter().map(|t| t.as_ref()).collect();

    let plan: Vec<PlannedInstall> = catalog
        .programs
        .iter()
        .filter(|(_, program)| program.tags.iter().any(|t| wanted.contains(t.as_str())))
        .filter_map(|(name, program)| {
            program
                .install_command(platform_key, manager)
                .map(|command| PlannedInstall {
                    program: name.clone(),
                    command: command.to_string(),
                })
        })
        .collect();

    tracing::debug!(
        manager,
        platform = platform_key,
        tags = wanted.len(),
        programs = plan.len(),
        "Planned installs"
    );
    plan
}

/// Install command strings for the selection, ordered by program name.
pub fn commands_for<S>(
    catalog: &Catalog,
    platform_key: &str,
    manager: &str,
    selected_tags: &[S],
) -> Vec<String>
where
    S: AsRef<str>,
{
    plan_installs(catalog, platform_key, manager, selected_tags)
        .into_iter()
        .map(|p| p.command)
        .collect()
}
