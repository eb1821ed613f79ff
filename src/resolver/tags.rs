//! Tags reachable through a package manager.

use crate::catalog::{Catalog, Platform};
use std::collections::HashSet;

/// Tags of every program installable with `manager` on `platform_key`.
///
/// Each tag appears once, in first-seen order over programs sorted by name.
/// Unknown managers and unsupported platforms yield an empty list.
pub fn tags_for_manager(catalog: &Catalog, platform_key: &str, manager: &str) -> Vec<String> {
    if !Platform::is_supported(platform_key) {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut tags = Vec::new();

    for program in catalog.programs.values() {
        if program.install_command(platform_key, manager).is_none() {
            continue;
        }
        for tag in &program.tags {
            if seen.insert(tag.as_str()) {
                tags.push(tag.clone());
            }
        }
    }

    tracing::debug!(manager, platform = platform_key, count = tags.len(), "Resolved tags");
    tags
}
