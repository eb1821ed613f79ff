//! The user's selection, filled in one prompt at a time.

use crate::catalog::Catalog;

use super::commands::{plan_installs, PlannedInstall};

/// Selected package manager and tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    /// Chosen package manager, once picked.
    pub package_manager: Option<String>,
    /// Chosen tags.
    pub tags: Vec<String>,
}

impl Order {
    /// Create an empty order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the chosen package manager. Clears any previous tag choice,
    /// since tags depend on the manager.
    pub fn choose_manager(&mut self, manager: impl Into<String>) {
        self.package_manager = Some(manager.into());
        self.tags.clear();
    }

    /// Record the chosen tags, dropping repeats.
    pub fn choose_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.clear();
        for tag in tags {
            let tag = tag.into();
            if !self.tags.contains(&tag) {
                self.tags.push(tag);
            }
        }
    }

    /// Whether both a manager and at least one tag have been chosen.
    pub fn is_complete(&self) -> bool {
        self.package_manager.is_some() && !self.tags.is_empty()
    }

    /// Resolve the order against a catalog. Incomplete orders plan nothing.
    pub fn plan(&self, catalog: &Catalog, platform_key: &str) -> Vec<PlannedInstall> {
        match &self.package_manager {
            Some(manager) => plan_installs(catalog, platform_key, manager, self.tags.as_slice()),
            None => Vec::new(),
        }
    }
}
