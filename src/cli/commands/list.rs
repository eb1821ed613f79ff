//! List command implementation.
//!
//! The `yugo list` command lists catalog programs with their tags and the
//! package managers that can install them on this platform.

use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::error::{Result, YugoError};
use crate::ui::{UserInterface, YugoTheme};

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    context: CommandContext,
    args: ListArgs,
}

#[derive(Debug, Serialize)]
struct ProgramRow<'a> {
    name: &'a str,
    description: &'a str,
    tags: &'a [String],
    managers: Vec<&'a str>,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(context: CommandContext, args: ListArgs) -> Self {
        Self { context, args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let platform = self.context.platform.as_str();
        let catalog = self.context.load_catalog()?;

        let rows: Vec<ProgramRow<'_>> = catalog
            .programs
            .iter()
            .filter(|(_, program)| match &self.args.manager {
                Some(manager) => program.install_command(platform, manager).is_some(),
                None => true,
            })
            .map(|(name, program)| ProgramRow {
                name,
                description: &program.description,
                tags: &program.tags,
                managers: program.managers_for(platform),
            })
            .collect();

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&rows).map_err(|e| YugoError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        if rows.is_empty() {
            ui.message("No programs found.");
            return Ok(CommandResult::success());
        }

        let theme = YugoTheme::detect();
        ui.message(&format!("  {}", theme.key.apply_to("Programs:")));
        for row in &rows {
            let detail = if row.description.is_empty() {
                String::new()
            } else {
                format!(" {} {}", theme.dim.apply_to("-"), theme.dim.apply_to(row.description))
            };
            ui.message(&format!("    {}{}", theme.highlight.apply_to(row.name), detail));

            let managers = if row.managers.is_empty() {
                theme
                    .dim
                    .apply_to(format!("not installable on {}", platform))
                    .to_string()
            } else {
                row.managers.join(", ")
            };
            ui.message(&format!(
                "      {} {}",
                theme.format_tags(row.tags),
                theme.dim.apply_to(managers)
            ));
        }

        Ok(CommandResult::success())
    }
}
