//! Managers command implementation.
//!
//! The `yugo managers` command probes every package manager the catalog
//! lists for this platform and shows which are installed.

use serde::Serialize;

use crate::cli::args::ManagersArgs;
use crate::error::{Result, YugoError};
use crate::resolver::{probe_managers_parallel, ManagerProbe, ProbeOutcome, ProbeStatus};
use crate::ui::{UserInterface, YugoTheme};

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The managers command implementation.
pub struct ManagersCommand {
    context: CommandContext,
    args: ManagersArgs,
}

#[derive(Debug, Serialize)]
struct ManagerRow<'a> {
    name: &'a str,
    check_cmd: &'a str,
    available: bool,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a str>,
}

impl<'a> From<&'a ProbeOutcome> for ManagerRow<'a> {
    fn from(outcome: &'a ProbeOutcome) -> Self {
        let reason = match &outcome.status {
            ProbeStatus::Failed(reason) => Some(reason.as_str()),
            _ => None,
        };
        Self {
            name: &outcome.manager,
            check_cmd: &outcome.check_cmd,
            available: outcome.status.is_present(),
            status: outcome.status.label(),
            reason,
        }
    }
}

impl ManagersCommand {
    /// Create a new managers command.
    pub fn new(context: CommandContext, args: ManagersArgs) -> Self {
        Self { context, args }
    }

    /// Run with an explicit probe.
    pub fn run_with<P>(&self, ui: &mut dyn UserInterface, probe: &P) -> Result<CommandResult>
    where
        P: ManagerProbe + Sync + ?Sized,
    {
        let platform = self.context.platform.as_str();
        let catalog = self.context.load_catalog()?;
        let outcomes = probe_managers_parallel(&catalog, platform, probe);

        if self.args.json {
            let rows: Vec<ManagerRow<'_>> = outcomes.iter().map(ManagerRow::from).collect();
            let json =
                serde_json::to_string_pretty(&rows).map_err(|e| YugoError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        if outcomes.is_empty() {
            ui.warning(&format!(
                "The catalog lists no package managers for platform '{}'",
                platform
            ));
            return Ok(CommandResult::success());
        }

        let theme = YugoTheme::detect();
        ui.message(&format!(
            "  {}",
            theme.key.apply_to(format!("Package managers ({}):", platform))
        ));
        for outcome in &outcomes {
            let icon = match outcome.status {
                ProbeStatus::Present => theme.success.apply_to("✓"),
                ProbeStatus::Absent => theme.dim.apply_to("○"),
                ProbeStatus::Failed(_) => theme.warning.apply_to("⚠"),
            };
            ui.message(&format!(
                "    {} {:<12} {}",
                icon,
                outcome.manager,
                theme.dim.apply_to(outcome.status.label())
            ));
            if let ProbeStatus::Failed(reason) = &outcome.status {
                ui.message(&format!("      {}", theme.hint.apply_to(reason)));
            }
        }

        Ok(CommandResult::success())
    }
}

impl Command for ManagersCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.run_with(ui, &self.context.probe())
    }
}
