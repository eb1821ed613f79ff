//! Install command implementation.
//!
//! The `yugo install` command (also the default when no subcommand is
//! given) walks the user through choosing a package manager and tags, then
//! runs the resolved install commands.

use std::time::Duration;

use serde::Serialize;

use crate::cli::args::InstallArgs;
use crate::error::{Result, YugoError};
use crate::resolver::{
    available_names, probe_managers_parallel, tags_for_manager, ManagerProbe, Order,
    PlannedInstall,
};
use crate::runner::{run_installs, InstallExecutor, ShellExecutor};
use crate::ui::progress::count_label;
use crate::ui::{Prompt, UserInterface, YugoTheme};

use super::dispatcher::{Command, CommandContext, CommandResult};

const WELCOME: &str = "Assistant for batch installing programs on a clean install.";

/// The install command implementation.
pub struct InstallCommand {
    context: CommandContext,
    args: InstallArgs,
}

/// Dry-run plan as printed with `--json`.
#[derive(Debug, Serialize)]
struct PlanOutput<'a> {
    platform: &'a str,
    package_manager: &'a str,
    tags: &'a [String],
    installs: &'a [PlannedInstall],
}

impl InstallCommand {
    /// Create a new install command.
    pub fn new(context: CommandContext, args: InstallArgs) -> Self {
        Self { context, args }
    }

    /// Run the flow with an explicit probe and executor.
    pub fn run_with<P, E>(
        &self,
        ui: &mut dyn UserInterface,
        probe: &P,
        executor: &E,
    ) -> Result<CommandResult>
    where
        P: ManagerProbe + Sync + ?Sized,
        E: InstallExecutor + ?Sized,
    {
        let platform = self.context.platform.as_str();
        let catalog = self.context.load_catalog()?;
        let chatty = !self.args.json;

        if chatty {
            ui.show_header("yugo");
            ui.message(WELCOME);
        }

        let available = {
            let mut spinner = chatty.then(|| ui.start_spinner("Checking package managers..."));
            let available = available_names(probe_managers_parallel(&catalog, platform, probe));
            if let Some(spinner) = spinner.as_mut() {
                if available.is_empty() {
                    spinner.finish_error("No package managers found");
                } else {
                    spinner.finish_success(&format!(
                        "Found {}",
                        count_label(available.len(), "package manager")
                    ));
                }
            }
            available
        };

        if available.is_empty() {
            return Err(YugoError::NoManagersAvailable {
                platform: platform.to_string(),
            });
        }

        let mut order = Order::new();
        let manager = self.choose_manager(&available, ui)?;
        order.choose_manager(manager.as_str());

        let tags = tags_for_manager(&catalog, platform, &manager);
        if tags.is_empty() {
            ui.error(&format!(
                "No programs in the catalog can be installed with {}",
                manager
            ));
            return Ok(CommandResult::failure(1));
        }

        order.choose_tags(self.choose_tags(&tags, ui)?);
        let plan = order.plan(&catalog, platform);
        tracing::debug!(manager = %manager, tags = ?order.tags, installs = plan.len(), "Resolved plan");

        if self.args.dry_run {
            self.show_plan(platform, &order, &plan, ui)?;
            return Ok(CommandResult::success());
        }

        if plan.is_empty() {
            ui.warning("Nothing to install");
            return Ok(CommandResult::success());
        }

        let report = run_installs(&plan, executor, ui);
        ui.show_install_summary(&report);

        if report.all_succeeded() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }

    fn choose_manager(&self, available: &[String], ui: &mut dyn UserInterface) -> Result<String> {
        if let Some(name) = &self.args.manager {
            if available.contains(name) {
                return Ok(name.clone());
            }
            return Err(YugoError::UnknownManager { name: name.clone() });
        }

        let prompt = Prompt::select("manager", "Choose your package manager", available);
        let choice = ui.prompt(&prompt)?.as_string();

        if choice.is_empty() {
            return Err(YugoError::SelectionRequired {
                what: "a package manager must be selected".to_string(),
            });
        }
        if !available.contains(&choice) {
            return Err(YugoError::UnknownManager { name: choice });
        }
        Ok(choice)
    }

    /// Ask for tags until at least one is chosen. Without a terminal an
    /// empty answer is an error instead.
    fn choose_tags(&self, tags: &[String], ui: &mut dyn UserInterface) -> Result<Vec<String>> {
        if !self.args.tags.is_empty() {
            check_tags(&self.args.tags, tags)?;
            return Ok(self.args.tags.clone());
        }

        let prompt = Prompt::multi_select("tags", "Choose your tags", tags);
        loop {
            let chosen = ui.prompt(&prompt)?.into_strings();
            check_tags(&chosen, tags)?;

            if !chosen.is_empty() {
                return Ok(chosen);
            }
            if !ui.is_interactive() {
                return Err(YugoError::SelectionRequired {
                    what: "at least one tag is required".to_string(),
                });
            }
            ui.warning("At least one tag is required");
        }
    }

    fn show_plan(
        &self,
        platform: &str,
        order: &Order,
        plan: &[PlannedInstall],
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        if self.args.json {
            let output = PlanOutput {
                platform,
                package_manager: order.package_manager.as_deref().unwrap_or_default(),
                tags: &order.tags,
                installs: plan,
            };
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| YugoError::Other(e.into()))?;
            ui.message(&json);
            return Ok(());
        }

        let theme = YugoTheme::detect();
        ui.message(&format!(
            "Would install {} {}:",
            count_label(plan.len(), "program"),
            theme.format_tags(&order.tags)
        ));
        for install in plan {
            ui.message(&format!(
                "  {:<20} {}",
                theme.highlight.apply_to(&install.program),
                theme.command.apply_to(&install.command)
            ));
        }
        Ok(())
    }
}

/// Every chosen tag must be one the manager can reach.
fn check_tags(chosen: &[String], reachable: &[String]) -> Result<()> {
    match chosen.iter().find(|t| !reachable.contains(t)) {
        Some(tag) => Err(YugoError::UnknownTag { tag: tag.clone() }),
        None => Ok(()),
    }
}

impl Command for InstallCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let probe = self.context.probe();
        let executor = ShellExecutor::with_timeout(self.args.timeout.map(Duration::from_secs));
        self.run_with(ui, &probe, &executor)
    }
}
