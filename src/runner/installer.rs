//! Install command execution.
//!
//! Runs a resolved plan one command at a time. A failing command is
//! recorded and the queue keeps going.

use std::time::{Duration, Instant};

use crate::error::Result;
use crate::resolver::PlannedInstall;
use crate::shell::{execute, CommandOptions, CommandResult};
use crate::ui::UserInterface;

/// Capability that runs one install command.
pub trait InstallExecutor {
    /// Run `command` and report how it went.
    fn run(&self, command: &str) -> Result<CommandResult>;
}

impl<F> InstallExecutor for F
where
    F: Fn(&str) -> Result<CommandResult>,
{
    fn run(&self, command: &str) -> Result<CommandResult> {
        self(command)
    }
}

/// Runs install commands through the platform shell.
#[derive(Debug, Clone, Default)]
pub struct ShellExecutor {
    timeout: Option<Duration>,
}

impl ShellExecutor {
    /// Executor without a time limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executor that kills commands running longer than `timeout`.
    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

impl InstallExecutor for ShellExecutor {
    fn run(&self, command: &str) -> Result<CommandResult> {
        let options = CommandOptions {
            timeout: self.timeout,
            ..Default::default()
        };
        execute(command, &options)
    }
}

/// How one install ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallStatus {
    /// Exit code 0.
    Succeeded,
    /// Ran and exited non-zero.
    Failed,
    /// Could not be run at all (spawn error, timeout).
    Errored(String),
}

/// Result of running one planned install.
#[derive(Debug, Clone)]
pub struct InstallOutcome {
    /// Program name.
    pub program: String,
    /// Command that was run.
    pub command: String,
    /// How it ended.
    pub status: InstallStatus,
    /// Exit code if the process exited normally.
    pub exit_code: Option<i32>,
    /// Combined stdout and stderr.
    pub output: String,
    /// Time spent.
    pub duration: Duration,
}

impl InstallOutcome {
    /// Whether the install succeeded.
    pub fn succeeded(&self) -> bool {
        self.status == InstallStatus::Succeeded
    }
}

/// Results of an install run, in plan order.
#[derive(Debug, Clone, Default)]
pub struct InstallReport {
    /// One outcome per planned install.
    pub outcomes: Vec<InstallOutcome>,
    /// Wall time for the whole run.
    pub total_duration: Duration,
}

impl InstallReport {
    /// Outcomes that succeeded.
    pub fn succeeded(&self) -> impl Iterator<Item = &InstallOutcome> {
        self.outcomes.iter().filter(|o| o.succeeded())
    }

    /// Outcomes that failed or could not run.
    pub fn failed(&self) -> impl Iterator<Item = &InstallOutcome> {
        self.outcomes.iter().filter(|o| !o.succeeded())
    }

    /// True when every install succeeded (vacuously true for an empty run).
    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(InstallOutcome::succeeded)
    }
}

/// Run every planned install in order, reporting progress through `ui`.
pub fn run_installs<E>(
    plan: &[PlannedInstall],
    executor: &E,
    ui: &mut dyn UserInterface,
) -> InstallReport
where
    E: InstallExecutor + ?Sized,
{
    let start = Instant::now();
    let mut outcomes = Vec::with_capacity(plan.len());

    for install in plan {
        let mut spinner = ui.start_spinner(&format!("Installing {}...", install.program));
        let step_start = Instant::now();

        let outcome = match executor.run(&install.command) {
            Ok(result) if result.success => {
                spinner.finish_success(&install.program);
                let output = result.combined_output();
                if ui.output_mode().shows_command_output() {
                    ui.show_command_output(&install.command, &output);
                }
                tracing::info!(program = %install.program, "Installed");
                InstallOutcome {
                    program: install.program.clone(),
                    command: install.command.clone(),
                    status: InstallStatus::Succeeded,
                    exit_code: result.exit_code,
                    output,
                    duration: result.duration,
                }
            }
            Ok(result) => {
                let code = result
                    .exit_code
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "signal".to_string());
                spinner.finish_error(&format!("{} (exit {})", install.program, code));
                let output = result.combined_output();
                ui.show_error_block(&install.command, &output, failure_hint(result.exit_code));
                tracing::warn!(program = %install.program, exit_code = ?result.exit_code, "Install failed");
                InstallOutcome {
                    program: install.program.clone(),
                    command: install.command.clone(),
                    status: InstallStatus::Failed,
                    exit_code: result.exit_code,
                    output,
                    duration: result.duration,
                }
            }
            Err(e) => {
                let reason = e.to_string();
                spinner.finish_error(&install.program);
                ui.show_error_block(&install.command, &reason, None);
                tracing::warn!(program = %install.program, %reason, "Install could not run");
                InstallOutcome {
                    program: install.program.clone(),
                    command: install.command.clone(),
                    status: InstallStatus::Errored(reason),
                    exit_code: None,
                    output: String::new(),
                    duration: step_start.elapsed(),
                }
            }
        };

        outcomes.push(outcome);
    }

    InstallReport {
        outcomes,
        total_duration: start.elapsed(),
    }
}

/// Hint for well-known shell exit codes.
fn failure_hint(exit_code: Option<i32>) -> Option<&'static str> {
    match exit_code {
        Some(127) => Some("The command was not found. Is the package manager on your PATH?"),
        Some(126) => Some("The command is not executable. Check its permissions."),
        Some(1) if cfg!(unix) => Some("Some package managers need sudo; try adding it to the install command."),
        _ => None,
    }
}
