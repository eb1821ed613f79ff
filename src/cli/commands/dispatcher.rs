//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandContext`] for the settings every command shares
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::{load_catalog, validate_catalog, Catalog, Platform};
use crate::cli::args::{Cli, Commands, InstallArgs};
use crate::error::{Result, YugoError};
use crate::shell::ShellProbe;
use crate::ui::UserInterface;

/// Exit code when no catalog could be found.
pub const EXIT_NO_CATALOG: i32 = 2;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Settings resolved from global flags, shared by all commands.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Explicit catalog path, if any.
    pub config: Option<PathBuf>,
    /// Platform key every resolver call uses.
    pub platform: String,
    /// Limit for each package manager check.
    pub probe_timeout: Option<Duration>,
}

impl CommandContext {
    /// Build the context from parsed arguments.
    ///
    /// Fails with [`YugoError::UnsupportedPlatform`] when no `--platform` is
    /// given and the running OS has no platform key.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let platform = resolve_platform(cli.platform.as_deref())?;
        let probe_timeout = match cli.probe_timeout {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };

        Ok(Self {
            config: cli.config.clone(),
            platform,
            probe_timeout,
        })
    }

    /// Context for a given catalog file and platform (used by tests).
    pub fn new(config: impl Into<PathBuf>, platform: &str) -> Self {
        Self {
            config: Some(config.into()),
            platform: platform.to_string(),
            probe_timeout: None,
        }
    }

    /// Probe that runs check commands through the shell.
    pub fn probe(&self) -> ShellProbe {
        ShellProbe::with_timeout(self.probe_timeout)
    }

    /// Load the catalog, logging any consistency issues.
    pub fn load_catalog(&self) -> Result<Catalog> {
        let (path, catalog) = load_catalog(self.config.as_deref())?;
        for issue in validate_catalog(&catalog) {
            tracing::warn!(path = %path.display(), %issue, "Catalog issue");
        }
        Ok(catalog)
    }
}

/// Pick the platform key from an override or the running OS.
pub fn resolve_platform(explicit: Option<&str>) -> Result<String> {
    if let Some(key) = explicit {
        let key = key.trim().to_lowercase();
        if !Platform::is_supported(&key) {
            tracing::warn!(platform = %key, "Unsupported platform key; nothing will resolve");
        }
        return Ok(key);
    }

    Platform::current()
        .map(|p| p.key().to_string())
        .ok_or_else(|| YugoError::UnsupportedPlatform {
            platform: std::env::consts::OS.to_string(),
        })
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: CommandContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }

    /// Get the shared command context.
    pub fn context(&self) -> &CommandContext {
        &self.context
    }

    /// Dispatch and execute a command.
    ///
    /// A missing catalog is reported here for every command and exits
    /// with [`EXIT_NO_CATALOG`].
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = self.context.clone();
        let result = match &cli.command {
            Some(Commands::Install(args)) => {
                super::install::InstallCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Managers(args)) => {
                super::managers::ManagersCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Tags(args)) => {
                super::tags::TagsCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::List(args)) => {
                super::list::ListCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Validate(args)) => {
                super::validate::ValidateCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
            None => super::install::InstallCommand::new(ctx, InstallArgs::default()).execute(ui),
        };

        match result {
            Err(YugoError::CatalogNotFound { path }) => {
                ui.error(&format!(
                    "No catalog found at {}. Create it or pass --config.",
                    path.display()
                ));
                Ok(CommandResult::failure(EXIT_NO_CATALOG))
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn explicit_platform_is_normalized() {
        assert_eq!(resolve_platform(Some(" Linux ")).unwrap(), "linux");
    }

    #[test]
    fn unsupported_explicit_platform_is_kept() {
        assert_eq!(resolve_platform(Some("freebsd")).unwrap(), "freebsd");
    }

    #[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
    #[test]
    fn detected_platform_is_supported() {
        let key = resolve_platform(None).unwrap();
        assert!(Platform::is_supported(&key));
    }

    #[test]
    fn zero_probe_timeout_disables_limit() {
        let cli = Cli::try_parse_from(["yugo", "--platform", "linux", "--probe-timeout", "0"])
            .unwrap();
        let ctx = CommandContext::from_cli(&cli).unwrap();
        assert_eq!(ctx.probe_timeout, None);
        assert_eq!(ctx.probe().timeout(), None);
    }

    #[test]
    fn missing_catalog_exits_with_code_two() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.yaml");
        let cli = Cli::try_parse_from(["yugo", "managers"]).unwrap();
        let dispatcher = CommandDispatcher::new(CommandContext::new(&path, "linux"));
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert_eq!(result.exit_code, EXIT_NO_CATALOG);
        assert!(ui.has_error("No catalog found"));
    }
}
