//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::shell::DEFAULT_PROBE_TIMEOUT;

/// yugo - Batch install programs on a fresh machine.
#[derive(Debug, Parser)]
#[command(name = "yugo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the catalog file (overrides ~/.config/yugo/config.yaml)
    #[arg(short, long, global = true, env = "YUGO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Platform key to resolve against (darwin, windows, linux)
    #[arg(long, global = true, value_name = "KEY")]
    pub platform: Option<String>,

    /// Show verbose output, including output of successful installs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Plain prompts and no animations (also enabled by ACCESSIBLE=1)
    #[arg(long, global = true)]
    pub accessible: bool,

    /// Never prompt; answers come from flags or YUGO_PROMPT_* variables
    #[arg(long, global = true)]
    pub non_interactive: bool,

    /// Seconds to wait for each package manager check (0 disables the limit)
    #[arg(long, global = true, value_name = "SECS", default_value_t = DEFAULT_PROBE_TIMEOUT.as_secs())]
    pub probe_timeout: u64,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Whether accessible mode is on, via the flag or `ACCESSIBLE`.
    pub fn accessible(&self) -> bool {
        self.accessible
            || std::env::var("ACCESSIBLE")
                .map(|v| parse_env_bool(&v))
                .unwrap_or(false)
    }
}

/// Truthy values accepted for boolean environment switches.
fn parse_env_bool(value: &str) -> bool {
    matches!(value.trim(), "1" | "t" | "T" | "true" | "TRUE" | "True")
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Choose a package manager and tags, then install (default)
    Install(InstallArgs),

    /// Show package managers for this platform and whether they are installed
    Managers(ManagersArgs),

    /// Show the tags a package manager can install
    Tags(TagsArgs),

    /// List catalog programs
    List(ListArgs),

    /// Check the catalog for mistakes
    Validate(ValidateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstallArgs {
    /// Package manager to use instead of prompting
    #[arg(short, long)]
    pub manager: Option<String>,

    /// Tags to install instead of prompting (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Print the install commands without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Print the dry-run plan as JSON
    #[arg(long, requires = "dry_run")]
    pub json: bool,

    /// Seconds each install command may run before it is killed
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

/// Arguments for the `managers` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ManagersArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `tags` command.
#[derive(Debug, Clone, clap::Args)]
pub struct TagsArgs {
    /// Package manager name
    pub manager: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Only programs this package manager can install
    #[arg(short, long)]
    pub manager: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `validate` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ValidateArgs {
    /// Output issues as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
