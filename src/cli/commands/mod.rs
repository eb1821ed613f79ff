//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`yugo install`, `yugo managers`)
//! - Shared catalog loading and platform detection through [`CommandContext`]
//! - Consistent global flag handling

pub mod completions;
pub mod dispatcher;
pub mod install;
pub mod list;
pub mod managers;
pub mod tags;
pub mod validate;

pub use dispatcher::{
    resolve_platform, Command, CommandContext, CommandDispatcher, CommandResult, EXIT_NO_CATALOG,
};
