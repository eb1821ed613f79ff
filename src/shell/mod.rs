//! Shell command execution.

pub mod command;
pub mod platform;
pub mod probe;

pub use command::{execute, CommandOptions, CommandResult};
pub use platform::{is_ci, shell_invocation};
pub use probe::{ShellProbe, DEFAULT_PROBE_TIMEOUT};
