//! Package manager probe backed by the platform shell.

use std::time::Duration;

use crate::resolver::{ManagerProbe, ProbeStatus};

use super::command::{execute, CommandOptions};

/// Default time a check command may run before it counts as failed.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Runs check commands with `sh -c` (or `cmd /C`) and reports exit status.
#[derive(Debug, Clone)]
pub struct ShellProbe {
    timeout: Option<Duration>,
}

impl ShellProbe {
    /// Probe with the default timeout.
    pub fn new() -> Self {
        Self::with_timeout(Some(DEFAULT_PROBE_TIMEOUT))
    }

    /// Probe with an explicit timeout (None waits forever).
    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    /// The configured timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Default for ShellProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl ManagerProbe for ShellProbe {
    fn probe(&self, check_cmd: &str) -> ProbeStatus {
        if check_cmd.trim().is_empty() {
            return ProbeStatus::Failed("empty check command".to_string());
        }

        let options = CommandOptions {
            timeout: self.timeout,
            ..Default::default()
        };

        match execute(check_cmd, &options) {
            Ok(result) if result.success => ProbeStatus::Present,
            Ok(_) => ProbeStatus::Absent,
            Err(e) => ProbeStatus::Failed(e.to_string()),
        }
    }
}
