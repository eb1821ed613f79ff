//! Install execution.
//!
//! Takes the plan produced by [`crate::resolver`] and runs it through an
//! [`InstallExecutor`], collecting an [`InstallReport`].

pub mod installer;

pub use installer::{
    run_installs, InstallExecutor, InstallOutcome, InstallReport, InstallStatus, ShellExecutor,
};
