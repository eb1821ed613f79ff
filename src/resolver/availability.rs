//! Package manager availability.
//!
//! Determines which of the catalog's package managers for a platform are
//! installed on this machine. Execution is delegated to a [`ManagerProbe`];
//! the resolver itself has no side effects and cannot fail.

use crate::catalog::Catalog;
use std::thread;

/// Result of probing one package manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeStatus {
    /// The check command exited 0.
    Present,
    /// The check command exited non-zero.
    Absent,
    /// The check command could not be run (spawn error, timeout).
    Failed(String),
}

impl ProbeStatus {
    /// Whether the manager can be used.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present)
    }

    /// Short label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Present => "available",
            Self::Absent => "not installed",
            Self::Failed(_) => "check failed",
        }
    }
}

/// Capability that checks whether a package manager is installed.
///
/// Implemented by [`ShellProbe`](crate::shell::ShellProbe) for real runs and
/// by any `Fn(&str) -> bool` closure for tests.
pub trait ManagerProbe {
    /// Run a manager's check command and report the outcome.
    fn probe(&self, check_cmd: &str) -> ProbeStatus;
}

impl<F> ManagerProbe for F
where
    F: Fn(&str) -> bool,
{
    fn probe(&self, check_cmd: &str) -> ProbeStatus {
        if self(check_cmd) {
            ProbeStatus::Present
        } else {
            ProbeStatus::Absent
        }
    }
}

/// Probe outcome for a single manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    /// Manager name.
    pub manager: String,
    /// The check command that was run.
    pub check_cmd: String,
    /// What the probe reported.
    pub status: ProbeStatus,
}

/// Probe every manager listed for a platform, in catalog order.
///
/// Unsupported platform keys and platforms missing from the catalog yield an
/// empty list. One failing probe never prevents the others from running.
pub fn probe_managers<P>(catalog: &Catalog, platform_key: &str, probe: &P) -> Vec<ProbeOutcome>
where
    P: ManagerProbe + ?Sized,
{
    catalog
        .managers_for(platform_key)
        .iter()
        .map(|manager| {
            let status = probe.probe(&manager.check_cmd);
            log_outcome(&manager.name, &status);
            ProbeOutcome {
                manager: manager.name.clone(),
                check_cmd: manager.check_cmd.clone(),
                status,
            }
        })
        .collect()
}

/// Same as [`probe_managers`], running the probes concurrently.
///
/// Output order still follows the catalog.
pub fn probe_managers_parallel<P>(
    catalog: &Catalog,
    platform_key: &str,
    probe: &P,
) -> Vec<ProbeOutcome>
where
    P: ManagerProbe + Sync + ?Sized,
{
    let managers = catalog.managers_for(platform_key);
    if managers.len() <= 1 {
        return probe_managers(catalog, platform_key, probe);
    }

    thread::scope(|scope| {
        let handles: Vec<_> = managers
            .iter()
            .map(|manager| scope.spawn(move || probe.probe(&manager.check_cmd)))
            .collect();

        managers
            .iter()
            .zip(handles)
            .map(|(manager, handle)| {
                let status = handle
                    .join()
                    .unwrap_or_else(|_| ProbeStatus::Failed("probe panicked".to_string()));
                log_outcome(&manager.name, &status);
                ProbeOutcome {
                    manager: manager.name.clone(),
                    check_cmd: manager.check_cmd.clone(),
                    status,
                }
            })
            .collect()
    })
}

/// Names of managers installed on this machine, in catalog order.
pub fn list_available_managers<P>(catalog: &Catalog, platform_key: &str, probe: &P) -> Vec<String>
where
    P: ManagerProbe + ?Sized,
{
    available_names(probe_managers(catalog, platform_key, probe))
}

/// Keep only the names of managers whose probe reported presence.
pub fn available_names(outcomes: Vec<ProbeOutcome>) -> Vec<String> {
    outcomes
        .into_iter()
        .filter(|o| o.status.is_present())
        .map(|o| o.manager)
        .collect()
}

fn log_outcome(manager: &str, status: &ProbeStatus) {
    match status {
        ProbeStatus::Failed(reason) => {
            tracing::warn!(manager, %reason, "Package manager check failed")
        }
        _ => tracing::debug!(manager, status = status.label(), "Probed package manager"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::parse_catalog;
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn catalog() -> Catalog {
        parse_catalog(
            r#"
package_managers:
  linux:
    - name: apt
      check_cmd: check-apt
    - name: snap
      check_cmd: check-snap
    - name: flatpak
      check_cmd: check-flatpak
  darwin:
    - name: brew
      check_cmd: check-brew
"#,
            Path::new("test.yaml"),
        )
        .unwrap()
    }

    struct FailingOn(&'static str);

    impl ManagerProbe for FailingOn {
        fn probe(&self, check_cmd: &str) -> ProbeStatus {
            if check_cmd == self.0 {
                ProbeStatus::Failed("spawn error".to_string())
            } else {
                ProbeStatus::Present
            }
        }
    }

    #[test]
    fn lists_present_managers_in_catalog_order() {
        let probe = |cmd: &str| cmd != "check-snap";
        let names = list_available_managers(&catalog(), "linux", &probe);
        assert_eq!(names, vec!["apt", "flatpak"]);
    }

    #[test]
    fn unsupported_platform_yields_nothing_and_never_probes() {
        let calls = AtomicUsize::new(0);
        let probe = |_: &str| {
            calls.fetch_add(1, Ordering::SeqCst);
            true
        };
        assert!(list_available_managers(&catalog(), "freebsd", &probe).is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn missing_platform_entry_yields_nothing() {
        let probe = |_: &str| true;
        assert!(list_available_managers(&catalog(), "windows", &probe).is_empty());
    }

    #[test]
    fn failed_probe_does_not_hide_other_managers() {
        let outcomes = probe_managers(&catalog(), "linux", &FailingOn("check-apt"));
        assert_eq!(outcomes.len(), 3);
        assert!(matches!(outcomes[0].status, ProbeStatus::Failed(_)));
        assert_eq!(outcomes[0].manager, "apt");
        assert_eq!(
            available_names(outcomes),
            vec!["snap".to_string(), "flatpak".to_string()]
        );
    }

    #[test]
    fn outcome_records_check_command() {
        let probe = |_: &str| false;
        let outcomes = probe_managers(&catalog(), "darwin", &probe);
        assert_eq!(outcomes[0].check_cmd, "check-brew");
        assert_eq!(outcomes[0].status, ProbeStatus::Absent);
    }

    #[test]
    fn parallel_probing_matches_sequential() {
        let probe = |cmd: &str| cmd.ends_with('t') || cmd.ends_with('k');
        let sequential = probe_managers(&catalog(), "linux", &probe);
        let parallel = probe_managers_parallel(&catalog(), "linux", &probe);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn parallel_probing_runs_every_probe() {
        let calls = AtomicUsize::new(0);
        let probe = |_: &str| {
            calls.fetch_add(1, Ordering::SeqCst);
            true
        };
        let outcomes = probe_managers_parallel(&catalog(), "linux", &probe);
        assert_eq!(outcomes.len(), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn probe_status_labels() {
        assert_eq!(ProbeStatus::Present.label(), "available");
        assert_eq!(ProbeStatus::Absent.label(), "not installed");
        assert_eq!(ProbeStatus::Failed("x".into()).label(), "check failed");
        assert!(!ProbeStatus::Failed("x".into()).is_present());
    }
}
