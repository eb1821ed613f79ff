//! Platform-specific shell selection.

/// Program and flag used to run a command string.
///
/// `sh -c` on POSIX systems, `cmd /C` on Windows.
pub fn shell_invocation() -> (&'static str, &'static str) {
    if cfg!(target_os = "windows") {
        ("cmd", "/C")
    } else {
        ("sh", "-c")
    }
}

/// Environment variables whose presence marks a CI run.
const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

/// Check if running in a CI environment.
///
/// Used to auto-detect CI and force non-interactive mode in `main()`.
pub fn is_ci() -> bool {
    ci_detected(|name| std::env::var_os(name).is_some())
}

/// CI detection over an arbitrary variable lookup.
fn ci_detected<F>(is_set: F) -> bool
where
    F: Fn(&str) -> bool,
{
    CI_VARS.iter().any(|name| is_set(*name))
}
