//! Catalog validation rules.
//!
//! Validation never blocks resolution: a sparse or partially inconsistent
//! catalog still resolves, the issues are reported so the user can fix
//! their file.
//!
//! - Platform keys must be `darwin`, `windows` or `linux`
//! - Managers need a name and a check command, unique per platform
//! - Install mappings must name a manager declared for that platform
//! - Install commands must not be empty
//! - Programs without tags can never be selected

use crate::catalog::schema::{Catalog, Platform};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// A problem found in a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Rule identifier
    pub rule: &'static str,
    /// Human-readable message
    pub message: String,
    /// Program name if the issue is program-specific
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.rule, self.message)
    }
}

/// Validate a catalog and return all issues found.
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    issues.extend(validate_managers(catalog));
    issues.extend(validate_programs(catalog));

    issues
}

fn validate_managers(catalog: &Catalog) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for (platform, managers) in &catalog.package_managers {
        if !Platform::is_supported(platform) {
            issues.push(ValidationIssue {
                rule: "unknown-platform",
                message: format!(
                    "package_managers lists unsupported platform '{}' (expected darwin, windows or linux)",
                    platform
                ),
                program: None,
            });
        }

        let mut seen = HashSet::new();
        for manager in managers {
            if manager.name.trim().is_empty() {
                issues.push(ValidationIssue {
                    rule: "missing-manager-name",
                    message: format!("A package manager under '{}' has no name", platform),
                    program: None,
                });
                continue;
            }

            if manager.check_cmd.trim().is_empty() {
                issues.push(ValidationIssue {
                    rule: "missing-check-command",
                    message: format!(
                        "Package manager '{}' on '{}' has no check_cmd and will never be detected",
                        manager.name, platform
                    ),
                    program: None,
                });
            }

            if !seen.insert(manager.name.as_str()) {
                issues.push(ValidationIssue {
                    rule: "duplicate-manager",
                    message: format!(
                        "Package manager '{}' is listed more than once for '{}'",
                        manager.name, platform
                    ),
                    program: None,
                });
            }
        }
    }

    issues
}

fn validate_programs(catalog: &Catalog) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for (name, program) in &catalog.programs {
        if program.tags.is_empty() {
            issues.push(ValidationIssue {
                rule: "untagged-program",
                message: format!("Program '{}' has no tags and cannot be selected", name),
                program: Some(name.clone()),
            });
        }

        let mut platforms: Vec<&String> = program.installs.keys().collect();
        platforms.sort();

        for platform in platforms {
            if !Platform::is_supported(platform) {
                issues.push(ValidationIssue {
                    rule: "unknown-platform",
                    message: format!(
                        "Program '{}' has installs for unsupported platform '{}'",
                        name, platform
                    ),
                    program: Some(name.clone()),
                });
                continue;
            }

            let declared: HashSet<&str> = catalog
                .managers_for(platform)
                .iter()
                .map(|m| m.name.as_str())
                .collect();

            let mut managers: Vec<(&String, &String)> = program.installs[platform].iter().collect();
            managers.sort();

            for (manager, command) in managers {
                if !declared.contains(manager.as_str()) {
                    issues.push(ValidationIssue {
                        rule: "undeclared-manager",
                        message: format!(
                            "Program '{}' installs via '{}' on '{}', which is not declared under package_managers.{}",
                            name, manager, platform, platform
                        ),
                        program: Some(name.clone()),
                    });
                }

                if command.trim().is_empty() {
                    issues.push(ValidationIssue {
                        rule: "empty-install-command",
                        message: format!(
                            "Program '{}' has an empty install command for '{}' on '{}'",
                            name, manager, platform
                        ),
                        program: Some(name.clone()),
                    });
                }
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(yaml: &str) -> Catalog {
        serde_yaml::from_str(yaml).unwrap()
    }

    fn rules(issues: &[ValidationIssue]) -> Vec<&'static str> {
        issues.iter().map(|i| i.rule).collect()
    }

    #[test]
    fn valid_catalog_has_no_issues() {
        let c = catalog(
            r#"
package_managers:
  linux:
    - name: apt
      check_cmd: apt --version
programs:
  git:
    tags: [dev]
    installs:
      linux:
        apt: apt install git
"#,
        );
        assert!(validate_catalog(&c).is_empty());
    }

    #[test]
    fn empty_catalog_is_valid() {
        assert!(validate_catalog(&Catalog::default()).is_empty());
    }

    #[test]
    fn detects_unknown_platform() {
        let c = catalog(
            r#"
package_managers:
  plan9:
    - name: pkg
      check_cmd: "true"
"#,
        );
        assert_eq!(rules(&validate_catalog(&c)), vec!["unknown-platform"]);
    }

    #[test]
    fn detects_duplicate_and_incomplete_managers() {
        let c = catalog(
            r#"
package_managers:
  linux:
    - name: apt
      check_cmd: apt --version
    - name: apt
      check_cmd: apt-get --version
    - name: snap
    - name: ""
      check_cmd: "true"
"#,
        );
        let found = rules(&validate_catalog(&c));
        assert!(found.contains(&"duplicate-manager"));
        assert!(found.contains(&"missing-check-command"));
        assert!(found.contains(&"missing-manager-name"));
    }

    #[test]
    fn detects_undeclared_manager_and_empty_command() {
        let c = catalog(
            r#"
package_managers:
  linux:
    - name: apt
      check_cmd: apt --version
programs:
  code:
    tags: [dev]
    installs:
      linux:
        apt: ""
        snap: snap install code --classic
"#,
        );
        let issues = validate_catalog(&c);
        let found = rules(&issues);
        assert!(found.contains(&"undeclared-manager"));
        assert!(found.contains(&"empty-install-command"));
        assert!(issues
            .iter()
            .all(|i| i.program.as_deref() == Some("code")));
    }

    #[test]
    fn detects_untagged_program() {
        let c = catalog(
            r#"
programs:
  lonely:
    description: nobody selects me
"#,
        );
        let issues = validate_catalog(&c);
        assert_eq!(rules(&issues), vec!["untagged-program"]);
        assert!(issues[0].to_string().contains("lonely"));
    }
}
