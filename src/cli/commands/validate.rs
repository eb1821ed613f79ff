//! Validate command implementation.
//!
//! The `yugo validate` command checks the catalog for mistakes that the
//! resolvers would otherwise silently skip over.

use crate::catalog::validate_catalog;
use crate::cli::args::ValidateArgs;
use crate::error::{Result, YugoError};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The validate command implementation.
pub struct ValidateCommand {
    context: CommandContext,
    args: ValidateArgs,
}

impl ValidateCommand {
    /// Create a new validate command.
    pub fn new(context: CommandContext, args: ValidateArgs) -> Self {
        Self { context, args }
    }
}

impl Command for ValidateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let catalog = match self.context.load_catalog() {
            Ok(c) => c,
            Err(YugoError::CatalogParseError { path, message }) => {
                ui.error(&format!("Parse error in {}: {}", path.display(), message));
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        let issues = validate_catalog(&catalog);

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&issues).map_err(|e| YugoError::Other(e.into()))?;
            ui.message(&json);
        } else if issues.is_empty() {
            ui.success("Catalog is valid!");
        } else {
            for issue in &issues {
                ui.warning(&issue.to_string());
            }
            ui.error(&format!("Found {} issue(s)", issues.len()));
        }

        if issues.is_empty() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup_catalog(content: &str) -> (TempDir, CommandContext) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, content).unwrap();
        (temp, CommandContext::new(path, "linux"))
    }

    #[test]
    fn valid_catalog_passes() {
        let (_temp, ctx) = setup_catalog(
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
        let mut ui = MockUI::new();

        let result = ValidateCommand::new(ctx, ValidateArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_success("valid"));
    }

    #[test]
    fn issues_fail_with_exit_one() {
        let (_temp, ctx) = setup_catalog(
            r#"
programs:
  git:
    installs:
      linux:
        apt: apt install git
"#,
        );
        let mut ui = MockUI::new();

        let result = ValidateCommand::new(ctx, ValidateArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_warning("untagged-program"));
        assert!(ui.has_warning("undeclared-manager"));
    }

    #[test]
    fn json_lists_issues() {
        let (_temp, ctx) = setup_catalog("programs:\n  git:\n    tags: []\n");
        let mut ui = MockUI::new();

        ValidateCommand::new(ctx, ValidateArgs { json: true })
            .execute(&mut ui)
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(value[0]["rule"], "untagged-program");
        assert_eq!(value[0]["program"], "git");
    }

    #[test]
    fn parse_error_is_reported() {
        let (_temp, ctx) = setup_catalog("programs: [not, a, map");
        let mut ui = MockUI::new();

        let result = ValidateCommand::new(ctx, ValidateArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Parse error"));
    }
}
