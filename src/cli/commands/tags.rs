//! Tags command implementation.
//!
//! The `yugo tags <manager>` command shows the tags reachable through one
//! package manager. It reads the catalog only; nothing is probed.

use crate::cli::args::TagsArgs;
use crate::error::{Result, YugoError};
use crate::resolver::tags_for_manager;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The tags command implementation.
pub struct TagsCommand {
    context: CommandContext,
    args: TagsArgs,
}

impl TagsCommand {
    /// Create a new tags command.
    pub fn new(context: CommandContext, args: TagsArgs) -> Self {
        Self { context, args }
    }
}

impl Command for TagsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let platform = self.context.platform.as_str();
        let catalog = self.context.load_catalog()?;
        let manager = self.args.manager.as_str();

        let declared = catalog
            .managers_for(platform)
            .iter()
            .any(|m| m.name == manager);
        if !declared {
            return Err(YugoError::UnknownManager {
                name: manager.to_string(),
            });
        }

        let tags = tags_for_manager(&catalog, platform, manager);

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&tags).map_err(|e| YugoError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        if tags.is_empty() {
            ui.warning(&format!("No programs can be installed with {}", manager));
            return Ok(CommandResult::success());
        }

        for tag in &tags {
            ui.message(tag);
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    const CATALOG: &str = r#"
package_managers:
  windows:
    - name: winget
      check_cmd: winget --version
    - name: choco
      check_cmd: choco --version
programs:
  firefox:
    tags: [browser, daily]
    installs:
      windows:
        winget: winget install Mozilla.Firefox
  vscode:
    tags: [dev, daily]
    installs:
      windows:
        winget: winget install Microsoft.VisualStudioCode
"#;

    fn setup_catalog() -> (TempDir, CommandContext) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, CATALOG).unwrap();
        (temp, CommandContext::new(path, "windows"))
    }

    fn args(manager: &str, json: bool) -> TagsArgs {
        TagsArgs {
            manager: manager.to_string(),
            json,
        }
    }

    #[test]
    fn prints_deduplicated_tags() {
        let (_temp, ctx) = setup_catalog();
        let mut ui = MockUI::new();

        TagsCommand::new(ctx, args("winget", false))
            .execute(&mut ui)
            .unwrap();

        assert_eq!(ui.messages(), &["browser", "daily", "dev"]);
    }

    #[test]
    fn json_output_is_an_array() {
        let (_temp, ctx) = setup_catalog();
        let mut ui = MockUI::new();

        TagsCommand::new(ctx, args("winget", true))
            .execute(&mut ui)
            .unwrap();

        let tags: Vec<String> = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(tags, vec!["browser", "daily", "dev"]);
    }

    #[test]
    fn declared_manager_without_programs_warns() {
        let (_temp, ctx) = setup_catalog();
        let mut ui = MockUI::new();

        let result = TagsCommand::new(ctx, args("choco", false))
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_warning("choco"));
    }

    #[test]
    fn undeclared_manager_is_an_error() {
        let (_temp, ctx) = setup_catalog();
        let mut ui = MockUI::new();

        let err = TagsCommand::new(ctx, args("scoop", false))
            .execute(&mut ui)
            .unwrap_err();
        assert!(matches!(err, YugoError::UnknownManager { .. }));
    }
}
