//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::{Result, YugoError};
use crate::runner::InstallReport;

use super::progress::{count_label, format_duration};
use super::theme::YugoTheme;
use super::{
    split_list, OutputMode, Prompt, PromptResult, PromptType, SpinnerHandle, UserInterface,
};

/// Prefix of environment variables that answer prompts by key.
pub const PROMPT_ENV_PREFIX: &str = "YUGO_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `YUGO_PROMPT_<KEY>` environment variables, or
/// the prompt's default. A prompt with neither is an error.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI reading overrides from the environment.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }

    fn env_key(prompt_key: &str) -> String {
        format!("{}{}", PROMPT_ENV_PREFIX, prompt_key.to_uppercase())
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let env_key = Self::env_key(&prompt.key);
        let answer = self
            .env_overrides
            .get(&env_key)
            .or(prompt.default.as_ref())
            .ok_or_else(|| YugoError::SelectionRequired {
                what: format!(
                    "'{}' cannot be prompted in non-interactive mode (set {} or pass it as a flag)",
                    prompt.key, env_key
                ),
            })?;

        tracing::debug!(key = %prompt.key, %answer, "Answered prompt without a terminal");

        Ok(match &prompt.prompt_type {
            PromptType::MultiSelect { .. } => PromptResult::Strings(split_list(answer)),
            PromptType::Select { .. } => PromptResult::String(answer.trim().to_string()),
        })
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        println!("  {}", message);
        Box::new(NoopSpinner)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_header() {
            println!("\n{}\n", title);
        }
    }

    fn show_command_output(&mut self, command: &str, output: &str) {
        println!("    $ {}", command);
        for line in output.lines() {
            println!("    {}", line);
        }
    }

    fn show_error_block(&mut self, command: &str, output: &str, hint: Option<&str>) {
        eprintln!();
        eprintln!("    ┌─ Command ──────────────────────────");
        eprintln!("    │ {}", command);
        if !output.is_empty() {
            eprintln!("    ├─ Output ───────────────────────────");
            for line in output.lines() {
                eprintln!("    │ {}", line);
            }
        }
        eprintln!("    └────────────────────────────────────");
        if let Some(h) = hint {
            eprintln!();
            eprintln!("    Hint: {}", h);
        }
    }

    fn show_install_summary(&mut self, report: &InstallReport) {
        println!();
        println!("  ┌─ Summary ──────────────────────────");
        for outcome in &report.outcomes {
            let icon = if outcome.succeeded() { "✓" } else { "✗" };
            println!(
                "  │ {} {:<20} {}",
                icon,
                outcome.program,
                format_duration(outcome.duration)
            );
        }
        println!("  ├────────────────────────────────────");
        println!(
            "  │ Total: {} · {} installed · {} failed",
            format_duration(report.total_duration),
            report.succeeded().count(),
            report.failed().count(),
        );
        println!("  └────────────────────────────────────");

        if report.all_succeeded() {
            println!(
                "  ✓ Installed {}",
                count_label(report.outcomes.len(), "program")
            );
        } else {
            let failed: Vec<_> = report.failed().map(|o| o.program.as_str()).collect();
            eprintln!("  ✗ Failed: {}", failed.join(", "));
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that prints only the final line.
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        println!("  {}", YugoTheme::plain().format_success(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("  {}", YugoTheme::plain().format_error(msg));
    }
}
