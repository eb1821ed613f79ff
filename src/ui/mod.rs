//! Interactive user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use yugo::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, false, OutputMode::Quiet);
//! ui.show_header("yugo");
//! ui.success("All programs installed");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod progress;
pub mod prompts;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use progress::format_duration;
pub use prompts::prompt_user;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, YugoTheme};

use crate::error::Result;
use crate::runner::InstallReport;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a prompt and get user input.
    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult>;

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show the captured output of a command that ran.
    fn show_command_output(&mut self, command: &str, output: &str);

    /// Show a failed command with its output and an optional hint.
    fn show_error_block(&mut self, command: &str, output: &str, hint: Option<&str>);

    /// Show the per-program results of an install run.
    fn show_install_summary(&mut self, report: &InstallReport);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);
}

/// A prompt to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for env overrides and test responses).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// The type of prompt.
    pub prompt_type: PromptType,
    /// Default value if user just presses enter.
    pub default: Option<String>,
}

impl Prompt {
    /// Single-choice prompt over plain values.
    pub fn select(key: &str, question: &str, values: &[String]) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Select {
                options: PromptOption::from_values(values),
            },
            default: None,
        }
    }

    /// Multiple-choice prompt over plain values.
    pub fn multi_select(key: &str, question: &str, values: &[String]) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::MultiSelect {
                options: PromptOption::from_values(values),
            },
            default: None,
        }
    }
}

/// The type of prompt.
#[derive(Debug, Clone)]
pub enum PromptType {
    /// Select one from a list of options.
    Select { options: Vec<PromptOption> },
    /// Select multiple from a list of options.
    MultiSelect { options: Vec<PromptOption> },
}

/// An option in a select prompt.
#[derive(Debug, Clone)]
pub struct PromptOption {
    /// Display label.
    pub label: String,
    /// Value returned when selected.
    pub value: String,
}

impl PromptOption {
    /// Options whose label and value are the same string.
    pub fn from_values(values: &[String]) -> Vec<Self> {
        values
            .iter()
            .map(|v| Self {
                label: v.clone(),
                value: v.clone(),
            })
            .collect()
    }
}

/// Result of a prompt.
#[derive(Debug, Clone)]
pub enum PromptResult {
    /// String result from select.
    String(String),
    /// Multiple string results from multi-select.
    Strings(Vec<String>),
}

impl PromptResult {
    /// Get as string.
    pub fn as_string(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            Self::Strings(v) => v.join(","),
        }
    }

    /// Get as a list of values. A single string becomes a one-item list,
    /// an empty string an empty list.
    pub fn into_strings(self) -> Vec<String> {
        match self {
            Self::Strings(v) => v,
            Self::String(s) if s.is_empty() => Vec::new(),
            Self::String(s) => vec![s],
        }
    }
}

/// Split a comma-separated answer into trimmed, non-empty values.
pub(crate) fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_result_as_string_strings() {
        assert_eq!(
            PromptResult::Strings(vec!["dev".to_string(), "cli".to_string()]).as_string(),
            "dev,cli"
        );
    }

    #[test]
    fn prompt_result_into_strings() {
        assert_eq!(
            PromptResult::String("apt".to_string()).into_strings(),
            vec!["apt"]
        );
        assert!(PromptResult::String(String::new()).into_strings().is_empty());
        assert_eq!(
            PromptResult::Strings(vec!["a".to_string(), "b".to_string()]).into_strings(),
            vec!["a", "b"]
        );
    }

    #[test]
    fn select_prompt_uses_values_as_labels() {
        let prompt = Prompt::select("manager", "Pick one", &["apt".to_string()]);
        if let PromptType::Select { options } = prompt.prompt_type {
            assert_eq!(options[0].label, "apt");
            assert_eq!(options[0].value, "apt");
        } else {
            panic!("Expected Select variant");
        }
    }

    #[test]
    fn multi_select_prompt_keeps_order() {
        let values = vec!["dev".to_string(), "cli".to_string(), "office".to_string()];
        let prompt = Prompt::multi_select("tags", "Pick some", &values);
        if let PromptType::MultiSelect { options } = prompt.prompt_type {
            let got: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
            assert_eq!(got, vec!["dev", "cli", "office"]);
        } else {
            panic!("Expected MultiSelect variant");
        }
    }

    #[test]
    fn split_list_trims_and_drops_empty() {
        assert_eq!(split_list(" dev, cli ,,"), vec!["dev", "cli"]);
        assert!(split_list("").is_empty());
    }
}
