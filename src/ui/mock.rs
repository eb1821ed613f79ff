//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use yugo::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("manager", "apt");
//!
//! let prompt = Prompt::select("manager", "Package manager", &["apt".to_string()]);
//! assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "apt");
//! assert_eq!(ui.prompts_shown(), &["manager"]);
//! ```

use std::collections::{HashMap, VecDeque};

use crate::error::Result;
use crate::runner::InstallReport;

use super::{split_list, OutputMode, Prompt, PromptResult, PromptType, SpinnerHandle, UserInterface};

/// Summary line recorded for an install report: (succeeded, failed).
pub type SummaryCounts = (usize, usize);

/// Mock UI implementation for testing.
///
/// Supports both single responses (via `set_prompt_response`) and queued
/// responses (via `queue_prompt_responses`) for keys asked more than once.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    spinners: Vec<String>,
    command_outputs: Vec<(String, String)>,
    error_blocks: Vec<(String, String, Option<String>)>,
    summaries: Vec<SummaryCounts>,
    prompt_responses: HashMap<String, String>,
    prompt_queues: HashMap<String, VecDeque<String>>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set a response for a prompt key.
    ///
    /// Multi-select answers are comma-separated.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Queue multiple responses for the same prompt key.
    ///
    /// Responses are returned in order. After the queue is exhausted,
    /// falls back to `set_prompt_response` or the prompt default.
    pub fn queue_prompt_responses(&mut self, key: &str, responses: Vec<&str>) {
        let queue = responses.into_iter().map(String::from).collect();
        self.prompt_queues.insert(key.to_string(), queue);
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Spinner messages, in the order spinners were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Captured command outputs as (command, output).
    pub fn command_outputs(&self) -> &[(String, String)] {
        &self.command_outputs
    }

    /// Captured error blocks as (command, output, hint).
    pub fn error_blocks(&self) -> &[(String, String, Option<String>)] {
        &self.error_blocks
    }

    /// Captured install summaries as (succeeded, failed) counts.
    pub fn summaries(&self) -> &[SummaryCounts] {
        &self.summaries
    }

    /// Keys of all prompts that were shown.
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    fn next_response(&mut self, key: &str) -> Option<String> {
        if let Some(response) = self.prompt_queues.get_mut(key).and_then(VecDeque::pop_front) {
            return Some(response);
        }
        self.prompt_responses.get(key).cloned()
    }
}

/// Shape a textual answer to the prompt's type.
fn answer_for(prompt_type: &PromptType, response: &str) -> PromptResult {
    match prompt_type {
        PromptType::MultiSelect { .. } => PromptResult::Strings(split_list(response)),
        PromptType::Select { .. } => PromptResult::String(response.to_string()),
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.prompts_shown.push(prompt.key.clone());

        let response = self
            .next_response(&prompt.key)
            .or_else(|| prompt.default.clone())
            .unwrap_or_default();
        Ok(answer_for(&prompt.prompt_type, &response))
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner::new())
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_command_output(&mut self, command: &str, output: &str) {
        self.command_outputs
            .push((command.to_string(), output.to_string()));
    }

    fn show_error_block(&mut self, command: &str, output: &str, hint: Option<&str>) {
        self.error_blocks.push((
            command.to_string(),
            output.to_string(),
            hint.map(String::from),
        ));
        self.errors.push(command.to_string());
    }

    fn show_install_summary(&mut self, report: &InstallReport) {
        let succeeded = report.succeeded().count();
        let failed = report.failed().count();
        self.summaries.push((succeeded, failed));
        if failed == 0 {
            self.successes
                .push(format!("Installed {} program(s)", succeeded));
        } else {
            self.errors.push(format!("{} install(s) failed", failed));
        }
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Status of a mock spinner when finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerStatus {
    Success,
    Error,
}

/// Mock spinner that captures finish messages.
#[derive(Debug, Default)]
pub struct MockSpinner {
    messages: Vec<String>,
    finish_message: Option<String>,
    status: Option<SpinnerStatus>,
}

impl MockSpinner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages set while spinning.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn finish_message(&self) -> Option<&str> {
        self.finish_message.as_deref()
    }

    pub fn status(&self) -> Option<SpinnerStatus> {
        self.status
    }
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        self.finish_message = Some(msg.to_string());
        self.status = Some(SpinnerStatus::Success);
    }

    fn finish_error(&mut self, msg: &str) {
        self.finish_message = Some(msg.to_string());
        self.status = Some(SpinnerStatus::Error);
    }
}
