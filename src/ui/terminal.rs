//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;
use crate::runner::InstallReport;

use super::progress::{count_label, format_duration};
use super::{
    prompt_user, NonInteractiveUI, OutputMode, ProgressSpinner, Prompt, PromptResult,
    SpinnerHandle, UserInterface, YugoTheme,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: YugoTheme,
    mode: OutputMode,
    accessible: bool,
}

impl TerminalUI {
    /// Create a new terminal UI.
    ///
    /// Accessible mode drops colors, animated spinners, and decorated prompts.
    pub fn new(mode: OutputMode, accessible: bool) -> Self {
        let theme = if accessible {
            YugoTheme::plain()
        } else {
            YugoTheme::detect()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
            accessible,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        prompt_user(prompt, &self.term, self.accessible)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.accessible {
            writeln!(self.term, "{}", message).ok();
            return Box::new(PlainSpinner {
                term: self.term.clone(),
                theme: self.theme.clone(),
            });
        }
        Box::new(ProgressSpinner::new(message))
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_header() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_command_output(&mut self, command: &str, output: &str) {
        writeln!(
            self.term,
            "    {} {}",
            self.theme.dim.apply_to("$"),
            self.theme.command.apply_to(command)
        )
        .ok();
        for line in output.lines() {
            writeln!(self.term, "    {}", self.theme.dim.apply_to(line)).ok();
        }
    }

    fn show_error_block(&mut self, command: &str, output: &str, hint: Option<&str>) {
        let b = &self.theme.border;
        writeln!(
            self.term,
            "    {} {}",
            b.apply_to("┌─"),
            b.apply_to("Command ──────────────────────────")
        )
        .ok();
        writeln!(
            self.term,
            "    {} {}",
            b.apply_to("│"),
            self.theme.command.apply_to(command)
        )
        .ok();

        if !output.is_empty() {
            writeln!(
                self.term,
                "    {} {}",
                b.apply_to("├─"),
                b.apply_to("Output ───────────────────────────")
            )
            .ok();
            for line in output.lines() {
                writeln!(self.term, "    {} {}", b.apply_to("│"), line).ok();
            }
        }

        writeln!(
            self.term,
            "    {}",
            b.apply_to("└────────────────────────────────────")
        )
        .ok();

        if let Some(h) = hint {
            writeln!(self.term).ok();
            writeln!(
                self.term,
                "    {} {}",
                self.theme.hint.apply_to("Hint:"),
                self.theme.hint.apply_to(h)
            )
            .ok();
        }
    }

    fn show_install_summary(&mut self, report: &InstallReport) {
        let b = &self.theme.border;

        writeln!(self.term).ok();
        writeln!(
            self.term,
            "  {} {}",
            b.apply_to("┌─"),
            b.apply_to("Summary ──────────────────────────")
        )
        .ok();

        for outcome in &report.outcomes {
            let icon = if outcome.succeeded() {
                self.theme.success.apply_to("✓")
            } else {
                self.theme.error.apply_to("✗")
            };
            writeln!(
                self.term,
                "  {} {} {:<20} {}",
                b.apply_to("│"),
                icon,
                outcome.program,
                self.theme
                    .duration
                    .apply_to(format_duration(outcome.duration)),
            )
            .ok();
        }

        writeln!(
            self.term,
            "  {}",
            b.apply_to("├────────────────────────────────────")
        )
        .ok();
        writeln!(
            self.term,
            "  {} Total: {} {} {} installed {} {} failed",
            b.apply_to("│"),
            self.theme
                .duration
                .apply_to(format_duration(report.total_duration)),
            self.theme.dim.apply_to("·"),
            report.succeeded().count(),
            self.theme.dim.apply_to("·"),
            report.failed().count(),
        )
        .ok();
        writeln!(
            self.term,
            "  {}",
            b.apply_to("└────────────────────────────────────")
        )
        .ok();

        let line = if report.all_succeeded() {
            self.theme.format_success(&format!(
                "Installed {}",
                count_label(report.outcomes.len(), "program")
            ))
        } else {
            let failed: Vec<_> = report.failed().map(|o| o.program.as_str()).collect();
            self.theme
                .format_error(&format!("Failed: {}", failed.join(", ")))
        };
        writeln!(self.term, "  {}", line).ok();
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Line-oriented spinner for accessible mode.
struct PlainSpinner {
    term: Term,
    theme: YugoTheme,
}

impl SpinnerHandle for PlainSpinner {
    fn set_message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn finish_success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn finish_error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }
}

/// Create the appropriate UI based on context.
///
/// Falls back to [`NonInteractiveUI`] when stdout is not a terminal.
pub fn create_ui(interactive: bool, accessible: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode, accessible))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_output_mode() {
        let ui = TerminalUI::new(OutputMode::Quiet, false);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn accessible_spinner_is_line_based() {
        let mut ui = TerminalUI::new(OutputMode::Normal, true);
        let mut spinner = ui.start_spinner("Installing git...");
        spinner.finish_success("git");
    }

    #[test]
    fn create_ui_non_interactive() {
        let ui = create_ui(false, false, OutputMode::Normal);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn create_ui_respects_mode() {
        let ui = create_ui(false, true, OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }
}
