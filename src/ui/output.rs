//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show all output including command output.
    Verbose,
    /// Show progress and status; command output only on failure.
    #[default]
    Normal,
    /// Show minimal output (spinners + final status).
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows output of successful commands.
    pub fn shows_command_output(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows headers and banners.
    pub fn shows_header(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_verbose_shows_command_output() {
        assert!(OutputMode::Verbose.shows_command_output());
        assert!(!OutputMode::Normal.shows_command_output());
        assert!(!OutputMode::Quiet.shows_command_output());
    }

    #[test]
    fn quiet_hides_headers() {
        assert!(OutputMode::Normal.shows_header());
        assert!(OutputMode::Verbose.shows_header());
        assert!(!OutputMode::Quiet.shows_header());
    }
}
