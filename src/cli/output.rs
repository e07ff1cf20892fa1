//! Terminal output for commands.

use crate::cli::theme::Theme;

/// Routes command output to the terminal, honoring `--quiet`.
///
/// Payload lines (the resolved path, JSON documents) always print so the
/// binary stays scriptable; detail lines are suppressed in quiet mode and
/// errors go to stderr.
pub struct Output {
    theme: Theme,
    quiet: bool,
}

impl Output {
    /// Create an output sink.
    pub fn new(theme: Theme, quiet: bool) -> Self {
        Self { theme, quiet }
    }

    /// The active theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Print a payload line (always, even in quiet mode).
    pub fn payload(&self, msg: &str) {
        println!("{}", msg);
    }

    /// Print a detail line (suppressed in quiet mode).
    pub fn detail(&self, msg: &str) {
        if !self.quiet {
            println!("{}", msg);
        }
    }

    /// Print an error line to stderr.
    pub fn error(&self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }
}
