//! Visual theme and styling.

use console::{Style, Term};
use std::io::Write;

/// Styles for the dispatcher's diagnostics.
#[derive(Debug, Clone)]
pub struct HookTheme {
    /// Style for error messages (red bold).
    pub error: Style,
}

impl Default for HookTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl HookTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            error: Style::new().red().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or `NO_COLOR`).
    pub fn plain() -> Self {
        Self {
            error: Style::new(),
        }
    }

    /// Pick the colored or plain theme for the current stderr.
    pub fn for_stderr() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format an error message.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(msg))
    }
}

/// Check if colors should be enabled on stderr.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    Term::stderr().is_term()
}

/// Write a single diagnostic line to stderr.
pub fn report_error(msg: &str) {
    let mut term = Term::stderr();
    writeln!(term, "{}", HookTheme::for_stderr().format_error(msg)).ok();
}
