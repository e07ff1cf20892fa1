//! Visual theme and styling.

use console::Style;

/// resdir's visual theme.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for matched probes (green).
    pub success: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for skipped probes and secondary text (dim).
    pub dim: Style,
    /// Style for the resolved path and other important text (bold).
    pub highlight: Style,
    /// Style for degraded-fallback results (orange).
    pub warning: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            warning: Style::new().color256(208),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            warning: Style::new(),
        }
    }

    /// Format a matched probe line (icon + text in green).
    pub fn format_matched(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a missed probe line (icon + text in dim).
    pub fn format_missed(&self, msg: &str) -> String {
        format!("{}", self.dim.apply_to(format!("✗ {}", msg)))
    }

    /// Format a skipped probe line (icon + text in dim).
    pub fn format_skipped(&self, msg: &str) -> String {
        format!("{}", self.dim.apply_to(format!("○ {}", msg)))
    }

    /// Format a fallback line (icon + text in orange).
    pub fn format_fallback(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_produces_uncolored_text() {
        let theme = Theme::plain();
        assert_eq!(theme.format_matched("found"), "✓ found");
        assert_eq!(theme.format_skipped("gate"), "○ gate");
        assert_eq!(theme.format_fallback("degraded"), "⚠ degraded");
    }
}
