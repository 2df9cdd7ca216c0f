//! Visual theme and styling.

use console::Style;

/// Terminal theme for command output.
#[derive(Debug, Clone)]
pub struct SdkTheme {
    /// Style for accepted versions (green).
    pub success: Style,
    /// Style for rejected versions (red).
    pub rejected: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for descriptor keys (bold).
    pub highlight: Style,
    /// Style for section headers (bold).
    pub key: Style,
}

impl Default for SdkTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl SdkTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            rejected: Style::new().red(),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            key: Style::new().bold(),
        }
    }
}
