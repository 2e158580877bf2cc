//! Visual theme and styling.

use console::Style;

/// The launcher's visual theme.
#[derive(Debug, Clone)]
pub struct StarterTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (yellow).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for informational status lines (blue).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for the banner and section titles (cyan bold).
    pub header: Style,
    /// Style for menu keys (green bold).
    pub menu_key: Style,
    /// Style for contextual hints (yellow dim).
    pub hint: Style,
    /// Style for key labels in key-value displays (cyan).
    pub key: Style,
    /// Style for box-drawing rules (cyan dim).
    pub border: Style,
}

impl Default for StarterTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl StarterTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            info: Style::new().blue(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().cyan().bold(),
            menu_key: Style::new().green().bold(),
            hint: Style::new().yellow().dim(),
            key: Style::new().cyan(),
            border: Style::new().cyan().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            menu_key: Style::new(),
            hint: Style::new(),
            key: Style::new(),
            border: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in yellow).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format an informational line.
    pub fn format_info(&self, msg: &str) -> String {
        format!("{}", self.info.apply_to(format!("→ {}", msg)))
    }

    /// Format the banner: a rule, the title, and a closing rule.
    pub fn format_header(&self, title: &str) -> String {
        let rule = "=".repeat(60);
        format!(
            "{}\n{}\n{}",
            self.border.apply_to(&rule),
            self.highlight.apply_to(title),
            self.border.apply_to(&rule)
        )
    }

    /// Format a menu row.
    pub fn format_menu_entry(&self, key: &str, label: &str) -> String {
        format!("{} {}", self.menu_key.apply_to(format!("{})", key)), label)
    }

    /// Format a `key: value` row.
    pub fn format_entry(&self, key: &str, value: &str) -> String {
        format!("{} {}", self.key.apply_to(format!("{}:", key)), value)
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
