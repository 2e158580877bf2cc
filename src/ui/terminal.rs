//! Terminal UI.

use console::Term;
use std::io::{IsTerminal, Write};

use crate::error::Result;

use super::prompts::prompt_line;
use super::{
    should_use_colors, MenuEntry, ProgressSpinner, SpinnerHandle, StarterTheme, UserInterface,
};

/// Terminal UI implementation writing to stdout.
pub struct TerminalUI {
    term: Term,
    theme: StarterTheme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(use_colors: bool) -> Self {
        let theme = if use_colors {
            StarterTheme::new()
        } else {
            StarterTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn info(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_info(msg)).ok();
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

    fn show_hint(&mut self, hint: &str) {
        writeln!(self.term, "  {}", self.theme.hint.apply_to(hint)).ok();
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.term, "{}\n", self.theme.format_header(title)).ok();
    }

    fn show_section(&mut self, title: &str) {
        writeln!(self.term, "\n{}", self.theme.header.apply_to(title)).ok();
    }

    fn show_entry(&mut self, key: &str, value: &str) {
        writeln!(self.term, "  {}", self.theme.format_entry(key, value)).ok();
    }

    fn show_menu(&mut self, title: &str, entries: &[MenuEntry<'_>]) {
        writeln!(self.term, "\n{}", self.theme.info.apply_to(title)).ok();
        for entry in entries {
            writeln!(
                self.term,
                "{}",
                self.theme.format_menu_entry(entry.key, entry.label)
            )
            .ok();
        }
        writeln!(self.term).ok();
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let styled = self.theme.highlight.apply_to(prompt).to_string();
        prompt_line(&styled, &self.term)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.term.is_term() {
            Box::new(ProgressSpinner::new(message, self.theme.clone()))
        } else {
            Box::new(ProgressSpinner::hidden(self.theme.clone()))
        }
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term() && std::io::stdin().is_terminal()
    }
}

/// Create the UI for this process.
///
/// Colors follow [`should_use_colors`] unless `no_color` is set.
pub fn create_ui(no_color: bool) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(!no_color && should_use_colors()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_creation() {
        let ui = TerminalUI::new(false);
        drop(ui);
    }

    #[test]
    fn terminal_ui_writes_without_panic() {
        let mut ui = TerminalUI::new(false);
        ui.info("Checking prerequisites");
        ui.show_entry("name", "qatalog-login");
        ui.show_menu(
            "Choose a mode:",
            &[MenuEntry {
                key: "9",
                label: "Quit",
            }],
        );
    }

    #[test]
    fn create_ui_without_color() {
        let ui = create_ui(true);
        let _ = ui.is_interactive();
    }
}
