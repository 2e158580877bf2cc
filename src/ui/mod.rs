//! Terminal user interface.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal usage
//! - [`MockUI`] for tests
//! - Line prompts, spinners, and the color theme
//!
//! # Example
//!
//! ```
//! use webapp_starter::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_inputs(vec!["1"]);
//!
//! let choice = ui.read_line("Enter your choice (1-9)").unwrap();
//! assert_eq!(choice.as_deref(), Some("1"));
//! ui.success("Ready");
//! assert!(ui.has_success("Ready"));
//! ```

pub mod mock;
pub mod prompts;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI};
pub use prompts::read_line_from;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, StarterTheme};

use crate::error::Result;

/// One row of the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry<'a> {
    /// What the user types to pick this row.
    pub key: &'a str,
    pub label: &'a str,
}

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display an informational status line.
    fn info(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Display a remediation or usage hint.
    fn show_hint(&mut self, hint: &str);

    /// Show the program banner.
    fn show_header(&mut self, title: &str);

    /// Start a titled block of output.
    fn show_section(&mut self, title: &str);

    /// Show a `key: value` line inside a section.
    fn show_entry(&mut self, key: &str, value: &str);

    /// Render a numbered menu.
    fn show_menu(&mut self, title: &str, entries: &[MenuEntry<'_>]);

    /// Read one line of input.
    ///
    /// Returns `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Check if running attached to a terminal.
    fn is_interactive(&self) -> bool;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Remove the spinner without leaving a line behind.
    fn clear(&mut self);
}
