//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. Input lines are served from a queue;
//! once the queue is empty, `read_line` reports end of input.
//!
//! # Example
//!
//! ```
//! use webapp_starter::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_inputs(vec!["8", ""]);
//!
//! ui.message("Starting");
//! ui.show_entry("dev", "vite");
//!
//! assert!(ui.has_message("Starting"));
//! assert!(ui.has_entry("dev: vite"));
//! assert_eq!(ui.read_line("choice").unwrap().as_deref(), Some("8"));
//! ```

use std::collections::VecDeque;

use crate::error::{Result, StarterError};

use super::{MenuEntry, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    interactive: bool,
    messages: Vec<String>,
    infos: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    hints: Vec<String>,
    headers: Vec<String>,
    sections: Vec<String>,
    entries: Vec<String>,
    menus_shown: usize,
    spinners: Vec<String>,
    /// `None` stands for a Ctrl+C at the prompt.
    inputs: VecDeque<Option<String>>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with no queued input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue lines to be returned by `read_line`, in order.
    pub fn queue_inputs(&mut self, inputs: Vec<&str>) {
        self.inputs
            .extend(inputs.into_iter().map(|line| Some(line.to_string())));
    }

    /// Queue a Ctrl+C for the next `read_line` after any queued lines.
    pub fn queue_interrupt(&mut self) {
        self.inputs.push_back(None);
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured info lines.
    pub fn infos(&self) -> &[String] {
        &self.infos
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured hints.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured section titles.
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Get all captured entries, rendered as `key: value`.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// How many times a menu was rendered.
    pub fn menus_shown(&self) -> usize {
        self.menus_shown
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Get all prompts that were shown.
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific info line was shown.
    pub fn has_info(&self, msg: &str) -> bool {
        self.infos.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific hint was shown.
    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints.iter().any(|m| m.contains(msg))
    }

    /// Check if an exact `key: value` entry was shown.
    pub fn has_entry(&self, entry: &str) -> bool {
        self.entries.iter().any(|e| e == entry)
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn info(&mut self, msg: &str) {
        self.infos.push(msg.to_string());
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

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_section(&mut self, title: &str) {
        self.sections.push(title.to_string());
    }

    fn show_entry(&mut self, key: &str, value: &str) {
        self.entries.push(format!("{}: {}", key, value));
    }

    fn show_menu(&mut self, _title: &str, _entries: &[MenuEntry<'_>]) {
        self.menus_shown += 1;
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts_shown.push(prompt.to_string());
        match self.inputs.pop_front() {
            Some(Some(line)) => Ok(Some(line)),
            Some(None) => Err(StarterError::InputInterrupted),
            None => Ok(None),
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner::new())
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Spinner handle that records how it finished.
#[derive(Debug, Default)]
pub struct MockSpinner {
    /// Final success message, if any.
    pub finished_with: Option<String>,
    /// Whether the spinner was cleared.
    pub cleared: bool,
}

impl MockSpinner {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SpinnerHandle for MockSpinner {
    fn finish_success(&mut self, msg: &str) {
        self.finished_with = Some(msg.to_string());
    }

    fn clear(&mut self) {
        self.cleared = true;
    }
}
