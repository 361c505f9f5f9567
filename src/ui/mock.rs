//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. Input lines can be queued ahead
//! of time to script the selection prompt.
//!
//! # Example
//!
//! ```
//! use extpick::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_input_line("1,3");
//!
//! // Use ui in code under test...
//! ui.message("Available extensions:");
//! let line = ui.read_line("Enter the numbers").unwrap();
//!
//! assert_eq!(line, "1,3");
//! assert!(ui.has_message("Available extensions:"));
//! ```

use std::collections::VecDeque;

use crate::error::{ExtpickError, Result};

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures all UI interactions and serves queued input lines.
/// An exhausted queue behaves like closed standard input.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    progress: Vec<(usize, usize)>,
    spinners: Vec<String>,
    prompts_shown: Vec<String>,
    input_lines: VecDeque<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Queue one input line to be returned by `read_line`.
    pub fn queue_input_line(&mut self, line: &str) {
        self.input_lines.push_back(line.to_string());
    }

    /// Queue multiple input lines, returned in order.
    pub fn queue_input_lines(&mut self, lines: &[&str]) {
        for line in lines {
            self.queue_input_line(line);
        }
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
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

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured progress updates.
    pub fn progress(&self) -> &[(usize, usize)] {
        &self.progress
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

    /// Clear all captured interactions.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.successes.clear();
        self.warnings.clear();
        self.errors.clear();
        self.headers.clear();
        self.progress.clear();
        self.spinners.clear();
        self.prompts_shown.clear();
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
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

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.prompts_shown.push(prompt.to_string());
        self.input_lines.pop_front().ok_or(ExtpickError::InputClosed)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner::new())
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_progress(&mut self, current: usize, total: usize) {
        self.progress.push((current, total));
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Mock spinner that captures finish messages.
#[derive(Debug, Default)]
pub struct MockSpinner {
    finish_message: Option<String>,
    status: Option<SpinnerStatus>,
}

/// Status of a mock spinner when finished.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinnerStatus {
    /// Finished successfully.
    Success,
    /// Finished with error.
    Error,
}

impl MockSpinner {
    /// Create a new mock spinner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the final finish message.
    pub fn finish_message(&self) -> Option<&str> {
        self.finish_message.as_deref()
    }

    /// Get the final status.
    pub fn status(&self) -> Option<SpinnerStatus> {
        self.status
    }
}

impl SpinnerHandle for MockSpinner {
    fn finish_success(&mut self, msg: &str) {
        self.finish_message = Some(msg.to_string());
        self.status = Some(SpinnerStatus::Success);
    }

    fn finish_error(&mut self, msg: &str) {
        self.finish_message = Some(msg.to_string());
        self.status = Some(SpinnerStatus::Error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ui_captures_messages() {
        let mut ui = MockUI::new();

        ui.message("Hello");
        ui.success("Done");
        ui.warning("Be careful");
        ui.error("Oops");

        assert_eq!(ui.messages(), &["Hello"]);
        assert_eq!(ui.successes(), &["Done"]);
        assert_eq!(ui.warnings(), &["Be careful"]);
        assert_eq!(ui.errors(), &["Oops"]);
    }

    #[test]
    fn mock_ui_serves_queued_input_in_order() {
        let mut ui = MockUI::new();
        ui.queue_input_lines(&["a,b", "1,2"]);

        assert_eq!(ui.read_line("select").unwrap(), "a,b");
        assert_eq!(ui.read_line("select").unwrap(), "1,2");
        assert_eq!(ui.prompts_shown().len(), 2);
    }

    #[test]
    fn mock_ui_exhausted_queue_is_input_closed() {
        let mut ui = MockUI::new();

        let err = ui.read_line("select").unwrap_err();
        assert!(matches!(err, ExtpickError::InputClosed));
    }

    #[test]
    fn mock_ui_captures_spinners() {
        let mut ui = MockUI::new();

        let _spinner = ui.start_spinner("Installing extension");

        assert_eq!(ui.spinners(), &["Installing extension"]);
    }

    #[test]
    fn mock_ui_captures_progress() {
        let mut ui = MockUI::new();

        ui.show_progress(1, 5);
        ui.show_progress(2, 5);

        assert_eq!(ui.progress(), &[(1, 5), (2, 5)]);
    }

    #[test]
    fn mock_ui_captures_headers() {
        let mut ui = MockUI::new();

        ui.show_header("Available extensions:");

        assert_eq!(ui.headers(), &["Available extensions:"]);
    }

    #[test]
    fn mock_ui_clear_resets() {
        let mut ui = MockUI::new();

        ui.message("test");
        ui.success("done");
        ui.clear();

        assert!(ui.messages().is_empty());
        assert!(ui.successes().is_empty());
    }

    #[test]
    fn mock_ui_has_helpers() {
        let mut ui = MockUI::new();

        ui.message("Available extensions:");
        ui.success("Extension installed.");
        ui.warning("dry-run");
        ui.error("Invalid input.");

        assert!(ui.has_message("Available"));
        assert!(ui.has_success("installed"));
        assert!(ui.has_warning("dry-run"));
        assert!(ui.has_error("Invalid"));
        assert!(!ui.has_message("not there"));
    }

    #[test]
    fn mock_ui_output_mode() {
        let ui = MockUI::with_mode(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn mock_ui_set_interactive() {
        let mut ui = MockUI::new();
        assert!(!ui.is_interactive());

        ui.set_interactive(true);
        assert!(ui.is_interactive());
    }

    #[test]
    fn mock_spinner_captures_finish() {
        let mut spinner = MockSpinner::new();

        spinner.finish_success("Done!");

        assert_eq!(spinner.finish_message(), Some("Done!"));
        assert_eq!(spinner.status(), Some(SpinnerStatus::Success));
    }

    #[test]
    fn mock_spinner_error_status() {
        let mut spinner = MockSpinner::new();
        spinner.finish_error("Failed!");

        assert_eq!(spinner.status(), Some(SpinnerStatus::Error));
    }
}
