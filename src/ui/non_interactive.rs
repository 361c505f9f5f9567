//! Non-interactive UI for piped/headless input.

use std::io::{BufRead, Write};

use crate::error::{ExtpickError, Result};

use super::theme::ExtpickTheme;
use super::{OutputMode, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Selection lines are read straight from standard input, so the
/// program works identically when driven by a pipe or a here-doc.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        if self.mode.shows_status() {
            print!("{}: ", prompt);
            std::io::stdout().flush().ok();
        }

        let mut line = String::new();
        let bytes = std::io::stdin().lock().read_line(&mut line)?;
        if bytes == 0 {
            return Err(ExtpickError::InputClosed);
        }

        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("  {}", message);
        }
        Box::new(NoopSpinner)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("{}", title);
        }
    }

    fn show_progress(&mut self, current: usize, total: usize) {
        if self.mode.shows_status() {
            println!("[{}/{}]", current, total);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner that only reports the outcome (for non-interactive mode).
struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn finish_success(&mut self, msg: &str) {
        let theme = ExtpickTheme::new();
        println!("{}", theme.format_success(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        let theme = ExtpickTheme::new();
        println!("{}", theme.format_error(msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_is_not_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn output_mode_preserved() {
        let ui = NonInteractiveUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn noop_spinner_methods() {
        let mut spinner = NoopSpinner;
        spinner.finish_success("done");
        spinner.finish_error("failed");
    }
}
