//! Interactive prompts.

use console::Term;
use dialoguer::Input;

use crate::error::{ExtpickError, Result};

/// Convert dialoguer errors to ExtpickError.
fn map_dialoguer_err(e: dialoguer::Error) -> ExtpickError {
    ExtpickError::Io(e.into())
}

/// Read one selection line from the terminal.
///
/// Empty input is allowed; it resolves to an empty selection downstream,
/// which is a normal "nothing to do" outcome, not an error.
pub fn read_selection_line(prompt: &str, term: &Term) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_on(term)
        .map_err(map_dialoguer_err)
}
