//! Error types for extpick operations.
//!
//! This module defines [`ExtpickError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for
//! convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `ExtpickError` for fatal errors that unwind to the top-level
//!   caller and set the process exit status
//! - Selection-line parse failures are *not* represented here: they are
//!   recoverable and live in [`crate::selection::SelectionError`],
//!   consumed by the re-prompt loop
//! - Use `anyhow::Error` (via `ExtpickError::Other`) for unexpected errors

use thiserror::Error;

/// Core error type for extpick operations.
#[derive(Debug, Error)]
pub enum ExtpickError {
    /// The installer executable could not be spawned.
    #[error("Installer '{program}' not found on PATH")]
    InstallerNotFound { program: String },

    /// The installer exited with a non-zero status.
    #[error("Installing '{extension}' failed with exit code {code:?}")]
    InstallFailed {
        extension: String,
        code: Option<i32>,
    },

    /// Standard input was exhausted while a selection was still required.
    #[error("Standard input closed before a selection was entered")]
    InputClosed,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for extpick operations.
pub type Result<T> = std::result::Result<T, ExtpickError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn installer_not_found_displays_program() {
        let err = ExtpickError::InstallerNotFound {
            program: "code".into(),
        };
        assert!(err.to_string().contains("code"));
        assert!(err.to_string().contains("PATH"));
    }

    #[test]
    fn install_failed_displays_extension_and_code() {
        let err = ExtpickError::InstallFailed {
            extension: "ms-python.python".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("ms-python.python"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn install_failed_without_code_still_displays() {
        let err = ExtpickError::InstallFailed {
            extension: "redhat.vscode-yaml".into(),
            code: None,
        };
        assert!(err.to_string().contains("redhat.vscode-yaml"));
    }

    #[test]
    fn input_closed_mentions_stdin() {
        let err = ExtpickError::InputClosed;
        assert!(err.to_string().contains("input closed"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe gone");
        let err: ExtpickError = io_err.into();
        assert!(matches!(err, ExtpickError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(ExtpickError::InputClosed)
        }
        assert!(returns_error().is_err());
    }
}
