//! External installer invocation.
//!
//! Installs are delegated to an external executable invoked as
//! `<program> --install-extension <identifier>`, one blocking
//! subprocess at a time. Whether an already-installed extension is a
//! no-op is entirely the installer's business; extpick performs no
//! pre-check.

use std::process::{Command, Stdio};

use crate::error::{ExtpickError, Result};

/// Result of one installer invocation.
#[derive(Debug, Clone)]
pub struct InstallResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Whether the installer succeeded (exit code 0).
    pub success: bool,

    /// Combined stdout/stderr when output capture is enabled,
    /// empty otherwise.
    pub output: String,
}

/// Invokes the external extension installer.
#[derive(Debug, Clone)]
pub struct Installer {
    program: String,
    capture_output: bool,
}

impl Installer {
    /// Create an installer around the given executable.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            capture_output: false,
        }
    }

    /// Capture the installer's output instead of inheriting the
    /// parent's streams.
    pub fn with_captured_output(mut self, capture: bool) -> Self {
        self.capture_output = capture;
        self
    }

    /// The installer executable.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Render the command line for display (dry runs, debug logs).
    pub fn render_command(&self, extension: &str) -> String {
        format!("{} --install-extension {}", self.program, extension)
    }

    /// Run `<program> --install-extension <extension>`, blocking until
    /// the subprocess exits.
    ///
    /// A non-zero exit is reported through [`InstallResult`], not as an
    /// `Err`; failing to spawn the process at all is an `Err`.
    pub fn install(&self, extension: &str) -> Result<InstallResult> {
        tracing::debug!("running: {}", self.render_command(extension));

        let mut cmd = Command::new(&self.program);
        cmd.arg("--install-extension").arg(extension);

        if self.capture_output {
            cmd.stdout(Stdio::piped());
            cmd.stderr(Stdio::piped());
            let output = cmd.output().map_err(|e| self.spawn_error(e))?;

            let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
            combined.push_str(&String::from_utf8_lossy(&output.stderr));

            Ok(InstallResult {
                exit_code: output.status.code(),
                success: output.status.success(),
                output: combined,
            })
        } else {
            let status = cmd.status().map_err(|e| self.spawn_error(e))?;

            Ok(InstallResult {
                exit_code: status.code(),
                success: status.success(),
                output: String::new(),
            })
        }
    }

    fn spawn_error(&self, err: std::io::Error) -> ExtpickError {
        if err.kind() == std::io::ErrorKind::NotFound {
            ExtpickError::InstallerNotFound {
                program: self.program.clone(),
            }
        } else {
            ExtpickError::Io(err)
        }
    }
}
