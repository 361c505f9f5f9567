//! Install command implementation.
//!
//! The `extpick install` command shows the catalog, reads a
//! comma-separated selection, and runs the external installer once per
//! selected extension, in the order the user listed them. The first
//! installer failure aborts the run; extensions already installed by
//! earlier iterations are not rolled back.

use crate::catalog::Catalog;
use crate::cli::args::InstallArgs;
use crate::error::{ExtpickError, Result};
use crate::installer::Installer;
use crate::selection::parse_selection;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::show_catalog;

const SELECTION_PROMPT: &str =
    "Enter the numbers of the extensions you want to install, separated by commas";

/// The install command implementation.
pub struct InstallCommand {
    catalog: Catalog,
    args: InstallArgs,
}

impl InstallCommand {
    /// Create a new install command.
    pub fn new(catalog: Catalog, args: InstallArgs) -> Self {
        Self { catalog, args }
    }

    /// Read selection lines until one parses.
    ///
    /// A malformed line is reported and re-read in full; there is no
    /// partial acceptance. Running out of input is fatal.
    fn prompt_for_selection(&self, ui: &mut dyn UserInterface) -> Result<Vec<usize>> {
        loop {
            let line = ui.read_line(SELECTION_PROMPT)?;
            match parse_selection(&line, self.catalog.len()) {
                Ok(indices) => return Ok(indices),
                Err(err) => {
                    tracing::debug!("selection line rejected: {}", err);
                    ui.error("Invalid input. Please enter numbers separated by commas.");
                }
            }
        }
    }

    /// Install every selected extension, in order, failing fast.
    fn install_all(&self, extensions: &[&'static str], ui: &mut dyn UserInterface) -> Result<()> {
        let capture = !ui.output_mode().shows_install_output();
        let installer = Installer::new(&self.args.installer).with_captured_output(capture);
        let total = extensions.len();

        for (position, &extension) in extensions.iter().enumerate() {
            ui.show_progress(position + 1, total);

            if self.args.dry_run {
                ui.message(&format!("would run: {}", installer.render_command(extension)));
                continue;
            }

            if capture {
                self.install_captured(&installer, extension, ui)?;
            } else {
                ui.message(&format!("Installing VS Code extension: {}", extension));
                let result = installer.install(extension)?;
                if !result.success {
                    return Err(ExtpickError::InstallFailed {
                        extension: extension.to_string(),
                        code: result.exit_code,
                    });
                }
                ui.success(&format!("Extension {} installed.", extension));
            }
        }

        Ok(())
    }

    /// Quiet-mode install: capture the installer's output behind a
    /// spinner, replaying it only when the install fails.
    fn install_captured(
        &self,
        installer: &Installer,
        extension: &'static str,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let mut spinner =
            ui.start_spinner(&format!("Installing VS Code extension: {}", extension));

        match installer.install(extension) {
            Ok(result) if result.success => {
                spinner.finish_success(&format!("Extension {} installed.", extension));
                Ok(())
            }
            Ok(result) => {
                spinner.finish_error(&format!("Installing {} failed", extension));
                if !result.output.is_empty() {
                    ui.message(result.output.trim_end());
                }
                Err(ExtpickError::InstallFailed {
                    extension: extension.to_string(),
                    code: result.exit_code,
                })
            }
            Err(e) => {
                spinner.finish_error(&format!("Installing {} failed", extension));
                Err(e)
            }
        }
    }
}

impl Command for InstallCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        show_catalog(&self.catalog, ui);

        if self.args.dry_run {
            ui.warning("Dry-run mode: install commands are shown but not executed.");
        }

        let indices = self.prompt_for_selection(ui)?;
        let selected = self.catalog.resolve(&indices);

        if selected.is_empty() {
            ui.message("No extensions selected.");
            return Ok(CommandResult::success());
        }

        tracing::debug!("selected {} extensions", selected.len());
        self.install_all(&selected, ui)?;

        Ok(CommandResult::success())
    }
}
