//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::catalog::Catalog;
use crate::cli::args::{Cli, Commands, InstallArgs};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution
/// logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    catalog: Catalog,
}

impl CommandDispatcher {
    /// Create a new dispatcher over the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Get the catalog this dispatcher serves.
    pub fn catalog(&self) -> Catalog {
        self.catalog
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command
    /// implementation and executes it. With no subcommand, `install`
    /// runs with its defaults.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Install(args)) => {
                let cmd = super::install::InstallCommand::new(self.catalog, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(self.catalog, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                let cmd = super::install::InstallCommand::new(self.catalog, InstallArgs::default());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(Catalog::builtin());
        assert_eq!(dispatcher.catalog().len(), Catalog::builtin().len());
    }
}
