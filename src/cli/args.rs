//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Extpick - interactive editor extension installer.
#[derive(Debug, Parser)]
#[command(name = "extpick")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Select and install extensions (default if no command specified)
    Install(InstallArgs),

    /// List the available extensions
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InstallArgs {
    /// Installer command invoked once per selected extension
    #[arg(long, default_value = "code", value_name = "PROGRAM")]
    pub installer: String,

    /// Preview install commands without executing
    #[arg(long)]
    pub dry_run: bool,
}

impl Default for InstallArgs {
    fn default() -> Self {
        Self {
            installer: "code".to_string(),
            dry_run: false,
        }
    }
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn no_args_has_no_subcommand() {
        let cli = Cli::parse_from(["extpick"]);
        assert!(cli.command.is_none());
        assert!(!cli.quiet);
        assert!(!cli.verbose);
    }

    #[test]
    fn install_defaults_to_code() {
        let cli = Cli::parse_from(["extpick", "install"]);
        match cli.command {
            Some(Commands::Install(args)) => {
                assert_eq!(args.installer, "code");
                assert!(!args.dry_run);
            }
            _ => panic!("expected install subcommand"),
        }
    }

    #[test]
    fn install_accepts_custom_installer() {
        let cli = Cli::parse_from(["extpick", "install", "--installer", "codium", "--dry-run"]);
        match cli.command {
            Some(Commands::Install(args)) => {
                assert_eq!(args.installer, "codium");
                assert!(args.dry_run);
            }
            _ => panic!("expected install subcommand"),
        }
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::parse_from(["extpick", "list", "--quiet"]);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Some(Commands::List(_))));
    }

    #[test]
    fn list_json_flag() {
        let cli = Cli::parse_from(["extpick", "list", "--json"]);
        match cli.command {
            Some(Commands::List(args)) => assert!(args.json),
            _ => panic!("expected list subcommand"),
        }
    }

    #[test]
    fn install_args_default_matches_clap_default() {
        let defaults = InstallArgs::default();
        assert_eq!(defaults.installer, "code");
        assert!(!defaults.dry_run);
    }
}
