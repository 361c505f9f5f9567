//! Extpick CLI entry point.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use extpick::catalog::Catalog;
use extpick::cli::{Cli, CommandDispatcher};
use extpick::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("extpick=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("extpick=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("extpick starting with args: {:?}", cli);

    // Determine output mode
    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Selections can only be prompted interactively when stdin is a
    // terminal; piped input goes through the non-interactive UI.
    let is_interactive = std::io::stdin().is_terminal();

    // Create UI
    let mut ui = create_ui(is_interactive, output_mode);

    // Dispatch command
    let dispatcher = CommandDispatcher::new(Catalog::builtin());

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
