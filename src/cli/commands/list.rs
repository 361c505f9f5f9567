//! List command implementation.
//!
//! The `extpick list` command prints the catalog without installing
//! anything.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::show_catalog;

/// One catalog row in `--json` output.
#[derive(Debug, Serialize)]
struct CatalogEntry {
    index: usize,
    id: &'static str,
}

/// The list command implementation.
pub struct ListCommand {
    catalog: Catalog,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(catalog: Catalog, args: ListArgs) -> Self {
        Self { catalog, args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.json {
            let entries: Vec<CatalogEntry> = self
                .catalog
                .iter()
                .enumerate()
                .map(|(i, id)| CatalogEntry { index: i + 1, id })
                .collect();
            let json = serde_json::to_string_pretty(&entries).map_err(anyhow::Error::from)?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        show_catalog(&self.catalog, ui);
        Ok(CommandResult::success())
    }
}
