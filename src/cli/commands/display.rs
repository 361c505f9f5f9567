//! Shared catalog rendering.

use crate::catalog::Catalog;
use crate::ui::{ExtpickTheme, UserInterface};

/// Render the catalog menu as 1-based `index: identifier` rows.
pub fn show_catalog(catalog: &Catalog, ui: &mut dyn UserInterface) {
    let theme = if ui.is_interactive() {
        ExtpickTheme::new()
    } else {
        ExtpickTheme::plain()
    };

    ui.show_header("Available extensions:");
    for (index, id) in catalog.iter().enumerate() {
        ui.message(&theme.format_catalog_row(index + 1, id));
    }
}
