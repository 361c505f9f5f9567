//! Extpick - interactive editor extension installer.
//!
//! Extpick shows a fixed menu of editor extensions, reads a
//! comma-separated selection from standard input, and installs each
//! selected extension by shelling out to an external installer command
//! (`code --install-extension <id>` by default), one at a time, in the
//! order the user listed them.
//!
//! # Modules
//!
//! - [`catalog`] - The fixed list of installable extensions
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`installer`] - External installer invocation
//! - [`selection`] - Selection-line parsing
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use extpick::catalog::Catalog;
//! use extpick::selection::parse_selection;
//!
//! let catalog = Catalog::builtin();
//! let indices = parse_selection("1, 3", catalog.len()).unwrap();
//! let selected = catalog.resolve(&indices);
//! assert_eq!(selected.len(), 2);
//! ```

pub mod catalog;
pub mod cli;
pub mod error;
pub mod installer;
pub mod selection;
pub mod ui;

pub use error::{ExtpickError, Result};
