//! The fixed extension catalog.
//!
//! The catalog is process-wide constant data: an ordered list of
//! extension identifiers, displayed 1-based and resolved 0-based.

/// Extension identifiers offered by the selector, in display order.
const BUILTIN_EXTENSIONS: &[&str] = &[
    "ms-python.python",
    "ms-vscode.cpptools",
    "ms-vscode.go",
    "esbenp.prettier-vscode",
    "dbaeumer.vscode-eslint",
    "redhat.vscode-yaml",
    "ms-azuretools.vscode-docker",
    "ms-vscode-remote.remote-containers",
    "vscjava.vscode-java-pack",
    "vscjava.vscode-java-debug",
    "vscjava.vscode-java-test",
    "ms-azuretools.vscode-azurefunctions",
    "vscjava.vscode-maven",
    "vscode-icons-team.vscode-icons",
    "vscjava.vscode-java-dependency",
    "christian-kohler.npm-intellisense",
    "streetsidesoftware.code-spell-checker",
    "davidanson.vscode-markdownlint",
    "eg2.vscode-npm-script",
    "wix.vscode-import-cost",
    "ms-vscode.vscode-typescript-tslint-plugin",
];

/// An ordered, immutable list of installable extension identifiers.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    entries: &'static [&'static str],
}

impl Catalog {
    /// The built-in catalog.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_EXTENSIONS,
        }
    }

    /// Create a catalog over a custom entry list (used by tests).
    pub fn new(entries: &'static [&'static str]) -> Self {
        Self { entries }
    }

    /// Number of entries.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by zero-based index.
    pub fn get(&self, index: usize) -> Option<&'static str> {
        self.entries.get(index).copied()
    }

    /// Iterate entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().copied()
    }

    /// Map zero-based indices to identifiers, preserving order and
    /// multiplicity. Out-of-range indices are dropped.
    pub fn resolve(&self, indices: &[usize]) -> Vec<&'static str> {
        indices.iter().filter_map(|&i| self.get(i)).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
