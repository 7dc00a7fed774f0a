use serde::{Deserialize, Serialize};
use std::fmt;

/// A module in the import graph, identified by its dotted path
/// (e.g. `mypackage.utils.io`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Module {
    pub name: String,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// One directed edge in the import graph. Two imports are the same edge
/// iff both endpoints match; line-level detail lives in [`ImportOccurrence`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DirectImport {
    pub importer: Module,
    pub imported: Module,
}

impl DirectImport {
    pub fn new(importer: impl Into<String>, imported: impl Into<String>) -> Self {
        Self { importer: Module::new(importer), imported: Module::new(imported) }
    }
}

impl fmt::Display for DirectImport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.importer, self.imported)
    }
}

/// A concrete, located instance of an import statement. The same
/// (importer, imported) edge may have several occurrences on different lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOccurrence {
    pub importer: String,
    pub imported: String,
    pub line_number: usize,
    /// Raw text of the source line; empty when the source gave no line text.
    #[serde(default)]
    pub line_contents: String,
}
