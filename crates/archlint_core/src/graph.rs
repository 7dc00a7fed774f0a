use log::{debug, trace};
use std::collections::{BTreeSet, HashMap};

use crate::types::{DirectImport, ImportOccurrence, Module};

/// Query and mutation surface the contract-checking machinery needs from an
/// import graph. The graph itself is built elsewhere; contract checks borrow
/// it for the duration of one check and may remove edges from it.
///
/// `find_matching_direct_imports` is the pattern-matching oracle: how an
/// expression string selects concrete edges is up to the implementation
/// (exact, glob, regex), and must be a pure query.
pub trait ImportGraph {
    /// All modules currently in the graph.
    fn modules(&self) -> Vec<Module>;

    /// Modules directly imported by `importer`.
    fn modules_directly_imported_by(&self, importer: &Module) -> Vec<Module>;

    /// Every located occurrence of the (importer, imported) edge.
    fn import_details(&self, importer: &Module, imported: &Module) -> Vec<ImportOccurrence>;

    /// Concrete direct imports selected by the given pattern expression.
    fn find_matching_direct_imports(&self, expression: &str) -> Vec<DirectImport>;

    /// Remove a direct import edge and all of its occurrences. Removing an
    /// absent edge is a no-op.
    fn remove_import(&mut self, importer: &Module, imported: &Module);
}

/// In-memory [`ImportGraph`] with deterministic enumeration order.
///
/// Pattern matching is intentionally plain: an expression has the form
/// `"importer -> imported"`, and either side may be the wildcard `*` to
/// match any module. Anything richer belongs in another implementation of
/// the trait.
#[derive(Debug, Clone, Default)]
pub struct MemoryGraph {
    modules: BTreeSet<Module>,
    imports: HashMap<Module, BTreeSet<Module>>,
    details: HashMap<(Module, Module), Vec<ImportOccurrence>>,
}

impl MemoryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_module(&mut self, name: impl Into<String>) {
        self.modules.insert(Module::new(name));
    }

    /// Add an edge without line-level detail. Both endpoints are added as
    /// modules if not already present.
    pub fn add_import(&mut self, importer: impl Into<String>, imported: impl Into<String>) {
        let importer = Module::new(importer);
        let imported = Module::new(imported);
        trace!("Adding import {} -> {}", importer, imported);
        self.modules.insert(importer.clone());
        self.modules.insert(imported.clone());
        self.imports.entry(importer).or_default().insert(imported);
    }

    /// Add an edge together with one located occurrence of it.
    pub fn add_import_with_details(
        &mut self,
        importer: impl Into<String>,
        imported: impl Into<String>,
        line_number: usize,
        line_contents: impl Into<String>,
    ) {
        let importer = Module::new(importer);
        let imported = Module::new(imported);
        self.add_import(importer.name.clone(), imported.name.clone());
        self.details.entry((importer.clone(), imported.clone())).or_default().push(
            ImportOccurrence {
                importer: importer.name,
                imported: imported.name,
                line_number,
                line_contents: line_contents.into(),
            },
        );
    }

    pub fn direct_import_exists(&self, importer: &Module, imported: &Module) -> bool {
        self.imports.get(importer).is_some_and(|targets| targets.contains(imported))
    }

    /// All edges, ordered by (importer, imported).
    pub fn direct_imports(&self) -> Vec<DirectImport> {
        let mut edges: Vec<DirectImport> = self
            .imports
            .iter()
            .flat_map(|(importer, targets)| {
                targets.iter().map(|imported| DirectImport {
                    importer: importer.clone(),
                    imported: imported.clone(),
                })
            })
            .collect();
        edges.sort();
        edges
    }
}

fn name_matches(pattern: &str, name: &str) -> bool {
    pattern == "*" || pattern == name
}

impl ImportGraph for MemoryGraph {
    fn modules(&self) -> Vec<Module> {
        self.modules.iter().cloned().collect()
    }

    fn modules_directly_imported_by(&self, importer: &Module) -> Vec<Module> {
        self.imports
            .get(importer)
            .map(|targets| targets.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn import_details(&self, importer: &Module, imported: &Module) -> Vec<ImportOccurrence> {
        self.details
            .get(&(importer.clone(), imported.clone()))
            .cloned()
            .unwrap_or_default()
    }

    fn find_matching_direct_imports(&self, expression: &str) -> Vec<DirectImport> {
        let Some((importer_pattern, imported_pattern)) = expression.split_once("->") else {
            debug!("Expression '{}' has no '->' separator, matches nothing", expression);
            return Vec::new();
        };
        let importer_pattern = importer_pattern.trim();
        let imported_pattern = imported_pattern.trim();

        let matched: Vec<DirectImport> = self
            .direct_imports()
            .into_iter()
            .filter(|edge| {
                name_matches(importer_pattern, &edge.importer.name)
                    && name_matches(imported_pattern, &edge.imported.name)
            })
            .collect();
        trace!("Expression '{}' matched {} direct imports", expression, matched.len());
        matched
    }

    fn remove_import(&mut self, importer: &Module, imported: &Module) {
        trace!("Removing import {} -> {}", importer, imported);
        if let Some(targets) = self.imports.get_mut(importer) {
            targets.remove(imported);
            if targets.is_empty() {
                self.imports.remove(importer);
            }
        }
        self.details.remove(&(importer.clone(), imported.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> MemoryGraph {
        let mut graph = MemoryGraph::new();
        graph.add_import_with_details("pkg.a", "pkg.b", 3, "import pkg.b");
        graph.add_import_with_details("pkg.a", "pkg.b", 7, "from pkg import b");
        graph.add_import("pkg.a", "pkg.c");
        graph.add_import("pkg.b", "pkg.c");
        graph.add_module("pkg.isolated");
        graph
    }

    #[test]
    fn test_modules_include_both_endpoints() {
        let graph = sample_graph();
        let names: Vec<String> = graph.modules().into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["pkg.a", "pkg.b", "pkg.c", "pkg.isolated"]);
    }

    #[test]
    fn test_direct_imports_are_deduplicated_edges() {
        let graph = sample_graph();
        // pkg.a -> pkg.b has two occurrences but is one edge
        assert_eq!(
            graph.direct_imports(),
            vec![
                DirectImport::new("pkg.a", "pkg.b"),
                DirectImport::new("pkg.a", "pkg.c"),
                DirectImport::new("pkg.b", "pkg.c"),
            ]
        );
    }

    #[test]
    fn test_import_details_keeps_all_occurrences() {
        let graph = sample_graph();
        let details = graph.import_details(&Module::new("pkg.a"), &Module::new("pkg.b"));
        assert_eq!(details.len(), 2);
        assert_eq!(details[0].line_number, 3);
        assert_eq!(details[1].line_number, 7);
    }

    #[test]
    fn test_import_details_empty_for_unknown_edge() {
        let graph = sample_graph();
        assert!(graph.import_details(&Module::new("pkg.c"), &Module::new("pkg.a")).is_empty());
    }

    #[test]
    fn test_find_matching_exact() {
        let graph = sample_graph();
        assert_eq!(
            graph.find_matching_direct_imports("pkg.a -> pkg.b"),
            vec![DirectImport::new("pkg.a", "pkg.b")]
        );
        assert!(graph.find_matching_direct_imports("pkg.c -> pkg.a").is_empty());
    }

    #[test]
    fn test_find_matching_wildcard_importer() {
        let graph = sample_graph();
        assert_eq!(
            graph.find_matching_direct_imports("* -> pkg.c"),
            vec![DirectImport::new("pkg.a", "pkg.c"), DirectImport::new("pkg.b", "pkg.c")]
        );
    }

    #[test]
    fn test_find_matching_is_pure() {
        let graph = sample_graph();
        let before = graph.direct_imports();
        graph.find_matching_direct_imports("* -> *");
        assert_eq!(graph.direct_imports(), before);
    }

    #[test]
    fn test_malformed_expression_matches_nothing() {
        let graph = sample_graph();
        assert!(graph.find_matching_direct_imports("pkg.a").is_empty());
    }

    #[test]
    fn test_remove_import_drops_edge_and_details() {
        let mut graph = sample_graph();
        let importer = Module::new("pkg.a");
        let imported = Module::new("pkg.b");
        graph.remove_import(&importer, &imported);
        assert!(!graph.direct_import_exists(&importer, &imported));
        assert!(graph.import_details(&importer, &imported).is_empty());
        // other edges and modules untouched
        assert!(graph.direct_import_exists(&importer, &Module::new("pkg.c")));
        assert_eq!(graph.modules().len(), 4);
    }

    #[test]
    fn test_remove_absent_import_is_noop() {
        let mut graph = sample_graph();
        let before = graph.direct_imports();
        graph.remove_import(&Module::new("nope"), &Module::new("pkg.b"));
        assert_eq!(graph.direct_imports(), before);
    }
}
