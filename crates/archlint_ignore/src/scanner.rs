use log::{debug, trace};
use std::collections::HashSet;

use archlint_core::{ImportGraph, ImportOccurrence};

/// Key identifying one located import line: (importer, imported, line number).
/// Finer-grained than an edge, because one edge can have both ignored and
/// non-ignored occurrences.
pub type IgnoredLine = (String, String, usize);

fn has_inline_ignore(line_contents: &str, keyword: &str) -> bool {
    line_contents.contains(keyword)
}

/// Collect every import occurrence whose source line contains `keyword`.
///
/// The check is plain substring containment over the recorded line text.
/// Read-only: the graph is never mutated, so repeated scans of the same
/// graph return the same set.
pub fn inline_ignored_lines(graph: &dyn ImportGraph, keyword: &str) -> HashSet<IgnoredLine> {
    debug!("Scanning graph for inline ignore keyword '{}'", keyword);
    let mut ignored_lines = HashSet::new();
    for module in graph.modules() {
        for imported_module in graph.modules_directly_imported_by(&module) {
            for detail in graph.import_details(&module, &imported_module) {
                if has_inline_ignore(&detail.line_contents, keyword) {
                    trace!(
                        "Inline ignore on {} -> {} line {}",
                        detail.importer, detail.imported, detail.line_number
                    );
                    ignored_lines.insert((detail.importer, detail.imported, detail.line_number));
                }
            }
        }
    }
    debug!("Found {} inline-ignored lines", ignored_lines.len());
    ignored_lines
}

/// Drop every occurrence whose (importer, imported, line number) key is in
/// `ignored_lines`, preserving the order of the rest.
pub fn filter_ignored_lines(
    import_details: Vec<ImportOccurrence>,
    ignored_lines: &HashSet<IgnoredLine>,
) -> Vec<ImportOccurrence> {
    import_details
        .into_iter()
        .filter(|detail| {
            !ignored_lines.contains(&(
                detail.importer.clone(),
                detail.imported.clone(),
                detail.line_number,
            ))
        })
        .collect()
}
