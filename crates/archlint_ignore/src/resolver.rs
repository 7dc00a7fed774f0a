use log::{debug, trace};
use std::collections::{BTreeSet, HashSet};
use thiserror::Error;

use archlint_core::{DirectImport, ImportGraph};

use crate::config::{AlertLevel, IgnoreExpression};

/// An ignore expression matched no concrete import while the alert level
/// was [`AlertLevel::Error`]. Carries the message for the lexicographically
/// smallest offending expression.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct UnresolvedIgnoreRule(pub String);

/// Remove every import matched by `ignore_imports` from the graph.
///
/// Expressions are resolved against the graph first; matched edges are
/// collected into a single deduplicated removal set, so an edge matched by
/// several expressions is removed once. Expressions matching nothing are
/// handled according to `unmatched_alerting` before any removal happens:
/// the [`AlertLevel::Error`] path therefore fails with the graph completely
/// unmodified.
///
/// Returns the warnings to surface to the user — empty unless the level is
/// [`AlertLevel::Warn`] and some expression went unmatched.
pub fn remove_ignored_imports(
    graph: &mut dyn ImportGraph,
    ignore_imports: &[IgnoreExpression],
    unmatched_alerting: AlertLevel,
) -> Result<Vec<String>, UnresolvedIgnoreRule> {
    let mut imports_to_remove: HashSet<DirectImport> = HashSet::new();
    let mut unresolved_expressions: BTreeSet<IgnoreExpression> = BTreeSet::new();

    for import_expression in ignore_imports {
        let matched_imports = graph.find_matching_direct_imports(import_expression.as_str());
        trace!(
            "Expression '{}' matched {} direct imports",
            import_expression,
            matched_imports.len()
        );
        if matched_imports.is_empty() {
            unresolved_expressions.insert(import_expression.clone());
        } else {
            imports_to_remove.extend(matched_imports);
        }
    }

    let warnings = handle_unresolved_expressions(&unresolved_expressions, unmatched_alerting)?;

    debug!(
        "Removing {} ignored imports ({} expressions unmatched)",
        imports_to_remove.len(),
        unresolved_expressions.len()
    );
    for import_to_remove in &imports_to_remove {
        graph.remove_import(&import_to_remove.importer, &import_to_remove.imported);
    }

    Ok(warnings)
}

/// Apply the alerting policy to the unmatched expressions.
///
/// The set is ordered, so warnings come out sorted by expression string and
/// the error path picks the smallest expression deterministically.
fn handle_unresolved_expressions(
    expressions: &BTreeSet<IgnoreExpression>,
    alert_level: AlertLevel,
) -> Result<Vec<String>, UnresolvedIgnoreRule> {
    match alert_level {
        AlertLevel::None => Ok(Vec::new()),
        AlertLevel::Warn => Ok(expressions.iter().map(missing_import_message).collect()),
        AlertLevel::Error => match expressions.first() {
            Some(first_expression) => {
                Err(UnresolvedIgnoreRule(missing_import_message(first_expression)))
            }
            None => Ok(Vec::new()),
        },
    }
}

fn missing_import_message(expression: &IgnoreExpression) -> String {
    format!("No matches for ignored import {expression}.")
}
