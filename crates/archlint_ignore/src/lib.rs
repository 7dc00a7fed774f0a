//! Import-edge suppression for architecture-contract checks.
//!
//! Contracts decide which imports are allowed; this crate decides which
//! imports the contracts should not even see. Two mechanisms feed that
//! decision:
//! - pattern-based ignore expressions from configuration, resolved against
//!   the graph and removed from it before the contract runs
//! - inline markers on individual import lines, collected into a set used
//!   to filter per-line detail out of violation output
//!
//! # Examples
//!
//! ```
//! use archlint_core::MemoryGraph;
//! use archlint_ignore::{AlertLevel, IgnoreExpression, remove_ignored_imports};
//!
//! # fn main() -> Result<(), archlint_ignore::UnresolvedIgnoreRule> {
//! let mut graph = MemoryGraph::new();
//! graph.add_import("mypackage.api", "mypackage.db");
//!
//! let ignore = vec![IgnoreExpression::new("mypackage.api -> mypackage.db")];
//! let warnings = remove_ignored_imports(&mut graph, &ignore, AlertLevel::Warn)?;
//!
//! assert!(warnings.is_empty());
//! assert!(graph.direct_imports().is_empty());
//! # Ok(())
//! # }
//! ```

mod config;
mod resolver;
mod scanner;

// Re-export public API
pub use config::{AlertLevel, IgnoreExpression};
pub use resolver::{UnresolvedIgnoreRule, remove_ignored_imports};
pub use scanner::{IgnoredLine, filter_ignored_lines, inline_ignored_lines};
