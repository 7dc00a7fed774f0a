//! Core data model for archlint tools.
//!
//! This crate provides the shared vocabulary for architecture-contract
//! checking over import graphs:
//! - `Module`, `DirectImport` and `ImportOccurrence` value types
//! - The `ImportGraph` trait, the boundary behind which graph storage and
//!   pattern matching live
//! - `MemoryGraph`, a deterministic in-memory implementation of the trait

mod graph;
mod types;

// Re-export public API
pub use graph::{ImportGraph, MemoryGraph};
pub use types::{DirectImport, ImportOccurrence, Module};
