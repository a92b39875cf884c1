//! carve-core
//!
//! Core library for splitting a monolithic source file into function units and
//! reconciling them against a planned module layout.
//!
//! This crate defines the data model, the declaration extractor, the category
//! table (the planned layout), the reconciler that produces the
//! found/missing/uncategorized report, and the configuration types used by
//! frontends.
//!
//! All substantive logic lives here so it is fully testable and reusable from
//! multiple frontends. Nothing in this crate reads source files or prints
//! reports; that belongs to the caller.

pub mod config;
pub mod extract;
pub mod model;
pub mod reconcile;
pub mod table;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
