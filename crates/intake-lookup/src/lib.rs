//! Drug lookup collaborator.
//!
//! Resolves a scanned/typed identifier to a drug name before the intake
//! core is invoked; the core itself never calls this crate. Besides
//! exact identifier lookup, the in-memory catalog offers fuzzy name
//! suggestions for near-miss scans and typos.

mod catalog;

pub use catalog::*;

/// Identifier-to-name resolution.
///
/// `None` means "not found"; the operator types the name by hand.
pub trait DrugLookup {
    /// Resolve an identifier to the registered drug name.
    fn name_for(&self, identifier: &str) -> Option<String>;
}
