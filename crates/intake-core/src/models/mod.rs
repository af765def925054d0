//! Domain models for the intake workflow.

mod entry;
mod tier;

pub use entry::*;
pub use tier::*;
