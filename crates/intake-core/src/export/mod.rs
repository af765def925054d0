//! Export and import of the datasheet.

mod csv_io;
mod json;

pub use csv_io::*;
pub use json::*;

use thiserror::Error;

/// Export/import errors.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unexpected CSV header: expected {expected:?}, got {got:?}")]
    InvalidHeader { expected: Vec<String>, got: Vec<String> },

    #[error("Invalid value {value:?} in column {column}: {reason}")]
    InvalidField {
        column: &'static str,
        value: String,
        reason: String,
    },
}

pub type ExportResult<T> = Result<T, ExportError>;
