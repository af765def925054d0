//! JSON export of the datasheet, with batch metadata.

use serde::{Deserialize, Serialize};

use crate::datasheet::Datasheet;
use crate::models::ConfirmedEntry;

/// Datasheet snapshot for JSON consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasheetJsonExport {
    /// Export timestamp
    pub exported_at: String,
    /// Number of rows
    pub row_count: usize,
    /// Confirmed rows in sheet order
    pub rows: Vec<ConfirmedEntry>,
}

impl DatasheetJsonExport {
    /// Snapshot the current rows.
    pub fn from_datasheet(sheet: &Datasheet) -> Self {
        Self {
            exported_at: chrono::Utc::now().to_rfc3339(),
            row_count: sheet.len(),
            rows: sheet.entries().to_vec(),
        }
    }

    /// Export to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
