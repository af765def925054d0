//! Datasheet store: the ordered collection of confirmed entries.
//!
//! Confirmation snapshots the open candidate atomically: either a
//! complete row is appended and the candidate resets, or nothing
//! changes and the operator can correct the input and retry.

use thiserror::Error;
use tracing::{debug, info};

use crate::models::{CandidateEntry, ConfirmedEntry, EntryPatch};

/// Datasheet errors. All are user-correctable input failures.
#[derive(Error, Debug, PartialEq)]
pub enum DatasheetError {
    #[error("Required field is empty: {0}")]
    MissingRequiredField(&'static str),

    #[error("Row index {index} out of range for {len} rows")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type DatasheetResult<T> = Result<T, DatasheetError>;

/// Ordered, mutable collection of confirmed entries for one session.
///
/// Insertion order is confirmation order; row indices are positional
/// and shift on delete/insert, so callers re-fetch after mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Datasheet {
    entries: Vec<ConfirmedEntry>,
}

impl Datasheet {
    /// Create an empty datasheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Finalize the open candidate into a confirmed row.
    ///
    /// Fails with `MissingRequiredField` if the identifier or name is
    /// empty or whitespace-only, leaving the candidate (samples
    /// included) untouched so the operator can fill in the field and
    /// retry without re-weighing. On success the row is appended, the
    /// candidate is fully reset, and the new row's index is returned.
    pub fn confirm(&mut self, candidate: &mut CandidateEntry) -> DatasheetResult<usize> {
        let identifier = candidate.identifier.trim();
        if identifier.is_empty() {
            return Err(DatasheetError::MissingRequiredField("identifier"));
        }
        let name = candidate.name.trim();
        if name.is_empty() {
            return Err(DatasheetError::MissingRequiredField("name"));
        }

        let entry = ConfirmedEntry::new(
            identifier.to_string(),
            name.to_string(),
            candidate.weights.averages(),
            candidate.bulk_quantity,
        );
        info!(
            identifier = %entry.identifier,
            computed_quantity = entry.computed_quantity,
            "entry confirmed"
        );
        self.entries.push(entry);
        candidate.reset();
        Ok(self.entries.len() - 1)
    }

    /// Confirmed rows in insertion order.
    pub fn entries(&self) -> &[ConfirmedEntry] {
        &self.entries
    }

    /// Number of confirmed rows.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no rows have been confirmed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overwrite the patched fields of one row, re-deriving its
    /// computed quantity.
    pub fn edit_entry(&mut self, index: usize, patch: &EntryPatch) -> DatasheetResult<()> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(DatasheetError::IndexOutOfRange { index, len })?;
        patch.apply(entry);
        debug!(index, "row edited");
        Ok(())
    }

    /// Remove one row, shifting later indices down by one.
    pub fn delete_entry(&mut self, index: usize) -> DatasheetResult<ConfirmedEntry> {
        if index >= self.entries.len() {
            return Err(DatasheetError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        let removed = self.entries.remove(index);
        debug!(index, identifier = %removed.identifier, "row deleted");
        Ok(removed)
    }

    /// Insert a row at a position; `index == len` appends.
    pub fn insert_entry(&mut self, index: usize, entry: ConfirmedEntry) -> DatasheetResult<()> {
        if index > self.entries.len() {
            return Err(DatasheetError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        self.entries.insert(index, entry);
        Ok(())
    }

    /// Append an already-built row (used by CSV import).
    pub(crate) fn push(&mut self, entry: ConfirmedEntry) {
        self.entries.push(entry);
    }
}
