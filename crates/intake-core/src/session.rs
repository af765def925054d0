//! Session objects binding one candidate entry to one datasheet.
//!
//! A surrounding service hosts one [`IntakeSession`] per operator
//! session; the session assumes exclusive, non-reentrant access. The
//! [`SessionRegistry`] keeps concurrent sessions isolated by key
//! instead of sharing process-wide form state.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::accumulator::AccumulatorResult;
use crate::datasheet::{Datasheet, DatasheetResult};
use crate::export::{self, DatasheetJsonExport, ExportResult};
use crate::models::{CandidateEntry, ConfirmedEntry, EntryPatch, Tier};

/// One operator's intake state: the open candidate and the datasheet.
#[derive(Debug, Clone, Default)]
pub struct IntakeSession {
    candidate: CandidateEntry,
    datasheet: Datasheet,
}

impl IntakeSession {
    /// Create a session with an empty candidate and an empty datasheet.
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------
    // Candidate editing
    // -------------------------------------------------------------

    /// Record a weight reading for one tier of the open candidate.
    pub fn add_sample(&mut self, tier: Tier, grams: f64) -> AccumulatorResult<usize> {
        self.candidate.weights.add_sample(tier, grams)
    }

    /// Set the scanned/typed identifier.
    pub fn set_identifier(&mut self, identifier: impl Into<String>) {
        self.candidate.identifier = identifier.into();
    }

    /// Set the drug name (resolved by the caller's lookup collaborator).
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.candidate.name = name.into();
    }

    /// Set the directly counted unit quantity.
    pub fn set_bulk_quantity(&mut self, quantity: u32) {
        self.candidate.bulk_quantity = quantity;
    }

    /// The open candidate, for display.
    pub fn candidate(&self) -> &CandidateEntry {
        &self.candidate
    }

    // -------------------------------------------------------------
    // Lifecycle transitions
    // -------------------------------------------------------------

    /// Confirm the open candidate into the datasheet.
    ///
    /// On success the candidate is reset and the new row index is
    /// returned; on failure nothing changes.
    pub fn confirm(&mut self) -> DatasheetResult<usize> {
        self.datasheet.confirm(&mut self.candidate)
    }

    /// Discard the open candidate without touching the datasheet.
    /// Always succeeds; clearing an empty candidate is a no-op.
    pub fn clear(&mut self) {
        self.candidate.reset();
        debug!("candidate cleared");
    }

    // -------------------------------------------------------------
    // Datasheet review
    // -------------------------------------------------------------

    /// Confirmed rows in insertion order.
    pub fn entries(&self) -> &[ConfirmedEntry] {
        self.datasheet.entries()
    }

    /// Correct fields of a confirmed row in place.
    pub fn edit_entry(&mut self, index: usize, patch: &EntryPatch) -> DatasheetResult<()> {
        self.datasheet.edit_entry(index, patch)
    }

    /// Remove a confirmed row; later indices shift down by one.
    pub fn delete_entry(&mut self, index: usize) -> DatasheetResult<ConfirmedEntry> {
        self.datasheet.delete_entry(index)
    }

    /// Insert a row at a position (`index == len` appends).
    pub fn insert_entry(&mut self, index: usize, entry: ConfirmedEntry) -> DatasheetResult<()> {
        self.datasheet.insert_entry(index, entry)
    }

    /// The underlying datasheet.
    pub fn datasheet(&self) -> &Datasheet {
        &self.datasheet
    }

    // -------------------------------------------------------------
    // Export
    // -------------------------------------------------------------

    /// Serialize the datasheet as a CSV document.
    pub fn export_csv(&self) -> ExportResult<Vec<u8>> {
        export::write_csv(&self.datasheet)
    }

    /// Serialize the datasheet as pretty-printed JSON with metadata.
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        DatasheetJsonExport::from_datasheet(&self.datasheet).to_json()
    }
}

/// Sessions keyed by opaque UUID, one per operator.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<String, IntakeSession>,
}

impl SessionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a fresh session and return its key.
    pub fn open(&mut self) -> String {
        let key = uuid::Uuid::new_v4().to_string();
        self.sessions.insert(key.clone(), IntakeSession::new());
        info!(session = %key, "session opened");
        key
    }

    /// Borrow a session for reading.
    pub fn get(&self, key: &str) -> Option<&IntakeSession> {
        self.sessions.get(key)
    }

    /// Borrow a session for mutation.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut IntakeSession> {
        self.sessions.get_mut(key)
    }

    /// Close a session, returning its final state if it existed.
    pub fn close(&mut self, key: &str) -> Option<IntakeSession> {
        let session = self.sessions.remove(key);
        if session.is_some() {
            info!(session = %key, "session closed");
        }
        session
    }

    /// Number of open sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// True if no sessions are open.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_resets_candidate_only() {
        let mut session = IntakeSession::new();
        session.set_identifier("ABC");
        session.set_name("Paracetamol");
        session.add_sample(Tier::Box, 11.0).unwrap();
        session.confirm().unwrap();

        session.set_identifier("DEF");
        session.add_sample(Tier::Unit, 2.0).unwrap();
        session.clear();

        assert!(session.candidate().is_empty());
        assert_eq!(session.entries().len(), 1);
    }

    #[test]
    fn test_registry_isolates_sessions() {
        let mut registry = SessionRegistry::new();
        let a = registry.open();
        let b = registry.open();
        assert_ne!(a, b);

        {
            let session = registry.get_mut(&a).unwrap();
            session.set_identifier("ABC");
            session.set_name("Paracetamol");
            session.confirm().unwrap();
        }

        assert_eq!(registry.get(&a).unwrap().entries().len(), 1);
        assert_eq!(registry.get(&b).unwrap().entries().len(), 0);
    }

    #[test]
    fn test_registry_close() {
        let mut registry = SessionRegistry::new();
        let key = registry.open();
        assert!(registry.close(&key).is_some());
        assert!(registry.get(&key).is_none());
        assert!(registry.close(&key).is_none());
        assert!(registry.is_empty());
    }
}
