//! Candidate and confirmed entry models.

use serde::{Deserialize, Serialize};

use crate::accumulator::WeightAccumulator;
use super::tier::{Tier, TierAverages};

/// The in-progress, unconfirmed entry (mutable staging area).
///
/// Exactly one candidate exists per session; it is fully reset on
/// confirm or clear, never partially.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CandidateEntry {
    /// Scanned barcode or typed identifier; may be empty while editing
    pub identifier: String,
    /// Drug name; may be empty while editing
    pub name: String,
    /// Directly counted units for bulky/easy-to-count items
    pub bulk_quantity: u32,
    /// Raw weight readings per tier
    pub weights: WeightAccumulator,
}

impl CandidateEntry {
    /// Create an empty candidate.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if no field or sample has been entered.
    pub fn is_empty(&self) -> bool {
        self.identifier.is_empty()
            && self.name.is_empty()
            && self.bulk_quantity == 0
            && self.weights.is_empty()
    }

    /// Return every field to the empty state. Idempotent.
    pub fn reset(&mut self) {
        self.identifier.clear();
        self.name.clear();
        self.bulk_quantity = 0;
        self.weights.reset();
    }
}

/// An immutable finalized row in the datasheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfirmedEntry {
    /// Barcode or typed identifier
    pub identifier: String,
    /// Drug name
    pub name: String,
    /// Mean weight per tier at confirm time (0.0 for unweighed tiers)
    pub averages: TierAverages,
    /// Directly counted units
    pub bulk_quantity: u32,
    /// Bulk count plus the unit count implied by the box/unit weight ratio
    pub computed_quantity: u64,
    /// Confirmation timestamp (RFC 3339); not part of the CSV schema
    pub confirmed_at: String,
}

impl ConfirmedEntry {
    /// Build an entry, deriving the computed quantity.
    pub fn new(
        identifier: String,
        name: String,
        averages: TierAverages,
        bulk_quantity: u32,
    ) -> Self {
        Self {
            identifier,
            name,
            averages,
            bulk_quantity,
            computed_quantity: derive_quantity(bulk_quantity, &averages),
            confirmed_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Re-derive `computed_quantity` from the current fields.
    pub fn recompute_quantity(&mut self) {
        self.computed_quantity = derive_quantity(self.bulk_quantity, &self.averages);
    }
}

/// Derive the computed quantity from bulk count and tier averages.
///
/// When the unit average is zero (tier never weighed) the box/unit
/// ratio is undefined and the result degrades to the bulk count alone.
pub fn derive_quantity(bulk_quantity: u32, averages: &TierAverages) -> u64 {
    let unit = averages.get(Tier::Unit);
    if unit > 0.0 {
        u64::from(bulk_quantity) + (averages.get(Tier::Box) / unit).floor() as u64
    } else {
        u64::from(bulk_quantity)
    }
}

/// Field overrides for correcting a confirmed row in place.
///
/// `computed_quantity` is always re-derived after application, never
/// patched directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EntryPatch {
    pub identifier: Option<String>,
    pub name: Option<String>,
    pub average_weight_box: Option<f64>,
    pub average_weight_strip: Option<f64>,
    pub average_weight_unit: Option<f64>,
    pub bulk_quantity: Option<u32>,
}

impl EntryPatch {
    /// Overwrite the named fields of `entry` and re-derive its quantity.
    pub fn apply(&self, entry: &mut ConfirmedEntry) {
        if let Some(identifier) = &self.identifier {
            entry.identifier = identifier.clone();
        }
        if let Some(name) = &self.name {
            entry.name = name.clone();
        }
        if let Some(grams) = self.average_weight_box {
            entry.averages.set(Tier::Box, grams);
        }
        if let Some(grams) = self.average_weight_strip {
            entry.averages.set(Tier::Strip, grams);
        }
        if let Some(grams) = self.average_weight_unit {
            entry.averages.set(Tier::Unit, grams);
        }
        if let Some(quantity) = self.bulk_quantity {
            entry.bulk_quantity = quantity;
        }
        entry.recompute_quantity();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn averages(box_grams: f64, strip_grams: f64, unit_grams: f64) -> TierAverages {
        TierAverages {
            box_grams,
            strip_grams,
            unit_grams,
        }
    }

    #[test]
    fn test_candidate_reset() {
        let mut candidate = CandidateEntry::new();
        candidate.identifier = "ABC".into();
        candidate.name = "Paracetamol".into();
        candidate.bulk_quantity = 5;
        candidate.weights.add_sample(Tier::Box, 10.0).unwrap();

        candidate.reset();
        assert!(candidate.is_empty());

        // Reset on empty is a no-op
        candidate.reset();
        assert!(candidate.is_empty());
    }

    #[test]
    fn test_quantity_with_unit_average() {
        let entry = ConfirmedEntry::new("ABC".into(), "Paracetamol".into(), averages(11.0, 0.0, 2.0), 5);
        assert_eq!(entry.computed_quantity, 10); // 5 + floor(11.0 / 2.0)
    }

    #[test]
    fn test_quantity_degrades_to_bulk_on_zero_unit() {
        let entry = ConfirmedEntry::new("ABC".into(), "Paracetamol".into(), averages(11.0, 0.0, 0.0), 5);
        assert_eq!(entry.computed_quantity, 5);
    }

    #[test]
    fn test_quantity_all_zero() {
        assert_eq!(derive_quantity(0, &TierAverages::default()), 0);
    }

    #[test]
    fn test_patch_recomputes_quantity() {
        let mut entry =
            ConfirmedEntry::new("ABC".into(), "Paracetamol".into(), averages(11.0, 0.0, 2.0), 5);

        let patch = EntryPatch {
            average_weight_unit: Some(1.0),
            bulk_quantity: Some(2),
            ..Default::default()
        };
        patch.apply(&mut entry);

        assert_eq!(entry.bulk_quantity, 2);
        assert_eq!(entry.computed_quantity, 13); // 2 + floor(11.0 / 1.0)
    }

    #[test]
    fn test_empty_patch_is_identity_on_fields() {
        let mut entry =
            ConfirmedEntry::new("ABC".into(), "Paracetamol".into(), averages(11.0, 3.0, 2.0), 5);
        let before = entry.clone();
        EntryPatch::default().apply(&mut entry);
        assert_eq!(entry, before);
    }
}
