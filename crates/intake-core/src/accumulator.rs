//! Measurement accumulator: raw weight samples per packaging tier.
//!
//! Samples accumulate while one candidate entry is open and are reduced
//! to per-tier means at confirm time. Individual readings are kept until
//! reset so the operator can review what was weighed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Tier, TierAverages};

/// Accumulator errors.
#[derive(Error, Debug, PartialEq)]
pub enum AccumulatorError {
    #[error("Invalid sample weight {0}g: weight must be greater than 0")]
    InvalidSample(f64),
}

pub type AccumulatorResult<T> = Result<T, AccumulatorError>;

/// Per-tier weight sample storage for the entry currently being built.
///
/// Tiers are mutually independent; adding to one never touches another.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WeightAccumulator {
    box_samples: Vec<f64>,
    strip_samples: Vec<f64>,
    unit_samples: Vec<f64>,
}

impl WeightAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw reading (grams) to one tier.
    ///
    /// Rejects non-positive and non-finite values without storing them.
    /// Returns the updated sample count for that tier.
    pub fn add_sample(&mut self, tier: Tier, grams: f64) -> AccumulatorResult<usize> {
        if !grams.is_finite() || grams <= 0.0 {
            return Err(AccumulatorError::InvalidSample(grams));
        }
        let samples = self.samples_mut(tier);
        samples.push(grams);
        Ok(samples.len())
    }

    /// Recorded readings for one tier, in insertion order.
    pub fn samples(&self, tier: Tier) -> &[f64] {
        match tier {
            Tier::Box => &self.box_samples,
            Tier::Strip => &self.strip_samples,
            Tier::Unit => &self.unit_samples,
        }
    }

    /// Number of readings recorded for one tier.
    pub fn count(&self, tier: Tier) -> usize {
        self.samples(tier).len()
    }

    /// Arithmetic mean for one tier, or 0.0 if the tier has no samples.
    ///
    /// The zero fallback is the documented policy for unweighed tiers,
    /// not an error condition.
    pub fn average_of(&self, tier: Tier) -> f64 {
        let samples = self.samples(tier);
        if samples.is_empty() {
            return 0.0;
        }
        samples.iter().sum::<f64>() / samples.len() as f64
    }

    /// Snapshot of all three tier means.
    pub fn averages(&self) -> TierAverages {
        TierAverages {
            box_grams: self.average_of(Tier::Box),
            strip_grams: self.average_of(Tier::Strip),
            unit_grams: self.average_of(Tier::Unit),
        }
    }

    /// True if no tier has any samples.
    pub fn is_empty(&self) -> bool {
        Tier::ALL.iter().all(|t| self.samples(*t).is_empty())
    }

    /// Clear all tiers. Idempotent.
    pub fn reset(&mut self) {
        self.box_samples.clear();
        self.strip_samples.clear();
        self.unit_samples.clear();
    }

    fn samples_mut(&mut self, tier: Tier) -> &mut Vec<f64> {
        match tier {
            Tier::Box => &mut self.box_samples,
            Tier::Strip => &mut self.strip_samples,
            Tier::Unit => &mut self.unit_samples,
        }
    }
}
