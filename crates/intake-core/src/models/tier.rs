//! Packaging tiers and per-tier summary values.

use serde::{Deserialize, Serialize};

/// A packaging tier for which weights are recorded independently.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Outer box packaging
    Box,
    /// Blister strip
    Strip,
    /// Single tablet/capsule
    Unit,
}

impl Tier {
    /// All tiers, in display order.
    pub const ALL: [Tier; 3] = [Tier::Box, Tier::Strip, Tier::Unit];

    /// Human-readable label for forms and messages.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Box => "Box",
            Tier::Strip => "Strip",
            Tier::Unit => "Tablet/Capsule",
        }
    }

    /// Lowercase name used as a column suffix in exports.
    pub fn column_name(&self) -> &'static str {
        match self {
            Tier::Box => "box",
            Tier::Strip => "strip",
            Tier::Unit => "unit",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Mean weight in grams per tier, 0.0 for a tier with no samples.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct TierAverages {
    /// Mean box weight (g)
    pub box_grams: f64,
    /// Mean strip weight (g)
    pub strip_grams: f64,
    /// Mean unit weight (g)
    pub unit_grams: f64,
}

impl TierAverages {
    /// Get the mean for one tier.
    pub fn get(&self, tier: Tier) -> f64 {
        match tier {
            Tier::Box => self.box_grams,
            Tier::Strip => self.strip_grams,
            Tier::Unit => self.unit_grams,
        }
    }

    /// Set the mean for one tier.
    pub fn set(&mut self, tier: Tier, grams: f64) {
        match tier {
            Tier::Box => self.box_grams = grams,
            Tier::Strip => self.strip_grams = grams,
            Tier::Unit => self.unit_grams = grams,
        }
    }
}
