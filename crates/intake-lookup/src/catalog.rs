//! In-memory drug catalog with fuzzy name suggestions.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use super::DrugLookup;

/// Minimum similarity for a suggestion to be offered at all.
const MIN_SCORE: f64 = 0.75;

/// Default number of suggestions returned.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// A registered drug product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogDrug {
    /// Barcode or product identifier
    pub identifier: String,
    /// Primary drug name
    pub name: String,
    /// Alternative names/spellings for fuzzy matching
    pub aliases: Vec<String>,
}

impl CatalogDrug {
    /// Create a drug with no aliases.
    pub fn new(identifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            aliases: Vec::new(),
        }
    }

    /// Add an alias, builder-style.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }
}

/// A scored name suggestion for a query that matched no identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    /// Identifier of the suggested drug
    pub identifier: String,
    /// Primary name of the suggested drug
    pub name: String,
    /// Similarity in [0, 1], best match over name and aliases
    pub score: f64,
}

/// In-memory catalog keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    drugs: HashMap<String, CatalogDrug>,
}

impl StaticCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a drug under its identifier.
    pub fn insert(&mut self, drug: CatalogDrug) {
        self.drugs.insert(drug.identifier.clone(), drug);
    }

    /// Number of registered drugs.
    pub fn len(&self) -> usize {
        self.drugs.len()
    }

    /// True if no drugs are registered.
    pub fn is_empty(&self) -> bool {
        self.drugs.is_empty()
    }

    /// Rank registered drugs by name similarity to a free-text query.
    ///
    /// Scores each drug by its best match over primary name and
    /// aliases, drops everything under the similarity floor, and
    /// returns at most `limit` results sorted best-first.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<Suggestion> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<Suggestion> = self
            .drugs
            .values()
            .map(|drug| Suggestion {
                identifier: drug.identifier.clone(),
                name: drug.name.clone(),
                score: score_drug(drug, &query),
            })
            .filter(|s| s.score >= MIN_SCORE)
            .collect();

        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(limit);
        scored
    }
}

impl DrugLookup for StaticCatalog {
    fn name_for(&self, identifier: &str) -> Option<String> {
        self.drugs.get(identifier.trim()).map(|d| d.name.clone())
    }
}

/// Best similarity over primary name and aliases.
fn score_drug(drug: &CatalogDrug, query_lower: &str) -> f64 {
    std::iter::once(&drug.name)
        .chain(drug.aliases.iter())
        .map(|candidate| jaro_winkler(&candidate.to_lowercase(), query_lower))
        .fold(0.0, f64::max)
}
