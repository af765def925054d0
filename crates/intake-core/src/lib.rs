//! Intake Core Library
//!
//! Entry-aggregation and datasheet state model for manual drug
//! inventory intake: an operator scans an identifier, records weight
//! readings per packaging tier, and confirms entries into a running
//! datasheet that can be reviewed, corrected, and exported.
//!
//! # Architecture
//!
//! ```text
//! Scan/type identifier + name          weigh readings (per tier)
//!              │                                │
//!              ▼                                ▼
//!       ┌─────────────────────────────────────────────┐
//!       │              CandidateEntry                 │
//!       │  identifier / name / bulk / WeightAccumulator│
//!       └──────────────────────┬──────────────────────┘
//!                    confirm   │   clear (discard)
//!                              ▼
//!       ┌─────────────────────────────────────────────┐
//!       │                 Datasheet                   │
//!       │   ordered ConfirmedEntry rows               │
//!       │   edit / delete / insert by index           │
//!       └──────────────────────┬──────────────────────┘
//!                              │
//!                  ┌───────────┴───────────┐
//!                  ▼                       ▼
//!              CSV export             JSON export
//!            (import for              (batch with
//!             round-trip)              metadata)
//! ```
//!
//! # State rules
//!
//! Exactly one candidate is open per session at any instant. A
//! confirmed row is built atomically from a complete snapshot of the
//! candidate; on any validation failure nothing changes, so the
//! operator corrects the input and retries without re-weighing.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Tier, CandidateEntry, ConfirmedEntry, EntryPatch)
//! - [`accumulator`]: Per-tier weight sample collection
//! - [`datasheet`]: Confirmed-entry collection and lifecycle transitions
//! - [`export`]: CSV and JSON serialization
//! - [`session`]: Per-operator session object and session registry

pub mod accumulator;
pub mod datasheet;
pub mod export;
pub mod models;
pub mod session;

// Re-export commonly used types
pub use accumulator::{AccumulatorError, AccumulatorResult, WeightAccumulator};
pub use datasheet::{Datasheet, DatasheetError, DatasheetResult};
pub use export::{read_csv, write_csv, DatasheetJsonExport, ExportError, ExportResult};
pub use models::{CandidateEntry, ConfirmedEntry, EntryPatch, Tier, TierAverages};
pub use session::{IntakeSession, SessionRegistry};
