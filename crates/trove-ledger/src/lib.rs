//! Collection-progress ledger for Trove.
//!
//! This crate is the heart of Trove. It provides:
//! - [`CollectionRecord`] — the per-(player, artifact) counter, the only
//!   many-to-many relation in the system
//! - [`LedgerWriter`] / [`LedgerReader`] trait boundaries, including the
//!   atomic set-or-increment upsert primitive
//! - [`InMemoryCollectionLedger`] implementation for tests and embedding
//! - [`ProgressLedger`] — existence-guarded mutations, the zero-set
//!   compaction rule, and the cascade-delete hooks
//! - [`ProgressReporter`] — the flat inventory listing and the two
//!   per-kind report shapes (existence-based breakdown, quantity totals)

pub mod error;
pub mod memory;
pub mod projection;
pub mod records;
pub mod service;
pub mod traits;

pub use error::LedgerError;
pub use memory::InMemoryCollectionLedger;
pub use projection::ProgressReporter;
pub use records::{CollectedItem, CollectionRecord, KindBreakdown, KindEntry, KindTotals};
pub use service::{ProgressLedger, UpsertOutcome};
pub use traits::{CollectionStore, LedgerReader, LedgerWriter};
