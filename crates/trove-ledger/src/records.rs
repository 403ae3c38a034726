use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use trove_types::{ArtifactId, ArtifactKind, PlayerId};

/// "Player P holds N units of artifact A."
///
/// The (player, artifact) pair is the record's identity; at most one
/// record exists per pair. `value` is non-negative by convention only —
/// the type does not enforce it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionRecord {
    pub player: PlayerId,
    pub artifact: ArtifactId,
    pub value: i64,
}

/// Flat-listing row: one collected artifact with its quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectedItem {
    pub artifact: ArtifactId,
    pub value: i64,
}

impl From<CollectionRecord> for CollectedItem {
    fn from(record: CollectionRecord) -> Self {
        Self {
            artifact: record.artifact,
            value: record.value,
        }
    }
}

/// Grouped-report row: one catalog artifact, flagged per player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindEntry {
    pub artifact: ArtifactId,
    /// Existence-based: a ledger record for the pair exists, whatever its
    /// quantity. The totals report is the quantity-based view.
    pub collected: bool,
}

/// Every catalog artifact grouped by kind, flagged for one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindBreakdown {
    pub groups: BTreeMap<ArtifactKind, Vec<KindEntry>>,
}

impl KindBreakdown {
    /// Entries for one kind; empty if the catalog holds none of it.
    pub fn entries(&self, kind: ArtifactKind) -> &[KindEntry] {
        self.groups.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of artifacts flagged as collected, across all kinds.
    pub fn collected_count(&self) -> usize {
        self.groups
            .values()
            .flatten()
            .filter(|e| e.collected)
            .count()
    }
}

/// Per-kind quantity totals for one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindTotals {
    pub totals: BTreeMap<ArtifactKind, i64>,
}

impl KindTotals {
    /// Total for one kind; zero if the player holds none of it.
    pub fn total(&self, kind: ArtifactKind) -> i64 {
        self.totals.get(&kind).copied().unwrap_or(0)
    }

    /// Sum across all kinds.
    pub fn grand_total(&self) -> i64 {
        self.totals.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collected_item_from_record() {
        let record = CollectionRecord {
            player: PlayerId::new(),
            artifact: ArtifactId::new(),
            value: 7,
        };
        let item = CollectedItem::from(record);
        assert_eq!(item.artifact, record.artifact);
        assert_eq!(item.value, 7);
    }

    #[test]
    fn breakdown_entries_for_absent_kind_are_empty() {
        let breakdown = KindBreakdown::default();
        assert!(breakdown.entries(ArtifactKind::Olla).is_empty());
        assert_eq!(breakdown.collected_count(), 0);
    }

    #[test]
    fn totals_default_to_zero() {
        let totals = KindTotals::default();
        assert!(totals.is_empty());
        assert_eq!(totals.total(ArtifactKind::Botella), 0);
        assert_eq!(totals.grand_total(), 0);
    }

    #[test]
    fn totals_serialize_with_kind_keys() {
        let mut totals = KindTotals::default();
        totals.totals.insert(ArtifactKind::Botella, 5);
        let json = serde_json::to_string(&totals).unwrap();
        assert!(json.contains("\"botella\":5"), "{json}");
    }
}
