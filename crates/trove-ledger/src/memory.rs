use std::collections::HashMap;
use std::sync::RwLock;

use trove_types::{ArtifactId, PlayerId, UpdateMode};

use crate::error::LedgerError;
use crate::records::CollectionRecord;
use crate::traits::{LedgerReader, LedgerWriter};

/// In-memory collection ledger for tests and embedding.
///
/// Records live in a map keyed by the (player, artifact) pair, which makes
/// the pair unique by construction. `apply` performs the whole
/// read-modify-write under the write lock, so concurrent increments on the
/// same pair serialize instead of losing updates.
#[derive(Default)]
pub struct InMemoryCollectionLedger {
    inner: RwLock<HashMap<(PlayerId, ArtifactId), i64>>,
}

impl InMemoryCollectionLedger {
    /// Create a new empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records across all players.
    pub fn len(&self) -> usize {
        self.inner.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the ledger holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LedgerWriter for InMemoryCollectionLedger {
    fn apply(
        &self,
        player: PlayerId,
        artifact: ArtifactId,
        value: i64,
        mode: UpdateMode,
    ) -> Result<CollectionRecord, LedgerError> {
        let mut records = self.inner.write().expect("lock poisoned");
        let counter = records.entry((player, artifact)).or_insert(0);
        match mode {
            UpdateMode::Set => *counter = value,
            UpdateMode::Increment => *counter += value,
        }
        Ok(CollectionRecord {
            player,
            artifact,
            value: *counter,
        })
    }

    fn remove(&self, player: PlayerId, artifact: ArtifactId) -> Result<bool, LedgerError> {
        let mut records = self.inner.write().expect("lock poisoned");
        Ok(records.remove(&(player, artifact)).is_some())
    }

    fn remove_for_player(&self, player: PlayerId) -> Result<usize, LedgerError> {
        let mut records = self.inner.write().expect("lock poisoned");
        let before = records.len();
        records.retain(|(owner, _), _| *owner != player);
        Ok(before - records.len())
    }

    fn remove_for_artifact(&self, artifact: ArtifactId) -> Result<usize, LedgerError> {
        let mut records = self.inner.write().expect("lock poisoned");
        let before = records.len();
        records.retain(|(_, target), _| *target != artifact);
        Ok(before - records.len())
    }
}

impl LedgerReader for InMemoryCollectionLedger {
    fn get(
        &self,
        player: PlayerId,
        artifact: ArtifactId,
    ) -> Result<Option<CollectionRecord>, LedgerError> {
        let records = self.inner.read().expect("lock poisoned");
        Ok(records.get(&(player, artifact)).map(|value| CollectionRecord {
            player,
            artifact,
            value: *value,
        }))
    }

    fn for_player(&self, player: PlayerId) -> Result<Vec<CollectionRecord>, LedgerError> {
        let records = self.inner.read().expect("lock poisoned");
        Ok(records
            .iter()
            .filter(|((owner, _), _)| *owner == player)
            .map(|((owner, artifact), value)| CollectionRecord {
                player: *owner,
                artifact: *artifact,
                value: *value,
            })
            .collect())
    }

    fn record_count(&self) -> Result<usize, LedgerError> {
        Ok(self.len())
    }
}

impl std::fmt::Debug for InMemoryCollectionLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryCollectionLedger")
            .field("record_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // -----------------------------------------------------------------------
    // Upsert primitive
    // -----------------------------------------------------------------------

    #[test]
    fn set_creates_and_replaces() {
        let ledger = InMemoryCollectionLedger::new();
        let (p, a) = (PlayerId::new(), ArtifactId::new());

        let first = ledger.apply(p, a, 3, UpdateMode::Set).unwrap();
        assert_eq!(first.value, 3);

        let second = ledger.apply(p, a, 7, UpdateMode::Set).unwrap();
        assert_eq!(second.value, 7);
        assert_eq!(ledger.get(p, a).unwrap().unwrap().value, 7);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn increment_creates_at_value_when_absent() {
        let ledger = InMemoryCollectionLedger::new();
        let (p, a) = (PlayerId::new(), ArtifactId::new());

        let record = ledger.apply(p, a, 4, UpdateMode::Increment).unwrap();
        assert_eq!(record.value, 4);
    }

    #[test]
    fn set_then_increment_accumulates() {
        let ledger = InMemoryCollectionLedger::new();
        let (p, a) = (PlayerId::new(), ArtifactId::new());

        ledger.apply(p, a, 5, UpdateMode::Set).unwrap();
        let record = ledger.apply(p, a, 2, UpdateMode::Increment).unwrap();
        assert_eq!(record.value, 7);
    }

    #[test]
    fn repeated_set_is_idempotent() {
        let ledger = InMemoryCollectionLedger::new();
        let (p, a) = (PlayerId::new(), ArtifactId::new());

        ledger.apply(p, a, 5, UpdateMode::Set).unwrap();
        ledger.apply(p, a, 5, UpdateMode::Set).unwrap();
        assert_eq!(ledger.get(p, a).unwrap().unwrap().value, 5);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn negative_values_are_not_type_enforced() {
        let ledger = InMemoryCollectionLedger::new();
        let (p, a) = (PlayerId::new(), ArtifactId::new());

        // Non-negativity is a convention owned by the callers; the store
        // faithfully holds whatever it is told.
        ledger.apply(p, a, -3, UpdateMode::Set).unwrap();
        assert_eq!(ledger.get(p, a).unwrap().unwrap().value, -3);
    }

    #[test]
    fn pairs_are_independent() {
        let ledger = InMemoryCollectionLedger::new();
        let p = PlayerId::new();
        let (a1, a2) = (ArtifactId::new(), ArtifactId::new());

        ledger.apply(p, a1, 1, UpdateMode::Set).unwrap();
        ledger.apply(p, a2, 9, UpdateMode::Set).unwrap();

        assert_eq!(ledger.get(p, a1).unwrap().unwrap().value, 1);
        assert_eq!(ledger.get(p, a2).unwrap().unwrap().value, 9);
        assert_eq!(ledger.for_player(p).unwrap().len(), 2);
    }

    // -----------------------------------------------------------------------
    // Removal and cascades
    // -----------------------------------------------------------------------

    #[test]
    fn remove_reports_presence() {
        let ledger = InMemoryCollectionLedger::new();
        let (p, a) = (PlayerId::new(), ArtifactId::new());

        ledger.apply(p, a, 1, UpdateMode::Set).unwrap();
        assert!(ledger.remove(p, a).unwrap());
        assert!(!ledger.remove(p, a).unwrap());
        assert!(ledger.get(p, a).unwrap().is_none());
    }

    #[test]
    fn player_cascade_matches_records_by_player_reference() {
        let ledger = InMemoryCollectionLedger::new();
        let (p1, p2) = (PlayerId::new(), PlayerId::new());
        let (a1, a2) = (ArtifactId::new(), ArtifactId::new());

        ledger.apply(p1, a1, 1, UpdateMode::Set).unwrap();
        ledger.apply(p1, a2, 2, UpdateMode::Set).unwrap();
        ledger.apply(p2, a1, 3, UpdateMode::Set).unwrap();

        // Every record whose player reference is p1 goes; p2's record of
        // the same artifact survives.
        assert_eq!(ledger.remove_for_player(p1).unwrap(), 2);
        assert!(ledger.for_player(p1).unwrap().is_empty());
        assert_eq!(ledger.get(p2, a1).unwrap().unwrap().value, 3);
    }

    #[test]
    fn artifact_cascade_spans_players() {
        let ledger = InMemoryCollectionLedger::new();
        let (p1, p2) = (PlayerId::new(), PlayerId::new());
        let (a1, a2) = (ArtifactId::new(), ArtifactId::new());

        ledger.apply(p1, a1, 1, UpdateMode::Set).unwrap();
        ledger.apply(p2, a1, 2, UpdateMode::Set).unwrap();
        ledger.apply(p2, a2, 3, UpdateMode::Set).unwrap();

        assert_eq!(ledger.remove_for_artifact(a1).unwrap(), 2);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get(p2, a2).unwrap().unwrap().value, 3);
    }

    #[test]
    fn cascade_on_untracked_ids_removes_nothing() {
        let ledger = InMemoryCollectionLedger::new();
        assert_eq!(ledger.remove_for_player(PlayerId::new()).unwrap(), 0);
        assert_eq!(ledger.remove_for_artifact(ArtifactId::new()).unwrap(), 0);
    }

    // -----------------------------------------------------------------------
    // Atomicity
    // -----------------------------------------------------------------------

    #[test]
    fn concurrent_increments_do_not_lose_updates() {
        use std::sync::Arc;
        use std::thread;

        let ledger = Arc::new(InMemoryCollectionLedger::new());
        let (p, a) = (PlayerId::new(), ArtifactId::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ledger = Arc::clone(&ledger);
                thread::spawn(move || {
                    for _ in 0..50 {
                        ledger.apply(p, a, 1, UpdateMode::Increment).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().expect("thread should not panic");
        }

        assert_eq!(ledger.get(p, a).unwrap().unwrap().value, 400);
    }

    proptest! {
        #[test]
        fn apply_matches_a_sequential_fold(
            ops in proptest::collection::vec((any::<bool>(), -50i64..50), 1..40),
        ) {
            let ledger = InMemoryCollectionLedger::new();
            let (p, a) = (PlayerId::new(), ArtifactId::new());

            let mut expected = 0i64;
            for (set, value) in ops {
                let mode = if set { UpdateMode::Set } else { UpdateMode::Increment };
                let record = ledger.apply(p, a, value, mode).unwrap();
                expected = match mode {
                    UpdateMode::Set => value,
                    UpdateMode::Increment => expected + value,
                };
                prop_assert_eq!(record.value, expected);
            }
            prop_assert_eq!(ledger.get(p, a).unwrap().unwrap().value, expected);
        }
    }
}
