use std::sync::Arc;

use tracing::debug;
use trove_store::{ensure_artifact_exists, ensure_player_exists, ArtifactCatalog, PlayerStore};
use trove_types::{ArtifactId, PlayerId, UpdateMode};

use crate::error::LedgerError;
use crate::records::CollectionRecord;
use crate::traits::CollectionStore;

/// Outcome of a progress upsert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// The pair was written; the record reflects the post-write counter.
    Written(CollectionRecord),
    /// `Set 0` removed the pair — zero-valued records are not retained.
    Cleared,
}

/// Mutation surface for collection progress.
///
/// Sits above the two leaf stores and the ledger store, and owns the
/// operation-level rules: existence guards run before any write, and a
/// `Set 0` compacts the pair away instead of storing a zero. The stores
/// are injected, never ambient, so the whole component tests against
/// in-memory fakes.
pub struct ProgressLedger {
    players: Arc<dyn PlayerStore>,
    catalog: Arc<dyn ArtifactCatalog>,
    ledger: Arc<dyn CollectionStore>,
}

impl ProgressLedger {
    pub fn new(
        players: Arc<dyn PlayerStore>,
        catalog: Arc<dyn ArtifactCatalog>,
        ledger: Arc<dyn CollectionStore>,
    ) -> Self {
        Self {
            players,
            catalog,
            ledger,
        }
    }

    /// Record progress for one (player, artifact) pair.
    ///
    /// Both references are resolved before any write, player first, so a
    /// failed guard never leaves a half-written record.
    pub fn upsert_progress(
        &self,
        player: PlayerId,
        artifact: ArtifactId,
        value: i64,
        mode: UpdateMode,
    ) -> Result<UpsertOutcome, LedgerError> {
        ensure_player_exists(self.players.as_ref(), player)?;
        ensure_artifact_exists(self.catalog.as_ref(), artifact)?;

        if mode == UpdateMode::Set && value == 0 {
            let removed = self.ledger.remove(player, artifact)?;
            debug!(
                player = %player.short_id(),
                artifact = %artifact.short_id(),
                removed,
                "progress cleared"
            );
            return Ok(UpsertOutcome::Cleared);
        }

        let record = self.ledger.apply(player, artifact, value, mode)?;
        debug!(
            player = %player.short_id(),
            artifact = %artifact.short_id(),
            value = record.value,
            "progress written"
        );
        Ok(UpsertOutcome::Written(record))
    }

    /// Cascade hook invoked after a player record is deleted.
    ///
    /// Matches ledger records by their player reference. No existence
    /// guard: the owning record is already gone when this fires.
    pub fn on_player_deleted(&self, player: PlayerId) -> Result<usize, LedgerError> {
        let removed = self.ledger.remove_for_player(player)?;
        debug!(player = %player.short_id(), removed, "player cascade");
        Ok(removed)
    }

    /// Cascade hook invoked after a catalog entry is deleted.
    pub fn on_artifact_deleted(&self, artifact: ArtifactId) -> Result<usize, LedgerError> {
        let removed = self.ledger.remove_for_artifact(artifact)?;
        debug!(artifact = %artifact.short_id(), removed, "artifact cascade");
        Ok(removed)
    }
}
