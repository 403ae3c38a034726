use trove_types::{ArtifactId, PlayerId, UpdateMode};

use crate::error::LedgerError;
use crate::records::CollectionRecord;

/// Write boundary for the collection ledger.
///
/// `apply` is the store's atomic primitive: find the (player, artifact)
/// pair and set or increment its counter, creating the record if absent.
/// Two concurrent `apply` calls on the same pair must not interleave into
/// a lost update — the pair is the unit of mutual exclusion.
pub trait LedgerWriter: Send + Sync {
    /// Atomically set or increment the counter for a pair, creating the
    /// record if absent. Returns the post-write record.
    fn apply(
        &self,
        player: PlayerId,
        artifact: ArtifactId,
        value: i64,
        mode: UpdateMode,
    ) -> Result<CollectionRecord, LedgerError>;

    /// Remove the record for a pair. Returns `true` if one existed.
    fn remove(&self, player: PlayerId, artifact: ArtifactId) -> Result<bool, LedgerError>;

    /// Remove every record referencing `player`. Returns the removed count.
    fn remove_for_player(&self, player: PlayerId) -> Result<usize, LedgerError>;

    /// Remove every record referencing `artifact`. Returns the removed count.
    fn remove_for_artifact(&self, artifact: ArtifactId) -> Result<usize, LedgerError>;
}

/// Read boundary for the collection ledger.
pub trait LedgerReader: Send + Sync {
    /// Point lookup for one pair.
    fn get(
        &self,
        player: PlayerId,
        artifact: ArtifactId,
    ) -> Result<Option<CollectionRecord>, LedgerError>;

    /// Every record for one player.
    fn for_player(&self, player: PlayerId) -> Result<Vec<CollectionRecord>, LedgerError>;

    /// Total number of records across all players.
    fn record_count(&self) -> Result<usize, LedgerError>;
}

/// Combined boundary for components that both mutate and read the ledger.
pub trait CollectionStore: LedgerReader + LedgerWriter {}

impl<T: LedgerReader + LedgerWriter> CollectionStore for T {}
