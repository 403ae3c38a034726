use trove_types::{
    ArtifactDefinition, ArtifactId, AwardUpdate, Player, PlayerId, ProfileUpdate, UpdateMode,
};

use crate::error::StoreResult;

/// Registry of player records.
///
/// All implementations must satisfy these invariants:
/// - `email` and `nickname` are each globally unique. A violating write
///   fails with `DuplicateKey` and leaves the store untouched.
/// - Reads of absent players return `Ok(None)`, never an error.
/// - Deletion reports whether a record existed. It does not cascade into
///   other stores; the collection ledger exposes its own cascade hook.
pub trait PlayerStore: Send + Sync {
    /// Insert a new player record.
    fn insert(&self, player: &Player) -> StoreResult<()>;

    /// Point lookup by id.
    fn get(&self, id: PlayerId) -> StoreResult<Option<Player>>;

    /// Check whether a player exists.
    fn contains(&self, id: PlayerId) -> StoreResult<bool>;

    /// All player records.
    fn list(&self) -> StoreResult<Vec<Player>>;

    /// Apply a partial profile update.
    ///
    /// Fails with `NotFound` for an unknown id and `DuplicateKey` if a
    /// unique field would collide with another player's.
    fn update_profile(&self, id: PlayerId, update: &ProfileUpdate) -> StoreResult<()>;

    /// Set or increment award tallies. Fields absent from `update` are
    /// left untouched; `mode` applies to every field present.
    fn update_awards(
        &self,
        id: PlayerId,
        update: &AwardUpdate,
        mode: UpdateMode,
    ) -> StoreResult<()>;

    /// Delete a player record. Returns `true` if the player existed.
    fn delete(&self, id: PlayerId) -> StoreResult<bool>;
}

/// The artifact catalog.
///
/// Definitions are immutable once created: the catalog supports insertion
/// and deletion only. `name` is globally unique across all kinds.
pub trait ArtifactCatalog: Send + Sync {
    /// Insert a new definition.
    fn insert(&self, artifact: &ArtifactDefinition) -> StoreResult<()>;

    /// Point lookup by id.
    fn get(&self, id: ArtifactId) -> StoreResult<Option<ArtifactDefinition>>;

    /// Check whether a definition exists.
    fn contains(&self, id: ArtifactId) -> StoreResult<bool>;

    /// Every definition in the catalog.
    fn all(&self) -> StoreResult<Vec<ArtifactDefinition>>;

    /// Delete a definition. Returns `true` if it existed.
    fn delete(&self, id: ArtifactId) -> StoreResult<bool>;
}
