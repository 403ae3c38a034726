//! Cross-cutting existence checks.
//!
//! Every ledger mutation and every report query that targets a specific
//! player or artifact resolves the reference through these helpers first,
//! so a dangling id always surfaces as the same typed `NotFound` — and
//! always before any write happens.

use trove_types::{ArtifactId, PlayerId};

use crate::error::{StoreError, StoreResult};
use crate::traits::{ArtifactCatalog, PlayerStore};

/// Fail with `NotFound` unless `id` resolves against the player store.
pub fn ensure_player_exists(players: &dyn PlayerStore, id: PlayerId) -> StoreResult<()> {
    if players.contains(id)? {
        Ok(())
    } else {
        Err(StoreError::player_not_found(id))
    }
}

/// Fail with `NotFound` unless `id` resolves against the catalog.
pub fn ensure_artifact_exists(catalog: &dyn ArtifactCatalog, id: ArtifactId) -> StoreResult<()> {
    if catalog.contains(id)? {
        Ok(())
    } else {
        Err(StoreError::artifact_not_found(id))
    }
}
