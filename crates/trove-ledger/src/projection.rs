use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use trove_store::{ensure_player_exists, ArtifactCatalog, PlayerStore};
use trove_types::{ArtifactId, ArtifactKind, PlayerId};

use crate::error::LedgerError;
use crate::records::{CollectedItem, KindBreakdown, KindEntry, KindTotals};
use crate::traits::LedgerReader;

/// Read-only aggregation over the ledger joined with the catalog.
///
/// All three queries guard the player reference first and return an
/// empty/default shape — never an error — when the player simply has no
/// records. Reads are not isolated from concurrent writes; a report may
/// reflect a partial set of in-flight mutations.
pub struct ProgressReporter {
    players: Arc<dyn PlayerStore>,
    catalog: Arc<dyn ArtifactCatalog>,
    ledger: Arc<dyn LedgerReader>,
}

impl ProgressReporter {
    pub fn new(
        players: Arc<dyn PlayerStore>,
        catalog: Arc<dyn ArtifactCatalog>,
        ledger: Arc<dyn LedgerReader>,
    ) -> Self {
        Self {
            players,
            catalog,
            ledger,
        }
    }

    /// Flat inventory listing: the player's ledger rows as-is.
    ///
    /// A direct projection — no catalog join.
    pub fn list_collected(&self, player: PlayerId) -> Result<Vec<CollectedItem>, LedgerError> {
        ensure_player_exists(self.players.as_ref(), player)?;
        let records = self.ledger.for_player(player)?;
        Ok(records.into_iter().map(CollectedItem::from).collect())
    }

    /// Every catalog artifact grouped by kind, each flagged with whether
    /// the player holds a record for it.
    ///
    /// The flag is existence-based: a pair with a zero-valued record still
    /// counts as collected. Group and entry order carry no contract.
    pub fn breakdown_by_kind(&self, player: PlayerId) -> Result<KindBreakdown, LedgerError> {
        ensure_player_exists(self.players.as_ref(), player)?;

        let held: HashSet<ArtifactId> = self
            .ledger
            .for_player(player)?
            .into_iter()
            .map(|record| record.artifact)
            .collect();

        let mut groups: BTreeMap<ArtifactKind, Vec<KindEntry>> = BTreeMap::new();
        for definition in self.catalog.all()? {
            groups.entry(definition.kind).or_default().push(KindEntry {
                artifact: definition.id,
                collected: held.contains(&definition.id),
            });
        }
        Ok(KindBreakdown { groups })
    }

    /// Per-kind quantity totals for the player's rows.
    ///
    /// Each row joins to its catalog definition for the kind; rows whose
    /// artifact no longer resolves are dropped.
    pub fn totals_by_kind(&self, player: PlayerId) -> Result<KindTotals, LedgerError> {
        ensure_player_exists(self.players.as_ref(), player)?;

        let mut totals: BTreeMap<ArtifactKind, i64> = BTreeMap::new();
        for record in self.ledger.for_player(player)? {
            if let Some(definition) = self.catalog.get(record.artifact)? {
                *totals.entry(definition.kind).or_insert(0) += record.value;
            }
        }
        Ok(KindTotals { totals })
    }
}
