use thiserror::Error;
use trove_store::StoreError;

/// Errors produced by ledger mutations and report queries.
///
/// Repository failures pass through verbatim, so callers see the same
/// `NotFound` / `DuplicateKey` the stores raised.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl LedgerError {
    /// Returns `true` if this is a missing player/artifact reference.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Store(e) => e.is_not_found(),
        }
    }
}
