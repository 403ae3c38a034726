//! Leaf repositories for Trove.
//!
//! This crate owns the two entity stores everything else references:
//! - [`PlayerStore`] — one record per player, unique e-mail and nickname
//! - [`ArtifactCatalog`] — one record per artifact definition, unique name
//!
//! Both are trait boundaries with [`InMemoryPlayerStore`] /
//! [`InMemoryArtifactCatalog`] implementations for tests and embedding.
//! The [`guard`] module provides the existence checks the collection
//! ledger and the reporters run before touching either store.

pub mod error;
pub mod guard;
pub mod memory;
pub mod traits;

pub use error::{EntityKind, StoreError, StoreResult};
pub use guard::{ensure_artifact_exists, ensure_player_exists};
pub use memory::{InMemoryArtifactCatalog, InMemoryPlayerStore};
pub use traits::{ArtifactCatalog, PlayerStore};
