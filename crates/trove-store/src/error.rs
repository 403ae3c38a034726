use std::fmt;

use thiserror::Error;
use trove_types::{ArtifactId, PlayerId, TypeError};

/// The entity classes store references resolve against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Artifact,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Player => "player",
            Self::Artifact => "artifact",
        })
    }
}

/// Errors from repository operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The referenced entity does not exist.
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: uuid::Uuid },

    /// A uniqueness constraint was violated on write.
    #[error("duplicate key on {field}: {value}")]
    DuplicateKey {
        field: &'static str,
        value: String,
    },

    /// A field value failed validation on write.
    #[error(transparent)]
    InvalidField(#[from] TypeError),
}

impl StoreError {
    pub fn player_not_found(id: PlayerId) -> Self {
        Self::NotFound {
            kind: EntityKind::Player,
            id: *id.as_uuid(),
        }
    }

    pub fn artifact_not_found(id: ArtifactId) -> Self {
        Self::NotFound {
            kind: EntityKind::Artifact,
            id: *id.as_uuid(),
        }
    }

    pub fn duplicate(field: &'static str, value: impl Into<String>) -> Self {
        Self::DuplicateKey {
            field,
            value: value.into(),
        }
    }

    /// Returns `true` for either flavor of missing reference.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result alias for repository operations.
pub type StoreResult<T> = Result<T, StoreError>;
