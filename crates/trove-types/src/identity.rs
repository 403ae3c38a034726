use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Unique identifier for a player (UUID v7 for time-ordering).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(uuid::Uuid);

impl PlayerId {
    /// Generate a new time-ordered player ID (UUID v7).
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7())
    }

    /// Create from an existing UUID.
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }

    /// Short representation (first 8 characters of the UUID).
    pub fn short_id(&self) -> String {
        self.0.to_string()[..8].to_string()
    }

    /// Parse from canonical UUID text.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        s.parse::<uuid::Uuid>()
            .map(Self)
            .map_err(|e| TypeError::InvalidId(e.to_string()))
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlayerId({})", self.short_id())
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a catalog artifact (UUID v7 for time-ordering).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArtifactId(uuid::Uuid);

impl ArtifactId {
    /// Generate a new time-ordered artifact ID (UUID v7).
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7())
    }

    /// Create from an existing UUID.
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }

    /// Short representation (first 8 characters of the UUID).
    pub fn short_id(&self) -> String {
        self.0.to_string()[..8].to_string()
    }

    /// Parse from canonical UUID text.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        s.parse::<uuid::Uuid>()
            .map(Self)
            .map_err(|e| TypeError::InvalidId(e.to_string()))
    }
}

impl Default for ArtifactId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArtifactId({})", self.short_id())
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_unique() {
        assert_ne!(PlayerId::new(), PlayerId::new());
        assert_ne!(ArtifactId::new(), ArtifactId::new());
    }

    #[test]
    fn parse_roundtrip() {
        let id = PlayerId::new();
        let parsed = PlayerId::parse(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = ArtifactId::parse("not-a-uuid").unwrap_err();
        assert!(matches!(err, TypeError::InvalidId(_)));
    }

    #[test]
    fn short_id_is_prefix_of_display() {
        let id = ArtifactId::new();
        assert!(id.to_string().starts_with(&id.short_id()));
        assert_eq!(id.short_id().len(), 8);
    }

    #[test]
    fn serde_roundtrip() {
        let id = PlayerId::new();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }
}
