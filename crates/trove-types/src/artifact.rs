use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::identity::ArtifactId;

/// The closed set of collectible artifact kinds in the catalog.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Botella,
    Figurina,
    Olla,
    Jarron,
}

impl ArtifactKind {
    /// Every kind, in declaration order.
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::Botella,
        ArtifactKind::Figurina,
        ArtifactKind::Olla,
        ArtifactKind::Jarron,
    ];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Botella => "botella",
            Self::Figurina => "figurina",
            Self::Olla => "olla",
            Self::Jarron => "jarron",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "botella" => Ok(Self::Botella),
            "figurina" => Ok(Self::Figurina),
            "olla" => Ok(Self::Olla),
            "jarron" => Ok(Self::Jarron),
            other => Err(TypeError::UnknownKind(other.to_string())),
        }
    }
}

/// Geographic placement of an artifact in the world.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// One catalog entry: a collectible artifact definition.
///
/// Definitions are immutable once created; the catalog only ever inserts
/// and deletes them. `name` is globally unique across all kinds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArtifactDefinition {
    pub id: ArtifactId,
    pub kind: ArtifactKind,
    pub name: String,
    pub location: GeoPoint,
    /// Optional render asset served to the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_path: Option<String>,
}

impl ArtifactDefinition {
    /// Create a definition with a fresh id and no asset path.
    pub fn new(kind: ArtifactKind, name: impl Into<String>, location: GeoPoint) -> Self {
        Self {
            id: ArtifactId::new(),
            kind,
            name: name.into(),
            location,
            asset_path: None,
        }
    }

    pub fn with_asset_path(mut self, path: impl Into<String>) -> Self {
        self.asset_path = Some(path.into());
        self
    }
}
