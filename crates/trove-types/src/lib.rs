//! Foundation types for Trove.
//!
//! This crate provides the identity, catalog, and player types used
//! throughout the Trove system. Every other Trove crate depends on
//! `trove-types`.
//!
//! # Key Types
//!
//! - [`PlayerId`] / [`ArtifactId`] — time-ordered UUID v7 identifiers
//! - [`ArtifactKind`] — closed enumeration of collectible kinds
//! - [`ArtifactDefinition`] — one catalog entry (kind, unique name, location)
//! - [`Player`] — player identity and profile, with embedded award tallies
//! - [`UpdateMode`] — set-or-increment write mode shared by counter updates

pub mod artifact;
pub mod error;
pub mod identity;
pub mod player;

pub use artifact::{ArtifactDefinition, ArtifactKind, GeoPoint};
pub use error::TypeError;
pub use identity::{ArtifactId, PlayerId};
pub use player::{AwardTallies, AwardUpdate, Gender, Player, ProfileUpdate, UpdateMode};
