use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::identity::PlayerId;

/// Write mode for counter updates.
///
/// Shared by award updates and collection-ledger upserts: `Set` replaces
/// the counter outright, `Increment` adds to it, creating it if absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateMode {
    Set,
    Increment,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Per-player action counters, updated by the profile surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardTallies {
    pub dig: u64,
    pub gather: u64,
    pub search: u64,
}

/// A registered player.
///
/// `email` and `nickname` are each globally unique; the player store
/// enforces that on insert and profile update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub email: String,
    pub nickname: String,
    pub gender: Gender,
    pub level: u32,
    pub active: bool,
    pub tutorial_done: bool,
    pub created_at: DateTime<Utc>,
    pub awards: AwardTallies,
}

impl Player {
    /// Register a new player at level 1 with zeroed award tallies.
    ///
    /// Fails if `email` is not a plausible address.
    pub fn new(
        email: impl Into<String>,
        nickname: impl Into<String>,
        gender: Gender,
    ) -> Result<Self, TypeError> {
        let email = email.into();
        validate_email(&email)?;
        Ok(Self {
            id: PlayerId::new(),
            email,
            nickname: nickname.into(),
            gender,
            level: 1,
            active: true,
            tutorial_done: false,
            created_at: Utc::now(),
            awards: AwardTallies::default(),
        })
    }
}

/// Partial profile update; absent fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub email: Option<String>,
    pub nickname: Option<String>,
    pub gender: Option<Gender>,
    pub level: Option<u32>,
    pub active: Option<bool>,
    pub tutorial_done: Option<bool>,
}

impl ProfileUpdate {
    /// Returns `true` if the update would touch nothing.
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.nickname.is_none()
            && self.gender.is_none()
            && self.level.is_none()
            && self.active.is_none()
            && self.tutorial_done.is_none()
    }
}

/// Partial award update; combined with an [`UpdateMode`] at the store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardUpdate {
    pub dig: Option<u64>,
    pub gather: Option<u64>,
    pub search: Option<u64>,
}

/// Shape check for e-mail addresses.
///
/// Deliberately loose: one `@`, a non-empty local part, and a dotted
/// domain. Deliverability is not this layer's problem.
pub fn validate_email(email: &str) -> Result<(), TypeError> {
    let Some((local, domain)) = email.split_once('@') else {
        return Err(TypeError::InvalidEmail(email.to_string()));
    };
    if local.is_empty()
        || domain.is_empty()
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
    {
        return Err(TypeError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_defaults() {
        let player = Player::new("ana@example.com", "ana", Gender::Female).unwrap();
        assert_eq!(player.level, 1);
        assert!(player.active);
        assert!(!player.tutorial_done);
        assert_eq!(player.awards, AwardTallies::default());
    }

    #[test]
    fn bad_email_is_rejected_at_registration() {
        for email in ["", "nope", "@example.com", "a@", "a@nodot", "a@.com", "a@com."] {
            let err = Player::new(email, "x", Gender::Male).unwrap_err();
            assert!(matches!(err, TypeError::InvalidEmail(_)), "{email}");
        }
    }

    #[test]
    fn plausible_emails_pass() {
        for email in ["ana@example.com", "a.b+c@mail.example.org"] {
            assert!(validate_email(email).is_ok(), "{email}");
        }
    }

    #[test]
    fn empty_profile_update() {
        assert!(ProfileUpdate::default().is_empty());
        let update = ProfileUpdate {
            level: Some(2),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn player_serde_roundtrip() {
        let player = Player::new("ana@example.com", "ana", Gender::Female).unwrap();
        let json = serde_json::to_string(&player).unwrap();
        let parsed: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, parsed);
    }
}
