//! In-memory repositories for tests and embedding.
//!
//! Both stores keep their records in a `HashMap` behind a single `RwLock`,
//! with maintained secondary indexes for the unique fields so a violating
//! write is detected before anything is mutated.

use std::collections::HashMap;
use std::sync::RwLock;

use trove_types::player::validate_email;
use trove_types::{
    ArtifactDefinition, ArtifactId, AwardUpdate, Player, PlayerId, ProfileUpdate, UpdateMode,
};

use crate::error::{StoreError, StoreResult};
use crate::traits::{ArtifactCatalog, PlayerStore};

#[derive(Default)]
struct PlayerState {
    players: HashMap<PlayerId, Player>,
    email_index: HashMap<String, PlayerId>,
    nickname_index: HashMap<String, PlayerId>,
}

/// An in-memory implementation of [`PlayerStore`].
///
/// Data is lost when the store is dropped.
#[derive(Default)]
pub struct InMemoryPlayerStore {
    inner: RwLock<PlayerState>,
}

impl InMemoryPlayerStore {
    /// Create a new empty player store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of player records.
    pub fn len(&self) -> usize {
        self.inner.read().expect("lock poisoned").players.len()
    }

    /// Returns `true` if no players are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PlayerStore for InMemoryPlayerStore {
    fn insert(&self, player: &Player) -> StoreResult<()> {
        let mut state = self.inner.write().expect("lock poisoned");
        if state.players.contains_key(&player.id) {
            return Err(StoreError::duplicate("id", player.id.to_string()));
        }
        if state.email_index.contains_key(&player.email) {
            return Err(StoreError::duplicate("email", player.email.clone()));
        }
        if state.nickname_index.contains_key(&player.nickname) {
            return Err(StoreError::duplicate("nickname", player.nickname.clone()));
        }

        state.email_index.insert(player.email.clone(), player.id);
        state
            .nickname_index
            .insert(player.nickname.clone(), player.id);
        state.players.insert(player.id, player.clone());
        Ok(())
    }

    fn get(&self, id: PlayerId) -> StoreResult<Option<Player>> {
        let state = self.inner.read().expect("lock poisoned");
        Ok(state.players.get(&id).cloned())
    }

    fn contains(&self, id: PlayerId) -> StoreResult<bool> {
        let state = self.inner.read().expect("lock poisoned");
        Ok(state.players.contains_key(&id))
    }

    fn list(&self) -> StoreResult<Vec<Player>> {
        let state = self.inner.read().expect("lock poisoned");
        Ok(state.players.values().cloned().collect())
    }

    fn update_profile(&self, id: PlayerId, update: &ProfileUpdate) -> StoreResult<()> {
        let mut guard = self.inner.write().expect("lock poisoned");
        let state = &mut *guard;
        let Some(player) = state.players.get_mut(&id) else {
            return Err(StoreError::player_not_found(id));
        };

        // Validate and check uniqueness before mutating anything, so a
        // rejected update leaves the record exactly as it was.
        if let Some(email) = &update.email {
            validate_email(email)?;
            if state.email_index.get(email).is_some_and(|owner| *owner != id) {
                return Err(StoreError::duplicate("email", email.clone()));
            }
        }
        if let Some(nickname) = &update.nickname {
            if state
                .nickname_index
                .get(nickname)
                .is_some_and(|owner| *owner != id)
            {
                return Err(StoreError::duplicate("nickname", nickname.clone()));
            }
        }

        if let Some(email) = &update.email {
            state.email_index.remove(&player.email);
            state.email_index.insert(email.clone(), id);
            player.email = email.clone();
        }
        if let Some(nickname) = &update.nickname {
            state.nickname_index.remove(&player.nickname);
            state.nickname_index.insert(nickname.clone(), id);
            player.nickname = nickname.clone();
        }
        if let Some(gender) = update.gender {
            player.gender = gender;
        }
        if let Some(level) = update.level {
            player.level = level;
        }
        if let Some(active) = update.active {
            player.active = active;
        }
        if let Some(tutorial_done) = update.tutorial_done {
            player.tutorial_done = tutorial_done;
        }
        Ok(())
    }

    fn update_awards(
        &self,
        id: PlayerId,
        update: &AwardUpdate,
        mode: UpdateMode,
    ) -> StoreResult<()> {
        let mut state = self.inner.write().expect("lock poisoned");
        let player = state
            .players
            .get_mut(&id)
            .ok_or_else(|| StoreError::player_not_found(id))?;

        let apply = |tally: &mut u64, value: u64| match mode {
            UpdateMode::Set => *tally = value,
            UpdateMode::Increment => *tally = tally.saturating_add(value),
        };
        if let Some(dig) = update.dig {
            apply(&mut player.awards.dig, dig);
        }
        if let Some(gather) = update.gather {
            apply(&mut player.awards.gather, gather);
        }
        if let Some(search) = update.search {
            apply(&mut player.awards.search, search);
        }
        Ok(())
    }

    fn delete(&self, id: PlayerId) -> StoreResult<bool> {
        let mut state = self.inner.write().expect("lock poisoned");
        let Some(player) = state.players.remove(&id) else {
            return Ok(false);
        };
        state.email_index.remove(&player.email);
        state.nickname_index.remove(&player.nickname);
        Ok(true)
    }
}

impl std::fmt::Debug for InMemoryPlayerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryPlayerStore")
            .field("player_count", &self.len())
            .finish()
    }
}

#[derive(Default)]
struct CatalogState {
    artifacts: HashMap<ArtifactId, ArtifactDefinition>,
    name_index: HashMap<String, ArtifactId>,
}

/// An in-memory implementation of [`ArtifactCatalog`].
#[derive(Default)]
pub struct InMemoryArtifactCatalog {
    inner: RwLock<CatalogState>,
}

impl InMemoryArtifactCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of definitions in the catalog.
    pub fn len(&self) -> usize {
        self.inner.read().expect("lock poisoned").artifacts.len()
    }

    /// Returns `true` if the catalog holds no definitions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ArtifactCatalog for InMemoryArtifactCatalog {
    fn insert(&self, artifact: &ArtifactDefinition) -> StoreResult<()> {
        let mut state = self.inner.write().expect("lock poisoned");
        if state.artifacts.contains_key(&artifact.id) {
            return Err(StoreError::duplicate("id", artifact.id.to_string()));
        }
        if state.name_index.contains_key(&artifact.name) {
            return Err(StoreError::duplicate("name", artifact.name.clone()));
        }

        state.name_index.insert(artifact.name.clone(), artifact.id);
        state.artifacts.insert(artifact.id, artifact.clone());
        Ok(())
    }

    fn get(&self, id: ArtifactId) -> StoreResult<Option<ArtifactDefinition>> {
        let state = self.inner.read().expect("lock poisoned");
        Ok(state.artifacts.get(&id).cloned())
    }

    fn contains(&self, id: ArtifactId) -> StoreResult<bool> {
        let state = self.inner.read().expect("lock poisoned");
        Ok(state.artifacts.contains_key(&id))
    }

    fn all(&self) -> StoreResult<Vec<ArtifactDefinition>> {
        let state = self.inner.read().expect("lock poisoned");
        Ok(state.artifacts.values().cloned().collect())
    }

    fn delete(&self, id: ArtifactId) -> StoreResult<bool> {
        let mut state = self.inner.write().expect("lock poisoned");
        let Some(artifact) = state.artifacts.remove(&id) else {
            return Ok(false);
        };
        state.name_index.remove(&artifact.name);
        Ok(true)
    }
}

impl std::fmt::Debug for InMemoryArtifactCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryArtifactCatalog")
            .field("artifact_count", &self.len())
            .finish()
    }
}
