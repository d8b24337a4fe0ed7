//! Progression engine: the session state machine.
//!
//! `ProgressionEngine` owns the session context explicitly. A player is only
//! reachable in the `Authenticated` state, which is entered either through
//! [`ProgressionEngine::resume`] (which always runs the daily reset first)
//! or through [`ProgressionEngine::register`]. Every mutating operation
//! builds the next snapshot, persists it, and only then swaps it in.

use chrono::{DateTime, Utc};
use lr_core::{Attribute, ChallengeDraft, ChallengeId, Player, QuestProposal};

use crate::challenges::{self, Completion};
use crate::config::EngineConfig;
use crate::daily;
use crate::error::{EngineError, EngineResult, StoreError};
use crate::leveling::resolve_level;
use crate::storage::SnapshotStore;

/// Where a session currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No player loaded yet.
    Uninitialized,
    /// A stored snapshot is being read and reconciled.
    Loading,
    /// A player is signed in.
    Authenticated(Player),
    /// The player signed out and their snapshot was removed.
    LoggedOut,
}

impl SessionState {
    /// Short state name for display and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Loading => "loading",
            Self::Authenticated(_) => "authenticated",
            Self::LoggedOut => "logged out",
        }
    }
}

/// Drives a single-player session against a snapshot store.
#[derive(Debug)]
pub struct ProgressionEngine<S> {
    store: S,
    config: EngineConfig,
    state: SessionState,
}

impl<S: SnapshotStore> ProgressionEngine<S> {
    /// Create an engine in the `Uninitialized` state.
    pub fn new(store: S, config: EngineConfig) -> Self {
        Self {
            store,
            config,
            state: SessionState::Uninitialized,
        }
    }

    /// Current session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The signed-in player, if any.
    pub fn player(&self) -> Option<&Player> {
        match &self.state {
            SessionState::Authenticated(player) => Some(player),
            _ => None,
        }
    }

    /// Engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The backing snapshot store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resume the stored session at `now`.
    ///
    /// Runs the daily reset and resolves any experience left at or above
    /// the threshold before the player becomes visible, persisting the
    /// result if either changed anything. Returns `None` if nothing is
    /// stored. A malformed snapshot leaves the session `Uninitialized` and
    /// returns [`EngineError::CorruptSnapshot`]. While already signed in
    /// this returns the current player unchanged.
    pub fn resume(&mut self, now: DateTime<Utc>) -> EngineResult<Option<&Player>> {
        if matches!(self.state, SessionState::Authenticated(_)) {
            return Ok(self.player());
        }

        self.state = SessionState::Loading;
        let stored = match self.store.load() {
            Ok(stored) => stored,
            Err(StoreError::Malformed(e)) => {
                tracing::warn!("stored snapshot rejected: {e}");
                self.state = SessionState::Uninitialized;
                return Err(EngineError::CorruptSnapshot(StoreError::Malformed(e)));
            }
            Err(e) => {
                self.state = SessionState::Uninitialized;
                return Err(e.into());
            }
        };

        let Some(player) = stored else {
            tracing::debug!("no stored player");
            self.state = SessionState::Uninitialized;
            return Ok(None);
        };

        let outcome = daily::evaluate(&player, now, self.config.penalty);
        let mut player = outcome.player;
        let leveling = resolve_level(&player.stats);
        for level in &leveling.levels_gained {
            tracing::info!(level, "pending level up applied");
        }
        let leveled = leveling.leveled_up();
        player.stats = leveling.stats;

        if (outcome.rolled_over || leveled)
            && let Err(e) = self.store.save(&player)
        {
            self.state = SessionState::Uninitialized;
            return Err(e.into());
        }

        tracing::info!(player = %player.name, "session resumed");
        self.state = SessionState::Authenticated(player);
        Ok(self.player())
    }

    /// Register a new player and sign them in. Skips the daily reset.
    pub fn register(&mut self, name: &str, now: DateTime<Utc>) -> EngineResult<&Player> {
        if matches!(self.state, SessionState::Authenticated(_)) {
            return Err(EngineError::AlreadyAuthenticated);
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(EngineError::InvalidName);
        }

        let player = Player::new(name, now);
        self.store.save(&player)?;
        tracing::info!(player = %player.name, id = %player.id, "player registered");
        self.state = SessionState::Authenticated(player);
        self.current()
    }

    /// Add a challenge. Returns its id, or `None` if the draft was invalid.
    pub fn add_challenge(&mut self, draft: ChallengeDraft) -> EngineResult<Option<ChallengeId>> {
        let (next, id) = challenges::add(self.current()?, draft);
        if let Some(id) = id {
            self.commit(next)?;
            tracing::info!(challenge = %id, "challenge added");
        }
        Ok(id)
    }

    /// Add a challenge from an advisor proposal, training `attribute`.
    pub fn accept_proposal(
        &mut self,
        proposal: &QuestProposal,
        attribute: Attribute,
    ) -> EngineResult<Option<ChallengeId>> {
        let (next, id) = challenges::accept_proposal(self.current()?, proposal, attribute);
        if let Some(id) = id {
            self.commit(next)?;
            tracing::info!(challenge = %id, %attribute, "proposal accepted");
        }
        Ok(id)
    }

    /// Delete a challenge. Returns false if no challenge had that id.
    pub fn remove_challenge(&mut self, id: ChallengeId) -> EngineResult<bool> {
        let (next, removed) = challenges::remove(self.current()?, id);
        if removed {
            self.commit(next)?;
            tracing::info!(challenge = %id, "challenge removed");
        } else {
            tracing::debug!(challenge = %id, "remove ignored: no such challenge");
        }
        Ok(removed)
    }

    /// Complete a challenge for today.
    pub fn complete(&mut self, id: ChallengeId) -> EngineResult<Completion> {
        let (next, completion) = challenges::complete(self.current()?, id);
        match &completion {
            Completion::Applied {
                reward,
                levels_gained,
                ..
            } => {
                self.commit(next)?;
                tracing::info!(challenge = %id, exp = reward.exp, coins = reward.coins, "challenge completed");
                for level in levels_gained {
                    tracing::info!(level, "level up");
                }
            }
            Completion::Skipped(reason) => {
                tracing::debug!(challenge = %id, "completion ignored: {reason}");
            }
        }
        Ok(completion)
    }

    /// Sign out: forget the player and delete the stored snapshot.
    pub fn logout(&mut self) -> EngineResult<()> {
        self.store.clear()?;
        self.state = SessionState::LoggedOut;
        tracing::info!("logged out");
        Ok(())
    }

    fn current(&self) -> EngineResult<&Player> {
        self.player().ok_or(EngineError::NotAuthenticated)
    }

    fn commit(&mut self, next: Player) -> EngineResult<()> {
        self.store.save(&next)?;
        self.state = SessionState::Authenticated(next);
        Ok(())
    }
}
