use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::challenge::{Challenge, ChallengeId};
use crate::error::{CoreError, CoreResult};
use crate::stats::PlayerStats;

/// Unique identifier for a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    /// Generate a new random player ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// The aggregate root: one player and everything they own.
///
/// A `Player` value is a snapshot. Progression operations never mutate a
/// snapshot they were handed; they build and return the next one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Player identifier.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Progression stats.
    pub stats: PlayerStats,
    /// Challenges in insertion order. Ids are unique.
    pub challenges: Vec<Challenge>,
    /// When the player was last active. Only the UTC calendar date matters.
    pub last_active: DateTime<Utc>,
    /// Set once the player has added their first challenge.
    pub onboarded: bool,
}

impl Player {
    /// A freshly registered player with initial stats and no challenges.
    pub fn new(name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: PlayerId::new(),
            name: name.into(),
            stats: PlayerStats::initial(),
            challenges: Vec::new(),
            last_active: now,
            onboarded: false,
        }
    }

    /// Calendar day of the last activity.
    pub fn last_active_day(&self) -> NaiveDate {
        self.last_active.date_naive()
    }

    /// Look up a challenge by id.
    pub fn challenge(&self, id: ChallengeId) -> Option<&Challenge> {
        self.challenges.iter().find(|c| c.id == id)
    }

    /// Find the single challenge whose full id starts with `prefix`.
    ///
    /// Returns `None` when nothing matches or the prefix is ambiguous.
    pub fn find_by_prefix(&self, prefix: &str) -> Option<&Challenge> {
        let prefix = prefix.trim().to_lowercase();
        if prefix.is_empty() {
            return None;
        }
        let mut matches = self
            .challenges
            .iter()
            .filter(|c| c.id.full().starts_with(&prefix));
        let first = matches.next()?;
        if matches.next().is_some() {
            return None;
        }
        Some(first)
    }

    /// Number of challenges completed today.
    pub fn completed_today(&self) -> usize {
        self.challenges.iter().filter(|c| c.completed_today).count()
    }

    /// Check the snapshot against the model invariants.
    pub fn validate(&self) -> CoreResult<()> {
        let stats = &self.stats;
        if stats.level == 0 {
            return Err(CoreError::InvalidSnapshot("level must be at least 1".into()));
        }
        if stats.max_exp == 0 {
            return Err(CoreError::InvalidSnapshot("max_exp must be positive".into()));
        }
        if stats.hp > stats.max_hp {
            return Err(CoreError::InvalidSnapshot(format!(
                "hp {} exceeds max_hp {}",
                stats.hp, stats.max_hp
            )));
        }

        let mut seen = HashSet::new();
        for challenge in &self.challenges {
            if challenge.title.trim().is_empty() {
                return Err(CoreError::InvalidSnapshot(format!(
                    "challenge {} has an empty title",
                    challenge.id
                )));
            }
            if !seen.insert(challenge.id) {
                return Err(CoreError::DuplicateChallenge(challenge.id));
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON snapshot.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let player: Self = serde_json::from_str(json)?;
        player.validate()?;
        Ok(player)
    }

    /// Serialize the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
