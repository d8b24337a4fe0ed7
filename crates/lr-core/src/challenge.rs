use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::attribute::Attribute;
use crate::error::{CoreError, CoreResult};

/// Unique identifier for a challenge. Assigned once at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChallengeId(pub Uuid);

impl ChallengeId {
    /// Generate a new random challenge ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Full hyphenated form, for lookups by prefix.
    pub fn full(&self) -> String {
        self.0.to_string()
    }
}

impl Default for ChallengeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ChallengeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Difficulty tier of a challenge. Drives reward size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Difficulty {
    /// Smallest reward. Also the fallback for unrecognized text.
    #[default]
    Easy,
    /// Middle reward.
    Medium,
    /// Largest reward.
    Hard,
}

impl Difficulty {
    /// Every tier, easiest first.
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Parse a tier name case-insensitively. Anything unrecognized is `Easy`.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "medium" => Self::Medium,
            "hard" => Self::Hard,
            _ => Self::Easy,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Stored and remote payloads may carry any string here; unknown tiers fall back to Easy.
impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&raw))
    }
}

/// A recurring habit tracked for completion and streak.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    /// Immutable identifier.
    pub id: ChallengeId,
    /// Non-empty title.
    pub title: String,
    /// Optional longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The attribute this challenge trains.
    pub attribute: Attribute,
    /// Difficulty tier.
    pub difficulty: Difficulty,
    /// Whether it was completed since the start of the current day.
    pub completed_today: bool,
    /// Number of completions recorded. Only ever incremented.
    pub streak: u32,
}

impl Challenge {
    /// Build a fresh challenge from a validated draft.
    pub fn from_draft(draft: ChallengeDraft) -> CoreResult<Self> {
        draft.validate()?;
        Ok(Self {
            id: ChallengeId::new(),
            title: draft.title.trim().to_string(),
            description: draft.description.filter(|d| !d.trim().is_empty()),
            attribute: draft.attribute,
            difficulty: draft.difficulty,
            completed_today: false,
            streak: 0,
        })
    }
}

/// User input for a new challenge, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeDraft {
    /// Title; must not be blank.
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// The attribute to train.
    pub attribute: Attribute,
    /// Difficulty tier.
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl ChallengeDraft {
    /// Create a draft with no description.
    pub fn new(title: impl Into<String>, attribute: Attribute, difficulty: Difficulty) -> Self {
        Self {
            title: title.into(),
            description: None,
            attribute,
            difficulty,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Reject drafts with a blank title.
    pub fn validate(&self) -> CoreResult<()> {
        if self.title.trim().is_empty() {
            return Err(CoreError::InvalidDraft("title must not be empty".into()));
        }
        Ok(())
    }
}
