use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A character-growth category. The set is closed.
///
/// Variant order is the canonical order used for display and for breaking
/// ties in [`AttributeScores::weakest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Attribute {
    /// Physical training and health.
    Strength,
    /// Study and work.
    Intelligence,
    /// Routine and chores.
    Discipline,
    /// Art and ideas.
    Creativity,
    /// Networking and family.
    Social,
}

impl Attribute {
    /// Every attribute, in canonical order.
    pub const ALL: [Attribute; 5] = [
        Self::Strength,
        Self::Intelligence,
        Self::Discipline,
        Self::Creativity,
        Self::Social,
    ];

    /// Full display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Intelligence => "Intelligence",
            Self::Discipline => "Discipline",
            Self::Creativity => "Creativity",
            Self::Social => "Social",
        }
    }

    /// Three-letter abbreviation (`STR`, `INT`, ...).
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Intelligence => "INT",
            Self::Discipline => "DIS",
            Self::Creativity => "CRE",
            Self::Social => "SOC",
        }
    }

    /// Parse a full name or abbreviation, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.name().to_lowercase() == lower || a.abbreviation().to_lowercase() == lower)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CoreError::UnknownAttribute(s.to_string()))
    }
}

/// One score per attribute. Every key is always present.
///
/// Serialized as a JSON object keyed by attribute name. A stored object
/// missing any of the five keys fails to deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeScores {
    #[serde(rename = "Strength")]
    strength: u32,
    #[serde(rename = "Intelligence")]
    intelligence: u32,
    #[serde(rename = "Discipline")]
    discipline: u32,
    #[serde(rename = "Creativity")]
    creativity: u32,
    #[serde(rename = "Social")]
    social: u32,
}

impl AttributeScores {
    /// Scores with every attribute set to `value`.
    pub fn uniform(value: u32) -> Self {
        Self {
            strength: value,
            intelligence: value,
            discipline: value,
            creativity: value,
            social: value,
        }
    }

    /// Score for one attribute.
    pub fn get(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Intelligence => self.intelligence,
            Attribute::Discipline => self.discipline,
            Attribute::Creativity => self.creativity,
            Attribute::Social => self.social,
        }
    }

    fn slot_mut(&mut self, attribute: Attribute) -> &mut u32 {
        match attribute {
            Attribute::Strength => &mut self.strength,
            Attribute::Intelligence => &mut self.intelligence,
            Attribute::Discipline => &mut self.discipline,
            Attribute::Creativity => &mut self.creativity,
            Attribute::Social => &mut self.social,
        }
    }

    /// Overwrite the score for one attribute.
    pub fn set(&mut self, attribute: Attribute, value: u32) {
        *self.slot_mut(attribute) = value;
    }

    /// Add `delta` to one attribute. Returns the new score.
    pub fn add(&mut self, attribute: Attribute, delta: u32) -> u32 {
        let slot = self.slot_mut(attribute);
        *slot = slot.saturating_add(delta);
        *slot
    }

    /// Iterate `(attribute, score)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, u32)> + '_ {
        Attribute::ALL.into_iter().map(|a| (a, self.get(a)))
    }

    /// The lowest-scored attribute. Ties go to the earliest in canonical order.
    pub fn weakest(&self) -> Attribute {
        Attribute::ALL
            .into_iter()
            .min_by_key(|a| self.get(*a))
            .unwrap_or(Attribute::Strength)
    }
}

impl Default for AttributeScores {
    fn default() -> Self {
        Self::uniform(1)
    }
}
