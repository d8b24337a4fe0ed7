use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;
use crate::challenge::{ChallengeDraft, Difficulty};

/// A challenge suggested by the advisor service.
///
/// Absent fields deserialize as empty text or the default tier, so a
/// partially filled payload still yields a proposal; a blank title is
/// rejected later when the proposal becomes a draft.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuestProposal {
    /// Suggested title.
    #[serde(default)]
    pub title: String,
    /// Suggested description.
    #[serde(default)]
    pub description: String,
    /// Suggested tier. Unknown text reads as `Easy`.
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl QuestProposal {
    /// Create a proposal.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            difficulty,
        }
    }

    /// Turn the proposal into a draft training `attribute`.
    pub fn to_draft(&self, attribute: Attribute) -> ChallengeDraft {
        let draft = ChallengeDraft::new(self.title.trim(), attribute, self.difficulty);
        if self.description.trim().is_empty() {
            draft
        } else {
            draft.with_description(self.description.trim())
        }
    }
}
