//! The advisor seam and its fallback values.

use std::future::Future;

use lr_core::{Attribute, AttributeScores, Difficulty, PlayerStats, QuestProposal};

use crate::board::SuggestionBatch;

/// Title of the single proposal returned when no API key is configured.
pub const MANUAL_QUEST_TITLE: &str = "Manual Quest";
/// Description of the single proposal returned when no API key is configured.
pub const MANUAL_QUEST_DESCRIPTION: &str = "No API key configured. Create a quest manually.";

/// Advice returned when no API key is configured.
pub const NO_KEY_ADVICE: &str = "Configure an API key to receive advice.";
/// Advice returned when the request fails.
pub const SILENT_ADVICE: &str = "The Guild Master is silent (could not reach the advisor).";
/// Advice returned when the service answers with no text.
pub const DEFAULT_ADVICE: &str = "Keep moving forward, adventurer!";

/// Source of quest suggestions and coaching.
///
/// Neither call can fail: implementations substitute a fallback value and
/// log the cause instead. The futures are `Send` so callers can run them on
/// a background task while the player keeps playing.
pub trait Advisor {
    /// Suggest challenges that train `focus` for a player at `level`.
    fn suggest_challenges(
        &self,
        level: u32,
        focus: Attribute,
    ) -> impl Future<Output = Vec<QuestProposal>> + Send;

    /// A short piece of advice based on the player's attributes.
    fn coaching_advice(&self, attributes: AttributeScores) -> impl Future<Output = String> + Send;
}

/// The proposal offered when no API key is configured.
pub fn fallback_proposal() -> QuestProposal {
    QuestProposal::new(MANUAL_QUEST_TITLE, MANUAL_QUEST_DESCRIPTION, Difficulty::Easy)
}

/// Ask `advisor` for challenges aimed at the player's weakest attribute.
pub async fn suggest_for<A: Advisor>(advisor: &A, stats: &PlayerStats) -> SuggestionBatch {
    let focus = stats.attributes.weakest();
    let proposals = advisor.suggest_challenges(stats.level, focus).await;
    SuggestionBatch { focus, proposals }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Scripted;

    impl Advisor for Scripted {
        async fn suggest_challenges(&self, level: u32, focus: Attribute) -> Vec<QuestProposal> {
            vec![QuestProposal::new(
                format!("{focus} drill"),
                format!("level {level}"),
                Difficulty::Medium,
            )]
        }

        async fn coaching_advice(&self, _attributes: AttributeScores) -> String {
            DEFAULT_ADVICE.to_string()
        }
    }

    #[test]
    fn fallback_proposal_is_easy_manual_quest() {
        let p = fallback_proposal();
        assert_eq!(p.title, "Manual Quest");
        assert_eq!(p.difficulty, Difficulty::Easy);
    }

    #[tokio::test]
    async fn suggest_for_targets_weakest() {
        let mut stats = PlayerStats::initial();
        for attr in Attribute::ALL {
            stats.attributes.set(attr, 5);
        }
        stats.attributes.set(Attribute::Creativity, 2);
        stats.level = 3;

        let batch = suggest_for(&Scripted, &stats).await;
        assert_eq!(batch.focus, Attribute::Creativity);
        assert_eq!(batch.proposals.len(), 1);
        assert_eq!(batch.proposals[0].title, "Creativity drill");
        assert_eq!(batch.proposals[0].description, "level 3");
    }
}
