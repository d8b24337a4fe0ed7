//! Latest advisor results, held for display.
//!
//! Results arrive from background tasks in any order. Each slot keeps only
//! the most recent value; a newer batch replaces an older one outright.

use lr_core::{Attribute, QuestProposal};
use serde::{Deserialize, Serialize};

/// A set of proposals together with the attribute they were requested for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionBatch {
    /// Attribute the proposals train when accepted.
    pub focus: Attribute,
    /// The proposals, in the order the advisor returned them.
    pub proposals: Vec<QuestProposal>,
}

/// Holds the latest suggestion batch and the latest advice.
#[derive(Debug, Clone, Default)]
pub struct AdviceBoard {
    suggestions: Option<SuggestionBatch>,
    advice: Option<String>,
}

impl AdviceBoard {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current suggestions.
    pub fn post_suggestions(&mut self, batch: SuggestionBatch) {
        self.suggestions = Some(batch);
    }

    /// Replace the current advice.
    pub fn post_advice(&mut self, advice: impl Into<String>) {
        self.advice = Some(advice.into());
    }

    /// Current suggestions, if any.
    pub fn suggestions(&self) -> Option<&SuggestionBatch> {
        self.suggestions.as_ref()
    }

    /// Current advice, if any.
    pub fn advice(&self) -> Option<&str> {
        self.advice.as_deref()
    }

    /// Remove the first proposal titled `title` (case-insensitive) and
    /// return it with its focus attribute.
    pub fn take_proposal(&mut self, title: &str) -> Option<(QuestProposal, Attribute)> {
        let wanted = title.trim().to_lowercase();
        let batch = self.suggestions.as_mut()?;
        let index = batch
            .proposals
            .iter()
            .position(|p| p.title.trim().to_lowercase() == wanted)?;
        Some((batch.proposals.remove(index), batch.focus))
    }

    /// Remove the proposal at `index` (0-based) and return it with its focus
    /// attribute.
    pub fn take_proposal_at(&mut self, index: usize) -> Option<(QuestProposal, Attribute)> {
        let batch = self.suggestions.as_mut()?;
        if index >= batch.proposals.len() {
            return None;
        }
        Some((batch.proposals.remove(index), batch.focus))
    }

    /// Drop everything on the board.
    pub fn clear(&mut self) {
        self.suggestions = None;
        self.advice = None;
    }
}

#[cfg(test)]
mod tests {
    use lr_core::Difficulty;

    use super::*;

    fn batch(focus: Attribute, titles: &[&str]) -> SuggestionBatch {
        SuggestionBatch {
            focus,
            proposals: titles
                .iter()
                .map(|t| QuestProposal::new(*t, "", Difficulty::Easy))
                .collect(),
        }
    }

    #[test]
    fn newer_batch_replaces_older() {
        let mut board = AdviceBoard::new();
        board.post_suggestions(batch(Attribute::Strength, &["Pushups", "Squats"]));
        board.post_suggestions(batch(Attribute::Social, &["Call a friend"]));

        let current = board.suggestions().unwrap();
        assert_eq!(current.focus, Attribute::Social);
        assert_eq!(current.proposals.len(), 1);
    }

    #[test]
    fn take_proposal_by_title() {
        let mut board = AdviceBoard::new();
        board.post_suggestions(batch(Attribute::Discipline, &["Cold shower", "Make bed"]));

        let (p, focus) = board.take_proposal("make BED").unwrap();
        assert_eq!(p.title, "Make bed");
        assert_eq!(focus, Attribute::Discipline);
        assert_eq!(board.suggestions().unwrap().proposals.len(), 1);
        assert!(board.take_proposal("Make bed").is_none());
    }

    #[test]
    fn take_proposal_by_index() {
        let mut board = AdviceBoard::new();
        assert!(board.take_proposal_at(0).is_none());
        board.post_suggestions(batch(Attribute::Creativity, &["Sketch", "Journal"]));
        assert!(board.take_proposal_at(2).is_none());
        let (p, _) = board.take_proposal_at(1).unwrap();
        assert_eq!(p.title, "Journal");
    }

    #[test]
    fn advice_slot_and_clear() {
        let mut board = AdviceBoard::new();
        assert!(board.advice().is_none());
        board.post_advice("first");
        board.post_advice("second");
        assert_eq!(board.advice(), Some("second"));
        board.clear();
        assert!(board.advice().is_none());
        assert!(board.suggestions().is_none());
    }
}
