//! Challenge store operations.
//!
//! Every function takes the current snapshot by reference and returns the
//! next one. Missing ids and invalid drafts are silent no-ops: the returned
//! snapshot equals the input.

use lr_core::{Attribute, Challenge, ChallengeDraft, ChallengeId, Player, QuestProposal};

use crate::leveling::resolve_level;
use crate::reward::{Reward, reward_for};

/// Why a completion was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No challenge has that id.
    UnknownChallenge,
    /// The challenge was already completed today.
    AlreadyCompleted,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownChallenge => write!(f, "no such challenge"),
            Self::AlreadyCompleted => write!(f, "already completed today"),
        }
    }
}

/// What a completion did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The reward was paid and the challenge marked done.
    Applied {
        /// The completed challenge.
        challenge: ChallengeId,
        /// The reward paid out.
        reward: Reward,
        /// Levels reached as a result, in order.
        levels_gained: Vec<u32>,
    },
    /// Nothing changed.
    Skipped(SkipReason),
}

impl Completion {
    /// Returns true if the snapshot changed.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Append a new challenge built from `draft`.
///
/// Marks the player as onboarded. Returns the new id, or `None` (and an
/// unchanged snapshot) if the draft is invalid.
pub fn add(player: &Player, draft: ChallengeDraft) -> (Player, Option<ChallengeId>) {
    let challenge = match Challenge::from_draft(draft) {
        Ok(c) => c,
        Err(e) => {
            tracing::debug!("ignoring challenge draft: {e}");
            return (player.clone(), None);
        }
    };

    let id = challenge.id;
    let mut next = player.clone();
    next.challenges.push(challenge);
    next.onboarded = true;
    (next, Some(id))
}

/// Add a challenge from an advisor proposal, training `attribute`.
///
/// Shares the manual add path, including the onboarding side effect.
pub fn accept_proposal(
    player: &Player,
    proposal: &QuestProposal,
    attribute: Attribute,
) -> (Player, Option<ChallengeId>) {
    add(player, proposal.to_draft(attribute))
}

/// Remove the challenge with `id`. Returns true if one was removed.
pub fn remove(player: &Player, id: ChallengeId) -> (Player, bool) {
    let mut next = player.clone();
    let len_before = next.challenges.len();
    next.challenges.retain(|c| c.id != id);
    let removed = next.challenges.len() < len_before;
    (next, removed)
}

/// Complete the challenge with `id`: pay its reward, resolve leveling, and
/// mark it done for today.
///
/// The whole next snapshot is built before it is returned, so callers never
/// see the reward without the completion flag or the other way round.
pub fn complete(player: &Player, id: ChallengeId) -> (Player, Completion) {
    let Some(index) = player.challenges.iter().position(|c| c.id == id) else {
        return (player.clone(), Completion::Skipped(SkipReason::UnknownChallenge));
    };
    let challenge = &player.challenges[index];
    if challenge.completed_today {
        return (player.clone(), Completion::Skipped(SkipReason::AlreadyCompleted));
    }

    let reward = reward_for(challenge.difficulty);
    let mut stats = player.stats.clone();
    stats.exp = stats.exp.saturating_add(reward.exp);
    stats.coins = stats.coins.saturating_add(reward.coins);
    stats.attributes.add(challenge.attribute, reward.attribute_delta);
    let outcome = resolve_level(&stats);

    let mut next = player.clone();
    next.stats = outcome.stats;
    let done = &mut next.challenges[index];
    done.completed_today = true;
    done.streak = done.streak.saturating_add(1);

    (
        next,
        Completion::Applied {
            challenge: id,
            reward,
            levels_gained: outcome.levels_gained,
        },
    )
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use lr_core::{Difficulty, PlayerStats};
    use proptest::prelude::*;

    use super::*;
    use crate::config::PenaltyPolicy;
    use crate::daily;

    fn player() -> Player {
        Player::new("aria", Utc.with_ymd_and_hms(2025, 3, 14, 8, 0, 0).unwrap())
    }

    fn draft(title: &str, attribute: Attribute, difficulty: Difficulty) -> ChallengeDraft {
        ChallengeDraft::new(title, attribute, difficulty)
    }

    #[test]
    fn add_appends_and_onboards() {
        let p = player();
        let (p1, id1) = add(&p, draft("Run", Attribute::Strength, Difficulty::Easy));
        let (p2, id2) = add(&p1, draft("Read", Attribute::Intelligence, Difficulty::Hard));

        assert!(!p.onboarded);
        assert!(p.challenges.is_empty());
        assert!(p2.onboarded);
        assert_eq!(p2.challenges.len(), 2);
        assert_eq!(p2.challenges[0].id, id1.unwrap());
        assert_eq!(p2.challenges[1].id, id2.unwrap());
        assert_ne!(id1, id2);
    }

    #[test]
    fn add_blank_title_is_noop() {
        let p = player();
        let (next, id) = add(&p, draft("  ", Attribute::Social, Difficulty::Easy));
        assert!(id.is_none());
        assert_eq!(next, p);
        assert!(!next.onboarded);
    }

    #[test]
    fn add_then_remove_round_trip() {
        let (p, _) = add(&player(), draft("Run", Attribute::Strength, Difficulty::Easy));
        let (p1, id) = add(&p, draft("Paint", Attribute::Creativity, Difficulty::Medium));
        let (p2, removed) = remove(&p1, id.unwrap());
        assert!(removed);
        assert_eq!(p2.challenges.len(), p.challenges.len());
        assert!(p2.onboarded);
    }

    #[test]
    fn remove_unknown_is_noop() {
        let (p, _) = add(&player(), draft("Run", Attribute::Strength, Difficulty::Easy));
        let (next, removed) = remove(&p, ChallengeId::new());
        assert!(!removed);
        assert_eq!(next, p);
    }

    #[test]
    fn complete_pays_reward() {
        let (p, id) = add(&player(), draft("Lift", Attribute::Strength, Difficulty::Hard));
        let (next, completion) = complete(&p, id.unwrap());

        assert!(completion.is_applied());
        assert_eq!(next.stats.exp, 30);
        assert_eq!(next.stats.coins, 15);
        assert_eq!(next.stats.attributes.get(Attribute::Strength), 4);
        assert_eq!(next.stats.attributes.get(Attribute::Social), 1);
        assert!(next.challenges[0].completed_today);
        assert_eq!(next.challenges[0].streak, 1);
        // Input snapshot untouched.
        assert_eq!(p.stats, PlayerStats::initial());
        assert!(!p.challenges[0].completed_today);
    }

    #[test]
    fn complete_twice_same_day_is_idempotent() {
        let (p, id) = add(&player(), draft("Meditate", Attribute::Discipline, Difficulty::Medium));
        let id = id.unwrap();
        let (once, _) = complete(&p, id);
        let (twice, completion) = complete(&once, id);

        assert_eq!(completion, Completion::Skipped(SkipReason::AlreadyCompleted));
        assert_eq!(twice, once);
        assert_eq!(twice.challenges[0].streak, 1);
    }

    #[test]
    fn complete_unknown_is_noop() {
        let p = player();
        let (next, completion) = complete(&p, ChallengeId::new());
        assert_eq!(completion, Completion::Skipped(SkipReason::UnknownChallenge));
        assert_eq!(next, p);
    }

    #[test]
    fn complete_resolves_level_up() {
        let (mut p, id) = add(&player(), draft("Code", Attribute::Intelligence, Difficulty::Hard));
        p.stats.exp = 95;
        let (next, completion) = complete(&p, id.unwrap());

        match completion {
            Completion::Applied { levels_gained, .. } => assert_eq!(levels_gained, vec![2]),
            other => panic!("expected applied, got {other:?}"),
        }
        assert_eq!(next.stats.level, 2);
        assert_eq!(next.stats.exp, 25);
        assert_eq!(next.stats.max_exp, 120);
        assert_eq!(next.stats.hp, 110);
    }

    #[test]
    fn accept_proposal_keeps_focus_attribute() {
        let proposal = QuestProposal::new("Write a haiku", "Five, seven, five", Difficulty::Medium);
        let (p, id) = accept_proposal(&player(), &proposal, Attribute::Creativity);
        let c = p.challenge(id.unwrap()).unwrap();
        assert_eq!(c.attribute, Attribute::Creativity);
        assert_eq!(c.difficulty, Difficulty::Medium);
        assert_eq!(c.description.as_deref(), Some("Five, seven, five"));
        assert!(p.onboarded);
    }

    #[test]
    fn accept_blank_proposal_is_noop() {
        let p = player();
        let (next, id) = accept_proposal(&p, &QuestProposal::default(), Attribute::Social);
        assert!(id.is_none());
        assert_eq!(next, p);
    }

    fn attribute_strategy() -> impl Strategy<Value = Attribute> {
        prop::sample::select(Attribute::ALL.to_vec())
    }

    fn difficulty_strategy() -> impl Strategy<Value = Difficulty> {
        prop::sample::select(Difficulty::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn attribute_sum_invariant(
            specs in prop::collection::vec((attribute_strategy(), difficulty_strategy()), 1..12),
            steps in prop::collection::vec((0usize..12, any::<bool>()), 0..40),
        ) {
            let mut now = Utc.with_ymd_and_hms(2025, 3, 14, 8, 0, 0).unwrap();
            let mut p = Player::new("aria", now);
            let mut ids = Vec::new();
            for (i, (attr, diff)) in specs.iter().enumerate() {
                let (next, id) = add(&p, draft(&format!("habit {i}"), *attr, *diff));
                p = next;
                ids.push(id.unwrap());
            }

            let mut expected = lr_core::AttributeScores::default();
            let mut paid = vec![0u32; ids.len()];
            for (pick, new_day) in steps {
                if new_day {
                    now += Duration::days(1);
                    p = daily::evaluate(&p, now, PenaltyPolicy::None).player;
                }
                let slot = pick % ids.len();
                let before = p.challenge(ids[slot]).unwrap().clone();
                let (next, completion) = complete(&p, ids[slot]);
                if completion.is_applied() {
                    expected.add(before.attribute, reward_for(before.difficulty).attribute_delta);
                    paid[slot] += 1;
                }
                p = next;
            }

            prop_assert_eq!(p.stats.attributes, expected);
            for (slot, id) in ids.iter().enumerate() {
                prop_assert_eq!(p.challenge(*id).unwrap().streak, paid[slot]);
            }
            prop_assert!(p.stats.exp < p.stats.max_exp);
            prop_assert!(p.stats.hp <= p.stats.max_hp);
        }
    }

    #[test]
    fn same_challenge_pays_again_after_rollover() {
        let start = Utc.with_ymd_and_hms(2025, 3, 14, 8, 0, 0).unwrap();
        let (p, id) = add(&player(), draft("Read", Attribute::Intelligence, Difficulty::Medium));
        let id = id.unwrap();
        let (p, _) = complete(&p, id);
        let p = daily::evaluate(&p, start + Duration::days(1), PenaltyPolicy::None).player;
        let (p, completion) = complete(&p, id);

        assert!(completion.is_applied());
        assert_eq!(p.stats.exp, 40);
        assert_eq!(p.stats.attributes.get(Attribute::Intelligence), 5);
        assert_eq!(p.challenges[0].streak, 2);
    }
}
