//! Daily reset and penalty evaluation.
//!
//! Compares the player's last active calendar day (UTC) with today. On a
//! change of day every challenge's `completed_today` flag is cleared, the
//! penalty policy is evaluated, and `last_active` moves to now. On the same
//! day the snapshot passes through untouched.

use chrono::{DateTime, Utc};
use lr_core::Player;

use crate::config::PenaltyPolicy;

/// Result of a daily evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyOutcome {
    /// The evaluated snapshot.
    pub player: Player,
    /// True if the calendar day changed and flags were reset.
    pub rolled_over: bool,
    /// Hit points lost to the penalty policy.
    pub penalty: u32,
}

/// Evaluate the daily reset for `player` at `now`.
pub fn evaluate(player: &Player, now: DateTime<Utc>, policy: PenaltyPolicy) -> DailyOutcome {
    let last_day = player.last_active_day();
    let today = now.date_naive();

    if last_day == today {
        return DailyOutcome {
            player: player.clone(),
            rolled_over: false,
            penalty: 0,
        };
    }

    let mut next = player.clone();
    for challenge in &mut next.challenges {
        challenge.completed_today = false;
    }

    // A clock that moved backwards still resets flags but is never penalized.
    let penalty = if last_day < today {
        policy.damage(next.challenges.len())
    } else {
        0
    };
    next.stats.hp = next.stats.hp.saturating_sub(penalty);
    next.last_active = now;

    tracing::info!(
        %last_day,
        %today,
        penalty,
        "new day: reset {} challenges",
        next.challenges.len()
    );

    DailyOutcome {
        player: next,
        rolled_over: true,
        penalty,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use lr_core::{Attribute, ChallengeDraft, Difficulty};

    use super::*;
    use crate::challenges;

    fn morning() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 7, 0, 0).unwrap()
    }

    fn player_with_two_completed() -> Player {
        let p = Player::new("aria", morning());
        let (p, a) = challenges::add(
            &p,
            ChallengeDraft::new("Run", Attribute::Strength, Difficulty::Easy),
        );
        let (p, b) = challenges::add(
            &p,
            ChallengeDraft::new("Read", Attribute::Intelligence, Difficulty::Medium),
        );
        let (p, _) = challenges::complete(&p, a.unwrap());
        let (p, _) = challenges::complete(&p, b.unwrap());
        assert!(p.challenges.iter().all(|c| c.completed_today));
        p
    }

    #[test]
    fn next_day_resets_flags() {
        let p = player_with_two_completed();
        let tomorrow = morning() + Duration::days(1);
        let outcome = evaluate(&p, tomorrow, PenaltyPolicy::None);

        assert!(outcome.rolled_over);
        assert!(outcome.player.challenges.iter().all(|c| !c.completed_today));
        assert_eq!(outcome.player.last_active, tomorrow);
        // Streaks survive the reset.
        assert!(outcome.player.challenges.iter().all(|c| c.streak == 1));
        assert_eq!(outcome.player.stats, p.stats);
    }

    #[test]
    fn same_day_is_untouched() {
        let p = player_with_two_completed();
        let evening = morning() + Duration::hours(15);
        let outcome = evaluate(&p, evening, PenaltyPolicy::None);

        assert!(!outcome.rolled_over);
        assert_eq!(outcome.player, p);
    }

    #[test]
    fn midnight_boundary_counts_as_new_day() {
        let late = Utc.with_ymd_and_hms(2025, 6, 1, 23, 59, 59).unwrap();
        let mut p = player_with_two_completed();
        p.last_active = late;
        let outcome = evaluate(&p, late + Duration::seconds(2), PenaltyPolicy::None);
        assert!(outcome.rolled_over);
    }

    #[test]
    fn default_policy_costs_nothing() {
        let p = player_with_two_completed();
        let outcome = evaluate(&p, morning() + Duration::days(3), PenaltyPolicy::default());
        assert_eq!(outcome.penalty, 0);
        assert_eq!(outcome.player.stats.hp, p.stats.hp);
    }

    #[test]
    fn flat_damage_applies_on_later_day() {
        let p = player_with_two_completed();
        let outcome = evaluate(&p, morning() + Duration::days(1), PenaltyPolicy::FlatDamage(5));
        assert_eq!(outcome.penalty, 5);
        assert_eq!(outcome.player.stats.hp, p.stats.hp - 5);
    }

    #[test]
    fn flat_damage_floors_at_zero() {
        let mut p = player_with_two_completed();
        p.stats.hp = 3;
        let outcome = evaluate(&p, morning() + Duration::days(1), PenaltyPolicy::FlatDamage(5));
        assert_eq!(outcome.player.stats.hp, 0);
    }

    #[test]
    fn flat_damage_skips_players_without_challenges() {
        let p = Player::new("aria", morning());
        let outcome = evaluate(&p, morning() + Duration::days(1), PenaltyPolicy::FlatDamage(5));
        assert!(outcome.rolled_over);
        assert_eq!(outcome.penalty, 0);
    }

    #[test]
    fn earlier_day_resets_without_penalty() {
        let p = player_with_two_completed();
        let yesterday = morning() - Duration::days(1);
        let outcome = evaluate(&p, yesterday, PenaltyPolicy::FlatDamage(5));
        assert!(outcome.rolled_over);
        assert_eq!(outcome.penalty, 0);
        assert!(outcome.player.challenges.iter().all(|c| !c.completed_today));
    }
}
