//! Leveling resolver.
//!
//! Converts accumulated experience into level-ups. Each level gained carries
//! the remainder forward, raises the next threshold by 20%, raises the
//! hit-point cap by 10, and fully heals the player. A single reward can
//! cross several thresholds, so resolution loops until `exp < max_exp`.

use lr_core::PlayerStats;

/// Hit-point cap increase per level gained.
pub const HP_PER_LEVEL: u32 = 10;

/// Result of a leveling pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelOutcome {
    /// Stats after every pending level-up has been applied.
    pub stats: PlayerStats,
    /// Each level reached during this pass, in order. Empty if none.
    pub levels_gained: Vec<u32>,
}

impl LevelOutcome {
    /// Returns true if at least one level was gained.
    pub fn leveled_up(&self) -> bool {
        !self.levels_gained.is_empty()
    }
}

/// Next experience threshold: `floor(max_exp * 1.2)`.
pub fn next_threshold(max_exp: u32) -> u32 {
    let next = u64::from(max_exp) * 6 / 5;
    u32::try_from(next).unwrap_or(u32::MAX)
}

/// Apply every level-up the current experience allows.
///
/// Notification is left to the caller: the outcome lists the levels gained.
pub fn resolve_level(stats: &PlayerStats) -> LevelOutcome {
    let mut next = stats.clone();
    let mut levels_gained = Vec::new();

    if next.max_exp == 0 {
        tracing::warn!("max_exp is zero, skipping level resolution");
        return LevelOutcome {
            stats: next,
            levels_gained,
        };
    }

    while next.exp >= next.max_exp {
        next.level = next.level.saturating_add(1);
        next.exp -= next.max_exp;
        // Saturation at u32::MAX still ends the loop: exp can no longer reach it.
        next.max_exp = next_threshold(next.max_exp);
        next.max_hp = next.max_hp.saturating_add(HP_PER_LEVEL);
        next.hp = next.max_hp;
        levels_gained.push(next.level);
    }

    LevelOutcome {
        stats: next,
        levels_gained,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn stats_with_exp(exp: u32) -> PlayerStats {
        PlayerStats {
            exp,
            ..PlayerStats::initial()
        }
    }

    #[test]
    fn below_threshold_is_unchanged() {
        let stats = stats_with_exp(99);
        let outcome = resolve_level(&stats);
        assert_eq!(outcome.stats, stats);
        assert!(!outcome.leveled_up());
    }

    #[test]
    fn exact_threshold_levels_once() {
        let mut stats = stats_with_exp(100);
        stats.hp = 40;
        let outcome = resolve_level(&stats);
        assert_eq!(outcome.stats.level, 2);
        assert_eq!(outcome.stats.exp, 0);
        assert_eq!(outcome.stats.max_exp, 120);
        assert_eq!(outcome.stats.max_hp, 110);
        assert_eq!(outcome.stats.hp, 110);
        assert_eq!(outcome.levels_gained, vec![2]);
    }

    #[test]
    fn overshoot_crosses_multiple_levels() {
        let outcome = resolve_level(&stats_with_exp(250));
        assert_eq!(outcome.stats.level, 3);
        assert_eq!(outcome.stats.max_exp, 144);
        assert_eq!(outcome.stats.exp, 30);
        assert_eq!(outcome.stats.max_hp, 120);
        assert_eq!(outcome.stats.hp, 120);
        assert_eq!(outcome.levels_gained, vec![2, 3]);
    }

    #[test]
    fn threshold_floors() {
        assert_eq!(next_threshold(100), 120);
        assert_eq!(next_threshold(144), 172);
        assert_eq!(next_threshold(1), 1);
        assert_eq!(next_threshold(u32::MAX), u32::MAX);
    }

    #[test]
    fn zero_threshold_does_not_loop() {
        let mut stats = stats_with_exp(5);
        stats.max_exp = 0;
        let outcome = resolve_level(&stats);
        assert_eq!(outcome.stats, stats);
    }

    #[test]
    fn tiny_threshold_terminates() {
        let mut stats = stats_with_exp(10);
        stats.max_exp = 1;
        let outcome = resolve_level(&stats);
        // A threshold of 1 never grows, so every point of exp is one level.
        assert_eq!(outcome.levels_gained.len(), 10);
        assert_eq!(outcome.stats.exp, 0);
    }

    proptest! {
        #[test]
        fn resolution_restores_invariants(exp in 0u32..100_000, max_exp in 5u32..500) {
            let mut stats = stats_with_exp(exp);
            stats.max_exp = max_exp;
            let outcome = resolve_level(&stats);
            prop_assert!(outcome.stats.exp < outcome.stats.max_exp);
            prop_assert!(outcome.stats.hp <= outcome.stats.max_hp);
            prop_assert_eq!(
                outcome.stats.level,
                stats.level + outcome.levels_gained.len() as u32
            );
            prop_assert_eq!(
                outcome.stats.max_hp,
                stats.max_hp + HP_PER_LEVEL * outcome.levels_gained.len() as u32
            );
        }
    }
}
