use serde::{Deserialize, Serialize};

use crate::attribute::AttributeScores;

/// Starting hit points and hit-point cap.
pub const INITIAL_HP: u32 = 100;
/// Experience needed for the first level-up.
pub const INITIAL_MAX_EXP: u32 = 100;

/// A player's numeric progression state.
///
/// `exp` may exceed `max_exp` between a reward and the next leveling pass;
/// everywhere else `exp < max_exp` holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Current hit points, `0..=max_hp`.
    pub hp: u32,
    /// Hit-point cap. Grows by 10 per level.
    pub max_hp: u32,
    /// Experience toward the next level.
    pub exp: u32,
    /// Experience threshold for the next level. Always positive.
    pub max_exp: u32,
    /// Current level, starting at 1. Never decreases.
    pub level: u32,
    /// Currency balance. Never decreases.
    pub coins: u32,
    /// Per-attribute scores.
    pub attributes: AttributeScores,
}

impl PlayerStats {
    /// Stats for a freshly registered player.
    pub fn initial() -> Self {
        Self {
            hp: INITIAL_HP,
            max_hp: INITIAL_HP,
            exp: 0,
            max_exp: INITIAL_MAX_EXP,
            level: 1,
            coins: 0,
            attributes: AttributeScores::default(),
        }
    }

    /// Fraction of the way to the next level (0.0 to 1.0).
    pub fn exp_fraction(&self) -> f64 {
        if self.max_exp == 0 {
            return 1.0;
        }
        (self.exp as f64 / self.max_exp as f64).min(1.0)
    }
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self::initial()
    }
}
