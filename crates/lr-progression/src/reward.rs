//! Reward table for completed challenges.
//!
//! The table is fixed; there is no runtime configuration and no error path.

use lr_core::Difficulty;

/// What a completed challenge pays out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reward {
    /// Experience gained.
    pub exp: u32,
    /// Coins gained.
    pub coins: u32,
    /// Points added to the challenge's attribute.
    pub attribute_delta: u32,
}

/// Look up the reward for a difficulty tier.
pub fn reward_for(difficulty: Difficulty) -> Reward {
    match difficulty {
        Difficulty::Easy => Reward {
            exp: 10,
            coins: 5,
            attribute_delta: 1,
        },
        Difficulty::Medium => Reward {
            exp: 20,
            coins: 10,
            attribute_delta: 2,
        },
        Difficulty::Hard => Reward {
            exp: 30,
            coins: 15,
            attribute_delta: 3,
        },
    }
}

impl std::fmt::Display for Reward {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "+{} exp, +{} coins, +{} attribute",
            self.exp, self.coins, self.attribute_delta
        )
    }
}
