//! Configuration for the progression engine.

/// Fixed key under which the player snapshot is stored.
pub const DEFAULT_STORAGE_KEY: &str = "life-rpg-user";

/// What happens to hit points when a new day starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PenaltyPolicy {
    /// Evaluated on every rollover, costs nothing.
    #[default]
    None,
    /// Lose this many hit points (floored at 0) on a rollover, if the
    /// player has at least one challenge.
    FlatDamage(u32),
}

impl PenaltyPolicy {
    /// Hit points lost for a rollover from an earlier day.
    pub fn damage(self, challenge_count: usize) -> u32 {
        match self {
            Self::None => 0,
            Self::FlatDamage(_) if challenge_count == 0 => 0,
            Self::FlatDamage(hp) => hp,
        }
    }
}

/// Configuration for a [`ProgressionEngine`](crate::engine::ProgressionEngine).
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Penalty applied on day rollover.
    pub penalty: PenaltyPolicy,
    /// Storage key for the player snapshot.
    pub storage_key: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            penalty: PenaltyPolicy::None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl EngineConfig {
    /// Set the rollover penalty.
    pub fn with_penalty(mut self, penalty: PenaltyPolicy) -> Self {
        self.penalty = penalty;
        self
    }

    /// Set the storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.penalty, PenaltyPolicy::None);
        assert_eq!(cfg.storage_key, "life-rpg-user");
    }

    #[test]
    fn builder_methods() {
        let cfg = EngineConfig::default()
            .with_penalty(PenaltyPolicy::FlatDamage(5))
            .with_storage_key("alt");
        assert_eq!(cfg.penalty, PenaltyPolicy::FlatDamage(5));
        assert_eq!(cfg.storage_key, "alt");
    }

    #[test]
    fn penalty_damage() {
        assert_eq!(PenaltyPolicy::None.damage(3), 0);
        assert_eq!(PenaltyPolicy::FlatDamage(5).damage(3), 5);
        assert_eq!(PenaltyPolicy::FlatDamage(5).damage(0), 0);
    }
}
