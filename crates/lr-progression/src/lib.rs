//! Progression engine for LifeRPG.
//!
//! Turns player actions into new player snapshots: reward calculation,
//! leveling, challenge bookkeeping, and the daily reset. The
//! [`ProgressionEngine`] ties these together behind an explicit session
//! state and persists every snapshot through a [`SnapshotStore`].

pub mod challenges;
pub mod config;
pub mod daily;
pub mod engine;
pub mod error;
pub mod leveling;
pub mod reward;
pub mod storage;

pub use challenges::{Completion, SkipReason};
pub use config::{EngineConfig, PenaltyPolicy};
pub use daily::DailyOutcome;
pub use engine::{ProgressionEngine, SessionState};
pub use error::{EngineError, EngineResult, StoreError, StoreResult};
pub use leveling::{LevelOutcome, resolve_level};
pub use reward::{Reward, reward_for};
pub use storage::{JsonFileStore, MemoryStore, SnapshotStore};
