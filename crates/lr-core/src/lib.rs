//! Core types for LifeRPG: attributes, stats, challenges, and the player.
//!
//! This crate is the data model the progression engine operates on. It has
//! no behavior beyond construction, lookup, and snapshot validation; all
//! state transitions live in `lr-progression`.

/// The five tracked character attributes and their scores.
pub mod attribute;
/// Challenges (habits), their difficulty tiers, and drafts.
pub mod challenge;
/// Error types used throughout the crate.
pub mod error;
/// The player aggregate root and its snapshot validation.
pub mod player;
/// Challenge suggestions coming from the advisor service.
pub mod proposal;
/// Numeric progression fields (hp, exp, level, coins).
pub mod stats;

/// Re-export attribute types.
pub use attribute::{Attribute, AttributeScores};
/// Re-export challenge types.
pub use challenge::{Challenge, ChallengeDraft, ChallengeId, Difficulty};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export player types.
pub use player::{Player, PlayerId};
/// Re-export proposal types.
pub use proposal::QuestProposal;
/// Re-export stat types.
pub use stats::PlayerStats;
