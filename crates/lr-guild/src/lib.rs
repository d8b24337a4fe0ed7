//! Quest suggestions and coaching for LifeRPG.
//!
//! The [`Advisor`] trait is the progression engine's view of the external
//! text service. Both of its calls fail soft: a missing API key, a network
//! error, or an unreadable reply turns into a fixed fallback value instead
//! of an error. [`GeminiAdvisor`] talks to the Gemini `generateContent`
//! API; [`AdviceBoard`] holds the latest results for display.

pub mod advisor;
pub mod board;
pub mod config;
pub mod error;
pub mod gemini;
pub mod prompt;

pub use advisor::{Advisor, fallback_proposal, suggest_for};
pub use board::{AdviceBoard, SuggestionBatch};
pub use config::AdvisorConfig;
pub use error::{AdvisorError, AdvisorResult};
pub use gemini::GeminiAdvisor;
