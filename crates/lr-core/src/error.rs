use crate::challenge::ChallengeId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by the core data model.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A challenge draft was rejected before it became a challenge.
    #[error("invalid challenge draft: {0}")]
    InvalidDraft(String),

    /// Text could not be read as one of the five attributes.
    #[error("unknown attribute: \"{0}\"")]
    UnknownAttribute(String),

    /// Two challenges in one player share an id.
    #[error("duplicate challenge id: {0}")]
    DuplicateChallenge(ChallengeId),

    /// A player snapshot breaks one of the model invariants.
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// A snapshot could not be parsed or written as JSON.
    #[error("snapshot json: {0}")]
    Json(#[from] serde_json::Error),
}
