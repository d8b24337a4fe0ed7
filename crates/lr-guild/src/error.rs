//! Error types for advisor requests.
//!
//! These never leave the crate's soft-failing [`Advisor`](crate::Advisor)
//! methods; they exist for the `try_*` calls and for logging.

/// Result type for advisor requests.
pub type AdvisorResult<T> = Result<T, AdvisorError>;

/// Errors that can occur while talking to the text service.
#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    /// No API key is configured.
    #[error("no API key configured")]
    MissingCredentials,

    /// The HTTP request failed.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("service returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly truncated.
        body: String,
    },

    /// The service returned no text.
    #[error("empty response")]
    EmptyResponse,

    /// The returned text was not the JSON we asked for.
    #[error("invalid JSON in response: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
