//! Failure taxonomy for a login submission.
//!
//! ERROR HANDLING
//! ==============
//! Every failure of the round trip lands in one of these variants and is
//! stored in `SubmissionState::Failed`; the `Display` output is what the
//! error banner shows.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Shown when a non-2xx body cannot be read as `{ "message": ... }`.
pub const MALFORMED_ERROR_FALLBACK: &str = "unexpected error response from server";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The auth service rejected the credentials with a structured message.
    #[error("{status} - {status_text} - {message}")]
    Rejected { status: u16, status_text: String, message: String },

    /// Non-2xx response whose body is not the expected JSON error shape.
    #[error("{status} - {status_text} - {}", MALFORMED_ERROR_FALLBACK)]
    MalformedErrorBody { status: u16, status_text: String, detail: String },

    /// 2xx response whose body is not JSON.
    #[error("invalid response body: {0}")]
    InvalidResponse(String),

    /// The request body could not be serialized.
    #[error("request encoding failed: {0}")]
    Encode(String),
}
