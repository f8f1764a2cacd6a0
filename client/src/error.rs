//! Error types for the tutor client
//!
//! Every failure that can happen between submitting a topic and receiving a
//! typed response is represented here. The orchestrator absorbs all of them
//! and surfaces only [`ClientError::user_message`] to presentation.

use thiserror::Error;

/// Fixed user-facing message for every transport-level failure
pub const CONNECTION_FAILED_MESSAGE: &str = "Could not reach the AI Tutor. Is the backend running?";

/// Errors that can occur while talking to the tutor service
#[derive(Error, Debug)]
pub enum ClientError {
    /// Topic was empty or whitespace-only; no request is issued
    #[error("Topic is empty")]
    EmptyInput,

    /// Connection refused, DNS failure, or any other network-level error
    #[error("Transport error: {0}")]
    Transport(String),

    /// Service answered with a non-2xx status
    #[error("Tutor service returned error status {status}: {body}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Response body, if it could be read
        body: String,
    },

    /// 2xx response whose body is not a valid `TutorResponse`
    #[error("Failed to decode tutor response: {0}")]
    Decode(String),

    /// Request did not complete within the configured timeout
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),
}

impl ClientError {
    /// Whether this error belongs to the collapsed "could not reach the tutor" category
    pub fn is_transport_failure(&self) -> bool {
        !matches!(self, ClientError::EmptyInput)
    }

    /// Human-readable message shown to the user
    ///
    /// Transport failures all share one message; the underlying status or
    /// detail is never exposed.
    pub fn user_message(&self) -> &'static str {
        match self {
            ClientError::EmptyInput => "Please enter a topic.",
            _ => CONNECTION_FAILED_MESSAGE,
        }
    }
}
