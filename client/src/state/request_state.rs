// Request lifecycle state
// One topic query moves Idle -> Loading -> Success | Failed

use crate::annotation::{self, ParsedAnnotation};
use crate::api::types::TutorResponse;
use std::fmt;

/// Generation token assigned to every accepted submission
///
/// Ids increase monotonically per orchestrator; only the outcome of the
/// request carrying the latest id is ever applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestId(pub u64);

impl RequestId {
    /// The id that follows this one
    pub fn next(self) -> Self {
        RequestId(self.0 + 1)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Phase of the current query, with its payload or error
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// Service answered with a well-formed response
    Success {
        /// Typed response body
        payload: TutorResponse,
    },
    /// Request failed; `message` is safe to show to the user
    Failed {
        /// Fixed human-readable message
        message: String,
    },
}

impl RequestState {
    /// Whether a request is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    /// Short name of the phase, for logs and status lines
    pub fn phase(&self) -> &'static str {
        match self {
            RequestState::Idle => "idle",
            RequestState::Loading => "loading",
            RequestState::Success { .. } => "success",
            RequestState::Failed { .. } => "failed",
        }
    }

    /// Response payload, only in `Success`
    pub fn payload(&self) -> Option<&TutorResponse> {
        match self {
            RequestState::Success { payload } => Some(payload),
            _ => None,
        }
    }

    /// Error message, only in `Failed`
    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestState::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Parsed provenance of the current payload
    ///
    /// Recomputed on every call from `source_data`; nothing is cached.
    pub fn annotation(&self) -> Option<ParsedAnnotation> {
        self.payload()
            .map(|payload| annotation::parse(&payload.source_data))
    }
}

/// Current state together with the id of the request that produced it
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    /// Latest accepted request, `RequestId(0)` before the first submit
    pub request_id: RequestId,
    /// Lifecycle state
    pub state: RequestState,
}
