//! AI Tutor client library
//!
//! Sends a topic to the tutor service, tracks the request lifecycle and
//! parses the provenance annotation of successful responses.
//! The command-line binary is in `src/bin/teach.rs`.

pub mod annotation;
pub mod api;
pub mod config;
pub mod error;
pub mod orchestrator;
/// Request lifecycle state
///
/// Phases, payload and the generation token of the latest request.
pub mod state;

pub use annotation::{parse, ParsedAnnotation};
pub use api::{TutorClient, TutorResponse};
pub use config::Config;
pub use error::ClientError;
pub use orchestrator::{RequestOrchestrator, TutorBackend};
pub use state::{RequestId, RequestState, Snapshot};
