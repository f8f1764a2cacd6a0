//! Orchestrator module
//!
//! Drives one topic query at a time through its lifecycle. The backend
//! seam keeps the state machine independent of the HTTP transport.

pub mod backend;
pub mod lifecycle;

pub use backend::TutorBackend;
pub use lifecycle::RequestOrchestrator;
