//! Backend seam used by the orchestrator
//!
//! The orchestrator only needs "turn a topic into a response". Production
//! code plugs in [`crate::api::TutorClient`]; tests plug in fakes that
//! control when each request resolves.

use crate::api::types::TutorResponse;
use crate::error::ClientError;
use async_trait::async_trait;

/// Something that can answer a teaching request
#[async_trait]
pub trait TutorBackend: Send + Sync {
    /// Explain `subject`, returning the typed service response
    async fn teach(&self, subject: &str) -> Result<TutorResponse, ClientError>;
}
