//! Request lifecycle orchestrator
//!
//! Owns the single [`RequestState`] of the client and drives it through
//! Idle -> Loading -> Success | Failed. Each accepted submission gets a
//! fresh [`RequestId`]; the previous in-flight task is aborted and any
//! outcome that still arrives for an older id is discarded, so the final
//! state always reflects the request initiated last.

use crate::api::TutorClient;
use crate::config::Config;
use crate::error::ClientError;
use crate::orchestrator::backend::TutorBackend;
use crate::state::{RequestId, RequestState, Snapshot};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

/// Drives topic queries against a [`TutorBackend`]
///
/// State lives in a `watch` channel: every transition replaces the whole
/// [`Snapshot`] at once, so readers never observe a partial update.
pub struct RequestOrchestrator {
    backend: Arc<dyn TutorBackend>,
    runtime: Handle,
    state_tx: Arc<watch::Sender<Snapshot>>,
    in_flight: Mutex<Option<JoinHandle<()>>>,
}

impl RequestOrchestrator {
    /// Create an orchestrator spawning requests on `runtime`
    pub fn new(backend: Arc<dyn TutorBackend>, runtime: Handle) -> Self {
        let (state_tx, _) = watch::channel(Snapshot::default());
        Self {
            backend,
            runtime,
            state_tx: Arc::new(state_tx),
            in_flight: Mutex::new(None),
        }
    }

    /// Create an orchestrator backed by an HTTP [`TutorClient`]
    ///
    /// # Errors
    /// * Returns `ClientError::Transport` if the HTTP client cannot be built.
    pub fn from_config(config: &Config, runtime: Handle) -> Result<Self, ClientError> {
        let client = TutorClient::new(config)?;
        Ok(Self::new(Arc::new(client), runtime))
    }

    /// Submit a topic
    ///
    /// Whitespace-only topics are ignored and return `None` without touching
    /// the state. Otherwise the state moves to `Loading` (clearing any prior
    /// payload or error), the previous request is cancelled, and the id of
    /// the new request is returned.
    pub fn submit(&self, topic: &str) -> Option<RequestId> {
        if topic.trim().is_empty() {
            debug!("Ignoring empty topic");
            return None;
        }

        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = in_flight.take() {
            previous.abort();
        }

        let mut request_id = RequestId::default();
        self.state_tx.send_modify(|snapshot| {
            snapshot.request_id = snapshot.request_id.next();
            snapshot.state = RequestState::Loading;
            request_id = snapshot.request_id;
        });

        let trace_id = Uuid::new_v4();
        let span = info_span!(
            "teach",
            request_id = %request_id,
            trace_id = %trace_id,
        );

        let backend = Arc::clone(&self.backend);
        let state_tx = Arc::clone(&self.state_tx);
        let subject = topic.to_string();

        let task = async move {
            let start = Instant::now();
            info!(subject_len = subject.len(), "Submitting topic");

            let next = match backend.teach(&subject).await {
                Ok(payload) => RequestState::Success { payload },
                Err(e) => {
                    if e.is_transport_failure() {
                        warn!(error = %e, "Tutor request failed");
                    } else {
                        debug!(error = %e, "Tutor request rejected");
                    }
                    RequestState::Failed {
                        message: e.user_message().to_string(),
                    }
                }
            };

            let phase = next.phase();
            if apply_outcome(&state_tx, request_id, next) {
                info!(
                    phase = phase,
                    duration_ms = start.elapsed().as_millis() as u64,
                    "Request completed"
                );
            } else {
                debug!(phase = phase, "Discarding stale outcome");
            }
        };

        *in_flight = Some(self.runtime.spawn(task.instrument(span)));
        Some(request_id)
    }

    /// Cancel the in-flight request, if any
    ///
    /// Returns `true` if a request was loading; the state goes back to
    /// `Idle` and the request's eventual outcome is ignored.
    pub fn cancel(&self) -> bool {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(task) = in_flight.take() {
            task.abort();
        }

        let cancelled = self.state_tx.send_if_modified(|snapshot| {
            if !snapshot.state.is_loading() {
                return false;
            }
            // Bump the generation so a late outcome counts as stale
            snapshot.request_id = snapshot.request_id.next();
            snapshot.state = RequestState::Idle;
            true
        });

        if cancelled {
            info!("Cancelled in-flight request");
        }
        cancelled
    }

    /// Current state
    pub fn state(&self) -> RequestState {
        self.state_tx.borrow().state.clone()
    }

    /// Current state with the id of the latest request
    pub fn snapshot(&self) -> Snapshot {
        self.state_tx.borrow().clone()
    }

    /// Whether a request is in flight; presentation disables submit while true
    pub fn is_busy(&self) -> bool {
        self.state_tx.borrow().state.is_loading()
    }

    /// Receiver notified on every state transition
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.state_tx.subscribe()
    }

    /// Wait until no request is loading and return the resulting state
    pub async fn settled(&self) -> RequestState {
        let mut rx = self.state_tx.subscribe();
        let state = match rx.wait_for(|snapshot| !snapshot.state.is_loading()).await {
            Ok(snapshot) => snapshot.state.clone(),
            Err(_) => self.state(),
        };
        state
    }
}

impl Drop for RequestOrchestrator {
    fn drop(&mut self) {
        let in_flight = self
            .in_flight
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(task) = in_flight.take() {
            task.abort();
        }
    }
}

/// Apply `next` only if `request_id` is still the latest request
///
/// Returns `true` if the state was updated.
fn apply_outcome(
    state_tx: &watch::Sender<Snapshot>,
    request_id: RequestId,
    next: RequestState,
) -> bool {
    state_tx.send_if_modified(|snapshot| {
        if snapshot.request_id != request_id {
            return false;
        }
        snapshot.state = next;
        true
    })
}
