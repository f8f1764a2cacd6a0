// State management module
// Request lifecycle phases and generation tokens

pub mod request_state;

pub use request_state::{RequestId, RequestState, Snapshot};
