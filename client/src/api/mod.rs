//! Tutor service HTTP API
//!
//! Wire types for the `/teach` endpoint and the reqwest-based client that
//! calls it.

pub mod client;
pub mod types;

pub use client::TutorClient;
pub use types::{TeachRequest, TutorResponse};
