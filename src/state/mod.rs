// State management module
// Handles topic input and UI state

pub mod app_state;

pub use app_state::AppState;
