// Application state management
// Holds the topic input and UI preferences; request lifecycle lives in the orchestrator

use ai_tutor_client::{RequestId, RequestOrchestrator};

/// Main application state
/// Everything the window owns besides the request lifecycle itself
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Current contents of the topic input
    pub topic: String,
    /// Topic of the most recent accepted submission
    pub last_topic: Option<String>,
    /// UI state preferences
    pub ui_state: UiState,
}

/// UI-specific state
#[derive(Debug, Clone)]
pub struct UiState {
    /// Whether the context passage is shown in full or clamped
    pub context_expanded: bool,
    /// Whether the visual illustration section is shown
    pub show_visual_aid: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            context_expanded: false,
            show_visual_aid: true,
        }
    }
}

impl AppState {
    /// Create a new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the submit control should be enabled
    pub fn can_submit(&self, orchestrator: &RequestOrchestrator) -> bool {
        !orchestrator.is_busy() && !self.topic.trim().is_empty()
    }

    /// Submit the current topic
    /// Does nothing while a request is loading or when the topic is blank
    /// Returns the id of the started request, if any
    pub fn submit(&mut self, orchestrator: &RequestOrchestrator) -> Option<RequestId> {
        if orchestrator.is_busy() {
            return None;
        }
        let request_id = orchestrator.submit(&self.topic)?;
        self.last_topic = Some(self.topic.clone());
        self.ui_state.context_expanded = false;
        Some(request_id)
    }

    /// Show or hide the visual illustration section
    pub fn toggle_visual_aid(&mut self) {
        self.ui_state.show_visual_aid = !self.ui_state.show_visual_aid;
    }

    /// Toggle the clamped/expanded context passage
    pub fn toggle_context(&mut self) {
        self.ui_state.context_expanded = !self.ui_state.context_expanded;
    }
}
