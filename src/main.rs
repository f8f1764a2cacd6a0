// AI Tutor GUI - Main Entry Point
// Native Rust window that asks the tutor service to explain a topic

mod state;
mod ui;

use ai_tutor_client::{Config, RequestOrchestrator};
use eframe::egui;
use state::AppState;
use tokio::runtime::Runtime;
use tracing::info;
use ui::render_app_layout;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Configure window options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("AI Tutor NG")
            .with_inner_size([820.0, 760.0])
            .with_min_inner_size([480.0, 520.0]),
        ..Default::default()
    };

    let runtime = match Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to start async runtime: {}", e);
            std::process::exit(1);
        }
    };

    let config = Config::from_env();
    info!("Configuration loaded: {:?}", config);

    let orchestrator = match RequestOrchestrator::from_config(&config, runtime.handle().clone()) {
        Ok(orchestrator) => orchestrator,
        Err(e) => {
            eprintln!("Failed to create tutor client: {}", e);
            std::process::exit(1);
        }
    };

    // Run the application
    eframe::run_native(
        "AI Tutor NG",
        options,
        Box::new(move |cc| {
            let app = TutorApp::new(orchestrator, runtime);
            app.watch_for_repaints(cc.egui_ctx.clone());
            Box::new(app)
        }),
    )
}

/// Main application struct
/// Owns the request orchestrator and the runtime its requests run on
struct TutorApp {
    /// Topic input and UI preferences
    state: AppState,
    /// Request lifecycle; dropped before the runtime so in-flight work is aborted first
    orchestrator: RequestOrchestrator,
    /// Runtime driving network requests off the UI thread
    runtime: Runtime,
}

impl TutorApp {
    /// Create a new application instance
    fn new(orchestrator: RequestOrchestrator, runtime: Runtime) -> Self {
        Self {
            state: AppState::new(),
            orchestrator,
            runtime,
        }
    }

    /// Repaint whenever the request state changes
    /// The task ends when the orchestrator is dropped
    fn watch_for_repaints(&self, ctx: egui::Context) {
        let mut rx = self.orchestrator.subscribe();
        self.runtime.spawn(async move {
            while rx.changed().await.is_ok() {
                ctx.request_repaint();
            }
        });
    }
}

impl eframe::App for TutorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        render_app_layout(ctx, &mut self.state, &self.orchestrator);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_creation() {
        let runtime = Runtime::new().unwrap();
        let orchestrator =
            RequestOrchestrator::from_config(&Config::default(), runtime.handle().clone()).unwrap();
        let app = TutorApp::new(orchestrator, runtime);

        assert!(app.state.topic.is_empty());
        assert!(!app.orchestrator.is_busy());
    }
}
