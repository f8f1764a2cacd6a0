// Main application layout
// Handles header, topic input, and the results area for each request phase

use crate::state::AppState;
use crate::ui::components::*;
use ai_tutor_client::{ParsedAnnotation, RequestOrchestrator, RequestState, TutorResponse};
use eframe::egui;

/// Characters shown from the context passage while clamped
const CONTEXT_PREVIEW_CHARS: usize = 280;

/// Render the main application layout
/// Includes header, input row, and the phase-dependent results area
pub fn render_app_layout(ctx: &egui::Context, state: &mut AppState, orchestrator: &RequestOrchestrator) {
    // Read once per frame so the whole frame renders one consistent phase
    let request_state = orchestrator.state();

    egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(4.0);
            ui.label(egui::RichText::new("Powered by Supabase & Cohere").weak().small());
            ui.add_space(4.0);
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(720.0);
                    ui.add_space(24.0);
                    render_header(ui);
                    ui.add_space(24.0);
                    render_input_row(ui, state, orchestrator, &request_state);
                    ui.add_space(16.0);
                });

                ui.vertical(|ui| {
                    render_results(ui, state, &request_state);
                });
            });
    });
}

/// Render the title block
fn render_header(ui: &mut egui::Ui) {
    ui.label(egui::RichText::new("📖").size(32.0));
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("AI Tutor").size(36.0).strong());
        ui.label(egui::RichText::new("NG").size(36.0).strong().color(ACCENT_GREEN));
    });
    ui.label(
        egui::RichText::new("Master complex topics using local African metaphors.")
            .weak()
            .size(15.0),
    );
}

/// Render the topic input and submit button
/// Enter in the input submits, the same as clicking the button
fn render_input_row(
    ui: &mut egui::Ui,
    state: &mut AppState,
    orchestrator: &RequestOrchestrator,
    request_state: &RequestState,
) {
    let loading = request_state.is_loading();

    ui.horizontal(|ui| {
        let input = ui.add(
            egui::TextEdit::singleline(&mut state.topic)
                .hint_text("Topic (e.g. Kinetic Energy)")
                .desired_width(ui.available_width() - 140.0),
        );
        let enter_pressed = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let clicked = teach_button(ui, loading, state.can_submit(orchestrator)).clicked();
        if clicked || enter_pressed {
            if let Some(request_id) = state.submit(orchestrator) {
                tracing::debug!(request_id = %request_id, "Topic submitted from UI");
            }
        }
    });

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        phase_badge(ui, request_state);
        if loading {
            ui.spinner();
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mut show_visual_aid = state.ui_state.show_visual_aid;
            if ui.checkbox(&mut show_visual_aid, "Show illustrations").changed() {
                state.toggle_visual_aid();
            }
        });
    });
}

/// Render the area below the input for the current phase
fn render_results(ui: &mut egui::Ui, state: &mut AppState, request_state: &RequestState) {
    match request_state {
        RequestState::Idle | RequestState::Loading => {}
        RequestState::Failed { message } => error_notice(ui, message),
        RequestState::Success { payload } => {
            render_explanation(ui, payload);

            if state.ui_state.show_visual_aid {
                if let Some(url) = payload.visual_aid() {
                    ui.add_space(16.0);
                    render_visual_aid(ui, url);
                }
            }

            if let Some(annotation) = request_state.annotation() {
                ui.add_space(16.0);
                render_context_card(ui, state, &annotation);
            }
        }
    }
}

/// Render the explanation card
/// The markdown body is shown as plain text
fn render_explanation(ui: &mut egui::Ui, payload: &TutorResponse) {
    card(ui, |ui| {
        section_heading(ui, "✨", "The Explanation", egui::Color32::GRAY);
        ui.add_space(8.0);
        ui.add(egui::Label::new(egui::RichText::new(payload.response.trim()).size(15.0)).wrap(true));
    });
}

/// Render the visual illustration reference
fn render_visual_aid(ui: &mut egui::Ui, url: &str) {
    card(ui, |ui| {
        section_heading(
            ui,
            "🖼",
            "Visual Illustration",
            egui::Color32::from_rgb(96, 165, 250),
        );
        ui.add_space(8.0);
        ui.hyperlink_to(url, url);
    });
}

/// Render the context card with passage and source/region badges
fn render_context_card(ui: &mut egui::Ui, state: &mut AppState, annotation: &ParsedAnnotation) {
    card(ui, |ui| {
        section_heading(ui, "📍", "Context Data", ACCENT_GREEN);
        ui.add_space(8.0);

        let text = if state.ui_state.context_expanded {
            annotation.content.clone()
        } else {
            clamp_text(&annotation.content, CONTEXT_PREVIEW_CHARS)
        };
        let passage = ui.add(
            egui::Label::new(egui::RichText::new(text).size(13.0))
                .wrap(true)
                .sense(egui::Sense::click()),
        );
        if passage.clicked() {
            state.toggle_context();
        }

        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            metadata_badge(ui, "📄", &annotation.source, egui::Color32::from_rgb(147, 197, 253));
            metadata_badge(ui, "🌍", &annotation.region, egui::Color32::from_rgb(216, 180, 254));
        });
    });
}
