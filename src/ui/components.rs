// Reusable UI components
// Provides common UI elements for the application

use ai_tutor_client::RequestState;
use eframe::egui;

/// Accent used for the tutor's primary actions and headings
pub const ACCENT_GREEN: egui::Color32 = egui::Color32::from_rgb(52, 211, 153);

/// Render a phase indicator with colored text
/// Colors: Idle (gray), Loading (yellow), Success (green), Failed (red)
pub fn phase_badge(ui: &mut egui::Ui, state: &RequestState) {
    let (text, text_color) = match state {
        RequestState::Idle => ("Ready", egui::Color32::GRAY),
        RequestState::Loading => ("Thinking...", egui::Color32::from_rgb(220, 180, 0)), // Yellow
        RequestState::Success { .. } => ("Answered", ACCENT_GREEN),
        RequestState::Failed { .. } => ("Failed", egui::Color32::from_rgb(220, 0, 0)), // Red
    };

    ui.colored_label(text_color, text);
}

/// Render the "Teach Me" button, disabled while a request is loading
pub fn teach_button(ui: &mut egui::Ui, loading: bool, enabled: bool) -> egui::Response {
    let label = if loading {
        egui::RichText::new("...").strong()
    } else {
        egui::RichText::new("🔍 Teach Me").strong().color(egui::Color32::WHITE)
    };
    let button = egui::Button::new(label).fill(egui::Color32::from_rgb(22, 163, 74));
    ui.add_enabled(enabled && !loading, button)
}

/// Inline error notice that replaces the results area
pub fn error_notice(ui: &mut egui::Ui, message: &str) {
    egui::Frame::none()
        .fill(egui::Color32::from_rgba_unmultiplied(239, 68, 68, 25))
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(127, 29, 29)))
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").color(egui::Color32::from_rgb(254, 202, 202)));
                ui.label(egui::RichText::new(message).color(egui::Color32::from_rgb(254, 202, 202)));
            });
        });
}

/// Section heading in small caps style
pub fn section_heading(ui: &mut egui::Ui, icon: &str, text: &str, color: egui::Color32) {
    ui.label(
        egui::RichText::new(format!("{} {}", icon, text.to_uppercase()))
            .small()
            .strong()
            .color(color),
    );
}

/// Pill-shaped metadata badge (source, region)
pub fn metadata_badge(ui: &mut egui::Ui, icon: &str, text: &str, color: egui::Color32) {
    egui::Frame::none()
        .stroke(egui::Stroke::new(1.0, color.gamma_multiply(0.4)))
        .rounding(egui::Rounding::same(12.0))
        .inner_margin(egui::Margin::symmetric(10.0, 4.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(format!("{} {}", icon, text)).small().color(color));
        });
}

/// Card container used for results sections
pub fn card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::none()
        .fill(ui.visuals().faint_bg_color)
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .rounding(egui::Rounding::same(12.0))
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, add_contents)
        .inner
}

/// Shorten a passage for the clamped context view
/// Cuts on a char boundary and appends an ellipsis when shortened
pub fn clamp_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_chars).collect();
    format!("{}…", truncated.trim_end())
}
