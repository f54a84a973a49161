//! Status bar UI rendering
//!
//! Shows the active style and how often the ruler cache rendered or reused
//! its node.

use eframe::egui;
use egui::RichText;

use crate::app::AppState;

/// Renders the status panel at the bottom of the window.
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let bounds = state.settings.bounds_range();
        ui.label(RichText::new(format!(
            "Style: {} | Bounds: {}..={} | Renders: {} | Reused: {}",
            state.settings.style,
            bounds.start(),
            bounds.end(),
            state.cache.render_count(),
            state.cache.skip_count(),
        )).strong());
    });
}
