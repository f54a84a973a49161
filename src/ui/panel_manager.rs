//! Panel orchestration and layout management.

use crate::app::AppState;
use crate::ui::{header, ruler_panel, status_bar};

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            header::render_header(ui, state);
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(24.0);
            ruler_panel::render_ruler_panel(ui, state);
        });
    }
}
