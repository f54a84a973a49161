//! Applies the selected palette to egui.

use crate::app::AppState;

/// Coordinates theme application.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Applies the current theme to the egui context.
    ///
    /// Called every frame to ensure theme is correctly applied.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let theme = state.themes.current_theme();
        let mut visuals = if theme.name == "Light" {
            egui::Visuals::light()
        } else {
            egui::Visuals::dark()
        };

        state.themes.apply_theme(theme, &mut visuals);
        ctx.set_visuals(visuals);
    }
}
