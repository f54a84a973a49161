//! Header panel UI rendering
//!
//! Style, step and theme controls above the ruler.

use eframe::egui;
use egui::Color32;

use crate::app::AppState;

const STEP_CHOICES: [f32; 5] = [0.1, 1.0, 5.0, 10.0, 100.0];

/// Renders the header controls.
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        let old_style = state.settings.style.clone();
        let mut current_style = old_style.clone();
        ui.label("Style:");
        egui::ComboBox::from_id_salt("style_selector")
            .selected_text(&current_style)
            .show_ui(ui, |ui| {
                for style_name in state.styles.list_styles() {
                    ui.selectable_value(&mut current_style, style_name.to_string(), style_name);
                }
            });
        if old_style != current_style {
            state.select_style(&current_style);
        }

        ui.separator();

        let mut step = state.settings.step;
        ui.label("Step:");
        egui::ComboBox::from_id_salt("step_selector")
            .selected_text(format!("{}", step))
            .show_ui(ui, |ui| {
                for choice in STEP_CHOICES {
                    ui.selectable_value(&mut step, choice, format!("{}", choice));
                }
            });
        if step != state.settings.step {
            state.set_step(step);
        }

        ui.separator();

        let bounds = state.settings.bounds_range();
        let mut value = state.slider.value();
        if ui
            .add(egui::DragValue::new(&mut value).range(bounds.clone()).speed(0.1))
            .changed()
        {
            state.slider.set_value(value, &bounds);
            state.settings.value = state.slider.value();
        }

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.themes.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.themes.list_themes() {
                        ui.selectable_value(&mut current_theme, theme_name.to_string(), theme_name);
                    }
                });

            if old_theme != current_theme {
                state.select_theme(&current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(Color32::RED, err);
    }
}
