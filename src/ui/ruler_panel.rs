//! Ruler strip with drag handling.
//!
//! Each frame builds a fresh ruler from the slider state, passes it through
//! the cache, and paints the resulting node under a center cursor.

use eframe::egui;
use sliding_ruler::paint::{paint_cursor, paint_ruler};

use crate::app::AppState;
use crate::state::SliderState;

const RULER_HEIGHT: f32 = 48.0;

/// Renders the ruler and applies horizontal drags to the slider value.
pub fn render_ruler_panel(ui: &mut egui::Ui, state: &mut AppState) {
    let size = egui::vec2(ui.available_width(), RULER_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::drag());
    let response = response.on_hover_cursor(egui::CursorIcon::ResizeHorizontal);

    let style = match state.style() {
        Ok(style) => style,
        Err(err) => {
            state.error_message = Some(err.to_string());
            return;
        }
    };
    let cell_width = style.cell_width();

    if response.dragged() {
        let dx = response.drag_delta().x;
        if dx != 0.0 {
            state.drag_by(dx, cell_width);
        }
    }

    let origin_x = state.slider.origin_x(state.settings.step, rect.width(), cell_width);
    let colors = state.themes.current_theme().colors.clone();
    let painter = ui.painter_at(rect);
    match state.ruler_node(rect.width()) {
        Ok(node) => paint_ruler(&painter, rect, node, origin_x, &colors),
        Err(err) => {
            state.error_message = Some(err.to_string());
            return;
        }
    }
    paint_cursor(&painter, rect, &colors);

    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        let formatter = state.settings.formatter();
        ui.heading(sliding_ruler::MarkFormatter::format(&formatter, state.slider.value()));
        ui.small(format!(
            "{} cells, mark offset {}",
            SliderState::cells(rect.width(), cell_width).len(),
            state.slider.mark_offset(state.settings.step)
        ));
    });
}
