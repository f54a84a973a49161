//! Centralized application state for the ruler demo.

use sliding_ruler::{
    Ruler, RulerCache, RulerError, RulerNode, RulerSettings, RulerStyle, StyleRegistry,
    ThemeManager,
};
use std::sync::Arc;

use crate::state::SliderState;

/// Main application state.
pub struct AppState {
    /// Persisted preferences
    pub settings: RulerSettings,

    /// Current slider value
    pub slider: SliderState,

    /// Available styles
    pub styles: StyleRegistry,

    /// Available palettes and the current selection
    pub themes: ThemeManager,

    /// Last rendered ruler, reused while unchanged
    pub cache: RulerCache,

    /// Part of the bounds covered by the cached ruler, relative to its
    /// first cell. Tick dimming follows it even when the style draws no marks.
    bounds_window: Option<(f32, f32)>,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(RulerSettings::default())
    }
}

impl AppState {
    /// Creates the state from loaded settings. Unknown style or theme names
    /// fall back to the defaults and leave an error message.
    pub fn with_settings(mut settings: RulerSettings) -> Self {
        let styles = StyleRegistry::new();
        let mut themes = ThemeManager::new();
        let mut error_message = None;

        if let Err(err) = styles.get_style(&settings.style) {
            tracing::warn!(%err, "falling back to default style");
            error_message = Some(err.to_string());
            settings.style = RulerSettings::default().style;
        }
        if let Err(err) = themes.set_current_theme(&settings.theme) {
            tracing::warn!(%err, "falling back to default theme");
            error_message = Some(err.to_string());
            settings.theme = themes.current_theme_name().to_string();
        }

        let slider = SliderState::new(settings.clamped_value());

        Self {
            settings,
            slider,
            styles,
            themes,
            cache: RulerCache::new(),
            bounds_window: None,
            error_message,
        }
    }

    /// The selected style.
    pub fn style(&self) -> Result<Arc<dyn RulerStyle>, RulerError> {
        self.styles.get_style(&self.settings.style)
    }

    pub fn select_style(&mut self, name: &str) {
        match self.styles.get_style(name) {
            Ok(_) => {
                self.settings.style = name.to_string();
                self.error_message = None;
            }
            Err(err) => self.error_message = Some(err.to_string()),
        }
    }

    pub fn select_theme(&mut self, name: &str) {
        match self.themes.set_current_theme(name) {
            Ok(()) => {
                self.settings.theme = name.to_string();
                self.error_message = None;
            }
            Err(err) => self.error_message = Some(err.to_string()),
        }
    }

    /// Sets the step, ignoring non-positive values.
    pub fn set_step(&mut self, step: f32) {
        if step > 0.0 && step.is_finite() {
            self.settings.step = step;
        }
    }

    /// Moves the slider by a horizontal drag.
    pub fn drag_by(&mut self, dx: f32, cell_width: f32) {
        let bounds = self.settings.bounds_range();
        self.slider.drag_by(dx, self.settings.step, cell_width, &bounds);
        self.settings.value = self.slider.value();
    }

    /// Builds this frame's ruler for a strip `visible_width` wide.
    pub fn build_ruler(&self, visible_width: f32, cell_width: f32) -> Ruler {
        Ruler::new(
            SliderState::cells(visible_width, cell_width),
            self.settings.step,
            self.slider.mark_offset(self.settings.step),
            self.settings.bounds_range(),
            Some(Arc::new(self.settings.formatter())),
        )
    }

    /// Runs this frame's ruler through the cache with the selected style.
    pub fn ruler_node(&mut self, visible_width: f32) -> Result<&RulerNode, RulerError> {
        let style = self.style()?;
        let ruler = self.build_ruler(visible_width, style.cell_width());

        // `equals` ignores the mark offset for styles without marks, but the
        // offset still moves ticks across the bounds.
        let window = bounds_window(&ruler);
        if window != self.bounds_window {
            tracing::debug!(?window, "bounds window moved, invalidating ruler cache");
            self.cache.invalidate();
            self.bounds_window = window;
        }

        Ok(self.cache.update(ruler, style.as_ref()))
    }
}

/// Intersection of the ruler's value span with its bounds, measured from the
/// position of the first cell. `None` when the span lies outside the bounds.
fn bounds_window(ruler: &Ruler) -> Option<(f32, f32)> {
    let (first, last) = (ruler.cells().first()?, ruler.cells().last()?);
    let start = ruler.position(first);
    let end = ruler.position(last) + ruler.step();
    let (span_lo, span_hi) = if start <= end { (start, end) } else { (end, start) };

    let lo = ruler.bounds().start().max(span_lo);
    let hi = ruler.bounds().end().min(span_hi);
    (lo <= hi).then(|| (lo - start, hi - start))
}
