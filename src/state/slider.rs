//! Slider value and the ruler geometry derived from it.
//!
//! The ruler is drawn as a fixed set of relative cells `-h..=h`. The integer
//! part of `value / step` becomes the mark offset, and the fractional part
//! slides the cells sideways so the value sits under the center cursor.

use std::ops::RangeInclusive;

use sliding_ruler::RulerCell;

/// Current value of the demo slider.
#[derive(Debug, Clone)]
pub struct SliderState {
    value: f32,
}

impl SliderState {
    pub fn new(value: f32) -> Self {
        Self { value }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Sets the value, clamped into `bounds`.
    pub fn set_value(&mut self, value: f32, bounds: &RangeInclusive<f32>) {
        self.value = value.clamp(*bounds.start(), *bounds.end());
    }

    /// Moves the value by a horizontal drag of `dx` points. Dragging right
    /// moves the ruler right, so the value decreases.
    pub fn drag_by(&mut self, dx: f32, step: f32, cell_width: f32, bounds: &RangeInclusive<f32>) {
        if cell_width <= 0.0 {
            return;
        }
        let delta = -dx / cell_width * step;
        self.set_value(self.value + delta, bounds);
    }

    /// Number of cells on each side of the center cell.
    pub fn half_span(visible_width: f32, cell_width: f32) -> i32 {
        if cell_width <= 0.0 || !visible_width.is_finite() {
            return 0;
        }
        (visible_width / (2.0 * cell_width)).ceil() as i32 + 1
    }

    /// Relative cells covering `visible_width`.
    pub fn cells(visible_width: f32, cell_width: f32) -> Vec<RulerCell> {
        let h = Self::half_span(visible_width, cell_width);
        (-h..=h).map(RulerCell::from).collect()
    }

    /// Whole number of cells between zero and the value.
    pub fn mark_offset(&self, step: f32) -> f32 {
        if step == 0.0 {
            return 0.0;
        }
        (self.value / step).floor()
    }

    /// Horizontal offset of the first cell so the value lands at the center
    /// of a strip `visible_width` wide.
    pub fn origin_x(&self, step: f32, visible_width: f32, cell_width: f32) -> f32 {
        let h = Self::half_span(visible_width, cell_width) as f32;
        let fraction = if step == 0.0 {
            0.0
        } else {
            self.value / step - self.mark_offset(step)
        };
        visible_width / 2.0 - fraction * cell_width - h * cell_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: RangeInclusive<f32> = -50.0..=50.0;

    #[test]
    fn test_cells_are_symmetric() {
        let cells = SliderState::cells(480.0, 120.0);
        assert_eq!(cells.len(), 7);
        assert_eq!(cells.first().map(|c| c.mark()), Some(-3.0));
        assert_eq!(cells.last().map(|c| c.mark()), Some(3.0));
    }

    #[test]
    fn test_mark_offset_floors() {
        assert_eq!(SliderState::new(2.5).mark_offset(1.0), 2.0);
        assert_eq!(SliderState::new(-2.5).mark_offset(1.0), -3.0);
        assert_eq!(SliderState::new(25.0).mark_offset(10.0), 2.0);
    }

    #[test]
    fn test_value_sits_at_center() {
        let slider = SliderState::new(2.25);
        let width = 480.0;
        let cell_width = 120.0;
        let origin = slider.origin_x(1.0, width, cell_width);

        // Cell 0 (mark offset 2) starts h cells after the origin.
        let h = SliderState::half_span(width, cell_width) as f32;
        let cell_zero_x = origin + h * cell_width;
        assert_eq!(cell_zero_x + 0.25 * cell_width, width / 2.0);
    }

    #[test]
    fn test_drag_moves_value_and_clamps() {
        let mut slider = SliderState::new(0.0);
        slider.drag_by(-60.0, 1.0, 120.0, &BOUNDS);
        assert_eq!(slider.value(), 0.5);

        slider.drag_by(-1.0e6, 1.0, 120.0, &BOUNDS);
        assert_eq!(slider.value(), 50.0);
    }

    #[test]
    fn test_zero_step_is_harmless() {
        let slider = SliderState::new(3.0);
        assert_eq!(slider.mark_offset(0.0), 0.0);
        assert!(slider.origin_x(0.0, 240.0, 120.0).is_finite());
    }
}
