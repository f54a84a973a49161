//! State management modules for the ruler demo.
//!
//! This module contains state-only logic (no UI concerns):
//! - Slider state (current value, derived cells and offsets)

mod slider;

pub use slider::SliderState;
