//! Ruler cells.
//!
//! A cell is one tick-mark unit of the ruler. The enclosing control computes
//! the visible cells; the ruler only reads their marks.

/// Stable identifier of a cell, derived from its mark.
///
/// Used as the key of the cell's child in a rendered [`crate::RulerNode`],
/// so a host can tell cells apart when the sequence shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(u32);

impl CellId {
    /// Returns the raw key value.
    pub fn raw(self) -> u32 {
        self.0
    }
}

/// One tick-mark unit of the ruler, wrapping its raw mark position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RulerCell {
    mark: f32,
}

impl RulerCell {
    /// Creates a cell at the given mark.
    pub fn new(mark: f32) -> Self {
        Self { mark }
    }

    /// The raw mark position, before offset and scaling.
    pub fn mark(&self) -> f32 {
        self.mark
    }

    /// Identity of this cell. `-0.0` and `0.0` share an id.
    pub fn id(&self) -> CellId {
        let mark = if self.mark == 0.0 { 0.0 } else { self.mark };
        CellId(mark.to_bits())
    }
}

impl From<f32> for RulerCell {
    fn from(mark: f32) -> Self {
        Self::new(mark)
    }
}

impl From<i32> for RulerCell {
    fn from(mark: i32) -> Self {
        Self::new(mark as f32)
    }
}
