//! Style strategy seam.
//!
//! A style turns the configuration of one cell into a [`CellBody`], the
//! virtual node a host paints. The ruler owns the geometry (which cells,
//! where their marks land), the style owns the appearance.

use std::fmt;
use std::ops::RangeInclusive;
use std::sync::Arc;

use crate::formatter::MarkFormatter;

/// Everything a style needs to build one cell.
#[derive(Clone)]
pub struct CellConfiguration {
    /// Scaled position of the cell: `(cell.mark + mark_offset) * step`.
    pub mark: f32,
    /// Inclusive range of valid values. Styles dim ticks outside it.
    pub bounds: RangeInclusive<f32>,
    /// Value covered by one cell.
    pub step: f32,
    /// Text conversion for labels. `None` means the style picks its own.
    pub formatter: Option<Arc<dyn MarkFormatter>>,
}

impl fmt::Debug for CellConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellConfiguration")
            .field("mark", &self.mark)
            .field("bounds", &self.bounds)
            .field("step", &self.step)
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}

/// Length class of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickKind {
    /// Tick at the start of a cell, under the label.
    Unit,
    /// Tick in the middle of a cell.
    Half,
    /// Every other subdivision.
    Fraction,
}

impl TickKind {
    /// Tick length as a share of the ruler height.
    pub fn relative_length(self) -> f32 {
        match self {
            TickKind::Unit => 0.5,
            TickKind::Half => 0.35,
            TickKind::Fraction => 0.2,
        }
    }
}

/// Where ticks hang inside the ruler strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TickAlignment {
    #[default]
    Top,
    Center,
}

/// A single tick inside a cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Horizontal offset from the cell's left edge.
    pub offset: f32,
    pub kind: TickKind,
    /// Whether the value this tick stands for lies within the bounds.
    pub in_bounds: bool,
}

/// Text drawn under a unit tick.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkLabel {
    pub text: String,
    /// Horizontal offset from the cell's left edge; the label is centred on it.
    pub offset: f32,
    pub in_bounds: bool,
}

/// Rendered body of one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellBody {
    pub width: f32,
    pub alignment: TickAlignment,
    pub ticks: Vec<Tick>,
    pub label: Option<MarkLabel>,
}

impl CellBody {
    /// A body with no ticks and no label.
    pub fn empty(width: f32) -> Self {
        Self {
            width,
            alignment: TickAlignment::Top,
            ticks: Vec::new(),
            label: None,
        }
    }
}

/// Pluggable visual theme for ruler cells.
///
/// Implementations must be pure: the same configuration always yields the
/// same body.
pub trait RulerStyle: Send + Sync {
    /// Name used by registries and persisted settings.
    fn name(&self) -> &str;

    /// Width of one cell in points.
    fn cell_width(&self) -> f32;

    /// Builds the body of the cell described by `configuration`.
    fn make_cell_body(&self, configuration: &CellConfiguration) -> CellBody;

    /// Whether this style draws text marks.
    ///
    /// When `false` the mark offset has no visible effect, and the ruler
    /// ignores it during change detection.
    fn has_marks(&self) -> bool;
}
