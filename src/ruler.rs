//! The ruler view: a row of styled tick cells.
//!
//! A [`Ruler`] is rebuilt by the enclosing control on every update. The host
//! compares it with the previous instance through [`equals`] and only calls
//! [`Ruler::render`] when they differ.
//!
//! # Examples
//!
//! ```
//! use sliding_ruler::{PrimaryStyle, Ruler, RulerCell};
//!
//! let cells: Vec<RulerCell> = (-1..=1).map(RulerCell::from).collect();
//! let ruler = Ruler::new(cells, 10.0, 0.0, -100.0..=100.0, None);
//! let node = ruler.render(&PrimaryStyle::new());
//! assert_eq!(node.len(), 3);
//! assert!(node.animation.is_none());
//! ```

use std::fmt;
use std::ops::RangeInclusive;
use std::sync::Arc;

use crate::cell::RulerCell;
use crate::formatter::MarkFormatter;
use crate::node::{KeyedChild, Layout, RulerNode};
use crate::style::{CellConfiguration, RulerStyle};

/// Immutable inputs of one ruler render.
///
/// There is no `PartialEq` impl: whether two rulers look the same depends on
/// the style, so comparison always goes through [`equals`] or
/// [`Ruler::is_equal`].
#[derive(Clone)]
pub struct Ruler {
    cells: Vec<RulerCell>,
    step: f32,
    mark_offset: f32,
    bounds: RangeInclusive<f32>,
    formatter: Option<Arc<dyn MarkFormatter>>,
}

impl Ruler {
    /// # Arguments
    /// * `cells` - Cells to draw, left to right
    /// * `step` - Value covered by one cell
    /// * `mark_offset` - Added to every mark before scaling by `step`
    /// * `bounds` - Valid value range, passed through to the style
    /// * `formatter` - Label text conversion, passed through to the style
    pub fn new(
        cells: Vec<RulerCell>,
        step: f32,
        mark_offset: f32,
        bounds: RangeInclusive<f32>,
        formatter: Option<Arc<dyn MarkFormatter>>,
    ) -> Self {
        Self {
            cells,
            step,
            mark_offset,
            bounds,
            formatter,
        }
    }

    pub fn cells(&self) -> &[RulerCell] {
        &self.cells
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn mark_offset(&self) -> f32 {
        self.mark_offset
    }

    pub fn bounds(&self) -> &RangeInclusive<f32> {
        &self.bounds
    }

    pub fn formatter(&self) -> Option<&Arc<dyn MarkFormatter>> {
        self.formatter.as_ref()
    }

    /// Scaled position of `cell`: `(cell.mark + mark_offset) * step`.
    pub fn position(&self, cell: &RulerCell) -> f32 {
        (cell.mark() + self.mark_offset) * self.step
    }

    /// Configuration handed to the style for `cell`.
    pub fn configuration(&self, cell: &RulerCell) -> CellConfiguration {
        CellConfiguration {
            mark: self.position(cell),
            bounds: self.bounds.clone(),
            step: self.step,
            formatter: self.formatter.clone(),
        }
    }

    /// Builds one child per cell, in cell order, in a zero-spacing row with
    /// no animation.
    pub fn render(&self, style: &dyn RulerStyle) -> RulerNode {
        tracing::trace!(
            cells = self.cells.len(),
            step = self.step,
            mark_offset = self.mark_offset,
            style = style.name(),
            "rendering ruler"
        );

        let children = self
            .cells
            .iter()
            .map(|cell| KeyedChild {
                key: cell.id(),
                body: style.make_cell_body(&self.configuration(cell)),
            })
            .collect();

        RulerNode {
            layout: Layout::HStack { spacing: 0.0 },
            animation: None,
            children,
        }
    }

    /// Change detection against `other` under `style`.
    pub fn is_equal(&self, other: &Ruler, style: &dyn RulerStyle) -> bool {
        equals(self, other, style.has_marks())
    }
}

impl fmt::Debug for Ruler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ruler")
            .field("cells", &self.cells.len())
            .field("step", &self.step)
            .field("mark_offset", &self.mark_offset)
            .field("bounds", &self.bounds)
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}

/// Returns `true` when re-rendering `b` in place of `a` can be skipped.
///
/// Compares `step` and the number of cells. `mark_offset` only matters when
/// the style draws marks, since labels are its only visible consumer. Cell
/// marks themselves are not compared.
pub fn equals(a: &Ruler, b: &Ruler, style_has_marks: bool) -> bool {
    a.step == b.step
        && a.cells.len() == b.cells.len()
        && (!style_has_marks || a.mark_offset == b.mark_offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::CellBody;
    use crate::styles::PrimaryStyle;
    use proptest::prelude::*;
    use std::sync::Mutex;

    /// Style that records every configuration it receives.
    struct RecordingStyle {
        has_marks: bool,
        seen: Mutex<Vec<CellConfiguration>>,
    }

    impl RecordingStyle {
        fn new(has_marks: bool) -> Self {
            Self {
                has_marks,
                seen: Mutex::new(Vec::new()),
            }
        }

        fn marks(&self) -> Vec<f32> {
            self.seen.lock().unwrap().iter().map(|c| c.mark).collect()
        }
    }

    impl RulerStyle for RecordingStyle {
        fn name(&self) -> &str {
            "Recording"
        }

        fn cell_width(&self) -> f32 {
            10.0
        }

        fn make_cell_body(&self, configuration: &CellConfiguration) -> CellBody {
            self.seen.lock().unwrap().push(configuration.clone());
            CellBody::empty(self.cell_width())
        }

        fn has_marks(&self) -> bool {
            self.has_marks
        }
    }

    fn cells(marks: &[f32]) -> Vec<RulerCell> {
        marks.iter().copied().map(RulerCell::new).collect()
    }

    fn ruler(marks: &[f32], step: f32, mark_offset: f32) -> Ruler {
        Ruler::new(cells(marks), step, mark_offset, 0.0..=100.0, None)
    }

    #[test]
    fn test_render_passes_scaled_positions() {
        let style = RecordingStyle::new(true);
        ruler(&[0.0, 1.0, 2.0], 5.0, 0.5).render(&style);
        assert_eq!(style.marks(), vec![2.5, 7.5, 12.5]);
    }

    #[test]
    fn test_render_forwards_bounds_step_and_formatter() {
        let style = RecordingStyle::new(true);
        let formatter: Arc<dyn MarkFormatter> = Arc::new(|v: f32| format!("#{v}"));
        let ruler = Ruler::new(cells(&[1.0]), 2.0, 0.0, -4.0..=4.0, Some(formatter));
        ruler.render(&style);

        let seen = style.seen.lock().unwrap();
        assert_eq!(seen[0].bounds, -4.0..=4.0);
        assert_eq!(seen[0].step, 2.0);
        assert_eq!(seen[0].formatter.as_ref().unwrap().format(2.0), "#2");
    }

    #[test]
    fn test_render_keeps_cell_order() {
        let style = RecordingStyle::new(false);
        let ruler = ruler(&[3.0, -1.0, 7.0], 1.0, 0.0);
        let node = ruler.render(&style);

        let expected: Vec<_> = ruler.cells().iter().map(|c| c.id()).collect();
        assert_eq!(node.keys().collect::<Vec<_>>(), expected);
        assert_eq!(style.marks(), vec![3.0, -1.0, 7.0]);
    }

    #[test]
    fn test_render_empty_sequence() {
        let node = ruler(&[], 1.0, 0.0).render(&RecordingStyle::new(true));
        assert!(node.is_empty());
        assert_eq!(node.total_width(), 0.0);
    }

    #[test]
    fn test_render_is_zero_spacing_row_without_animation() {
        let node = ruler(&[0.0, 1.0], 1.0, 0.0).render(&RecordingStyle::new(true));
        assert_eq!(node.layout, Layout::HStack { spacing: 0.0 });
        assert_eq!(node.animation, None);
        assert_eq!(node.total_width(), 20.0);
    }

    #[test]
    fn test_structural_change_is_not_animated() {
        let style = RecordingStyle::new(true);
        let before = ruler(&[0.0, 1.0, 2.0], 1.0, 0.0).render(&style);
        let grown = ruler(&[0.0, 1.0, 2.0, 3.0], 1.0, 0.0).render(&style);
        let shrunk = ruler(&[1.0], 1.0, 0.0).render(&style);

        assert!(before.animation.is_none());
        assert!(grown.animation.is_none());
        assert!(shrunk.animation.is_none());
        assert_eq!(grown.len(), 4);
        assert_eq!(shrunk.len(), 1);
    }

    #[test]
    fn test_equal_ignores_offset_without_marks() {
        let a = ruler(&[0.0, 1.0], 2.0, 0.0);
        let b = ruler(&[0.0, 1.0], 2.0, 0.75);
        assert!(equals(&a, &b, false));
        assert!(a.is_equal(&b, &RecordingStyle::new(false)));
    }

    #[test]
    fn test_offset_matters_with_marks() {
        let a = ruler(&[0.0, 1.0], 2.0, 0.0);
        let b = ruler(&[0.0, 1.0], 2.0, 0.75);
        assert!(!equals(&a, &b, true));
        assert!(!a.is_equal(&b, &RecordingStyle::new(true)));
        assert!(equals(&a, &a.clone(), true));
    }

    #[test]
    fn test_step_or_count_difference_is_unequal() {
        let base = ruler(&[0.0, 1.0], 2.0, 0.0);
        let other_step = ruler(&[0.0, 1.0], 2.5, 0.0);
        let other_count = ruler(&[0.0, 1.0, 2.0], 2.0, 0.0);

        for has_marks in [false, true] {
            assert!(!equals(&base, &other_step, has_marks));
            assert!(!equals(&base, &other_count, has_marks));
        }
    }

    // Known coarse-grained property: only the cell count is compared, so a
    // geometry-only change with the same count does not trigger a re-render.
    #[test]
    fn test_known_coarse_equality_ignores_cell_marks() {
        let a = ruler(&[0.0, 1.0, 2.0], 1.0, 0.0);
        let b = ruler(&[10.0, 11.0, 12.0], 1.0, 0.0);
        assert!(equals(&a, &b, true));
        assert!(equals(&a, &b, false));
    }

    proptest! {
        #[test]
        fn prop_position_is_offset_then_scaled(
            m in -1.0e4f32..1.0e4,
            o in -1.0e3f32..1.0e3,
            s in -1.0e2f32..1.0e2,
        ) {
            let style = RecordingStyle::new(true);
            ruler(&[m], s, o).render(&style);
            let expected = (m + o) * s;
            prop_assert_eq!(style.marks()[0].to_bits(), expected.to_bits());
        }

        #[test]
        fn prop_permuting_cells_permutes_children(
            (marks, permuted) in prop::collection::hash_set(-500i32..500, 0..40)
                .prop_map(|set| set.into_iter().map(|m| m as f32).collect::<Vec<_>>())
                .prop_flat_map(|marks| (Just(marks.clone()), Just(marks).prop_shuffle())),
        ) {
            let style = PrimaryStyle::new();
            let original = ruler(&marks, 1.0, 0.0).render(&style);
            let node = ruler(&permuted, 1.0, 0.0).render(&style);

            prop_assert_eq!(node.len(), original.len());
            for (child, mark) in node.children.iter().zip(&permuted) {
                let source = marks.iter().position(|m| m == mark).unwrap();
                prop_assert_eq!(child, &original.children[source]);
            }
        }

        #[test]
        fn prop_offset_ignored_without_marks(
            count in 0usize..20,
            step in -50.0f32..50.0,
            o1 in -10.0f32..10.0,
            o2 in -10.0f32..10.0,
        ) {
            let marks: Vec<f32> = (0..count).map(|i| i as f32).collect();
            let a = ruler(&marks, step, o1);
            let b = ruler(&marks, step, o2);
            prop_assert!(equals(&a, &b, false));
            prop_assert_eq!(equals(&a, &b, true), o1 == o2);
        }
    }
}
