//! Virtual node tree produced by a ruler render.
//!
//! The host reconciles this tree against what it drew last frame. Layout
//! and animation are explicit attributes rather than implicit modifiers.

use crate::cell::CellId;
use crate::style::CellBody;

/// How children of a node are arranged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Layout {
    /// Left-to-right row with a fixed gap between children.
    HStack { spacing: f32 },
}

/// Transition a host may apply to structural changes of a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Animation {
    Linear { duration: f32 },
    EaseInOut { duration: f32 },
}

/// A child keyed by the identity of the cell it renders.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedChild {
    pub key: CellId,
    pub body: CellBody,
}

/// Root node of a rendered ruler.
#[derive(Debug, Clone, PartialEq)]
pub struct RulerNode {
    pub layout: Layout,
    /// `None` means inserts, removals and reorders show up on the next frame
    /// without interpolation.
    pub animation: Option<Animation>,
    pub children: Vec<KeyedChild>,
}

impl RulerNode {
    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Keys of the children, in render order.
    pub fn keys(&self) -> impl Iterator<Item = CellId> + '_ {
        self.children.iter().map(|child| child.key)
    }

    /// Sum of child widths plus the gaps between them.
    pub fn total_width(&self) -> f32 {
        let Layout::HStack { spacing } = self.layout;
        let widths: f32 = self.children.iter().map(|child| child.body.width).sum();
        let gaps = self.children.len().saturating_sub(1) as f32 * spacing;
        widths + gaps
    }
}
