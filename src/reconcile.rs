//! Host-side change detection for rulers.
//!
//! The enclosing control builds a fresh [`Ruler`] every frame. `RulerCache`
//! keeps the last accepted instance and its rendered node, and only calls
//! [`Ruler::render`] again when [`equals`] says the new instance differs.

use crate::node::RulerNode;
use crate::ruler::{equals, Ruler};
use crate::style::RulerStyle;

#[derive(Debug)]
struct CacheEntry {
    ruler: Ruler,
    node: RulerNode,
    /// Name and cell width of the style the node was rendered with.
    style_name: String,
    cell_width: f32,
}

/// Last accepted ruler and its rendered node.
#[derive(Debug, Default)]
pub struct RulerCache {
    entry: Option<CacheEntry>,
    render_count: u64,
    skip_count: u64,
}

impl RulerCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers `ruler` as the current instance and returns the node to draw.
    ///
    /// When the style is unchanged and `ruler` equals the cached instance
    /// under it, the cached instance and node are kept and `ruler` is
    /// dropped. Otherwise `ruler` is rendered and replaces the entry.
    pub fn update(&mut self, ruler: Ruler, style: &dyn RulerStyle) -> &RulerNode {
        let entry = match self.entry.take() {
            Some(entry)
                if entry.style_name == style.name()
                    && entry.cell_width == style.cell_width()
                    && equals(&entry.ruler, &ruler, style.has_marks()) =>
            {
                self.skip_count += 1;
                tracing::trace!(skipped = self.skip_count, "ruler unchanged, reusing node");
                entry
            }
            _ => {
                self.render_count += 1;
                tracing::debug!(
                    renders = self.render_count,
                    cells = ruler.cells().len(),
                    style = style.name(),
                    "ruler changed, rendering"
                );
                CacheEntry {
                    node: ruler.render(style),
                    style_name: style.name().to_string(),
                    cell_width: style.cell_width(),
                    ruler,
                }
            }
        };

        &self.entry.insert(entry).node
    }

    /// Node from the last update, if any.
    pub fn node(&self) -> Option<&RulerNode> {
        self.entry.as_ref().map(|entry| &entry.node)
    }

    /// Ruler the cached node was rendered from.
    pub fn ruler(&self) -> Option<&Ruler> {
        self.entry.as_ref().map(|entry| &entry.ruler)
    }

    /// Forgets the cached entry so the next update renders.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Number of updates that rendered.
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    /// Number of updates that reused the cached node.
    pub fn skip_count(&self) -> u64 {
        self.skip_count
    }
}
