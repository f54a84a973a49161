//! Painting rendered rulers with egui.
//!
//! [`layout_ruler`] turns a [`RulerNode`] into screen-space tick segments
//! and label anchors; [`paint_ruler`] draws them. Keeping the two apart lets
//! the geometry be tested without an egui context.

use egui::{pos2, Align2, FontId, Pos2, Rect, Stroke};

use crate::node::{Layout, RulerNode};
use crate::style::{TickAlignment, TickKind};
use crate::theme::{with_alpha, RulerColors};

const LABEL_FONT_SIZE: f32 = 11.0;
const LABEL_GAP: f32 = 2.0;

/// A tick in screen space.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintedTick {
    pub x: f32,
    pub top: f32,
    pub bottom: f32,
    pub kind: TickKind,
    pub in_bounds: bool,
}

/// A label anchored at its center-top point.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintedLabel {
    pub anchor: Pos2,
    pub text: String,
    pub in_bounds: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RulerLayout {
    pub ticks: Vec<PaintedTick>,
    pub labels: Vec<PaintedLabel>,
}

/// Places `node` inside `rect`, starting `origin_x` points from its left edge.
///
/// Ticks whose x falls outside `rect` are culled. Labels are kept while their
/// anchor is within one cell of the visible range so partly visible text
/// still slides in.
pub fn layout_ruler(rect: Rect, node: &RulerNode, origin_x: f32) -> RulerLayout {
    let Layout::HStack { spacing } = node.layout;
    let mut layout = RulerLayout::default();
    let mut cursor = rect.left() + origin_x;

    for child in &node.children {
        let body = &child.body;

        for tick in &body.ticks {
            let x = cursor + tick.offset;
            if x < rect.left() || x > rect.right() {
                continue;
            }
            let (top, bottom) = tick_span(rect, body.alignment, tick.kind);
            layout.ticks.push(PaintedTick {
                x,
                top,
                bottom,
                kind: tick.kind,
                in_bounds: tick.in_bounds,
            });
        }

        if let Some(label) = &body.label {
            let x = cursor + label.offset;
            if x >= rect.left() - body.width && x <= rect.right() + body.width {
                let (_, unit_bottom) = tick_span(rect, body.alignment, TickKind::Unit);
                layout.labels.push(PaintedLabel {
                    anchor: pos2(x, unit_bottom + LABEL_GAP),
                    text: label.text.clone(),
                    in_bounds: label.in_bounds,
                });
            }
        }

        cursor += body.width + spacing;
    }

    layout
}

fn tick_span(rect: Rect, alignment: TickAlignment, kind: TickKind) -> (f32, f32) {
    let length = kind.relative_length() * rect.height();
    match alignment {
        TickAlignment::Top => (rect.top(), rect.top() + length),
        TickAlignment::Center => {
            let center = rect.center().y;
            (center - length / 2.0, center + length / 2.0)
        }
    }
}

/// Paints `node` into `rect` with the given palette.
pub fn paint_ruler(
    painter: &egui::Painter,
    rect: Rect,
    node: &RulerNode,
    origin_x: f32,
    colors: &RulerColors,
) {
    painter.rect_filled(rect, 0.0, colors.background);
    let layout = layout_ruler(rect, node, origin_x);

    for tick in &layout.ticks {
        let width = if tick.kind == TickKind::Unit { 2.0 } else { 1.0 };
        let color = if tick.in_bounds { colors.tick } else { colors.tick_dim };
        painter.line_segment(
            [pos2(tick.x, tick.top), pos2(tick.x, tick.bottom)],
            Stroke::new(width, color),
        );
    }

    let painter = painter.with_clip_rect(rect);
    for label in &layout.labels {
        let color = if label.in_bounds { colors.text } else { colors.text_dim };
        painter.text(
            label.anchor,
            Align2::CENTER_TOP,
            &label.text,
            FontId::proportional(LABEL_FONT_SIZE),
            color,
        );
    }
}

/// Paints the vertical value cursor at the horizontal center of `rect`.
pub fn paint_cursor(painter: &egui::Painter, rect: Rect, colors: &RulerColors) {
    let x = rect.center().x;
    painter.line_segment(
        [pos2(x, rect.top()), pos2(x, rect.bottom())],
        Stroke::new(2.0, colors.cursor),
    );
    painter.rect_filled(
        Rect::from_center_size(pos2(x, rect.top() + 3.0), egui::vec2(8.0, 6.0)),
        1.0,
        with_alpha(colors.cursor, 200),
    );
}
