//! Overlay draw primitives for a display front-end.
//!
//! The core never touches a screen; it hands the front-end a flat list of
//! primitives to paint over the image, already in image coordinates.

use crate::config::Config;
use crate::label::{BoundingBox, LabelDocument};

/// One thing to paint over the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawPrimitive {
    /// A filled dot centered on a confirmed joint.
    Dot {
        x: i32,
        y: i32,
        color: crate::config::Rgb,
    },
    /// The bounding box outline: the live drag box while one is underway,
    /// otherwise the committed box.
    Rect { x1: i32, y1: i32, x2: i32, y2: i32 },
}

/// Renders the overlay for a document: one dot per confirmed joint in
/// confirmation order, colored per config, plus at most one rectangle.
pub fn render_overlay(
    config: &Config,
    doc: &LabelDocument,
    live_box: Option<BoundingBox>,
) -> Vec<DrawPrimitive> {
    let mut primitives = Vec::with_capacity(doc.joints().len() + 1);
    for joint in doc.joints() {
        primitives.push(DrawPrimitive::Dot {
            x: joint.x,
            y: joint.y,
            color: config.dot_color(&joint.name),
        });
    }
    if let Some(b) = live_box.or_else(|| doc.bounding_box()) {
        primitives.push(DrawPrimitive::Rect {
            x1: b.x1,
            y1: b.y1,
            x2: b.x2,
            y2: b.y2,
        });
    }
    primitives
}
