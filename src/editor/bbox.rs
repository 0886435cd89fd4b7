//! Bounding-box drag and resize state machine.
//!
//! A press near a corner of the committed box grabs that corner and drags
//! it against the diagonally opposite one; any other press starts a fresh
//! box anchored at the press point. Geometry is normalized on every emit,
//! so the pointer may cross over the fixed point freely. Nothing reaches
//! the document until the pointer is released.

use crate::error::FieldError;
use crate::label::{BoundingBox, LabelDocument};

use super::parse_coordinate;

/// Half-width of the corner hit zone, per axis. A press grabs a corner
/// when both axes land within this window independently: a 5x5 square
/// zone, not a radius.
pub const CORNER_TOLERANCE: i32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DragState {
    Idle,
    /// Fresh box: the press point is the anchor, the pointer drags the
    /// opposite corner.
    Dragging { anchor: (i32, i32) },
    /// Corner grab: the diagonally opposite corner stays fixed.
    Resizing { fixed: (i32, i32) },
}

/// Pointer-driven editor for the document's bounding box.
#[derive(Clone, Copy, Debug)]
pub struct BoxEditor {
    state: DragState,
}

impl Default for BoxEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl BoxEditor {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.state == DragState::Idle
    }

    /// Starts a drag. Grabs a corner of the committed box when the press
    /// lands in its hit zone, otherwise anchors a fresh box at the press
    /// point.
    pub fn pointer_down(&mut self, doc: &LabelDocument, x: i32, y: i32) {
        self.state = match doc.bounding_box().and_then(|b| grabbed_corner(b, x, y)) {
            Some(fixed) => DragState::Resizing { fixed },
            None => DragState::Dragging { anchor: (x, y) },
        };
    }

    /// The box to display at the current pointer position, for rendering
    /// only.
    pub fn pointer_move(&self, x: i32, y: i32) -> Option<BoundingBox> {
        let (px, py) = match self.state {
            DragState::Idle => return None,
            DragState::Dragging { anchor } => anchor,
            DragState::Resizing { fixed } => fixed,
        };
        Some(BoundingBox::from_corners(px, py, x, y))
    }

    /// Commits the box at the release point and returns to idle. A release
    /// without a preceding press is ignored.
    pub fn pointer_up(&mut self, doc: &mut LabelDocument, x: i32, y: i32) {
        if let Some(live) = self.pointer_move(x, y) {
            doc.set_box(live.x1, live.y1, live.x2, live.y2);
        }
        self.state = DragState::Idle;
    }

    /// Commits hand-edited corner fields, bypassing the drag machine. All
    /// four fields must hold integers or the document is left untouched.
    pub fn confirm_fields(
        doc: &mut LabelDocument,
        x1_text: &str,
        y1_text: &str,
        x2_text: &str,
        y2_text: &str,
    ) -> Result<(), FieldError> {
        let x1 = parse_coordinate(x1_text)?;
        let y1 = parse_coordinate(y1_text)?;
        let x2 = parse_coordinate(x2_text)?;
        let y2 = parse_coordinate(y2_text)?;
        doc.set_box(x1, y1, x2, y2);
        Ok(())
    }
}

/// The fixed corner to resize against when the press grabs one of the four
/// corners of `b`. Checked top-left, bottom-right, top-right, bottom-left;
/// the first hit wins when a small box makes the zones overlap.
fn grabbed_corner(b: BoundingBox, x: i32, y: i32) -> Option<(i32, i32)> {
    let near = |p: i32, c: i32| (p - c).abs() <= CORNER_TOLERANCE;
    if near(x, b.x1) && near(y, b.y1) {
        Some((b.x2, b.y2))
    } else if near(x, b.x2) && near(y, b.y2) {
        Some((b.x1, b.y1))
    } else if near(x, b.x2) && near(y, b.y1) {
        Some((b.x1, b.y2))
    } else if near(x, b.x1) && near(y, b.y2) {
        Some((b.x2, b.y1))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(x1: i32, y1: i32, x2: i32, y2: i32) -> BoundingBox {
        BoundingBox::from_corners(x1, y1, x2, y2)
    }

    #[test]
    fn test_grabbed_corner_returns_opposite_corner() {
        let b = boxed(10, 10, 50, 50);
        assert_eq!(grabbed_corner(b, 10, 10), Some((50, 50)));
        assert_eq!(grabbed_corner(b, 50, 50), Some((10, 10)));
        assert_eq!(grabbed_corner(b, 50, 10), Some((10, 50)));
        assert_eq!(grabbed_corner(b, 10, 50), Some((50, 10)));
        assert_eq!(grabbed_corner(b, 30, 30), None);
    }

    #[test]
    fn test_hit_zone_is_square_per_axis() {
        let b = boxed(10, 10, 50, 50);
        // (12, 12) is 2 units off on each axis: outside a Euclidean radius
        // of 2, inside the square window.
        assert_eq!(grabbed_corner(b, 12, 12), Some((50, 50)));
        assert_eq!(grabbed_corner(b, 8, 12), Some((50, 50)));
        // One axis out of the window misses even with the other dead on.
        assert_eq!(grabbed_corner(b, 13, 10), None);
        assert_eq!(grabbed_corner(b, 10, 7), None);
    }

    #[test]
    fn test_press_on_degenerate_box_prefers_top_left_pairing() {
        let b = boxed(20, 20, 20, 20);
        assert_eq!(grabbed_corner(b, 20, 20), Some((20, 20)));
    }
}
