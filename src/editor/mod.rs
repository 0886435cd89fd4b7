//! Interactive annotation state machines.
//!
//! Every mutation of the live document is expressed as a discrete
//! [`Command`], so a front-end (or a test) can drive a whole labeling
//! session deterministically without a display surface. The editors
//! themselves hold only selection and drag state; the document is the
//! single source of truth for confirmed data.

mod bbox;
mod joints;
mod tags;

pub use bbox::{BoxEditor, CORNER_TOLERANCE};
pub use joints::JointEditor;
pub use tags::TagEditor;

use std::path::PathBuf;

use crate::error::FieldError;

/// A discrete input command for [`Session::apply`](crate::session::Session::apply).
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Commit the coordinate fields for a joint.
    ConfirmJoint {
        name: String,
        x_text: String,
        y_text: String,
    },
    /// Commit the text field for a tag.
    ConfirmTag { name: String, text: String },
    /// Commit hand-edited box corner fields, bypassing the drag machine.
    ConfirmBox {
        x1_text: String,
        y1_text: String,
        x2_text: String,
        y2_text: String,
    },
    /// Pointer pressed at image coordinates.
    PointerDown { x: i32, y: i32 },
    /// Pointer moved while held down.
    PointerMove { x: i32, y: i32 },
    /// Pointer released.
    PointerUp { x: i32, y: i32 },
    /// Advance to the next image in the directory.
    Next,
    /// Go back to the previous image in the directory.
    Previous,
    /// Switch to another image file or directory.
    LoadNew(PathBuf),
}

/// Parses one coordinate text field. Empty and non-integer text are
/// rejected without touching the document.
pub(crate) fn parse_coordinate(text: &str) -> Result<i32, FieldError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(FieldError::Empty);
    }
    text.parse()
        .map_err(|_| FieldError::NotAnInteger(text.to_string()))
}
