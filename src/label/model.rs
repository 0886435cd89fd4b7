//! In-memory model of one image's annotations.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A named keypoint in image coordinates. The origin sits at the image's
/// top-left corner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Joint {
    pub name: String,
    pub x: i32,
    pub y: i32,
}

/// An axis-aligned bounding box stored by its two corners, kept in min/max
/// order by every constructor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl BoundingBox {
    /// Builds a box from any two opposite corners, in either order.
    pub fn from_corners(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            x1: x1.min(x2),
            y1: y1.min(y2),
            x2: x1.max(x2),
            y2: y1.max(y2),
        }
    }

    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }
}

/// One image's annotations: confirmed joints in first-confirmation order,
/// tag values, and an optional bounding box.
///
/// A document has exactly one owner (the navigation session) and is mutated
/// only through the editor operations, so the accessors hand out plain
/// references.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelDocument {
    image_path: PathBuf,
    joints: Vec<Joint>,
    tags: BTreeMap<String, String>,
    bounding_box: Option<BoundingBox>,
}

impl LabelDocument {
    /// Creates an empty document for `image_path`.
    pub fn new(image_path: impl Into<PathBuf>) -> Self {
        Self {
            image_path: image_path.into(),
            joints: Vec::new(),
            tags: BTreeMap::new(),
            bounding_box: None,
        }
    }

    pub fn image_path(&self) -> &Path {
        &self.image_path
    }

    /// Confirmed joints, in the order they were first confirmed.
    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    pub fn joint(&self, name: &str) -> Option<&Joint> {
        self.joints.iter().find(|j| j.name == name)
    }

    pub fn tags(&self) -> &BTreeMap<String, String> {
        &self.tags
    }

    pub fn tag(&self, name: &str) -> Option<&str> {
        self.tags.get(name).map(String::as_str)
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.bounding_box
    }

    pub fn has_joints(&self) -> bool {
        !self.joints.is_empty()
    }

    /// Replaces the named joint's coordinates in place, or appends a new
    /// joint at the end of the confirmation order. Never duplicates.
    pub fn upsert_joint(&mut self, name: &str, x: i32, y: i32) {
        match self.joints.iter_mut().find(|j| j.name == name) {
            Some(joint) => {
                joint.x = x;
                joint.y = y;
            }
            None => self.joints.push(Joint {
                name: name.to_string(),
                x,
                y,
            }),
        }
    }

    pub fn upsert_tag(&mut self, name: &str, value: impl Into<String>) {
        self.tags.insert(name.to_string(), value.into());
    }

    /// Commits a box. Corners are normalized so `x1 <= x2` and `y1 <= y2`
    /// always hold.
    pub fn set_box(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.bounding_box = Some(BoundingBox::from_corners(x1, y1, x2, y2));
    }
}
