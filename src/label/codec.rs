//! Sidecar `.label` file codec.
//!
//! Each image gets one JSON sidecar next to it, named by appending
//! `.label` to the full file name (`dog.jpeg` -> `dog.jpeg.label`). The
//! shape is fixed by the training pipelines that consume these files:
//!
//! ```json
//! {"Joints":[{"name":"head","x-coordinate":12,"y-coordinate":34}],
//!  "Tags":{"breed":"husky"},
//!  "Bounding box":{"x":"5","y":"5","w":"45","h":"75"}}
//! ```
//!
//! Joint coordinates are plain integers while box fields are decimal
//! strings. The asymmetry is part of the wire contract and must not be
//! normalized here. Output is compact JSON with a trailing newline.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::model::{BoundingBox, LabelDocument};
use crate::error::JointlabelError;

/// Returns the sidecar path for an image: the full file name plus `.label`.
pub fn label_path(image_path: &Path) -> PathBuf {
    let mut name = image_path.as_os_str().to_os_string();
    name.push(".label");
    PathBuf::from(name)
}

/// Reads the sidecar for `image_path`, if one exists.
///
/// A missing sidecar is `Ok(None)`; a sidecar that exists but does not
/// parse is an error the caller must surface.
pub fn read_label(image_path: &Path) -> Result<Option<LabelDocument>, JointlabelError> {
    let path = label_path(image_path);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(JointlabelError::Io(err)),
    };
    let file: LabelFile =
        serde_json::from_str(&text).map_err(|source| JointlabelError::LabelParse {
            path: path.clone(),
            source,
        })?;
    Ok(Some(document_from_file(image_path, &path, file)?))
}

/// Writes the sidecar for `doc` next to its image.
pub fn write_label(doc: &LabelDocument) -> Result<(), JointlabelError> {
    let path = label_path(doc.image_path());
    let mut json = to_json_string(doc).map_err(|source| JointlabelError::LabelWrite {
        path: path.clone(),
        source,
    })?;
    json.push('\n');
    fs::write(&path, json).map_err(JointlabelError::Io)?;
    Ok(())
}

/// Parses label-file JSON into a document for `image_path`.
///
/// Useful for testing without file I/O.
pub fn from_json_str(image_path: &Path, json: &str) -> Result<LabelDocument, JointlabelError> {
    let path = label_path(image_path);
    let file: LabelFile =
        serde_json::from_str(json).map_err(|source| JointlabelError::LabelParse {
            path: path.clone(),
            source,
        })?;
    document_from_file(image_path, &path, file)
}

/// Renders a document as label-file JSON.
///
/// Useful for testing without file I/O.
pub fn to_json_string(doc: &LabelDocument) -> Result<String, serde_json::Error> {
    serde_json::to_string(&file_from_document(doc))
}

#[derive(Serialize, Deserialize)]
struct LabelFile {
    #[serde(rename = "Joints")]
    joints: Vec<JointRecord>,

    #[serde(rename = "Tags", default)]
    tags: BTreeMap<String, String>,

    #[serde(rename = "Bounding box", default)]
    bounding_box: BoxRecord,
}

#[derive(Serialize, Deserialize)]
struct JointRecord {
    name: String,

    #[serde(rename = "x-coordinate")]
    x: i32,

    #[serde(rename = "y-coordinate")]
    y: i32,
}

/// The `"Bounding box"` object: top-left corner plus width/height. The
/// writer always emits decimal strings; the reader also accepts bare
/// numbers, which show up in hand-edited files. A document without a box
/// serializes as an empty object.
#[derive(Default, Serialize, Deserialize)]
struct BoxRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    x: Option<BoxField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    y: Option<BoxField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    w: Option<BoxField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    h: Option<BoxField>,
}

impl BoxRecord {
    fn from_box(b: &BoundingBox) -> Self {
        Self {
            x: Some(BoxField::Text(b.x1.to_string())),
            y: Some(BoxField::Text(b.y1.to_string())),
            w: Some(BoxField::Text(b.width().to_string())),
            h: Some(BoxField::Text(b.height().to_string())),
        }
    }

    fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.w.is_none() && self.h.is_none()
    }

    /// `(x, y, w, h)` when any field is present; missing fields read as 0.
    fn into_corner_size(
        self,
        path: &Path,
    ) -> Result<Option<(i32, i32, i32, i32)>, JointlabelError> {
        if self.is_empty() {
            return Ok(None);
        }
        let field = |value: Option<BoxField>, name: &'static str| match value {
            None => Ok(0),
            Some(value) => value.parse(path, name),
        };
        Ok(Some((
            field(self.x, "x")?,
            field(self.y, "y")?,
            field(self.w, "w")?,
            field(self.h, "h")?,
        )))
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum BoxField {
    Text(String),
    Number(i64),
}

impl BoxField {
    fn parse(self, path: &Path, field: &'static str) -> Result<i32, JointlabelError> {
        match self {
            BoxField::Text(text) => text.trim().parse().map_err(|_| JointlabelError::LabelField {
                path: path.to_path_buf(),
                field,
                value: text,
            }),
            BoxField::Number(n) => i32::try_from(n).map_err(|_| JointlabelError::LabelField {
                path: path.to_path_buf(),
                field,
                value: n.to_string(),
            }),
        }
    }
}

fn document_from_file(
    image_path: &Path,
    label_path: &Path,
    file: LabelFile,
) -> Result<LabelDocument, JointlabelError> {
    let mut doc = LabelDocument::new(image_path);
    // Duplicate names in the file collapse through the upsert: the first
    // occurrence keeps its position, the last one's coordinates win.
    for joint in file.joints {
        doc.upsert_joint(&joint.name, joint.x, joint.y);
    }
    for (name, value) in file.tags {
        doc.upsert_tag(&name, value);
    }
    if let Some((x, y, w, h)) = file.bounding_box.into_corner_size(label_path)? {
        doc.set_box(x, y, x.saturating_add(w), y.saturating_add(h));
    }
    Ok(doc)
}

fn file_from_document(doc: &LabelDocument) -> LabelFile {
    LabelFile {
        joints: doc
            .joints()
            .iter()
            .map(|j| JointRecord {
                name: j.name.clone(),
                x: j.x,
                y: j.y,
            })
            .collect(),
        tags: doc.tags().clone(),
        bounding_box: doc
            .bounding_box()
            .map(|b| BoxRecord::from_box(&b))
            .unwrap_or_default(),
    }
}
