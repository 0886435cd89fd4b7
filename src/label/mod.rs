//! The label document model and its sidecar file codec.
//!
//! [`LabelDocument`] is the typed in-memory form of one image's
//! annotations; the JSON wire shape exists only inside [`codec`].

mod codec;
mod model;

pub use codec::{from_json_str, label_path, read_label, to_json_string, write_label};
pub use model::{BoundingBox, Joint, LabelDocument};
