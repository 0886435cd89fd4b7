//! Label-file validation against the session configuration.
//!
//! The document model is deliberately permissive and stores whatever a
//! sidecar contains, so this is where unknown names and suspicious
//! geometry get reported.

mod report;

pub use report::{IssueCode, Severity, ValidationIssue, ValidationReport};

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::JointlabelError;
use crate::label::{self, LabelDocument};
use crate::session;

/// Checks one decoded document against the configured vocabularies.
pub fn validate_document(config: &Config, doc: &LabelDocument) -> ValidationReport {
    let mut report = ValidationReport::new();
    let image = doc.image_path().display().to_string();

    for joint in doc.joints() {
        if config.joint_index(&joint.name).is_none() {
            report.add(ValidationIssue::warning(
                IssueCode::UnknownJointName,
                format!("joint {:?} is not in the configured joint list", joint.name),
                &image,
            ));
        }
    }

    for (name, value) in doc.tags() {
        if config.tag_index(name).is_none() {
            report.add(ValidationIssue::warning(
                IssueCode::UnknownTagName,
                format!("tag {name:?} is not in the configured tag list"),
                &image,
            ));
        }
        if value.is_empty() {
            report.add(ValidationIssue::warning(
                IssueCode::EmptyTagValue,
                format!("tag {name:?} has an empty value"),
                &image,
            ));
        }
    }

    if let Some(b) = doc.bounding_box() {
        if b.width() == 0 || b.height() == 0 {
            report.add(ValidationIssue::warning(
                IssueCode::DegenerateBox,
                format!("bounding box {}x{} has no area", b.width(), b.height()),
                &image,
            ));
        }
    }

    report
}

/// Validates the sidecars for one image or for every image directly inside
/// a directory. Images without a sidecar are skipped; sidecars that fail
/// to parse become report errors instead of aborting the sweep.
pub fn validate_path(config: &Config, path: &Path) -> Result<ValidationReport, JointlabelError> {
    let images: Vec<PathBuf> = if path.is_dir() {
        let images = session::list_images(path)?;
        if images.is_empty() {
            return Err(JointlabelError::NoImages(path.to_path_buf()));
        }
        images
    } else {
        vec![path.to_path_buf()]
    };

    let mut report = ValidationReport::new();
    for image in &images {
        match label::read_label(image) {
            Ok(None) => {}
            Ok(Some(doc)) => {
                let doc_report = validate_document(config, &doc);
                report.issues.extend(doc_report.issues);
            }
            Err(err) => {
                report.add(ValidationIssue::error(
                    IssueCode::UnreadableLabelFile,
                    err.to_string(),
                    image.display().to_string(),
                ));
            }
        }
    }
    Ok(report)
}
