use std::path::PathBuf;
use thiserror::Error;

/// The main error type for jointlabel operations.
#[derive(Debug, Error)]
pub enum JointlabelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse label file {path}: {source}")]
    LabelParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid bounding-box field '{field}' in label file {path}: {value:?}")]
    LabelField {
        path: PathBuf,
        field: &'static str,
        value: String,
    },

    #[error("Failed to write label file {path}: {source}")]
    LabelWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid color entry at {path}:{line}: {message}")]
    ConfigColor {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("Config file {path} defines no joint names")]
    EmptyJointList { path: PathBuf },

    #[error("No image files found in {0}")]
    NoImages(PathBuf),

    #[error("{0} is not an image file")]
    NotAnImage(PathBuf),

    #[error("Validation failed with {error_count} error(s) and {warning_count} warning(s)")]
    ValidationFailed {
        error_count: usize,
        warning_count: usize,
    },
}

/// Rejected text-field input at confirm time.
///
/// Confirm operations treat this as "leave the document alone" rather than
/// a failure surfaced to the operator.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("field is empty")]
    Empty,

    #[error("{0:?} is not an integer")]
    NotAnInteger(String),
}
