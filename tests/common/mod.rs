#![allow(dead_code)]

use std::fs;
use std::path::Path;

use jointlabel::config::{Config, Rgb};

/// The config used across the integration tests: three joints, two tags,
/// one color per joint.
pub fn sample_config() -> Config {
    Config::from_parts(
        vec!["head".into(), "neck".into(), "tail".into()],
        vec!["breed".into(), "pose".into()],
        vec![
            Rgb { r: 255, g: 0, b: 0 },
            Rgb { r: 0, g: 255, b: 0 },
            Rgb { r: 0, g: 0, b: 255 },
        ],
    )
}

/// Writes the three config files matching [`sample_config`] into `dir`.
pub fn write_config_files(dir: &Path) {
    fs::write(dir.join("JointNames.txt"), "head neck tail\n").expect("write joint names");
    fs::write(dir.join("TagNames.txt"), "breed pose\n").expect("write tag names");
    fs::write(dir.join("JointDotColors.txt"), "255 0 0\n0 255 0\n0 0 255\n")
        .expect("write colors");
}

/// Creates a stand-in image file. The session never decodes image bytes,
/// so a stub is enough.
pub fn write_image_stub(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create image dir");
    }
    fs::write(path, b"stub").expect("write image stub");
}
