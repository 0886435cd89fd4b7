//! Labeling configuration: joint names, tag names, and joint dot colors.
//!
//! Three plain-text files are read once at startup and the result is
//! immutable for the life of the process. `JointNames.txt` and
//! `TagNames.txt` hold whitespace-delimited ordered name lists;
//! `JointDotColors.txt` holds one `R G B` line per joint, positionally
//! aligned with the joint names.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::JointlabelError;

pub const JOINT_NAMES_FILE: &str = "JointNames.txt";
pub const TAG_NAMES_FILE: &str = "TagNames.txt";
pub const JOINT_COLORS_FILE: &str = "JointDotColors.txt";

/// An 8-bit RGB display color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Dot color for joints the color list does not cover.
pub const DEFAULT_DOT_COLOR: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// The ordered joint and tag vocabularies plus per-joint display colors.
#[derive(Clone, Debug)]
pub struct Config {
    joint_names: Vec<String>,
    tag_names: Vec<String>,
    dot_colors: HashMap<String, Rgb>,
}

impl Config {
    /// Loads the three config files from `dir`. Any missing or malformed
    /// file is fatal, as is an empty joint list; a joint/color length
    /// mismatch is only a warning.
    pub fn load(dir: &Path) -> Result<Self, JointlabelError> {
        let joints_path = dir.join(JOINT_NAMES_FILE);
        let joint_names = read_name_list(&joints_path)?;
        if joint_names.is_empty() {
            return Err(JointlabelError::EmptyJointList { path: joints_path });
        }
        let tag_names = read_name_list(&dir.join(TAG_NAMES_FILE))?;
        let colors = read_color_list(&dir.join(JOINT_COLORS_FILE))?;
        Ok(Self::from_parts(joint_names, tag_names, colors))
    }

    /// Assembles a config from already-parsed lists. The color list is
    /// positional: the i-th color belongs to the i-th joint name.
    pub fn from_parts(joint_names: Vec<String>, tag_names: Vec<String>, colors: Vec<Rgb>) -> Self {
        if colors.len() != joint_names.len() {
            log::warn!(
                "{} joint name(s) but {} dot color(s); unmatched joints use the default color",
                joint_names.len(),
                colors.len()
            );
        }
        let dot_colors = joint_names.iter().cloned().zip(colors).collect();
        Self {
            joint_names,
            tag_names,
            dot_colors,
        }
    }

    pub fn joint_names(&self) -> &[String] {
        &self.joint_names
    }

    pub fn tag_names(&self) -> &[String] {
        &self.tag_names
    }

    /// Position of `name` in the ordered joint list.
    pub fn joint_index(&self, name: &str) -> Option<usize> {
        self.joint_names.iter().position(|n| n == name)
    }

    /// Position of `name` in the ordered tag list.
    pub fn tag_index(&self, name: &str) -> Option<usize> {
        self.tag_names.iter().position(|n| n == name)
    }

    /// Display color for a joint's dot, falling back to
    /// [`DEFAULT_DOT_COLOR`] for names the color list does not reach.
    pub fn dot_color(&self, joint: &str) -> Rgb {
        self.dot_colors
            .get(joint)
            .copied()
            .unwrap_or(DEFAULT_DOT_COLOR)
    }
}

fn read_name_list(path: &Path) -> Result<Vec<String>, JointlabelError> {
    let text = fs::read_to_string(path).map_err(|source| JointlabelError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text.split_whitespace().map(str::to_string).collect())
}

fn read_color_list(path: &Path) -> Result<Vec<Rgb>, JointlabelError> {
    let text = fs::read_to_string(path).map_err(|source| JointlabelError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut colors = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let color = parse_color_line(line).map_err(|message| JointlabelError::ConfigColor {
            path: path.to_path_buf(),
            line: idx + 1,
            message,
        })?;
        colors.push(color);
    }
    Ok(colors)
}

/// Parses `R G B` from one line; extra tokens are ignored.
fn parse_color_line(line: &str) -> Result<Rgb, String> {
    let mut tokens = line.split_whitespace();
    let mut component = |name: &str| -> Result<u8, String> {
        let token = tokens
            .next()
            .ok_or_else(|| format!("missing {name} component"))?;
        token
            .parse()
            .map_err(|_| format!("{name} component {token:?} is not in 0-255"))
    };
    Ok(Rgb {
        r: component("red")?,
        g: component("green")?,
        b: component("blue")?,
    })
}
