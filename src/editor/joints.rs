//! Joint confirmation with auto-advance.

use crate::config::Config;
use crate::error::FieldError;
use crate::label::LabelDocument;

use super::parse_coordinate;

/// Tracks which configured joint the coordinate fields currently target.
///
/// Confirming a joint moves the selection to the next configured name so
/// the operator can work straight down the list; at the last name the
/// selection stays put rather than wrapping.
#[derive(Clone, Copy, Debug, Default)]
pub struct JointEditor {
    selected: usize,
}

impl JointEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_name<'a>(&self, config: &'a Config) -> Option<&'a str> {
        config.joint_names().get(self.selected).map(String::as_str)
    }

    /// Moves the selection to `name` and returns the coordinate-field
    /// contents: the stored coordinates when the joint is already
    /// confirmed, empty fields otherwise. Values from a previously
    /// selected joint are never carried over.
    pub fn select(&mut self, config: &Config, doc: &LabelDocument, name: &str) -> (String, String) {
        if let Some(index) = config.joint_index(name) {
            self.selected = index;
        }
        match doc.joint(name) {
            Some(joint) => (joint.x.to_string(), joint.y.to_string()),
            None => (String::new(), String::new()),
        }
    }

    /// Commits the coordinate fields for `name`, then advances the
    /// selection.
    ///
    /// Both fields must hold integers; otherwise the document and the
    /// selection are left untouched. Names outside the configured list are
    /// stored as-is (validation reports them later) and do not move the
    /// selection.
    pub fn confirm(
        &mut self,
        config: &Config,
        doc: &mut LabelDocument,
        name: &str,
        x_text: &str,
        y_text: &str,
    ) -> Result<(), FieldError> {
        let x = parse_coordinate(x_text)?;
        let y = parse_coordinate(y_text)?;
        doc.upsert_joint(name, x, y);

        if let Some(index) = config.joint_index(name) {
            if index + 1 < config.joint_names().len() {
                self.selected = index + 1;
            } else {
                self.selected = index;
            }
        }
        Ok(())
    }
}
