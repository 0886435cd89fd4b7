//! Tag value confirmation.

use crate::config::Config;
use crate::label::LabelDocument;

/// Tracks which configured tag the input field currently targets.
#[derive(Clone, Copy, Debug, Default)]
pub struct TagEditor {
    selected: usize,
}

impl TagEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_name<'a>(&self, config: &'a Config) -> Option<&'a str> {
        config.tag_names().get(self.selected).map(String::as_str)
    }

    /// Moves the selection to `name` and returns the input-field contents:
    /// the stored value when the tag is already confirmed, an empty field
    /// otherwise.
    pub fn select(&mut self, config: &Config, doc: &LabelDocument, name: &str) -> String {
        if let Some(index) = config.tag_index(name) {
            self.selected = index;
        }
        doc.tag(name).unwrap_or_default().to_string()
    }

    /// Stores the field text for `name`. An empty field leaves the
    /// document unchanged.
    pub fn confirm(&self, doc: &mut LabelDocument, name: &str, text: &str) {
        if text.is_empty() {
            return;
        }
        doc.upsert_tag(name, text);
    }
}
