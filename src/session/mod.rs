//! Sequential navigation over a directory of images, with autosave.
//!
//! A [`Session`] owns the sorted image list, the current index, and the one
//! live [`LabelDocument`]. Every transition (next, previous, load-new,
//! close) flushes the live document through the codec before the next one
//! is constructed, but only when at least one joint has been confirmed;
//! an untouched image never gets its sidecar rewritten, even if a stale
//! one already exists on disk.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::Config;
use crate::editor::{BoxEditor, Command, JointEditor, TagEditor};
use crate::error::JointlabelError;
use crate::label::{self, BoundingBox, LabelDocument};
use crate::render::{render_overlay, DrawPrimitive};

/// File extensions that count as labelable images.
pub const IMAGE_EXTENSIONS: [&str; 4] = ["gif", "jpeg", "jpg", "png"];

/// The annotation session: image list, live document, and editor state.
pub struct Session {
    config: Config,
    files: Vec<PathBuf>,
    index: usize,
    doc: LabelDocument,
    joints: JointEditor,
    tags: TagEditor,
    bbox: BoxEditor,
    live_box: Option<BoundingBox>,
}

impl Session {
    /// Opens a session on an image file (positioned among its directory
    /// siblings) or on a directory (positioned at its first image).
    pub fn open(config: Config, path: &Path) -> Result<Self, JointlabelError> {
        let (files, index) = resolve_target(path)?;
        let doc = load_document(&files[index])?;
        Ok(Self {
            config,
            files,
            index,
            doc,
            joints: JointEditor::new(),
            tags: TagEditor::new(),
            bbox: BoxEditor::new(),
            live_box: None,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn document(&self) -> &LabelDocument {
        &self.doc
    }

    pub fn image_path(&self) -> &Path {
        &self.files[self.index]
    }

    pub fn image_count(&self) -> usize {
        self.files.len()
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.files.len()
    }

    /// The in-progress drag box, if a drag is underway.
    pub fn live_box(&self) -> Option<BoundingBox> {
        self.live_box
    }

    pub fn selected_joint(&self) -> Option<&str> {
        self.joints.selected_name(&self.config)
    }

    pub fn selected_tag(&self) -> Option<&str> {
        self.tags.selected_name(&self.config)
    }

    /// Selects a joint and returns the coordinate-field contents for it.
    pub fn select_joint(&mut self, name: &str) -> (String, String) {
        self.joints.select(&self.config, &self.doc, name)
    }

    /// Selects a tag and returns the input-field contents for it.
    pub fn select_tag(&mut self, name: &str) -> String {
        self.tags.select(&self.config, &self.doc, name)
    }

    /// Draw primitives for the current document and drag state.
    pub fn overlay(&self) -> Vec<DrawPrimitive> {
        render_overlay(&self.config, &self.doc, self.live_box)
    }

    /// Applies one input command.
    ///
    /// Rejected field text is logged and swallowed; the confirm simply
    /// does not happen. Navigation and sidecar parse errors propagate.
    pub fn apply(&mut self, command: Command) -> Result<(), JointlabelError> {
        match command {
            Command::ConfirmJoint {
                name,
                x_text,
                y_text,
            } => {
                if let Err(err) =
                    self.joints
                        .confirm(&self.config, &mut self.doc, &name, &x_text, &y_text)
                {
                    log::debug!("joint confirm for {name:?} ignored: {err}");
                }
            }
            Command::ConfirmTag { name, text } => {
                self.tags.confirm(&mut self.doc, &name, &text);
            }
            Command::ConfirmBox {
                x1_text,
                y1_text,
                x2_text,
                y2_text,
            } => {
                if let Err(err) =
                    BoxEditor::confirm_fields(&mut self.doc, &x1_text, &y1_text, &x2_text, &y2_text)
                {
                    log::debug!("box confirm ignored: {err}");
                }
            }
            Command::PointerDown { x, y } => {
                self.bbox.pointer_down(&self.doc, x, y);
            }
            Command::PointerMove { x, y } => {
                self.live_box = self.bbox.pointer_move(x, y);
            }
            Command::PointerUp { x, y } => {
                self.bbox.pointer_up(&mut self.doc, x, y);
                self.live_box = None;
            }
            Command::Next => self.next()?,
            Command::Previous => self.previous()?,
            Command::LoadNew(path) => self.load_new(&path)?,
        }
        Ok(())
    }

    /// Advances to the next image; a no-op at the last index (nothing is
    /// written either).
    pub fn next(&mut self) -> Result<(), JointlabelError> {
        if !self.has_next() {
            return Ok(());
        }
        self.flush();
        self.index += 1;
        self.enter()
    }

    /// Goes back one image; a no-op at the first index.
    pub fn previous(&mut self) -> Result<(), JointlabelError> {
        if !self.has_previous() {
            return Ok(());
        }
        self.flush();
        self.index -= 1;
        self.enter()
    }

    /// Switches to another image file or directory, flushing the current
    /// document first.
    pub fn load_new(&mut self, path: &Path) -> Result<(), JointlabelError> {
        self.flush();
        let (files, index) = resolve_target(path)?;
        self.files = files;
        self.index = index;
        self.enter()
    }

    /// Flushes the live document; call when the application shuts down.
    pub fn close(&mut self) {
        self.flush();
    }

    /// Persists the live document when it has at least one confirmed
    /// joint. Write failures are logged and never block navigation.
    fn flush(&mut self) {
        if !self.doc.has_joints() {
            return;
        }
        if let Err(err) = label::write_label(&self.doc) {
            log::error!(
                "failed to write {}: {err}",
                label::label_path(self.doc.image_path()).display()
            );
        }
    }

    /// Loads the document for the current index and resets the editors to
    /// their initial selections.
    fn enter(&mut self) -> Result<(), JointlabelError> {
        self.doc = load_document(&self.files[self.index])?;
        self.joints = JointEditor::new();
        self.tags = TagEditor::new();
        self.bbox = BoxEditor::new();
        self.live_box = None;
        Ok(())
    }
}

fn load_document(image_path: &Path) -> Result<LabelDocument, JointlabelError> {
    Ok(label::read_label(image_path)?.unwrap_or_else(|| LabelDocument::new(image_path)))
}

/// Lists the image files directly inside `dir`, in lexicographic path
/// order.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>, JointlabelError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|err| JointlabelError::Io(err.into()))?;
        if entry.file_type().is_file() && is_image_file(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// True when the path carries one of the labelable image extensions
/// (matched case-insensitively).
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}

fn resolve_target(path: &Path) -> Result<(Vec<PathBuf>, usize), JointlabelError> {
    if path.is_dir() {
        let files = list_images(path)?;
        if files.is_empty() {
            return Err(JointlabelError::NoImages(path.to_path_buf()));
        }
        return Ok((files, 0));
    }

    if !is_image_file(path) {
        return Err(JointlabelError::NotAnImage(path.to_path_buf()));
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut files = list_images(dir)?;

    // The walk joins the directory onto each name, so a bare file name
    // will not compare equal to its listed form; fall back to matching on
    // the file name alone.
    let index = files
        .iter()
        .position(|f| f == path)
        .or_else(|| files.iter().position(|f| f.file_name() == path.file_name()));
    let index = match index {
        Some(index) => index,
        None => {
            // Not listed (e.g. the file vanished mid-session); keep it
            // addressable anyway.
            files.push(path.to_path_buf());
            files.sort();
            files.iter().position(|f| f == path).unwrap_or(0)
        }
    };
    Ok((files, index))
}
