//! Editing session: one image, its history, and the file it belongs to.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::buffer::PixelBuffer;
use crate::codec::{self, DecodeError, EncodeError, OutputFormat};
use crate::config::EditorConfig;
use crate::edit::Edit;
use crate::history::HistoryManager;
use crate::state::ImageState;
use crate::transform::TransformError;

/// Errors surfaced by [`EditorSession`].
#[derive(Debug, Error)]
pub enum EditError {
    /// An edit, save or export was requested with nothing loaded.
    #[error("No image loaded")]
    NoImage,

    /// `save` was called on an image that has never had a path.
    #[error("Image has no file path; use save as")]
    NoSavePath,

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Drives [`ImageState`] and [`HistoryManager`] together.
///
/// Every mutation either completes or leaves both untouched: an edit is
/// computed before anything is recorded, and a file is fully decoded before
/// it replaces the loaded image.
#[derive(Debug, Clone)]
pub struct EditorSession {
    state: ImageState,
    history: HistoryManager,
    config: EditorConfig,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorSession {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            state: ImageState::new(),
            history: HistoryManager::new(config.max_history_states),
            config,
        }
    }

    /// Install an already decoded buffer and start a fresh history.
    pub fn load(&mut self, buffer: PixelBuffer, path: Option<PathBuf>) {
        let (width, height) = buffer.dimensions();
        tracing::info!(width, height, path = ?path, "Loaded image");
        self.state.set_image(buffer, path);
        self.history.clear();
    }

    /// Decode the file at `path` and load it.
    ///
    /// On error the previously loaded image, if any, stays in place.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<(), EditError> {
        let path = path.as_ref();
        let buffer = codec::load_image(path).map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Failed to open image");
            e
        })?;
        self.load(buffer, Some(path.to_path_buf()));
        Ok(())
    }

    /// Decode an in-memory file and load it, recording `path` as its origin.
    pub fn open_bytes(&mut self, bytes: &[u8], path: Option<PathBuf>) -> Result<(), EditError> {
        let buffer = codec::decode_image(bytes).map_err(|e| {
            tracing::warn!(len = bytes.len(), error = %e, "Failed to decode image");
            e
        })?;
        self.load(buffer, path);
        Ok(())
    }

    /// Apply `edit` to the current image.
    ///
    /// The pre-edit buffer goes onto the undo stack only once the edit has
    /// succeeded, so a rejected edit changes neither image nor history.
    pub fn apply(&mut self, edit: &Edit) -> Result<(), EditError> {
        let current = self.state.current().ok_or(EditError::NoImage)?;

        let result = edit.apply(current).map_err(|e| {
            tracing::warn!(edit = %edit.label(), error = %e, "Edit rejected");
            e
        })?;

        self.history.push(Some(current));
        tracing::debug!(
            edit = %edit.label(),
            width = result.width(),
            height = result.height(),
            "Applied edit"
        );
        self.state.apply_new_current(result);
        Ok(())
    }

    /// Step back one edit. Returns `false` if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.state.current()) {
            Some(previous) => {
                self.state.apply_new_current(previous);
                true
            }
            None => false,
        }
    }

    /// Replay one undone edit. Returns `false` if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.state.current()) {
            Some(next) => {
                self.state.apply_new_current(next);
                true
            }
            None => false,
        }
    }

    /// Write the current image back to the file it was loaded from or last
    /// saved to, returning that path.
    pub fn save(&mut self) -> Result<PathBuf, EditError> {
        if !self.state.has_image() {
            return Err(EditError::NoImage);
        }
        let path = self
            .state
            .path()
            .map(Path::to_path_buf)
            .ok_or(EditError::NoSavePath)?;
        self.save_as(&path)?;
        Ok(path)
    }

    /// Write the current image to `path` and make it the document's path.
    ///
    /// The format follows the extension; see [`OutputFormat::from_path`].
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> Result<(), EditError> {
        let path = path.as_ref();
        let current = self.state.current().ok_or(EditError::NoImage)?;
        codec::save_image(current, path, self.config.jpeg_quality)?;
        tracing::info!(path = %path.display(), "Saved image");
        self.state.mark_saved(Some(path.to_path_buf()));
        Ok(())
    }

    /// Encode the current image without touching the filesystem or the
    /// dirty flag.
    pub fn export(&self, format: OutputFormat) -> Result<Vec<u8>, EditError> {
        let current = self.state.current().ok_or(EditError::NoImage)?;
        Ok(codec::encode_image(current, format)?)
    }

    /// Clear the dirty flag after the caller has persisted the image itself.
    pub fn mark_saved(&mut self, path: Option<PathBuf>) {
        self.state.mark_saved(path);
    }

    pub fn state(&self) -> &ImageState {
        &self.state
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn current(&self) -> Option<&PixelBuffer> {
        self.state.current()
    }

    pub fn has_image(&self) -> bool {
        self.state.has_image()
    }

    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.state.dimensions()
    }

    pub fn is_dirty(&self) -> bool {
        self.state.is_dirty()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}
