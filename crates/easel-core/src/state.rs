//! The authoritative image being edited.

use std::path::{Path, PathBuf};

use crate::buffer::PixelBuffer;

/// Original and current buffers of the open document, plus where it came
/// from and whether it has unsaved edits.
///
/// Starts empty. Loading installs one buffer as both original and current;
/// edits replace only the current buffer. The state owns its buffers
/// outright, so nothing else can observe or alter them in place.
#[derive(Debug, Clone, Default)]
pub struct ImageState {
    original: Option<PixelBuffer>,
    current: Option<PixelBuffer>,
    path: Option<PathBuf>,
    dirty: bool,
}

impl ImageState {
    /// An empty state with no image loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff a current buffer exists.
    pub fn has_image(&self) -> bool {
        self.current.is_some()
    }

    /// Install `buffer` as both the original and the current image.
    ///
    /// Replaces whatever was loaded before, clears the dirty flag and records
    /// `path`. Does not touch history; callers reset that separately.
    pub fn set_image(&mut self, buffer: PixelBuffer, path: Option<PathBuf>) {
        self.original = Some(buffer.clone());
        self.current = Some(buffer);
        self.path = path;
        self.dirty = false;
    }

    /// Replace the current buffer and mark the document dirty.
    ///
    /// The pre-edit buffer must already have been pushed to history.
    pub fn apply_new_current(&mut self, buffer: PixelBuffer) {
        self.current = Some(buffer);
        self.dirty = true;
    }

    /// Clear the dirty flag, rebinding the document to `path` if given.
    pub fn mark_saved(&mut self, path: Option<PathBuf>) {
        self.dirty = false;
        if let Some(path) = path {
            self.path = Some(path);
        }
    }

    /// `(width, height)` of the current buffer.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.current.as_ref().map(PixelBuffer::dimensions)
    }

    pub fn current(&self) -> Option<&PixelBuffer> {
        self.current.as_ref()
    }

    pub fn original(&self) -> Option<&PixelBuffer> {
        self.original.as_ref()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}
