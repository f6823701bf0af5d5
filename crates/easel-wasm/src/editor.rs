//! Stateful editor binding.
//!
//! [`JsEditor`] wraps an [`EditorSession`] so the browser gets the same
//! load / edit / undo / redo / save flow as a native caller, plus a status
//! line describing the last action for a status bar.
//!
//! # Example
//!
//! ```typescript
//! import { JsEditor } from '@easel/wasm';
//!
//! const editor = JsEditor.with_config({ max_history_states: 50 });
//! editor.load(new Uint8Array(await file.arrayBuffer()), file.name);
//! editor.apply({ op: 'blur', intensity: 7 });
//! editor.undo();
//! console.log(editor.status); // "Undo performed"
//! const png = editor.export('png');
//! ```

use std::path::PathBuf;

use crate::types::JsPixelBuffer;
use easel_core::{Edit, EditError, EditorConfig, EditorSession};
use wasm_bindgen::prelude::*;

const READY: &str = "Ready";

/// Editing session exposed to JavaScript.
#[wasm_bindgen]
pub struct JsEditor {
    session: EditorSession,
    name: Option<String>,
    status: String,
}

#[wasm_bindgen]
impl JsEditor {
    /// Create an editor with default settings (30 undo levels, JPEG quality 90).
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsEditor {
        Self::from_config(EditorConfig::default())
    }

    /// Create an editor from a settings object such as
    /// `{ max_history_states: 50, jpeg_quality: 85 }`. Missing fields use
    /// their defaults.
    ///
    /// # Errors
    /// Returns error if the object cannot be deserialized
    pub fn with_config(config: JsValue) -> Result<JsEditor, JsValue> {
        let config: EditorConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| crate::js_error(&format!("Invalid editor config: {}", e)))?;
        Ok(Self::from_config(config))
    }

    /// Decode a file and make it the open document. History is cleared.
    ///
    /// On failure the previously open image stays loaded.
    pub fn load(&mut self, bytes: &[u8], name: String) -> Result<(), JsValue> {
        match self.load_bytes(bytes, name) {
            Ok(()) => Ok(()),
            Err(e) => Err(crate::js_error(&e.to_string())),
        }
    }

    /// Make an already decoded image the open document.
    pub fn load_pixels(&mut self, image: &JsPixelBuffer, name: String) {
        self.session
            .load(image.as_buffer().clone(), Some(PathBuf::from(&name)));
        self.after_load(name);
    }

    /// Apply an edit object such as `{ op: "rotate", degrees: 90 }`.
    ///
    /// # Errors
    /// Returns error if the object is not a known edit, no image is loaded,
    /// or the edit's parameters are rejected.
    pub fn apply(&mut self, edit: JsValue) -> Result<(), JsValue> {
        let edit: Edit = serde_wasm_bindgen::from_value(edit)
            .map_err(|e| crate::js_error(&format!("Invalid edit: {}", e)))?;
        self.apply_edit(&edit)
            .map_err(|e| crate::js_error(&e.to_string()))
    }

    /// Step back one edit. Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let done = self.session.undo();
        self.set_status(if done {
            "Undo performed"
        } else {
            "Nothing to undo"
        });
        done
    }

    /// Replay one undone edit. Returns false if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        let done = self.session.redo();
        self.set_status(if done {
            "Redo performed"
        } else {
            "Nothing to redo"
        });
        done
    }

    /// Encode the current image for download.
    ///
    /// * `format` - `"jpg"`/`"jpeg"`, `"bmp"`, anything else is PNG
    ///
    /// Does not clear the dirty flag; call `mark_saved` once the file is
    /// actually written.
    pub fn export(&self, format: &str) -> Result<Vec<u8>, JsValue> {
        let format = crate::codec::format_from_str(format, self.session.config().jpeg_quality);
        self.session
            .export(format)
            .map_err(|e| crate::js_error(&e.to_string()))
    }

    /// Record that the current image has been saved, optionally under a new
    /// name.
    pub fn mark_saved(&mut self, name: Option<String>) {
        if let Some(name) = &name {
            self.name = Some(name.clone());
        }
        self.session.mark_saved(name.map(PathBuf::from));
        let label = self.name.clone().unwrap_or_default();
        self.set_status(format!("Saved: {}", label));
    }

    /// Copy of the current image, or undefined if nothing is loaded.
    pub fn current(&self) -> Option<JsPixelBuffer> {
        self.session
            .current()
            .cloned()
            .map(JsPixelBuffer::from_buffer)
    }

    /// Copy of the image as it was loaded.
    pub fn original(&self) -> Option<JsPixelBuffer> {
        self.session
            .state()
            .original()
            .cloned()
            .map(JsPixelBuffer::from_buffer)
    }

    #[wasm_bindgen(getter)]
    pub fn has_image(&self) -> bool {
        self.session.has_image()
    }

    /// Width of the current image, 0 if none is loaded
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.session.dimensions().map_or(0, |(w, _)| w)
    }

    /// Height of the current image, 0 if none is loaded
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.session.dimensions().map_or(0, |(_, h)| h)
    }

    #[wasm_bindgen(getter)]
    pub fn is_dirty(&self) -> bool {
        self.session.is_dirty()
    }

    #[wasm_bindgen(getter)]
    pub fn can_undo(&self) -> bool {
        self.session.can_undo()
    }

    #[wasm_bindgen(getter)]
    pub fn can_redo(&self) -> bool {
        self.session.can_redo()
    }

    #[wasm_bindgen(getter)]
    pub fn undo_count(&self) -> usize {
        self.session.history().undo_len()
    }

    #[wasm_bindgen(getter)]
    pub fn redo_count(&self) -> usize {
        self.session.history().redo_len()
    }

    /// File name of the open document, if any.
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> Option<String> {
        self.name.clone()
    }

    /// Description of the last action.
    #[wasm_bindgen(getter)]
    pub fn status(&self) -> String {
        self.status.clone()
    }
}

impl Default for JsEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl JsEditor {
    pub(crate) fn from_config(config: EditorConfig) -> Self {
        Self {
            session: EditorSession::new(config),
            name: None,
            status: READY.to_string(),
        }
    }

    pub(crate) fn load_bytes(&mut self, bytes: &[u8], name: String) -> Result<(), EditError> {
        if let Err(e) = self
            .session
            .open_bytes(bytes, Some(PathBuf::from(&name)))
        {
            self.set_status(format!("Failed to load {}: {}", name, e));
            return Err(e);
        }
        self.after_load(name);
        Ok(())
    }

    pub(crate) fn apply_edit(&mut self, edit: &Edit) -> Result<(), EditError> {
        match self.session.apply(edit) {
            Ok(()) => {
                self.set_status(format!("Applied: {}", edit.label()));
                Ok(())
            }
            Err(e) => {
                self.set_status(format!("Failed: {}", e));
                Err(e)
            }
        }
    }

    fn after_load(&mut self, name: String) {
        let (width, height) = self.session.dimensions().unwrap_or((0, 0));
        self.set_status(format!("Loaded: {} ({}x{})", name, width, height));
        self.name = Some(name);
    }

    fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&JsValue::from_str(&self.status));
    }
}
