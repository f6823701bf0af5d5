//! Easel WASM - WebAssembly bindings for Easel
//!
//! This crate exposes the easel-core editing functionality to
//! JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper type for pixel buffers
//! - `codec` - Decoding (JPEG, PNG, BMP) and encoding bindings
//! - `transform` - Stateless transforms for previews
//! - `editor` - `JsEditor`, a session with undo/redo and a status line
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsEditor } from '@easel/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const editor = new JsEditor();
//! editor.load(new Uint8Array(await file.arrayBuffer()), file.name);
//! editor.apply({ op: 'grayscale' });
//! console.log(`${editor.width}x${editor.height}: ${editor.status}`);
//! ```

use wasm_bindgen::prelude::*;

mod codec;
mod editor;
mod transform;
mod types;

// Re-export public types
pub use codec::{decode_image, encode_image};
pub use editor::JsEditor;
pub use transform::{
    blur, brightness, contrast, contrast_about_mean, detect_edges, flip, grayscale, invert,
    resize, resize_by_factor, resize_percent, rotate,
};
pub use types::JsPixelBuffer;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Wrap a message in a JavaScript `Error` so callers get a stack trace.
pub(crate) fn js_error(message: &str) -> JsValue {
    js_sys::Error::new(message).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
