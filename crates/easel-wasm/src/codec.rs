//! Decoding and encoding bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, encode_image } from '@easel/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const png = encode_image(image, 'png', 90);
//! ```

use crate::types::JsPixelBuffer;
use easel_core::codec::{self, OutputFormat};
use wasm_bindgen::prelude::*;

/// Decode a JPEG, PNG or BMP file. JPEG EXIF orientation is applied.
///
/// # Errors
/// Returns an error if the format is unrecognized or the data is corrupt.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsPixelBuffer, JsValue> {
    codec::decode_image(bytes)
        .map(JsPixelBuffer::from_buffer)
        .map_err(|e| crate::js_error(&e.to_string()))
}

/// Encode an image.
///
/// * `format` - `"jpg"`/`"jpeg"`, `"bmp"`, anything else is PNG
/// * `quality` - JPEG quality (1-100), ignored for other formats
///
/// # Errors
/// Returns an error if the image is empty or encoding fails.
#[wasm_bindgen]
pub fn encode_image(image: &JsPixelBuffer, format: &str, quality: u8) -> Result<Vec<u8>, JsValue> {
    codec::encode_image(image.as_buffer(), format_from_str(format, quality))
        .map_err(|e| crate::js_error(&e.to_string()))
}

/// Map a format name or extension to an [`OutputFormat`].
pub(crate) fn format_from_str(format: &str, quality: u8) -> OutputFormat {
    let name = format.trim().trim_start_matches('.');
    OutputFormat::from_path(format!("image.{}", name), quality)
}
