//! Stateless transform bindings.
//!
//! Each function takes a [`JsPixelBuffer`] and returns a new one, leaving the
//! input untouched. Use these for previews; edits that should be undoable go
//! through [`JsEditor`](crate::editor::JsEditor).
//!
//! # Example
//!
//! ```typescript
//! import { grayscale, blur, rotate } from '@easel/wasm';
//!
//! const preview = blur(grayscale(image), 7);
//! const turned = rotate(image, 90);
//! ```

use crate::types::{filter_from_u8, JsPixelBuffer};
use easel_core::transform;
use wasm_bindgen::prelude::*;

/// Convert to grayscale (BT.601 luma replicated into all channels).
#[wasm_bindgen]
pub fn grayscale(image: &JsPixelBuffer) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(transform::to_grayscale(image.as_buffer()))
}

/// Invert every channel.
#[wasm_bindgen]
pub fn invert(image: &JsPixelBuffer) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(transform::invert(image.as_buffer()))
}

/// Gaussian blur. `intensity` is the kernel size; even values are bumped to
/// the next odd one and values of 1 or less leave the image unchanged.
#[wasm_bindgen]
pub fn blur(image: &JsPixelBuffer, intensity: i32) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(transform::blur(image.as_buffer(), intensity))
}

/// Canny edge detection. The result is white edges on black.
#[wasm_bindgen]
pub fn detect_edges(image: &JsPixelBuffer, low: f32, high: f32) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(transform::detect_edges(image.as_buffer(), low, high))
}

/// Add `offset` to every channel, saturating at 0 and 255.
#[wasm_bindgen]
pub fn brightness(image: &JsPixelBuffer, offset: i32) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(transform::adjust_brightness(image.as_buffer(), offset))
}

/// Multiply every channel by `factor`.
#[wasm_bindgen]
pub fn contrast(image: &JsPixelBuffer, factor: f32) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(transform::adjust_contrast(image.as_buffer(), factor))
}

/// Stretch channel values away from the image mean by `factor`.
#[wasm_bindgen]
pub fn contrast_about_mean(image: &JsPixelBuffer, factor: f32) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(transform::adjust_contrast_about_mean(
        image.as_buffer(),
        factor,
    ))
}

/// Rotate clockwise by 90, 180 or 270 degrees. Other angles return a copy.
#[wasm_bindgen]
pub fn rotate(image: &JsPixelBuffer, degrees: i32) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(transform::rotate(image.as_buffer(), degrees))
}

/// Mirror along `"h"`/`"horizontal"` or `"v"`/`"vertical"`. Other modes
/// return a copy.
#[wasm_bindgen]
pub fn flip(image: &JsPixelBuffer, mode: &str) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(transform::flip(image.as_buffer(), mode))
}

/// Resize by a percentage, clamped to 10..=300.
#[wasm_bindgen]
pub fn resize_percent(image: &JsPixelBuffer, percent: i32) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(transform::resize_percent(image.as_buffer(), percent))
}

/// Resize by an explicit factor.
///
/// # Errors
/// Returns an error if `factor` is not a positive finite number or the
/// result would be too large.
#[wasm_bindgen]
pub fn resize_by_factor(image: &JsPixelBuffer, factor: f64) -> Result<JsPixelBuffer, JsValue> {
    transform::resize_by_factor(image.as_buffer(), factor)
        .map(JsPixelBuffer::from_buffer)
        .map_err(|e| crate::js_error(&e.to_string()))
}

/// Resize to exact dimensions.
///
/// * `filter` - 0=Nearest, 1=Bilinear (default), 2=Lanczos3
///
/// # Errors
/// Returns an error if width or height is zero.
#[wasm_bindgen]
pub fn resize(
    image: &JsPixelBuffer,
    width: u32,
    height: u32,
    filter: u8,
) -> Result<JsPixelBuffer, JsValue> {
    transform::resize(image.as_buffer(), width, height, filter_from_u8(filter))
        .map(JsPixelBuffer::from_buffer)
        .map_err(|e| crate::js_error(&e.to_string()))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use easel_core::PixelBuffer;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_resize_by_factor_rejects_negative() {
        let img = JsPixelBuffer::from_buffer(PixelBuffer::filled(4, 4, [0, 0, 0]));
        assert!(resize_by_factor(&img, -1.0).is_err());
        assert!(resize(&img, 0, 4, 1).is_err());
    }
}
