//! WASM-compatible wrapper types for image data.
//!
//! JavaScript never sees a core `PixelBuffer` directly; it gets a
//! [`JsPixelBuffer`] and copies pixels out on demand.

use easel_core::transform::FilterType;
use easel_core::PixelBuffer;
use wasm_bindgen::prelude::*;

/// An RGB image held in WASM memory.
///
/// # Memory Management
///
/// `pixels()` copies the data into a JavaScript `Uint8Array`. Keep the image
/// on the WASM side between edits and only pull pixels when drawing.
#[wasm_bindgen]
pub struct JsPixelBuffer {
    inner: PixelBuffer,
}

#[wasm_bindgen]
impl JsPixelBuffer {
    /// Wrap RGB pixel data (3 bytes per pixel, row-major order).
    ///
    /// # Errors
    /// Returns an error if `pixels.length != width * height * 3`.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsPixelBuffer, JsValue> {
        PixelBuffer::from_raw(width, height, pixels)
            .map(Self::from_buffer)
            .ok_or_else(|| {
                crate::js_error(&format!(
                    "Pixel data does not match {}x{} RGB image",
                    width, height
                ))
            })
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Number of bytes in the pixel buffer (width * height * 3)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.byte_size()
    }

    /// Returns RGB pixel data as Uint8Array. This is a copy.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels().to_vec()
    }

    /// Returns RGBA pixel data with opaque alpha, ready for `ImageData`.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.inner.pixel_count() * 4);
        for px in self.inner.pixels().chunks_exact(3) {
            rgba.extend_from_slice(&[px[0], px[1], px[2], 255]);
        }
        rgba
    }

    /// Explicitly free WASM memory.
    ///
    /// Optional; wasm-bindgen's finalizer releases it otherwise.
    pub fn free(self) {}
}

impl JsPixelBuffer {
    pub(crate) fn from_buffer(inner: PixelBuffer) -> Self {
        Self { inner }
    }

    pub(crate) fn as_buffer(&self) -> &PixelBuffer {
        &self.inner
    }
}

/// Convert a u8 filter type value to the core FilterType enum.
///
/// Values:
/// - 0 = Nearest (fastest, lowest quality)
/// - 1 = Bilinear (good balance of speed and quality)
/// - 2 = Lanczos3 (best quality, slowest)
///
/// Any other value defaults to Bilinear.
pub(crate) fn filter_from_u8(value: u8) -> FilterType {
    match value {
        0 => FilterType::Nearest,
        2 => FilterType::Lanczos3,
        _ => FilterType::Bilinear,
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_constructor_validates_length() {
        assert!(JsPixelBuffer::new(2, 2, vec![0u8; 12]).is_ok());
        assert!(JsPixelBuffer::new(2, 2, vec![0u8; 11]).is_err());
    }
}
