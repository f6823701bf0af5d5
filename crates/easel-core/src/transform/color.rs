//! Per-pixel color operations.
//!
//! Every function copies its input and rewrites the copy; results are
//! clamped to 0..=255, never wrapped.

use crate::buffer::PixelBuffer;
use crate::luminance::luma_u8;

/// Convert to grayscale, keeping three identical channels.
///
/// Uses BT.601 luma so the result matches common image libraries.
pub fn to_grayscale(image: &PixelBuffer) -> PixelBuffer {
    let mut out = image.clone();
    for chunk in out.pixels_mut().chunks_exact_mut(3) {
        let y = luma_u8(chunk[0], chunk[1], chunk[2]);
        chunk.fill(y);
    }
    out
}

/// Invert every channel (`255 - v`).
pub fn invert(image: &PixelBuffer) -> PixelBuffer {
    let mut out = image.clone();
    for v in out.pixels_mut() {
        *v = 255 - *v;
    }
    out
}

/// Add `offset` to every channel.
pub fn adjust_brightness(image: &PixelBuffer, offset: i32) -> PixelBuffer {
    if offset == 0 {
        return image.clone();
    }
    let mut out = image.clone();
    for v in out.pixels_mut() {
        *v = (*v as i32).saturating_add(offset).clamp(0, 255) as u8;
    }
    out
}

/// Scale every channel by `factor` about zero.
///
/// Formula: `output = input * factor`
pub fn adjust_contrast(image: &PixelBuffer, factor: f32) -> PixelBuffer {
    scale_about(image, factor, 0.0)
}

/// Scale every channel by `factor` about the image mean.
///
/// The mean is taken over every channel sample, so a uniform image is left
/// unchanged whatever the factor.
///
/// Formula: `output = (input - mean) * factor + mean`
pub fn adjust_contrast_about_mean(image: &PixelBuffer, factor: f32) -> PixelBuffer {
    scale_about(image, factor, channel_mean(image))
}

/// Mean of every byte in the buffer, or 0 for an empty buffer.
pub fn channel_mean(image: &PixelBuffer) -> f32 {
    let pixels = image.pixels();
    if pixels.is_empty() {
        return 0.0;
    }
    let sum: u64 = pixels.iter().map(|&v| v as u64).sum();
    (sum as f64 / pixels.len() as f64) as f32
}

#[inline]
fn scale_about(image: &PixelBuffer, factor: f32, pivot: f32) -> PixelBuffer {
    // NaN would otherwise saturate every channel to 0
    let factor = if factor.is_finite() { factor } else { 1.0 };
    let mut out = image.clone();
    for v in out.pixels_mut() {
        let scaled = (*v as f32 - pivot) * factor + pivot;
        *v = scaled.round().clamp(0.0, 255.0) as u8;
    }
    out
}
