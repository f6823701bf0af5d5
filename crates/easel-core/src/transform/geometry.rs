//! Lossless geometric transforms: quarter-turn rotation and mirroring.
//!
//! Parameters outside the supported set are not errors. The image comes back
//! unchanged, which lets a UI forward raw widget values without validating
//! them first.

use image::imageops;
use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;

/// Mirror axis for [`flip_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlipMode {
    /// Mirror left to right.
    Horizontal,
    /// Mirror top to bottom.
    Vertical,
}

impl FlipMode {
    /// Parse a mode name. Accepts `h`/`horizontal` and `v`/`vertical` in any
    /// case; anything else is `None`.
    pub fn parse(mode: &str) -> Option<Self> {
        match mode.trim().to_ascii_lowercase().as_str() {
            "h" | "horizontal" => Some(FlipMode::Horizontal),
            "v" | "vertical" => Some(FlipMode::Vertical),
            _ => None,
        }
    }
}

/// Rotate clockwise by a multiple of 90 degrees.
///
/// `angle` must be one of 0, 90, 180 or 270. Any other value returns an
/// unchanged copy.
pub fn rotate(image: &PixelBuffer, angle: i32) -> PixelBuffer {
    if !matches!(angle, 90 | 180 | 270) {
        return image.clone();
    }
    let Some(rgb) = image.to_rgb_image() else {
        return image.clone();
    };

    let rotated = match angle {
        90 => imageops::rotate90(&rgb),
        180 => imageops::rotate180(&rgb),
        _ => imageops::rotate270(&rgb),
    };
    PixelBuffer::from_rgb_image(rotated)
}

/// Mirror the image. `mode` is parsed with [`FlipMode::parse`]; an
/// unrecognized mode returns an unchanged copy.
pub fn flip(image: &PixelBuffer, mode: &str) -> PixelBuffer {
    match FlipMode::parse(mode) {
        Some(mode) => flip_with(image, mode),
        None => image.clone(),
    }
}

/// Mirror the image along `mode`.
pub fn flip_with(image: &PixelBuffer, mode: FlipMode) -> PixelBuffer {
    let Some(rgb) = image.to_rgb_image() else {
        return image.clone();
    };

    let flipped = match mode {
        FlipMode::Horizontal => imageops::flip_horizontal(&rgb),
        FlipMode::Vertical => imageops::flip_vertical(&rgb),
    };
    PixelBuffer::from_rgb_image(flipped)
}
