//! The transform library: pure pixel-buffer operations.
//!
//! Every function borrows its input and returns a newly allocated buffer.
//! Out-of-range parameters are clamped or ignored per operation; the only
//! operations that can fail are the explicit-size resizes.
//!
//! # Operations
//!
//! | Module | Operations |
//! |---|---|
//! | `color` | grayscale, invert, brightness, contrast (about zero and about the mean) |
//! | `filter` | Gaussian blur, Canny edge detection |
//! | `geometry` | quarter-turn rotation, horizontal/vertical flip |
//! | `resize` | clamped percentage, explicit factor, exact dimensions |

use thiserror::Error;

mod color;
mod filter;
mod geometry;
mod resize;

pub use color::{
    adjust_brightness, adjust_contrast, adjust_contrast_about_mean, channel_mean, invert,
    to_grayscale,
};
pub use filter::{
    blur, blur_kernel_size, detect_edges, DEFAULT_EDGE_HIGH, DEFAULT_EDGE_LOW, MAX_BLUR_KERNEL,
};
pub use geometry::{flip, flip_with, rotate, FlipMode};
pub use resize::{
    clamp_percent, percent_dimensions, resize, resize_by_factor, resize_percent, FilterType,
    MAX_SCALE_PERCENT, MIN_SCALE_PERCENT,
};

/// Errors reported by the transform library.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransformError {
    /// Explicit scale factor was zero, negative or not finite.
    #[error("Scale factor must be positive, got {0}")]
    InvalidScaleFactor(f64),

    /// Requested output size has a zero side.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Requested output has more than [`MAX_OUTPUT_PIXELS`] pixels.
    #[error("Output image {width}x{height} is too large")]
    TooLarge { width: u32, height: u32 },

    /// Pixel data length does not match the buffer's dimensions.
    #[error("Pixel buffer does not match its dimensions")]
    MalformedBuffer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_error_display() {
        let err = TransformError::InvalidScaleFactor(-1.5);
        assert_eq!(err.to_string(), "Scale factor must be positive, got -1.5");

        let err = TransformError::InvalidDimensions {
            width: 0,
            height: 10,
        };
        assert_eq!(
            err.to_string(),
            "Invalid dimensions: width (0) and height (10) must be non-zero"
        );

        let err = TransformError::TooLarge {
            width: 100_000,
            height: 100_000,
        };
        assert_eq!(err.to_string(), "Output image 100000x100000 is too large");
    }
}
