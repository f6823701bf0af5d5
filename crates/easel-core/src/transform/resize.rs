//! Image resizing.
//!
//! Two entry points with different policies:
//! - [`resize_percent`] clamps the percentage to 10..=300 and never fails
//! - [`resize_by_factor`] takes the factor as given and rejects non-positive
//!   values
//!
//! Both resample with the `image` crate. All functions return new
//! `PixelBuffer` instances without modifying the input.

use serde::{Deserialize, Serialize};

use super::TransformError;
use crate::buffer::PixelBuffer;

/// Smallest percentage accepted by [`resize_percent`].
pub const MIN_SCALE_PERCENT: i32 = 10;

/// Largest percentage accepted by [`resize_percent`].
pub const MAX_SCALE_PERCENT: i32 = 300;

/// Largest output, in pixels, any resize will allocate (16384 x 16384).
pub const MAX_OUTPUT_PIXELS: u64 = 1 << 28;

/// Filter type for image resizing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Resize an image to exact dimensions.
///
/// # Errors
///
/// Returns `TransformError::InvalidDimensions` if either target dimension is
/// zero, and `TransformError::TooLarge` if the output would exceed
/// [`MAX_OUTPUT_PIXELS`].
pub fn resize(
    image: &PixelBuffer,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<PixelBuffer, TransformError> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidDimensions { width, height });
    }
    if (width as u64) * (height as u64) > MAX_OUTPUT_PIXELS {
        return Err(TransformError::TooLarge { width, height });
    }

    // Fast path: if dimensions match, just clone
    if image.dimensions() == (width, height) {
        return Ok(image.clone());
    }

    let rgb_image = image
        .to_rgb_image()
        .ok_or(TransformError::MalformedBuffer)?;

    let resized = image::imageops::resize(&rgb_image, width, height, filter.to_image_filter());

    Ok(PixelBuffer::from_rgb_image(resized))
}

/// Clamp a percentage into the supported range.
pub fn clamp_percent(percent: i32) -> i32 {
    percent.clamp(MIN_SCALE_PERCENT, MAX_SCALE_PERCENT)
}

/// Target dimensions for [`resize_percent`]: each side is
/// `round(side * percent / 100)`, at least 1.
pub fn percent_dimensions(width: u32, height: u32, percent: i32) -> (u32, u32) {
    let scale = clamp_percent(percent) as f64 / 100.0;
    (
        scaled_side(width, scale, f64::round),
        scaled_side(height, scale, f64::round),
    )
}

/// Scale by a percentage, clamped to 10..=300.
///
/// `resize_percent(img, 500)` is the same as `resize_percent(img, 300)`.
/// Empty images, and results that would exceed [`MAX_OUTPUT_PIXELS`], are
/// returned as-is.
pub fn resize_percent(image: &PixelBuffer, percent: i32) -> PixelBuffer {
    if image.is_empty() {
        return image.clone();
    }
    let (width, height) = percent_dimensions(image.width(), image.height(), percent);
    resize(image, width, height, FilterType::default()).unwrap_or_else(|_| image.clone())
}

/// Scale by an explicit factor with no clamping.
///
/// Each side becomes `trunc(side * factor)`, at least 1.
///
/// # Errors
///
/// Returns `TransformError::InvalidScaleFactor` if `factor` is zero,
/// negative or not finite, and `TransformError::TooLarge` if the scaled
/// image would exceed [`MAX_OUTPUT_PIXELS`].
pub fn resize_by_factor(image: &PixelBuffer, factor: f64) -> Result<PixelBuffer, TransformError> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(TransformError::InvalidScaleFactor(factor));
    }
    if image.is_empty() {
        return Ok(image.clone());
    }

    let width = scaled_side(image.width(), factor, f64::trunc);
    let height = scaled_side(image.height(), factor, f64::trunc);
    resize(image, width, height, FilterType::default())
}

#[inline]
fn scaled_side(side: u32, scale: f64, snap: fn(f64) -> f64) -> u32 {
    let v = snap(side as f64 * scale);
    if v >= u32::MAX as f64 {
        u32::MAX
    } else {
        (v as u32).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_image(width: u32, height: u32) -> PixelBuffer {
        // Create a simple gradient image for testing
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width.max(1)) as u8); // R
                pixels.push(((y * 255) / height.max(1)) as u8); // G
                pixels.push(128); // B
            }
        }
        PixelBuffer::new(width, height, pixels)
    }

    #[test]
    fn test_resize_basic() {
        let img = create_test_image(100, 50);
        let resized = resize(&img, 50, 25, FilterType::Bilinear).unwrap();

        assert_eq!(resized.dimensions(), (50, 25));
        assert_eq!(resized.byte_size(), 50 * 25 * 3);
    }

    #[test]
    fn test_resize_same_dimensions() {
        let img = create_test_image(100, 50);
        let resized = resize(&img, 100, 50, FilterType::Bilinear).unwrap();
        assert_eq!(resized, img);
    }

    #[test]
    fn test_resize_zero_dimensions_error() {
        let img = create_test_image(100, 50);

        assert!(matches!(
            resize(&img, 0, 50, FilterType::Bilinear),
            Err(TransformError::InvalidDimensions { .. })
        ));
        assert!(resize(&img, 50, 0, FilterType::Bilinear).is_err());
    }

    #[test]
    fn test_all_filter_types() {
        let img = create_test_image(100, 50);

        for filter in [
            FilterType::Nearest,
            FilterType::Bilinear,
            FilterType::Lanczos3,
        ] {
            let resized = resize(&img, 50, 25, filter).unwrap();
            assert_eq!(resized.dimensions(), (50, 25));
        }
    }

    #[test]
    fn test_filter_type_conversion() {
        assert!(matches!(
            FilterType::Nearest.to_image_filter(),
            image::imageops::FilterType::Nearest
        ));
        assert!(matches!(
            FilterType::Bilinear.to_image_filter(),
            image::imageops::FilterType::Triangle
        ));
        assert!(matches!(
            FilterType::Lanczos3.to_image_filter(),
            image::imageops::FilterType::Lanczos3
        ));
    }

    // ===== Percentage resize Tests =====

    #[test]
    fn test_percent_dimensions() {
        assert_eq!(percent_dimensions(100, 50, 50), (50, 25));
        assert_eq!(percent_dimensions(100, 50, 150), (150, 75));
        // 33 * 0.5 = 16.5 rounds away from zero
        assert_eq!(percent_dimensions(33, 33, 50), (17, 17));
        // Never collapses to zero
        assert_eq!(percent_dimensions(1, 1, 10), (1, 1));
    }

    #[test]
    fn test_resize_percent_half() {
        let img = create_test_image(100, 50);
        let result = resize_percent(&img, 50);
        assert_eq!(result.dimensions(), (50, 25));
    }

    #[test]
    fn test_resize_percent_clamps_high() {
        let img = create_test_image(20, 10);
        assert_eq!(resize_percent(&img, 500), resize_percent(&img, 300));
        assert_eq!(resize_percent(&img, 500).dimensions(), (60, 30));
    }

    #[test]
    fn test_resize_percent_clamps_low() {
        let img = create_test_image(100, 50);
        assert_eq!(resize_percent(&img, 1), resize_percent(&img, 10));
        assert_eq!(resize_percent(&img, -40).dimensions(), (10, 5));
    }

    #[test]
    fn test_resize_percent_100_is_identity() {
        let img = create_test_image(40, 30);
        assert_eq!(resize_percent(&img, 100), img);
    }

    // ===== Factor resize Tests =====

    #[test]
    fn test_resize_by_factor() {
        let img = create_test_image(100, 50);
        let result = resize_by_factor(&img, 0.5).unwrap();
        assert_eq!(result.dimensions(), (50, 25));
    }

    #[test]
    fn test_resize_by_factor_truncates() {
        let img = create_test_image(33, 33);
        // 33 * 0.5 = 16.5 truncates to 16
        assert_eq!(resize_by_factor(&img, 0.5).unwrap().dimensions(), (16, 16));
    }

    #[test]
    fn test_resize_by_factor_not_clamped() {
        let img = create_test_image(10, 10);
        assert_eq!(resize_by_factor(&img, 5.0).unwrap().dimensions(), (50, 50));
        assert_eq!(resize_by_factor(&img, 0.05).unwrap().dimensions(), (1, 1));
    }

    #[test]
    fn test_resize_by_factor_rejects_non_positive() {
        let img = create_test_image(10, 10);
        for factor in [0.0, -0.5, -2.0, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    resize_by_factor(&img, factor),
                    Err(TransformError::InvalidScaleFactor(_))
                ),
                "factor {} should be rejected",
                factor
            );
        }
    }

    #[test]
    fn test_resize_rejects_oversized_output() {
        let img = create_test_image(4, 4);
        assert_eq!(
            resize(&img, u32::MAX, u32::MAX, FilterType::Nearest),
            Err(TransformError::TooLarge {
                width: u32::MAX,
                height: u32::MAX,
            })
        );
        assert!(matches!(
            resize(&img, 16385, 16384, FilterType::Nearest),
            Err(TransformError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_resize_by_huge_factor_is_too_large() {
        let img = PixelBuffer::filled(2, 2, [1, 2, 3]);
        // 2e12 saturates each side to u32::MAX before the size check
        assert_eq!(
            resize_by_factor(&img, 1e12),
            Err(TransformError::TooLarge {
                width: u32::MAX,
                height: u32::MAX,
            })
        );
        assert!(matches!(
            resize_by_factor(&img, f64::MAX),
            Err(TransformError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_resize_does_not_touch_input() {
        let img = create_test_image(20, 20);
        let copy = img.clone();
        let _ = resize_percent(&img, 200);
        let _ = resize_by_factor(&img, 0.3);
        assert_eq!(img, copy);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: percentage dimensions always lie within the clamped
        /// range and are positive.
        #[test]
        fn prop_percent_dimensions_bounded(
            width in 1u32..=2000,
            height in 1u32..=2000,
            percent in any::<i32>(),
        ) {
            let (w, h) = percent_dimensions(width, height, percent);
            prop_assert!(w >= 1 && h >= 1);
            prop_assert!(w <= width * 3);
            prop_assert!(h <= height * 3);
            prop_assert!(w as f64 >= (width as f64 * 0.1).round().max(1.0));
        }

        /// Property: out-of-range percentages behave like the nearest bound.
        #[test]
        fn prop_percent_clamp_equivalence(percent in any::<i32>()) {
            let clamped = clamp_percent(percent);
            prop_assert_eq!(
                percent_dimensions(64, 48, percent),
                percent_dimensions(64, 48, clamped)
            );
        }
    }
}
