//! Luma calculation using ITU-R BT.601 coefficients.
//!
//! Shared by the grayscale conversion and the edge detector so both agree on
//! what "brightness" of a pixel means.

use crate::buffer::PixelBuffer;

/// ITU-R BT.601 coefficient for red channel in luma calculation.
pub const LUMA_R: f32 = 0.299;

/// ITU-R BT.601 coefficient for green channel in luma calculation.
pub const LUMA_G: f32 = 0.587;

/// ITU-R BT.601 coefficient for blue channel in luma calculation.
pub const LUMA_B: f32 = 0.114;

/// Calculate luma from u8 RGB values (0 to 255), rounded to the nearest
/// integer.
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    let y = LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32;
    y.clamp(0.0, 255.0).round() as u8
}

/// Single-channel luma plane of a buffer.
pub fn luma_plane(image: &PixelBuffer) -> image::GrayImage {
    let data: Vec<u8> = image
        .pixels()
        .chunks_exact(3)
        .map(|px| luma_u8(px[0], px[1], px[2]))
        .collect();
    image::GrayImage::from_raw(image.width(), image.height(), data)
        .unwrap_or_else(|| image::GrayImage::new(image.width(), image.height()))
}

/// Expand a single-channel plane back to RGB by replicating each sample.
pub fn expand_plane(plane: &image::GrayImage) -> PixelBuffer {
    let (width, height) = plane.dimensions();
    let mut pixels = Vec::with_capacity(plane.as_raw().len() * 3);
    for &v in plane.as_raw() {
        pixels.extend_from_slice(&[v, v, v]);
    }
    PixelBuffer::new(width, height, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_coefficients_sum_to_one() {
        let sum = LUMA_R + LUMA_G + LUMA_B;
        assert!((sum - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_luma_extremes() {
        assert_eq!(luma_u8(255, 255, 255), 255);
        assert_eq!(luma_u8(0, 0, 0), 0);
    }

    #[test]
    fn test_luma_gray_preserves_value() {
        for v in [0u8, 64, 128, 192, 255] {
            assert_eq!(luma_u8(v, v, v), v);
        }
    }

    #[test]
    fn test_luma_primaries() {
        // 0.299 * 255 = 76.2
        assert_eq!(luma_u8(255, 0, 0), 76);
        // 0.587 * 255 = 149.7
        assert_eq!(luma_u8(0, 255, 0), 150);
        // 0.114 * 255 = 29.07
        assert_eq!(luma_u8(0, 0, 255), 29);
    }

    #[test]
    fn test_plane_roundtrip_dimensions() {
        let img = PixelBuffer::filled(7, 3, [10, 200, 30]);
        let plane = luma_plane(&img);
        assert_eq!(plane.dimensions(), (7, 3));

        let expanded = expand_plane(&plane);
        assert_eq!(expanded.dimensions(), (7, 3));
        let y = luma_u8(10, 200, 30);
        assert_eq!(expanded.pixel(6, 2), Some([y, y, y]));
    }
}
