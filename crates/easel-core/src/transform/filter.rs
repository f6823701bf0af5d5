//! Neighborhood filters: Gaussian blur and Canny edge detection.
//!
//! # Blur
//!
//! The blur takes a kernel size rather than a sigma. The size is forced to be
//! odd and at least 1, and sigma is derived from it:
//! ```text
//! sigma = 0.3 * ((k - 1) * 0.5 - 1) + 0.8
//! ```
//! The kernel is applied separably (rows, then columns) in floating point,
//! with mirrored borders that do not repeat the edge pixel (`dcb|abcd|cba`).
//! Intensities are capped at [`MAX_BLUR_KERNEL`].

use crate::buffer::PixelBuffer;
use crate::luminance::{expand_plane, luma_plane};
use image::{ImageBuffer, Rgb, Rgb32FImage};
use imageproc::filter::separable_filter_equal;

/// Default lower hysteresis threshold for edge detection.
pub const DEFAULT_EDGE_LOW: f32 = 80.0;

/// Default upper hysteresis threshold for edge detection.
pub const DEFAULT_EDGE_HIGH: f32 = 160.0;

/// Largest kernel size a blur will use. Bigger intensities are clamped to it.
pub const MAX_BLUR_KERNEL: usize = 255;

/// Kernel size actually used for a blur `intensity`.
///
/// Values below 1 become 1 and values above [`MAX_BLUR_KERNEL`] become
/// [`MAX_BLUR_KERNEL`]; even values are bumped to the next odd number.
pub fn blur_kernel_size(intensity: i32) -> usize {
    let k = intensity.clamp(1, MAX_BLUR_KERNEL as i32) as usize;
    if k % 2 == 0 {
        k + 1
    } else {
        k
    }
}

/// Gaussian-blur an image with a square kernel derived from `intensity`.
///
/// An intensity of 1 or less yields an exact copy.
pub fn blur(image: &PixelBuffer, intensity: i32) -> PixelBuffer {
    let size = blur_kernel_size(intensity);
    if size == 1 || image.is_empty() {
        return image.clone();
    }

    let kernel = gaussian_kernel(size);
    let radius = (size / 2) as u32;
    let (w, h) = image.dimensions();

    // imageproc replicates the border, so mirror it ourselves first. The
    // padding is as wide as the kernel radius, leaving replication unseen.
    let padded: Rgb32FImage = ImageBuffer::from_fn(w + 2 * radius, h + 2 * radius, |x, y| {
        let sx = reflect_101(x as isize - radius as isize, w as usize) as u32;
        let sy = reflect_101(y as isize - radius as isize, h as usize) as u32;
        let [r, g, b] = image.pixel(sx, sy).unwrap_or_default();
        Rgb([r as f32, g as f32, b as f32])
    });
    let filtered = separable_filter_equal(&padded, &kernel);

    let mut pixels = Vec::with_capacity(image.byte_size());
    for y in radius..radius + h {
        for x in radius..radius + w {
            let Rgb(px) = filtered.get_pixel(x, y);
            pixels.extend(px.iter().map(|v| v.round().clamp(0.0, 255.0) as u8));
        }
    }
    PixelBuffer::new(w, h, pixels)
}

/// Detect edges with the Canny algorithm on the luma plane.
///
/// Edge pixels are white, everything else black, replicated across all three
/// channels. Thresholds are swapped if given in the wrong order; negative or
/// non-finite thresholds fall back to the defaults.
pub fn detect_edges(image: &PixelBuffer, low: f32, high: f32) -> PixelBuffer {
    if image.is_empty() {
        return image.clone();
    }

    let low = sanitize_threshold(low, DEFAULT_EDGE_LOW);
    let high = sanitize_threshold(high, DEFAULT_EDGE_HIGH);
    let (low, high) = if low <= high { (low, high) } else { (high, low) };

    let gray = luma_plane(image);
    let edges = imageproc::edges::canny(&gray, low, high);
    expand_plane(&edges)
}

fn sanitize_threshold(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        fallback
    }
}

/// Normalized 1-D Gaussian weights for an odd kernel size.
fn gaussian_kernel(size: usize) -> Vec<f32> {
    let sigma = 0.3 * ((size as f64 - 1.0) * 0.5 - 1.0) + 0.8;
    let center = (size / 2) as f64;
    let scale = -0.5 / (sigma * sigma);

    let weights: Vec<f64> = (0..size)
        .map(|i| {
            let d = i as f64 - center;
            (d * d * scale).exp()
        })
        .collect();
    let sum: f64 = weights.iter().sum();

    weights.iter().map(|w| (w / sum) as f32).collect()
}

/// Map an out-of-range index back into `0..len` by mirroring without
/// repeating the border sample.
#[inline]
fn reflect_101(i: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let period = 2 * (len as isize - 1);
    let i = i.rem_euclid(period);
    if i >= len as isize {
        (period - i) as usize
    } else {
        i as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a test image with a gradient pattern.
    fn gradient(width: u32, height: u32) -> PixelBuffer {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width.max(1)) as u8);
                pixels.push(((y * 255) / height.max(1)) as u8);
                pixels.push(128);
            }
        }
        PixelBuffer::new(width, height, pixels)
    }

    /// Left half black, right half white.
    fn step(width: u32, height: u32) -> PixelBuffer {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for _ in 0..height {
            for x in 0..width {
                let v = if x < width / 2 { 0 } else { 255 };
                pixels.extend_from_slice(&[v, v, v]);
            }
        }
        PixelBuffer::new(width, height, pixels)
    }

    // ===== Kernel size Tests =====

    #[test]
    fn test_kernel_size_coercion() {
        assert_eq!(blur_kernel_size(-5), 1);
        assert_eq!(blur_kernel_size(0), 1);
        assert_eq!(blur_kernel_size(1), 1);
        assert_eq!(blur_kernel_size(2), 3);
        assert_eq!(blur_kernel_size(3), 3);
        assert_eq!(blur_kernel_size(4), 5);
        assert_eq!(blur_kernel_size(10), 11);
        assert_eq!(blur_kernel_size(254), 255);
        assert_eq!(blur_kernel_size(256), MAX_BLUR_KERNEL);
        assert_eq!(blur_kernel_size(i32::MAX), MAX_BLUR_KERNEL);
    }

    #[test]
    fn test_gaussian_kernel_normalized_and_symmetric() {
        for size in [3, 5, 7, 11, 31] {
            let k = gaussian_kernel(size);
            assert_eq!(k.len(), size);
            let sum: f32 = k.iter().sum();
            assert!((sum - 1.0).abs() < 1e-5, "kernel {} sums to {}", size, sum);
            for i in 0..size / 2 {
                assert!((k[i] - k[size - 1 - i]).abs() < 1e-7);
            }
            // Peak in the middle
            assert!(k[size / 2] >= k[0]);
        }
    }

    #[test]
    fn test_reflect_101() {
        assert_eq!(reflect_101(-1, 5), 1);
        assert_eq!(reflect_101(-2, 5), 2);
        assert_eq!(reflect_101(5, 5), 3);
        assert_eq!(reflect_101(6, 5), 2);
        assert_eq!(reflect_101(2, 5), 2);
        assert_eq!(reflect_101(-7, 1), 0);
        // Far outside a short row still lands in range
        for i in -50..50 {
            assert!(reflect_101(i, 3) < 3);
        }
    }

    // ===== Blur Tests =====

    #[test]
    fn test_blur_small_intensity_is_identity() {
        let img = gradient(20, 10);
        assert_eq!(blur(&img, 0), img);
        assert_eq!(blur(&img, 1), img);
        assert_eq!(blur(&img, -3), img);
    }

    #[test]
    fn test_blur_even_matches_next_odd() {
        let img = gradient(16, 16);
        assert_eq!(blur(&img, 4), blur(&img, 5));
    }

    #[test]
    fn test_blur_preserves_dimensions() {
        let img = gradient(37, 11);
        let result = blur(&img, 7);
        assert_eq!(result.dimensions(), (37, 11));
        assert_eq!(result.byte_size(), img.byte_size());
    }

    #[test]
    fn test_blur_uniform_image_unchanged() {
        let img = PixelBuffer::filled(12, 9, [90, 180, 45]);
        assert_eq!(blur(&img, 9), img);
    }

    #[test]
    fn test_blur_softens_step() {
        let img = step(20, 4);
        let result = blur(&img, 5);

        let left = result.pixel(9, 2).unwrap()[0];
        let right = result.pixel(10, 2).unwrap()[0];
        assert!(left > 0, "dark side of the edge should lighten");
        assert!(right < 255, "bright side of the edge should darken");
        // Far from the edge nothing changes
        assert_eq!(result.pixel(0, 0), Some([0, 0, 0]));
        assert_eq!(result.pixel(19, 3), Some([255, 255, 255]));
    }

    #[test]
    fn test_blur_kernel_larger_than_image() {
        let img = gradient(3, 2);
        let result = blur(&img, 25);
        assert_eq!(result.dimensions(), (3, 2));
    }

    #[test]
    fn test_blur_huge_intensity_is_capped() {
        let img = gradient(9, 6);
        let result = blur(&img, i32::MAX);
        assert_eq!(result.dimensions(), (9, 6));
        assert_eq!(result, blur(&img, MAX_BLUR_KERNEL as i32));
    }

    #[test]
    fn test_blur_single_pixel() {
        let img = PixelBuffer::filled(1, 1, [10, 200, 30]);
        assert_eq!(blur(&img, 7), img);
    }

    #[test]
    fn test_blur_does_not_touch_input() {
        let img = step(10, 10);
        let copy = img.clone();
        let _ = blur(&img, 9);
        assert_eq!(img, copy);
    }

    // ===== Edge detection Tests =====

    #[test]
    fn test_edges_uniform_image_is_black() {
        let img = PixelBuffer::filled(20, 20, [120, 60, 30]);
        let edges = detect_edges(&img, DEFAULT_EDGE_LOW, DEFAULT_EDGE_HIGH);
        assert_eq!(edges.dimensions(), (20, 20));
        assert!(edges.pixels().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_edges_found_on_step() {
        let img = step(20, 20);
        let edges = detect_edges(&img, DEFAULT_EDGE_LOW, DEFAULT_EDGE_HIGH);

        // Something along the boundary is marked
        let found = (0..20).any(|y| {
            (8..12).any(|x| edges.pixel(x, y) == Some([255, 255, 255]))
        });
        assert!(found, "step edge should be detected");

        // Output is binary and gray
        for px in edges.pixels().chunks_exact(3) {
            assert!(px[0] == 0 || px[0] == 255);
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
        }
    }

    #[test]
    fn test_edges_swapped_thresholds() {
        let img = step(20, 20);
        assert_eq!(
            detect_edges(&img, 160.0, 80.0),
            detect_edges(&img, 80.0, 160.0)
        );
    }

    #[test]
    fn test_edges_invalid_thresholds_use_defaults() {
        let img = step(20, 20);
        assert_eq!(
            detect_edges(&img, f32::NAN, -1.0),
            detect_edges(&img, DEFAULT_EDGE_LOW, DEFAULT_EDGE_HIGH)
        );
    }
}
