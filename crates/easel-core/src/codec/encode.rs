//! Encoding pixel buffers to PNG, JPEG or BMP.

use std::io::Cursor;
use std::path::Path;

use image::codecs::bmp::BmpEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::buffer::PixelBuffer;

/// Default JPEG quality used when none is configured.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The encoder rejected the image
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    /// Writing the encoded file failed
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    /// Quality is clamped to 1..=100.
    Jpeg { quality: u8 },
    Bmp,
}

impl OutputFormat {
    /// Pick a format from a file extension.
    ///
    /// `.jpg`/`.jpeg` map to JPEG with `jpeg_quality`, `.bmp` to BMP;
    /// everything else, including no extension, is PNG.
    pub fn from_path(path: impl AsRef<Path>, jpeg_quality: u8) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("jpg") | Some("jpeg") => OutputFormat::Jpeg {
                quality: jpeg_quality,
            },
            Some("bmp") => OutputFormat::Bmp,
            _ => OutputFormat::Png,
        }
    }

    /// Conventional file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg { .. } => "jpg",
            OutputFormat::Bmp => "bmp",
        }
    }
}

/// Encode a buffer to bytes in the given format.
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` for an empty buffer and
/// `EncodeError::EncodingFailed` if the underlying encoder fails.
pub fn encode_image(image: &PixelBuffer, format: OutputFormat) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = image.dimensions();
    if image.is_empty() {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let mut buffer = Cursor::new(Vec::new());
    let pixels = image.pixels();

    let result = match format {
        OutputFormat::Png => {
            PngEncoder::new(&mut buffer).write_image(pixels, width, height, ExtendedColorType::Rgb8)
        }
        OutputFormat::Jpeg { quality } => {
            JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100)).write_image(
                pixels,
                width,
                height,
                ExtendedColorType::Rgb8,
            )
        }
        OutputFormat::Bmp => {
            BmpEncoder::new(&mut buffer).write_image(pixels, width, height, ExtendedColorType::Rgb8)
        }
    };
    result.map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode a buffer and write it to `path`, choosing the format from the
/// extension.
pub fn save_image(
    image: &PixelBuffer,
    path: impl AsRef<Path>,
    jpeg_quality: u8,
) -> Result<(), EncodeError> {
    let path = path.as_ref();
    let bytes = encode_image(image, OutputFormat::from_path(path, jpeg_quality))?;
    std::fs::write(path, bytes)
        .map_err(|e| EncodeError::IoError(format!("{}: {}", path.display(), e)))
}
