//! File boundary of the editor: bytes in, `PixelBuffer` out, and back.
//!
//! Decoding detects the format from content and always yields 8-bit RGB.
//! Encoding picks a format from the file extension, defaulting to PNG.
//!
//! # Examples
//!
//! ```ignore
//! use easel_core::codec::{decode_image, encode_image, OutputFormat};
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! let png = encode_image(&image, OutputFormat::Png).unwrap();
//! ```

mod decode;
mod encode;

pub use decode::{decode_image, extract_orientation, load_image, DecodeError, Orientation};
pub use encode::{encode_image, save_image, EncodeError, OutputFormat, DEFAULT_JPEG_QUALITY};
