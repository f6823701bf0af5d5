//! Named, parameterized edits.
//!
//! An [`Edit`] is the serializable form of one transform call, so a UI can
//! describe what the user asked for (`{"op": "blur", "intensity": 7}`) and
//! hand it to the session without touching the transform functions directly.

use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::transform::{self, TransformError, DEFAULT_EDGE_HIGH, DEFAULT_EDGE_LOW};

fn default_edge_low() -> f32 {
    DEFAULT_EDGE_LOW
}

fn default_edge_high() -> f32 {
    DEFAULT_EDGE_HIGH
}

/// One transform with its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Edit {
    Grayscale,
    Invert,
    /// Gaussian blur; `intensity` is the kernel size before it is made odd.
    Blur { intensity: i32 },
    EdgeDetection {
        #[serde(default = "default_edge_low")]
        low: f32,
        #[serde(default = "default_edge_high")]
        high: f32,
    },
    /// Add `offset` to every channel.
    Brightness { offset: i32 },
    /// Scale channel values about zero.
    Contrast { factor: f32 },
    /// Scale channel values about the image mean.
    ContrastAboutMean { factor: f32 },
    /// Clockwise quarter turns; other angles leave the image unchanged.
    Rotate { degrees: i32 },
    /// `h`/`horizontal` or `v`/`vertical`; other values leave the image unchanged.
    Flip { mode: String },
    /// Percentage resize, clamped to 10..=300.
    Resize { percent: i32 },
    /// Unclamped resize by a positive factor.
    Scale { factor: f64 },
}

impl Edit {
    /// Edge detection with the default Canny thresholds.
    pub fn edge_detection() -> Self {
        Edit::EdgeDetection {
            low: DEFAULT_EDGE_LOW,
            high: DEFAULT_EDGE_HIGH,
        }
    }

    /// Run the edit against `image`, producing a new buffer.
    ///
    /// # Errors
    ///
    /// Only [`Edit::Scale`] can fail, with `TransformError::InvalidScaleFactor`
    /// or `TransformError::TooLarge`.
    pub fn apply(&self, image: &PixelBuffer) -> Result<PixelBuffer, TransformError> {
        let result = match self {
            Edit::Grayscale => transform::to_grayscale(image),
            Edit::Invert => transform::invert(image),
            Edit::Blur { intensity } => transform::blur(image, *intensity),
            Edit::EdgeDetection { low, high } => transform::detect_edges(image, *low, *high),
            Edit::Brightness { offset } => transform::adjust_brightness(image, *offset),
            Edit::Contrast { factor } => transform::adjust_contrast(image, *factor),
            Edit::ContrastAboutMean { factor } => {
                transform::adjust_contrast_about_mean(image, *factor)
            }
            Edit::Rotate { degrees } => transform::rotate(image, *degrees),
            Edit::Flip { mode } => transform::flip(image, mode),
            Edit::Resize { percent } => transform::resize_percent(image, *percent),
            Edit::Scale { factor } => transform::resize_by_factor(image, *factor)?,
        };
        Ok(result)
    }

    /// Short human-readable description for a status bar.
    pub fn label(&self) -> String {
        match self {
            Edit::Grayscale => "Grayscale".to_string(),
            Edit::Invert => "Invert Colours".to_string(),
            Edit::Blur { .. } => "Blur".to_string(),
            Edit::EdgeDetection { .. } => "Edge".to_string(),
            Edit::Brightness { offset } => format!("Brightness {:+}", offset),
            Edit::Contrast { factor } => format!("Contrast x{}", factor),
            Edit::ContrastAboutMean { factor } => format!("Contrast (mean) x{}", factor),
            Edit::Rotate { degrees } => format!("Rotation {}°", degrees),
            Edit::Flip { mode } => match transform::FlipMode::parse(mode) {
                Some(transform::FlipMode::Horizontal) => "Flip Horizontal".to_string(),
                Some(transform::FlipMode::Vertical) => "Flip Vertical".to_string(),
                None => format!("Flip ({})", mode),
            },
            Edit::Resize { percent } => {
                format!("Resized to {}%", transform::clamp_percent(*percent))
            }
            Edit::Scale { factor } => format!("Scale x{}", factor),
        }
    }
}
