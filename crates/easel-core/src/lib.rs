//! Easel Core - Image editing library
//!
//! This crate provides the editing core for Easel: the authoritative image
//! state, bounded undo/redo history, and a library of pure pixel transforms,
//! plus the codec boundary that turns files into RGB buffers and back.
//!
//! # Architecture
//!
//! - [`PixelBuffer`] is the one pixel representation: 8-bit RGB, row-major.
//! - [`ImageState`] owns the original and current buffers.
//! - [`HistoryManager`] keeps independent snapshots for undo/redo.
//! - [`transform`] functions borrow a buffer and return a new one.
//! - [`EditorSession`] ties the three together for a UI.
//!
//! Everything is synchronous and single-threaded.

pub mod buffer;
pub mod codec;
pub mod config;
pub mod edit;
pub mod history;
pub mod luminance;
pub mod session;
pub mod state;
pub mod transform;

pub use buffer::PixelBuffer;
pub use config::EditorConfig;
pub use edit::Edit;
pub use history::{HistoryManager, HistoryStats};
pub use session::{EditError, EditorSession};
pub use state::ImageState;
pub use transform::{FlipMode, TransformError};
