//! Editor settings.

use serde::{Deserialize, Serialize};

use crate::codec::DEFAULT_JPEG_QUALITY;
use crate::history::DEFAULT_MAX_STATES;

/// Tunables for an [`EditorSession`](crate::session::EditorSession).
///
/// Missing fields fall back to their defaults when deserializing, so a
/// partial object such as `{"max_history_states": 5}` is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Undo levels kept before the oldest is discarded.
    pub max_history_states: usize,
    /// Quality used when saving to `.jpg`/`.jpeg` (1-100).
    pub jpeg_quality: u8,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_history_states: DEFAULT_MAX_STATES,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}
