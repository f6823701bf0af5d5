//! Bounded undo/redo history of pixel buffer snapshots.
//!
//! Two stacks:
//! - the undo stack holds states the user can step back to, oldest first
//! - the redo stack holds states that were undone, most recent last
//!
//! Every buffer entering either stack is cloned, so history never shares
//! storage with the live image. Pushing a new state discards the redo stack;
//! once the undo stack exceeds its capacity the oldest snapshot is dropped.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;

/// Default number of undo levels.
pub const DEFAULT_MAX_STATES: usize = 30;

/// Depth of each stack, for status displays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryStats {
    pub undo_count: usize,
    pub redo_count: usize,
}

/// Dual-stack undo/redo ledger.
#[derive(Debug, Clone)]
pub struct HistoryManager {
    undo_stack: VecDeque<PixelBuffer>,
    redo_stack: Vec<PixelBuffer>,
    max_states: usize,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_STATES)
    }
}

impl HistoryManager {
    /// Create a history keeping at most `max_states` undo levels.
    ///
    /// A capacity of zero is raised to one.
    pub fn new(max_states: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_states: max_states.max(1),
        }
    }

    pub fn max_states(&self) -> usize {
        self.max_states
    }

    /// Drop every snapshot. Used when a new image is loaded.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Record `state` as the state before an edit.
    ///
    /// Does nothing when `state` is `None`.
    pub fn push(&mut self, state: Option<&PixelBuffer>) {
        let Some(state) = state else {
            return;
        };

        self.undo_stack.push_back(state.clone());
        self.redo_stack.clear();

        while self.undo_stack.len() > self.max_states {
            self.undo_stack.pop_front();
            tracing::debug!(max_states = self.max_states, "Evicted oldest history entry");
        }
    }

    /// Step back one state.
    ///
    /// `current` is kept on the redo stack so the step can be replayed.
    /// Returns `None` when there is nothing to undo or no current state.
    pub fn undo(&mut self, current: Option<&PixelBuffer>) -> Option<PixelBuffer> {
        let current = current?;
        let previous = self.undo_stack.pop_back()?;
        self.redo_stack.push(current.clone());
        Some(previous)
    }

    /// Step forward one undone state.
    ///
    /// `current` is kept on the undo stack. Returns `None` when there is
    /// nothing to redo or no current state.
    pub fn redo(&mut self, current: Option<&PixelBuffer>) -> Option<PixelBuffer> {
        let current = current?;
        let next = self.redo_stack.pop()?;
        self.undo_stack.push_back(current.clone());
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn stats(&self) -> HistoryStats {
        HistoryStats {
            undo_count: self.undo_stack.len(),
            redo_count: self.redo_stack.len(),
        }
    }
}
