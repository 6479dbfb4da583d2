//! Slice-playback state machine.
//!
//! Two states, Stopped and Playing. The automatic tick wraps past the last
//! slice; manual stepping clamps at the bounds and never wraps. Timing
//! lives in the GUI (a cancelable ticker thread); this type only holds the
//! state transitions, so every rule is unit-testable.

use crate::consts::TOTAL_SLICES;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlicePlayback {
    current_slice: usize,
    total_slices: usize,
    playing: bool,
}

impl SlicePlayback {
    pub fn new(total_slices: usize) -> Self {
        Self {
            current_slice: 0,
            total_slices: total_slices.max(1),
            playing: false,
        }
    }

    pub fn current_slice(&self) -> usize {
        self.current_slice
    }

    pub fn total_slices(&self) -> usize {
        self.total_slices
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Stopped -> Playing. Idempotent.
    pub fn play(&mut self) {
        self.playing = true;
    }

    /// Playing -> Stopped. Idempotent.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    /// Automatic advance. Wraps to slice 0 past the end; a no-op unless
    /// playing, so a tick delivered after pause/teardown cannot mutate
    /// state.
    pub fn tick(&mut self) {
        if !self.playing {
            return;
        }
        self.current_slice = (self.current_slice + 1) % self.total_slices;
    }

    /// Manual step; clamps at the last slice, valid in either state.
    pub fn step_forward(&mut self) {
        self.current_slice = (self.current_slice + 1).min(self.total_slices - 1);
    }

    /// Manual step; clamps at slice 0, valid in either state.
    pub fn step_backward(&mut self) {
        self.current_slice = self.current_slice.saturating_sub(1);
    }

    /// Jump to a slice, clamped into range. Does not change play/pause.
    pub fn seek(&mut self, index: usize) {
        self.current_slice = index.min(self.total_slices - 1);
    }

    pub fn seek_first(&mut self) {
        self.current_slice = 0;
    }

    pub fn seek_last(&mut self) {
        self.current_slice = self.total_slices - 1;
    }
}

impl Default for SlicePlayback {
    fn default() -> Self {
        Self::new(TOTAL_SLICES)
    }
}
