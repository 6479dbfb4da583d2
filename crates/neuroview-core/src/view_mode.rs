//! Inline vs. fullscreen presentation mode.
//!
//! A mode change only swaps the rendering container. The view transform,
//! overlay settings and playback state are shared across the toggle and
//! are never reset implicitly; any reset is a separate user action.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Inline,
    Fullscreen,
}

impl ViewMode {
    pub fn is_fullscreen(&self) -> bool {
        matches!(self, ViewMode::Fullscreen)
    }

    /// Idempotent: entering fullscreen while fullscreen is a no-op.
    pub fn enter_fullscreen(&mut self) {
        *self = ViewMode::Fullscreen;
    }

    /// Idempotent: exiting while inline is a no-op.
    pub fn exit_fullscreen(&mut self) {
        *self = ViewMode::Inline;
    }

    pub fn toggle(&mut self) {
        *self = match self {
            ViewMode::Inline => ViewMode::Fullscreen,
            ViewMode::Fullscreen => ViewMode::Inline,
        };
    }
}
