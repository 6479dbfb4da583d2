//! Overlay settings and the frame-plan compositor.
//!
//! `compose` is stateless and idempotent: identical inputs yield identical
//! plans. The GUI paints a plan under the active view transform; tests
//! inspect plans directly without a rendering surface.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_HEATMAP_OPACITY, DEFAULT_VISIBILITY_THRESHOLD};
use crate::layer::ImageLayer;
use crate::playback::SlicePlayback;
use crate::saliency::{MarkerEmphasis, SaliencyMap};

/// User-controlled overlay state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlaySettings {
    pub heatmap_visible: bool,
    /// Heatmap layer opacity in [0, 1].
    pub heatmap_opacity: f32,
    /// Saliency-score threshold below which points are hidden from both
    /// rendering and hit-testing.
    pub visibility_threshold: f32,
    pub markers_visible: bool,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            heatmap_visible: true,
            heatmap_opacity: DEFAULT_HEATMAP_OPACITY,
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            markers_visible: true,
        }
    }
}

impl OverlaySettings {
    /// The single visibility predicate shared by the compositor and the
    /// hit-tester: the set of drawn points equals the hit-testable set.
    pub fn passes_threshold(&self, score: f32) -> bool {
        score >= self.visibility_threshold
    }
}

/// One drawable element of a composed frame, in back-to-front order.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameLayer {
    /// The base scan at its intrinsic size.
    Base { width: u32, height: u32 },
    /// Heatmap drawn over the base with a brightening (screen-style) blend.
    Heatmap { opacity: f32 },
    /// A saliency-point marker in image-intrinsic coordinates.
    Marker {
        id: String,
        x: f32,
        y: f32,
        score: f32,
        emphasis: MarkerEmphasis,
    },
}

/// A composed frame: ordered layers plus the slice badge.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan {
    pub layers: Vec<FrameLayer>,
    pub current_slice: usize,
    pub total_slices: usize,
}

/// Compose a frame plan. Layer order is fixed: base, then heatmap, then
/// markers. A layer that has not finished loading is skipped, never an
/// error; the frame re-renders once it arrives.
pub fn compose(
    base: Option<&ImageLayer>,
    heatmap: Option<&ImageLayer>,
    settings: &OverlaySettings,
    playback: &SlicePlayback,
    saliency: &SaliencyMap,
) -> FramePlan {
    let mut layers = Vec::new();

    if let Some(base) = base {
        layers.push(FrameLayer::Base {
            width: base.width(),
            height: base.height(),
        });
    }

    if settings.heatmap_visible {
        if let Some(_heatmap) = heatmap {
            layers.push(FrameLayer::Heatmap {
                opacity: settings.heatmap_opacity,
            });
        }
    }

    if settings.markers_visible {
        for (id, point) in saliency.iter() {
            if !settings.passes_threshold(point.score) {
                continue;
            }
            layers.push(FrameLayer::Marker {
                id: id.clone(),
                x: point.x,
                y: point.y,
                score: point.score,
                emphasis: point.emphasis(),
            });
        }
    }

    FramePlan {
        layers,
        current_slice: playback.current_slice(),
        total_slices: playback.total_slices(),
    }
}
