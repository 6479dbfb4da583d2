/// Smallest zoom factor the view transform will accept.
pub const ZOOM_MIN: f32 = 0.3;

/// Largest zoom factor the view transform will accept.
pub const ZOOM_MAX: f32 = 5.0;

/// Multiplicative step applied by a single zoom-in/zoom-out action.
pub const ZOOM_STEP_FACTOR: f32 = 1.2;

/// Rotation step in degrees. The transform only ever holds multiples of this.
pub const ROTATION_STEP_DEGREES: u16 = 90;

/// Distance (image-intrinsic pixels) within which a pointer counts as
/// hovering a saliency point. Constant across zoom levels.
pub const CAPTURE_RADIUS: f32 = 30.0;

/// Default opacity of the heatmap overlay.
pub const DEFAULT_HEATMAP_OPACITY: f32 = 0.6;

/// Default saliency-score threshold below which points are hidden.
pub const DEFAULT_VISIBILITY_THRESHOLD: f32 = 0.5;

/// Number of simulated volume slices per scan.
pub const TOTAL_SLICES: usize = 20;

/// Period of the automatic slice-advance tick while playing.
pub const SLICE_TICK_MILLIS: u64 = 500;
