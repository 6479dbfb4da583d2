//! Zoom/pan/rotate view transform.
//!
//! Pure value type: every operation returns a new transform, so the
//! zoom-bounds and rotation invariants hold by construction and the
//! coordinate math is testable without a rendering surface.

use crate::consts::{ROTATION_STEP_DEGREES, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP_FACTOR};

/// A point in either image-intrinsic or screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// View transform state: zoom factor, rotation (exact multiples of 90
/// degrees) and pan offset in screen pixels.
///
/// Rotation is stored as an integer so four `rotate_cw` calls return the
/// transform to its original value exactly, with no float drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    zoom: f32,
    rotation_degrees: u16,
    pan_x: f32,
    pan_y: f32,
}

impl ViewTransform {
    /// Identity transform (zoom=1, no rotation, no pan).
    pub fn identity() -> Self {
        Self {
            zoom: 1.0,
            rotation_degrees: 0,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn rotation_degrees(&self) -> u16 {
        self.rotation_degrees
    }

    pub fn pan(&self) -> (f32, f32) {
        (self.pan_x, self.pan_y)
    }

    /// Multiply zoom by the step factor, clamped to the configured maximum.
    /// Zooming in from the clamped edge is a no-op.
    pub fn zoom_in(&self) -> Self {
        Self {
            zoom: (self.zoom * ZOOM_STEP_FACTOR).min(ZOOM_MAX),
            ..*self
        }
    }

    /// Divide zoom by the step factor, clamped to the configured minimum.
    pub fn zoom_out(&self) -> Self {
        Self {
            zoom: (self.zoom / ZOOM_STEP_FACTOR).max(ZOOM_MIN),
            ..*self
        }
    }

    /// Rotate 90 degrees clockwise. Wraps at 360.
    pub fn rotate_cw(&self) -> Self {
        Self {
            rotation_degrees: (self.rotation_degrees + ROTATION_STEP_DEGREES) % 360,
            ..*self
        }
    }

    /// Apply a pan delta in screen pixels.
    ///
    /// Panning a non-magnified image would let it drift off-frame with no
    /// way to see more of it, so the delta is discarded while zoom <= 1.
    pub fn pan_by(&self, dx: f32, dy: f32) -> Self {
        if self.zoom <= 1.0 {
            return *self;
        }
        Self {
            pan_x: self.pan_x + dx,
            pan_y: self.pan_y + dy,
            ..*self
        }
    }

    /// Back to identity.
    pub fn reset(&self) -> Self {
        Self::identity()
    }

    /// Map an image-intrinsic point to screen coordinates.
    ///
    /// The image is centered on `viewport_center`, rotated about its own
    /// center, scaled by zoom, then offset by the pan.
    pub fn project(&self, p: Point, image_size: (f32, f32), viewport_center: Point) -> Point {
        let cx = p.x - image_size.0 / 2.0;
        let cy = p.y - image_size.1 / 2.0;
        let (rx, ry) = rotate_quadrant(cx, cy, self.rotation_degrees);
        Point {
            x: viewport_center.x + self.pan_x + rx * self.zoom,
            y: viewport_center.y + self.pan_y + ry * self.zoom,
        }
    }

    /// Map a screen point back to image-intrinsic coordinates.
    /// Exact inverse of [`ViewTransform::project`] up to float epsilon.
    pub fn unproject(&self, s: Point, image_size: (f32, f32), viewport_center: Point) -> Point {
        let vx = (s.x - viewport_center.x - self.pan_x) / self.zoom;
        let vy = (s.y - viewport_center.y - self.pan_y) / self.zoom;
        let (rx, ry) = rotate_quadrant_inverse(vx, vy, self.rotation_degrees);
        Point {
            x: rx + image_size.0 / 2.0,
            y: ry + image_size.1 / 2.0,
        }
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Rotate a centered vector by an exact quadrant angle (screen coords,
/// y down, so positive angles turn clockwise on screen).
fn rotate_quadrant(x: f32, y: f32, degrees: u16) -> (f32, f32) {
    match degrees {
        90 => (-y, x),
        180 => (-x, -y),
        270 => (y, -x),
        _ => (x, y),
    }
}

fn rotate_quadrant_inverse(x: f32, y: f32, degrees: u16) -> (f32, f32) {
    match degrees {
        90 => (y, -x),
        180 => (-x, -y),
        270 => (-y, x),
        _ => (x, y),
    }
}
