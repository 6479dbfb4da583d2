use approx::assert_relative_eq;

use neuroview_core::consts::{ZOOM_MAX, ZOOM_MIN};
use neuroview_core::transform::{Point, ViewTransform};

const IMAGE_SIZE: (f32, f32) = (256.0, 256.0);
const CENTER: Point = Point { x: 400.0, y: 300.0 };

#[test]
fn test_identity_defaults() {
    let t = ViewTransform::identity();
    assert_eq!(t.zoom(), 1.0);
    assert_eq!(t.rotation_degrees(), 0);
    assert_eq!(t.pan(), (0.0, 0.0));
    assert_eq!(ViewTransform::default(), t);
}

#[test]
fn test_zoom_in_step() {
    let t = ViewTransform::identity().zoom_in();
    assert_relative_eq!(t.zoom(), 1.2, epsilon = 1e-6);
}

#[test]
fn test_two_zoom_ins_from_identity() {
    let t = ViewTransform::identity().zoom_in().zoom_in();
    assert_relative_eq!(t.zoom(), 1.44, epsilon = 1e-5);
}

#[test]
fn test_zoom_never_exceeds_max() {
    let mut t = ViewTransform::identity();
    for _ in 0..50 {
        t = t.zoom_in();
        assert!(t.zoom() <= ZOOM_MAX);
    }
    assert_eq!(t.zoom(), ZOOM_MAX);
    // Zooming in from the clamped edge is a no-op.
    assert_eq!(t.zoom_in().zoom(), ZOOM_MAX);
}

#[test]
fn test_zoom_never_below_min() {
    let mut t = ViewTransform::identity();
    for _ in 0..50 {
        t = t.zoom_out();
        assert!(t.zoom() >= ZOOM_MIN);
    }
    assert_eq!(t.zoom(), ZOOM_MIN);
    assert_eq!(t.zoom_out().zoom(), ZOOM_MIN);
}

#[test]
fn test_zoom_in_out_reversible() {
    let t = ViewTransform::identity().zoom_in().zoom_out();
    assert_relative_eq!(t.zoom(), 1.0, epsilon = 1e-6);
}

#[test]
fn test_four_rotations_exact() {
    let t = ViewTransform::identity();
    let rotated = t.rotate_cw().rotate_cw().rotate_cw().rotate_cw();
    // Integer storage: exact equality, no float drift.
    assert_eq!(rotated.rotation_degrees(), 0);
    assert_eq!(rotated, t);
}

#[test]
fn test_rotation_stays_normalized() {
    let mut t = ViewTransform::identity();
    for _ in 0..13 {
        t = t.rotate_cw();
        assert!(t.rotation_degrees() < 360);
        assert_eq!(t.rotation_degrees() % 90, 0);
    }
    assert_eq!(t.rotation_degrees(), 90);
}

#[test]
fn test_pan_ignored_at_zoom_one() {
    let t = ViewTransform::identity().pan_by(25.0, -10.0);
    assert_eq!(t.pan(), (0.0, 0.0));
}

#[test]
fn test_pan_applies_when_zoomed() {
    let t = ViewTransform::identity().zoom_in().pan_by(25.0, -10.0);
    assert_eq!(t.pan(), (25.0, -10.0));
    let t = t.pan_by(5.0, 5.0);
    assert_eq!(t.pan(), (30.0, -5.0));
}

#[test]
fn test_reset_restores_identity() {
    let t = ViewTransform::identity()
        .zoom_in()
        .zoom_in()
        .rotate_cw()
        .pan_by(40.0, 40.0);
    assert_eq!(t.reset(), ViewTransform::identity());
}

#[test]
fn test_image_center_projects_to_viewport_center_plus_pan() {
    let t = ViewTransform::identity().zoom_in().pan_by(12.0, -7.0);
    let s = t.project(Point::new(128.0, 128.0), IMAGE_SIZE, CENTER);
    assert_relative_eq!(s.x, CENTER.x + 12.0, epsilon = 1e-4);
    assert_relative_eq!(s.y, CENTER.y - 7.0, epsilon = 1e-4);
}

#[test]
fn test_rotation_90_maps_right_to_down() {
    // A point right of the image center lands below the viewport center
    // after a clockwise quarter turn (y grows downward on screen).
    let t = ViewTransform::identity().rotate_cw();
    let s = t.project(Point::new(178.0, 128.0), IMAGE_SIZE, CENTER);
    assert_relative_eq!(s.x, CENTER.x, epsilon = 1e-4);
    assert_relative_eq!(s.y, CENTER.y + 50.0, epsilon = 1e-4);
}

#[test]
fn test_unproject_inverts_project_across_states() {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(128.0, 128.0),
        Point::new(255.0, 17.0),
        Point::new(3.5, 200.25),
    ];

    let mut transforms = Vec::new();
    for rotations in 0..4 {
        for zoom_steps in -3i32..=4 {
            let mut t = ViewTransform::identity();
            for _ in 0..rotations {
                t = t.rotate_cw();
            }
            for _ in 0..zoom_steps.max(0) {
                t = t.zoom_in();
            }
            for _ in 0..(-zoom_steps).max(0) {
                t = t.zoom_out();
            }
            transforms.push(t.pan_by(33.0, -48.5));
        }
    }

    for t in transforms {
        for p in points {
            let round_trip = t.unproject(t.project(p, IMAGE_SIZE, CENTER), IMAGE_SIZE, CENTER);
            assert_relative_eq!(round_trip.x, p.x, epsilon = 1e-2);
            assert_relative_eq!(round_trip.y, p.y, epsilon = 1e-2);
        }
    }
}
