use image::RgbaImage;

use neuroview_core::layer::ImageLayer;
use neuroview_core::overlay::{compose, FrameLayer, OverlaySettings};
use neuroview_core::playback::SlicePlayback;
use neuroview_core::saliency::{
    ActivationStrength, MarkerEmphasis, SaliencyMap, SaliencyPoint,
};

fn layer(w: u32, h: u32) -> ImageLayer {
    ImageLayer::new(RgbaImage::new(w, h)).unwrap()
}

fn point(x: f32, y: f32, score: f32) -> SaliencyPoint {
    SaliencyPoint {
        x,
        y,
        score,
        region: "Hippocampus".into(),
        strength: ActivationStrength::High,
        confidence: 0.9,
    }
}

#[test]
fn test_default_settings() {
    let s = OverlaySettings::default();
    assert!(s.heatmap_visible);
    assert!(s.markers_visible);
    assert_eq!(s.heatmap_opacity, 0.6);
    assert_eq!(s.visibility_threshold, 0.5);
}

#[test]
fn test_layer_order_base_heatmap_markers() {
    let base = layer(256, 256);
    let heatmap = layer(256, 256);
    let mut saliency = SaliencyMap::new();
    saliency.insert("p1", point(128.0, 128.0, 0.9));

    let plan = compose(
        Some(&base),
        Some(&heatmap),
        &OverlaySettings::default(),
        &SlicePlayback::default(),
        &saliency,
    );

    assert_eq!(plan.layers.len(), 3);
    assert!(matches!(plan.layers[0], FrameLayer::Base { width: 256, height: 256 }));
    assert!(matches!(plan.layers[1], FrameLayer::Heatmap { .. }));
    assert!(matches!(plan.layers[2], FrameLayer::Marker { .. }));
}

#[test]
fn test_heatmap_hidden_when_toggled_off() {
    let base = layer(64, 64);
    let heatmap = layer(64, 64);
    let settings = OverlaySettings {
        heatmap_visible: false,
        ..Default::default()
    };
    let plan = compose(
        Some(&base),
        Some(&heatmap),
        &settings,
        &SlicePlayback::default(),
        &SaliencyMap::new(),
    );
    assert!(!plan.layers.iter().any(|l| matches!(l, FrameLayer::Heatmap { .. })));
}

#[test]
fn test_heatmap_skipped_when_absent() {
    let base = layer(64, 64);
    let plan = compose(
        Some(&base),
        None,
        &OverlaySettings::default(),
        &SlicePlayback::default(),
        &SaliencyMap::new(),
    );
    assert_eq!(plan.layers.len(), 1);
}

#[test]
fn test_heatmap_carries_opacity() {
    let base = layer(64, 64);
    let heatmap = layer(64, 64);
    let settings = OverlaySettings {
        heatmap_opacity: 0.35,
        ..Default::default()
    };
    let plan = compose(
        Some(&base),
        Some(&heatmap),
        &settings,
        &SlicePlayback::default(),
        &SaliencyMap::new(),
    );
    assert!(matches!(plan.layers[1], FrameLayer::Heatmap { opacity } if opacity == 0.35));
}

#[test]
fn test_unloaded_base_is_skipped_not_an_error() {
    // Rendering requested before the scan finished decoding: the layer is
    // simply absent, markers still draw, the viewer stays interactive.
    let mut saliency = SaliencyMap::new();
    saliency.insert("p1", point(10.0, 10.0, 0.9));
    let plan = compose(
        None,
        None,
        &OverlaySettings::default(),
        &SlicePlayback::default(),
        &saliency,
    );
    assert_eq!(plan.layers.len(), 1);
    assert!(matches!(plan.layers[0], FrameLayer::Marker { .. }));
}

#[test]
fn test_threshold_is_a_hard_filter() {
    let base = layer(256, 256);
    let mut saliency = SaliencyMap::new();
    saliency.insert("p1", point(128.0, 128.0, 0.9));

    let mut settings = OverlaySettings::default();
    let plan = compose(Some(&base), None, &settings, &SlicePlayback::default(), &saliency);
    assert!(plan.layers.iter().any(|l| matches!(l, FrameLayer::Marker { .. })));

    // Raising the threshold above the score removes the marker entirely.
    settings.visibility_threshold = 0.95;
    let plan = compose(Some(&base), None, &settings, &SlicePlayback::default(), &saliency);
    assert!(!plan.layers.iter().any(|l| matches!(l, FrameLayer::Marker { .. })));
}

#[test]
fn test_score_equal_to_threshold_is_drawn() {
    let mut saliency = SaliencyMap::new();
    saliency.insert("p1", point(0.0, 0.0, 0.5));
    let plan = compose(
        None,
        None,
        &OverlaySettings::default(),
        &SlicePlayback::default(),
        &saliency,
    );
    assert_eq!(plan.layers.len(), 1);
}

#[test]
fn test_markers_toggle() {
    let mut saliency = SaliencyMap::new();
    saliency.insert("p1", point(0.0, 0.0, 0.9));
    let settings = OverlaySettings {
        markers_visible: false,
        ..Default::default()
    };
    let plan = compose(None, None, &settings, &SlicePlayback::default(), &saliency);
    assert!(plan.layers.is_empty());
}

#[test]
fn test_markers_in_sorted_id_order() {
    let mut saliency = SaliencyMap::new();
    saliency.insert("b", point(1.0, 1.0, 0.9));
    saliency.insert("a", point(2.0, 2.0, 0.9));
    saliency.insert("c", point(3.0, 3.0, 0.9));

    let plan = compose(
        None,
        None,
        &OverlaySettings::default(),
        &SlicePlayback::default(),
        &saliency,
    );
    let ids: Vec<&str> = plan
        .layers
        .iter()
        .filter_map(|l| match l {
            FrameLayer::Marker { id, .. } => Some(id.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[test]
fn test_compose_is_idempotent() {
    let base = layer(128, 128);
    let heatmap = layer(128, 128);
    let mut saliency = SaliencyMap::new();
    saliency.insert("p1", point(64.0, 64.0, 0.7));
    let settings = OverlaySettings::default();
    let playback = SlicePlayback::default();

    let a = compose(Some(&base), Some(&heatmap), &settings, &playback, &saliency);
    let b = compose(Some(&base), Some(&heatmap), &settings, &playback, &saliency);
    assert_eq!(a, b);
}

#[test]
fn test_plan_carries_slice_badge() {
    let mut playback = SlicePlayback::default();
    playback.seek(7);
    let plan = compose(
        None,
        None,
        &OverlaySettings::default(),
        &playback,
        &SaliencyMap::new(),
    );
    assert_eq!(plan.current_slice, 7);
    assert_eq!(plan.total_slices, 20);
}

#[test]
fn test_emphasis_bands() {
    assert_eq!(MarkerEmphasis::from_score(0.95), MarkerEmphasis::Critical);
    assert_eq!(MarkerEmphasis::from_score(0.8), MarkerEmphasis::Elevated);
    assert_eq!(MarkerEmphasis::from_score(0.7), MarkerEmphasis::Elevated);
    assert_eq!(MarkerEmphasis::from_score(0.6), MarkerEmphasis::Moderate);
    assert_eq!(MarkerEmphasis::from_score(0.5), MarkerEmphasis::Moderate);
    assert_eq!(MarkerEmphasis::from_score(0.4), MarkerEmphasis::Baseline);
    assert_eq!(MarkerEmphasis::from_score(0.1), MarkerEmphasis::Baseline);
}
