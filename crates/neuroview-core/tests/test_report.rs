use std::io::Write;
use std::path::PathBuf;

use neuroview_core::error::NeuroviewError;
use neuroview_core::report::AnalysisReport;
use neuroview_core::saliency::ActivationStrength;

const FIXTURE: &str = r#"{
    "scan": "scan.png",
    "heatmap": "heatmap.png",
    "prediction": { "label": "Moderate Demented", "confidence": 0.93 },
    "model_version": "2.1",
    "saliency_points": {
        "point_2": {
            "coordinates": [64.0, 32.0],
            "saliency_score": 0.42,
            "region": "Temporal Lobe",
            "activation_strength": "Medium",
            "confidence": 0.71
        },
        "point_1": {
            "coordinates": [128.0, 128.0],
            "saliency_score": 0.91,
            "region": "Hippocampus",
            "activation_strength": "High",
            "confidence": 0.87
        },
        "broken_no_coords": {
            "saliency_score": 0.9,
            "region": "Frontal Lobe"
        },
        "broken_no_score": {
            "coordinates": [10.0, 10.0],
            "region": "Frontal Lobe"
        }
    }
}"#;

#[test]
fn test_parse_full_report() {
    let report = AnalysisReport::from_json(FIXTURE).unwrap();
    assert_eq!(report.scan, PathBuf::from("scan.png"));
    assert_eq!(report.heatmap, Some(PathBuf::from("heatmap.png")));

    let prediction = report.prediction.as_ref().unwrap();
    assert_eq!(prediction.label, "Moderate Demented");
    assert!((prediction.confidence - 0.93).abs() < 1e-6);
}

#[test]
fn test_malformed_points_skipped_valid_kept() {
    let report = AnalysisReport::from_json(FIXTURE).unwrap();
    let map = report.saliency_map();
    assert_eq!(map.len(), 2);

    let p1 = map.get("point_1").unwrap();
    assert_eq!(p1.region, "Hippocampus");
    assert_eq!(p1.strength, ActivationStrength::High);
    assert!((p1.score - 0.91).abs() < 1e-6);

    assert!(map.get("broken_no_coords").is_none());
    assert!(map.get("broken_no_score").is_none());
}

#[test]
fn test_iteration_order_is_sorted_by_id() {
    let report = AnalysisReport::from_json(FIXTURE).unwrap();
    let map = report.saliency_map();
    let ids: Vec<&str> = map.iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(ids, ["point_1", "point_2"]);
}

#[test]
fn test_minimal_report() {
    let report = AnalysisReport::from_json(r#"{ "scan": "s.png" }"#).unwrap();
    assert!(report.heatmap.is_none());
    assert!(report.prediction.is_none());
    assert!(report.saliency_map().is_empty());
}

#[test]
fn test_scores_clamped_to_unit_range() {
    let json = r#"{
        "scan": "s.png",
        "saliency_points": {
            "hot": { "coordinates": [1.0, 2.0], "saliency_score": 1.7, "confidence": -0.2 }
        }
    }"#;
    let map = AnalysisReport::from_json(json).unwrap().saliency_map();
    let p = map.get("hot").unwrap();
    assert_eq!(p.score, 1.0);
    assert_eq!(p.confidence, 0.0);
}

#[test]
fn test_unknown_strength_defaults_to_low() {
    let json = r#"{
        "scan": "s.png",
        "saliency_points": {
            "odd": { "coordinates": [1.0, 2.0], "saliency_score": 0.5, "activation_strength": "Extreme" }
        }
    }"#;
    let map = AnalysisReport::from_json(json).unwrap().saliency_map();
    assert_eq!(map.get("odd").unwrap().strength, ActivationStrength::Low);
}

#[test]
fn test_invalid_json_is_report_error() {
    let err = AnalysisReport::from_json("{ not json").unwrap_err();
    assert!(matches!(err, NeuroviewError::InvalidReport(_)));
}

#[test]
fn test_load_resolves_paths_against_report_dir() {
    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("report.json");
    let mut f = std::fs::File::create(&report_path).unwrap();
    f.write_all(FIXTURE.as_bytes()).unwrap();

    let report = AnalysisReport::load(&report_path).unwrap();
    assert_eq!(report.scan, dir.path().join("scan.png"));
    assert_eq!(report.heatmap, Some(dir.path().join("heatmap.png")));
}
