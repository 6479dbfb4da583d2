//! Analysis-report input: the JSON handed over by the prediction backend.
//!
//! The report references the scan image, an optional pixel-aligned heatmap,
//! the classification result, and a map of saliency points. The viewer only
//! consumes this data; it never produces it.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{NeuroviewError, Result};
use crate::saliency::{RawSaliencyPoint, SaliencyMap};

/// Classification result for the scan.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    pub label: String,
    #[serde(default)]
    pub confidence: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisReport {
    /// Path to the base scan image, relative to the report file.
    pub scan: PathBuf,
    /// Optional heatmap image, same intrinsic dimensions as the scan.
    #[serde(default)]
    pub heatmap: Option<PathBuf>,
    #[serde(default)]
    pub prediction: Option<Prediction>,
    /// Saliency points keyed by id. A `BTreeMap` here fixes the iteration
    /// order regardless of JSON key order.
    #[serde(default)]
    pub saliency_points: BTreeMap<String, RawSaliencyPoint>,
}

impl AnalysisReport {
    /// Parse a report from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| NeuroviewError::InvalidReport(e.to_string()))
    }

    /// Load a report file and resolve the image paths against its parent
    /// directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut report = Self::from_json(&content)?;
        if let Some(dir) = path.parent() {
            report.scan = dir.join(&report.scan);
            report.heatmap = report.heatmap.map(|h| dir.join(h));
        }
        tracing::info!(
            path = %path.display(),
            points = report.saliency_points.len(),
            "loaded analysis report"
        );
        Ok(report)
    }

    /// Validated saliency points; malformed entries are dropped.
    pub fn saliency_map(&self) -> SaliencyMap {
        SaliencyMap::from_raw(self.saliency_points.iter())
    }
}
