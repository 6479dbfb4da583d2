//! Saliency-point annotations supplied by the prediction backend.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Activation-strength category reported by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivationStrength {
    #[default]
    Low,
    Medium,
    High,
}

impl ActivationStrength {
    /// Parse the backend's free-form string. Unknown values fall back to
    /// `Low`; only missing coordinates/score disqualify a point.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "high" => ActivationStrength::High,
            "medium" | "moderate" => ActivationStrength::Medium,
            _ => ActivationStrength::Low,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ActivationStrength::Low => "Low",
            ActivationStrength::Medium => "Medium",
            ActivationStrength::High => "High",
        }
    }
}

/// Visual weight band for a marker. Derived from the saliency score only;
/// used for rendering style, never for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerEmphasis {
    Baseline,
    Moderate,
    Elevated,
    Critical,
}

impl MarkerEmphasis {
    pub fn from_score(score: f32) -> Self {
        if score > 0.8 {
            MarkerEmphasis::Critical
        } else if score > 0.6 {
            MarkerEmphasis::Elevated
        } else if score > 0.4 {
            MarkerEmphasis::Moderate
        } else {
            MarkerEmphasis::Baseline
        }
    }
}

/// A validated saliency point in image-intrinsic pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SaliencyPoint {
    pub x: f32,
    pub y: f32,
    /// Salience score in [0, 1].
    pub score: f32,
    /// Anatomical region label.
    pub region: String,
    pub strength: ActivationStrength,
    /// Model confidence in [0, 1].
    pub confidence: f32,
}

impl SaliencyPoint {
    pub fn emphasis(&self) -> MarkerEmphasis {
        MarkerEmphasis::from_score(self.score)
    }
}

/// Raw point as it appears in the report JSON. Every field optional so one
/// malformed entry never aborts parsing of the rest.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSaliencyPoint {
    pub coordinates: Option<[f32; 2]>,
    pub saliency_score: Option<f32>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub activation_strength: Option<String>,
    #[serde(default)]
    pub confidence: Option<f32>,
}

impl RawSaliencyPoint {
    /// Validate into a [`SaliencyPoint`]. Returns `None` when coordinates
    /// or score are missing; scores and confidences are clamped to [0, 1].
    pub fn validate(&self) -> Option<SaliencyPoint> {
        let [x, y] = self.coordinates?;
        let score = self.saliency_score?;
        if !x.is_finite() || !y.is_finite() || !score.is_finite() {
            return None;
        }
        Some(SaliencyPoint {
            x,
            y,
            score: score.clamp(0.0, 1.0),
            region: self.region.clone().unwrap_or_else(|| "Unlabeled".into()),
            strength: self
                .activation_strength
                .as_deref()
                .map(ActivationStrength::parse)
                .unwrap_or_default(),
            confidence: self.confidence.unwrap_or(0.0).clamp(0.0, 1.0),
        })
    }
}

/// Saliency points keyed by id. Backed by a `BTreeMap` so iteration order
/// is the sorted key order: deterministic tie-breaking for hit-testing,
/// independent of memory layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaliencyMap {
    points: BTreeMap<String, SaliencyPoint>,
}

impl SaliencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw report entries, skipping malformed ones.
    pub fn from_raw<'a, I>(raw: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a RawSaliencyPoint)>,
    {
        let mut points = BTreeMap::new();
        for (id, raw_point) in raw {
            match raw_point.validate() {
                Some(p) => {
                    points.insert(id.clone(), p);
                }
                None => {
                    tracing::warn!(id = %id, "skipping malformed saliency point");
                }
            }
        }
        Self { points }
    }

    pub fn insert(&mut self, id: impl Into<String>, point: SaliencyPoint) {
        self.points.insert(id.into(), point);
    }

    pub fn get(&self, id: &str) -> Option<&SaliencyPoint> {
        self.points.get(id)
    }

    /// Iterate in the defined (sorted-key) order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &SaliencyPoint)> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
