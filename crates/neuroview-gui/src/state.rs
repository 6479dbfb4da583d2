use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use neuroview_core::layer::ImageLayer;
use neuroview_core::overlay::OverlaySettings;
use neuroview_core::playback::SlicePlayback;
use neuroview_core::report::Prediction;
use neuroview_core::saliency::SaliencyMap;
use neuroview_core::transform::ViewTransform;
use neuroview_core::view_mode::ViewMode;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub study_path: Option<PathBuf>,
    pub prediction: Option<Prediction>,
    pub saliency: SaliencyMap,
    /// True between LoadStudy/OpenScanImage and the scan arriving.
    pub loading: bool,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}

/// Viewer display state. One instance per app; shared unchanged between the
/// inline and fullscreen presentations.
pub struct ViewerState {
    pub base_texture: Option<egui::TextureHandle>,
    pub heatmap_texture: Option<egui::TextureHandle>,
    /// Decoded pixel data, kept so the compositor can describe the frame.
    pub base_layer: Option<ImageLayer>,
    pub heatmap_layer: Option<ImageLayer>,
    /// Intrinsic scan size in pixels, once the scan has decoded.
    pub image_size: Option<[usize; 2]>,

    pub transform: ViewTransform,
    pub overlay: OverlaySettings,
    pub playback: SlicePlayback,
    pub mode: ViewMode,

    /// Id of the saliency point under the pointer, if any.
    pub hovered_point: Option<String>,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            base_texture: None,
            heatmap_texture: None,
            base_layer: None,
            heatmap_layer: None,
            image_size: None,
            transform: ViewTransform::identity(),
            overlay: OverlaySettings::default(),
            playback: SlicePlayback::default(),
            mode: ViewMode::default(),
            hovered_point: None,
        }
    }
}

impl ViewerState {
    /// Intrinsic size as floats for transform math. Falls back to a unit
    /// square while nothing is loaded so hit-testing stays well-defined.
    pub fn image_size_f32(&self) -> (f32, f32) {
        match self.image_size {
            Some([w, h]) => (w as f32, h as f32),
            None => (1.0, 1.0),
        }
    }

    /// Drop study-specific display state, keeping user view preferences.
    pub fn clear_study(&mut self) {
        self.base_texture = None;
        self.heatmap_texture = None;
        self.base_layer = None;
        self.heatmap_layer = None;
        self.image_size = None;
        self.hovered_point = None;
        self.transform = self.transform.reset();
        self.playback = SlicePlayback::default();
    }
}

/// Overlay preferences importable/exportable as TOML from the File menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerPrefs {
    pub overlay: OverlaySettings,
}

impl ViewerPrefs {
    pub fn from_viewer(viewer: &ViewerState) -> Self {
        Self {
            overlay: viewer.overlay,
        }
    }

    pub fn apply_to(&self, viewer: &mut ViewerState) {
        viewer.overlay = self.overlay;
    }

    /// Read prefs from a TOML file. Read and parse failures carry enough
    /// context to be shown in the status log as-is.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let prefs = toml::from_str(&content)
            .with_context(|| format!("invalid view settings in {}", path.display()))?;
        Ok(prefs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefs_toml_round_trip() {
        let mut viewer = ViewerState::default();
        viewer.overlay.heatmap_opacity = 0.45;
        let prefs = ViewerPrefs::from_viewer(&viewer);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        std::fs::write(&path, toml::to_string_pretty(&prefs).unwrap()).unwrap();

        let loaded = ViewerPrefs::load(&path).unwrap();
        assert_eq!(loaded.overlay, prefs.overlay);
    }

    #[test]
    fn test_malformed_prefs_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        std::fs::write(&path, "overlay = \"not a table\"").unwrap();
        assert!(ViewerPrefs::load(&path).is_err());
    }

    #[test]
    fn test_missing_prefs_file_is_an_error() {
        assert!(ViewerPrefs::load(Path::new("/nonexistent/prefs.toml")).is_err());
    }
}
