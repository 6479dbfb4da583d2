use std::path::PathBuf;

use neuroview_core::layer::ImageLayer;
use neuroview_core::report::Prediction;
use neuroview_core::saliency::SaliencyMap;

use crate::state::ViewerPrefs;

/// Commands sent from the UI thread to the loader worker.
pub enum WorkerCommand {
    /// Parse an analysis-report JSON and load the images it references.
    LoadStudy { path: PathBuf },

    /// Open a bare scan image with no report (no heatmap, no points).
    OpenScanImage { path: PathBuf },

    /// Export the currently loaded base scan at native resolution.
    SaveFrame { path: PathBuf },
}

/// Results sent from the worker (and the slice ticker) back to the UI.
pub enum WorkerResult {
    /// The worker picked up a load command. Drives the busy indicator; a
    /// canceled file dialog never sends a command, so nothing starts.
    LoadStarted,

    /// Report parsed: metadata available before any image has decoded.
    StudyLoaded {
        path: PathBuf,
        prediction: Option<Prediction>,
        saliency: SaliencyMap,
        has_heatmap: bool,
    },

    /// Base scan finished decoding.
    ScanLoaded { layer: ImageLayer },

    /// Heatmap finished decoding.
    HeatmapLoaded { layer: ImageLayer },

    /// Periodic slice advance while playing.
    SliceTick,

    /// View settings picked from the import dialog.
    PrefsImported { prefs: ViewerPrefs },

    FrameSaved {
        path: PathBuf,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
