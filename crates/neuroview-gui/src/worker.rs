use std::path::Path;
use std::sync::mpsc;

use anyhow::Context as _;

use neuroview_core::export::save_frame;
use neuroview_core::layer::ImageLayer;
use neuroview_core::report::AnalysisReport;

use crate::messages::{WorkerCommand, WorkerResult};

/// Decoded layers living on the worker thread, kept for frame export.
struct StudyCache {
    base: Option<ImageLayer>,
    heatmap: Option<ImageLayer>,
}

impl StudyCache {
    fn new() -> Self {
        Self {
            base: None,
            heatmap: None,
        }
    }

    fn clear(&mut self) {
        self.base = None;
        self.heatmap = None;
    }
}

/// Spawn the loader worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("neuroview-loader".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn loader thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_log(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Log { message: msg.into() });
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Error { message: msg.into() });
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    let mut cache = StudyCache::new();

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadStudy { path } => {
                send(&tx, &ctx, WorkerResult::LoadStarted);
                if let Err(e) = handle_load_study(&path, &mut cache, &tx, &ctx) {
                    send_error(&tx, &ctx, format!("{e:#}"));
                }
            }
            WorkerCommand::OpenScanImage { path } => {
                send(&tx, &ctx, WorkerResult::LoadStarted);
                if let Err(e) = handle_open_scan(&path, &mut cache, &tx, &ctx) {
                    send_error(&tx, &ctx, format!("{e:#}"));
                }
            }
            WorkerCommand::SaveFrame { path } => {
                handle_save_frame(&path, &cache, &tx, &ctx);
            }
        }
    }
}

fn handle_load_study(
    path: &Path,
    cache: &mut StudyCache,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) -> anyhow::Result<()> {
    let report = AnalysisReport::load(path)
        .with_context(|| format!("failed to load report {}", path.display()))?;
    cache.clear();

    // Metadata goes out first so the UI is interactive while images decode.
    send(
        tx,
        ctx,
        WorkerResult::StudyLoaded {
            path: path.to_path_buf(),
            prediction: report.prediction.clone(),
            saliency: report.saliency_map(),
            has_heatmap: report.heatmap.is_some(),
        },
    );

    let base = ImageLayer::open(&report.scan)
        .with_context(|| format!("failed to decode scan {}", report.scan.display()))?;
    cache.base = Some(base.clone());
    send(tx, ctx, WorkerResult::ScanLoaded { layer: base });

    if let Some(ref heatmap_path) = report.heatmap {
        // A missing heatmap degrades to an absent layer, not a failed study.
        match ImageLayer::open(heatmap_path) {
            Ok(heatmap) => {
                cache.heatmap = Some(heatmap.clone());
                send(tx, ctx, WorkerResult::HeatmapLoaded { layer: heatmap });
            }
            Err(e) => {
                send_log(
                    tx,
                    ctx,
                    format!("Heatmap unavailable ({}): {e}", heatmap_path.display()),
                );
            }
        }
    }

    Ok(())
}

fn handle_open_scan(
    path: &Path,
    cache: &mut StudyCache,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) -> anyhow::Result<()> {
    let base = ImageLayer::open(path)
        .with_context(|| format!("failed to decode image {}", path.display()))?;
    cache.clear();
    cache.base = Some(base.clone());
    send_log(tx, ctx, format!("Opened image: {}", path.display()));
    send(tx, ctx, WorkerResult::ScanLoaded { layer: base });
    Ok(())
}

fn handle_save_frame(
    path: &Path,
    cache: &StudyCache,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    // ExportNotReady is the expected recoverable case before the scan has
    // decoded; it surfaces in the log like any other error.
    match save_frame(cache.base.as_ref(), path) {
        Ok(()) => send(
            tx,
            ctx,
            WorkerResult::FrameSaved {
                path: path.to_path_buf(),
            },
        ),
        Err(e) => send_error(tx, ctx, format!("Export failed: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn recv(rx: &mpsc::Receiver<WorkerResult>) -> WorkerResult {
        rx.recv_timeout(Duration::from_secs(10))
            .expect("worker result")
    }

    #[test]
    fn test_failed_load_reports_started_then_error() {
        let (tx, rx) = mpsc::channel();
        let cmd_tx = spawn_worker(tx, egui::Context::default());

        cmd_tx
            .send(WorkerCommand::LoadStudy {
                path: "/nonexistent/report.json".into(),
            })
            .unwrap();

        // The busy indicator turns on when the worker picks the command up
        // and off again on the error; it never starts for a canceled dialog
        // because no command is sent.
        assert!(matches!(recv(&rx), WorkerResult::LoadStarted));
        assert!(matches!(recv(&rx), WorkerResult::Error { .. }));
    }

    #[test]
    fn test_open_image_reports_started_then_scan() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.png");
        image::RgbaImage::new(4, 4).save(&path).unwrap();

        let (tx, rx) = mpsc::channel();
        let cmd_tx = spawn_worker(tx, egui::Context::default());
        cmd_tx.send(WorkerCommand::OpenScanImage { path }).unwrap();

        assert!(matches!(recv(&rx), WorkerResult::LoadStarted));
        assert!(matches!(recv(&rx), WorkerResult::Log { .. }));
        assert!(matches!(recv(&rx), WorkerResult::ScanLoaded { .. }));
    }
}
