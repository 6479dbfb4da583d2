use std::sync::mpsc;

use neuroview_core::layer::ImageLayer;

use crate::convert::{heatmap_to_color_image, layer_to_color_image};
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::{UIState, ViewerState};
use crate::ticker::SliceTicker;
use crate::worker;

pub struct NeuroviewApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub ui_state: UIState,
    pub viewer: ViewerState,
    pub show_about: bool,
    ticker: Option<SliceTicker>,
}

impl NeuroviewApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone());

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            ui_state: UIState::default(),
            viewer: ViewerState::default(),
            show_about: false,
            ticker: None,
        }
    }

    /// Drain all pending results from the worker and the slice ticker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::LoadStarted => {
                    self.ui_state.loading = true;
                }
                WorkerResult::StudyLoaded {
                    path,
                    prediction,
                    saliency,
                    has_heatmap,
                } => {
                    self.ui_state.add_log(format!(
                        "Opened study: {} ({} saliency points{})",
                        path.display(),
                        saliency.len(),
                        if has_heatmap { ", heatmap" } else { "" }
                    ));
                    self.ui_state.study_path = Some(path);
                    self.ui_state.prediction = prediction;
                    self.ui_state.saliency = saliency;
                    self.viewer.clear_study();
                }
                WorkerResult::ScanLoaded { layer } => {
                    self.ui_state.loading = false;
                    self.update_scan_texture(ctx, &layer);
                    self.viewer.base_layer = Some(layer);
                }
                WorkerResult::HeatmapLoaded { layer } => {
                    self.update_heatmap_texture(ctx, &layer);
                    self.viewer.heatmap_layer = Some(layer);
                }
                WorkerResult::SliceTick => {
                    // No-op unless the state machine is still playing, so a
                    // tick in flight across pause/teardown cannot advance.
                    self.viewer.playback.tick();
                }
                WorkerResult::PrefsImported { prefs } => {
                    prefs.apply_to(&mut self.viewer);
                    self.ui_state.add_log("View settings imported".into());
                }
                WorkerResult::FrameSaved { path } => {
                    self.ui_state.add_log(format!("Exported: {}", path.display()));
                }
                WorkerResult::Error { message } => {
                    self.ui_state.loading = false;
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    fn update_scan_texture(&mut self, ctx: &egui::Context, layer: &ImageLayer) {
        let image = layer_to_color_image(layer);
        let size = image.size;
        let texture = ctx.load_texture("scan", image, egui::TextureOptions::LINEAR);
        self.viewer.base_texture = Some(texture);
        self.viewer.image_size = Some(size);
    }

    fn update_heatmap_texture(&mut self, ctx: &egui::Context, layer: &ImageLayer) {
        let image = heatmap_to_color_image(layer);
        let texture = ctx.load_texture("heatmap", image, egui::TextureOptions::LINEAR);
        self.viewer.heatmap_texture = Some(texture);
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    /// Start playback and its ticker. Idempotent.
    pub fn play(&mut self, ctx: &egui::Context) {
        self.viewer.playback.play();
        if self.ticker.is_none() {
            self.ticker = Some(SliceTicker::spawn(self.result_tx.clone(), ctx.clone()));
        }
    }

    /// Stop playback and cancel the ticker. Idempotent.
    pub fn pause(&mut self) {
        self.viewer.playback.pause();
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }

    pub fn toggle_playback(&mut self, ctx: &egui::Context) {
        if self.viewer.playback.is_playing() {
            self.pause();
        } else {
            self.play(ctx);
        }
    }

    /// Swap between the inline and fullscreen containers. The transform,
    /// overlay settings and playback state are shared, never re-created.
    pub fn set_fullscreen(&mut self, ctx: &egui::Context, fullscreen: bool) {
        if fullscreen {
            self.viewer.mode.enter_fullscreen();
        } else {
            self.viewer.mode.exit_fullscreen();
        }
        ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(fullscreen));
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Keep shortcuts away from text fields and menus.
        if ctx.wants_keyboard_input() {
            return;
        }
        let (plus, minus, reset, rotate, left, right, space, fullscreen, escape) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
                i.key_pressed(egui::Key::Minus),
                i.key_pressed(egui::Key::R),
                i.key_pressed(egui::Key::T),
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::Space),
                i.key_pressed(egui::Key::F),
                i.key_pressed(egui::Key::Escape),
            )
        });

        if plus {
            self.viewer.transform = self.viewer.transform.zoom_in();
        }
        if minus {
            self.viewer.transform = self.viewer.transform.zoom_out();
        }
        if rotate {
            self.viewer.transform = self.viewer.transform.rotate_cw();
        }
        if reset {
            self.viewer.transform = self.viewer.transform.reset();
        }
        if left {
            self.viewer.playback.step_backward();
        }
        if right {
            self.viewer.playback.step_forward();
        }
        if space {
            self.toggle_playback(ctx);
        }
        if fullscreen {
            let target = !self.viewer.mode.is_fullscreen();
            self.set_fullscreen(ctx, target);
        }
        if escape && self.viewer.mode.is_fullscreen() {
            self.set_fullscreen(ctx, false);
        }
    }
}

impl eframe::App for NeuroviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);
        self.handle_shortcuts(ctx);

        if self.viewer.mode.is_fullscreen() {
            // Fullscreen: viewer plus the control sidebar, no chrome.
            panels::controls::show(ctx, self);
            panels::viewport::show(ctx, self);
        } else {
            panels::menu_bar::show(ctx, self);
            panels::status::show(ctx, self);
            panels::controls::show(ctx, self);
            panels::viewport::show(ctx, self);
        }

        // About dialog
        if self.show_about {
            egui::Window::new("About Neuroview")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Neuroview");
                        ui.label("Annotated Brain-Scan Viewer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
