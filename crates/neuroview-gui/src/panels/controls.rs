use neuroview_core::consts::{ZOOM_MAX, ZOOM_MIN};

use crate::app::NeuroviewApp;
use crate::panels::menu_bar::export_frame;

const PANEL_WIDTH: f32 = 280.0;

pub fn show(ctx: &egui::Context, app: &mut NeuroviewApp) {
    egui::SidePanel::right("controls")
        .default_width(PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(PANEL_WIDTH - 20.0);

                study_section(ui, app);
                ui.separator();
                view_section(ui, app);
                ui.separator();
                overlay_section(ui, app);
                ui.separator();
                slice_section(ui, ctx, app);
                ui.separator();
                actions_section(ui, ctx, app);
            });
        });
}

fn section_header(ui: &mut egui::Ui, label: &str, status: Option<&str>) {
    ui.horizontal(|ui| {
        ui.strong(label);
        if let Some(s) = status {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small(s);
            });
        }
    });
}

fn study_section(ui: &mut egui::Ui, app: &mut NeuroviewApp) {
    let status = if app.ui_state.loading {
        Some("loading...")
    } else {
        None
    };
    section_header(ui, "Study", status);
    ui.add_space(4.0);

    if let Some(ref path) = app.ui_state.study_path {
        ui.label(
            path.file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
        );
    } else {
        ui.small("No study loaded");
    }

    if let Some(ref size) = app.viewer.image_size {
        ui.small(format!("{}x{} px", size[0], size[1]));
    }

    if let Some(ref prediction) = app.ui_state.prediction {
        ui.add_space(4.0);
        ui.label(format!("Classification: {}", prediction.label));
        ui.add(
            egui::ProgressBar::new(prediction.confidence)
                .text(format!("confidence {:.1}%", prediction.confidence * 100.0)),
        );
    }

    if !app.ui_state.saliency.is_empty() {
        ui.small(format!("{} saliency points", app.ui_state.saliency.len()));
    }
}

fn view_section(ui: &mut egui::Ui, app: &mut NeuroviewApp) {
    section_header(ui, "View Controls", None);
    ui.add_space(4.0);

    let zoom = app.viewer.transform.zoom();

    ui.horizontal(|ui| {
        if ui
            .add_enabled(zoom < ZOOM_MAX, egui::Button::new("Zoom +"))
            .clicked()
        {
            app.viewer.transform = app.viewer.transform.zoom_in();
        }
        if ui
            .add_enabled(zoom > ZOOM_MIN, egui::Button::new("Zoom -"))
            .clicked()
        {
            app.viewer.transform = app.viewer.transform.zoom_out();
        }
    });

    ui.horizontal(|ui| {
        if ui.button("Rotate 90°").clicked() {
            app.viewer.transform = app.viewer.transform.rotate_cw();
        }
        if ui.button("Reset").clicked() {
            app.viewer.transform = app.viewer.transform.reset();
        }
    });

    ui.small(format!(
        "Zoom {:.0}%  ·  Rotation {}°",
        zoom * 100.0,
        app.viewer.transform.rotation_degrees()
    ));
    if zoom > 1.0 {
        ui.small("Drag the image to pan");
    }
}

fn overlay_section(ui: &mut egui::Ui, app: &mut NeuroviewApp) {
    section_header(ui, "Overlay Settings", None);
    ui.add_space(4.0);

    let has_heatmap = app.viewer.heatmap_texture.is_some();
    ui.add_enabled_ui(has_heatmap, |ui| {
        ui.checkbox(&mut app.viewer.overlay.heatmap_visible, "Heatmap overlay");
    });
    if !has_heatmap {
        ui.small("No heatmap in this study");
    }

    if app.viewer.overlay.heatmap_visible && has_heatmap {
        ui.add(
            egui::Slider::new(&mut app.viewer.overlay.heatmap_opacity, 0.0..=1.0)
                .text("Opacity")
                .fixed_decimals(2),
        );
    }

    ui.add(
        egui::Slider::new(&mut app.viewer.overlay.visibility_threshold, 0.0..=1.0)
            .text("Threshold")
            .fixed_decimals(2),
    );

    ui.checkbox(&mut app.viewer.overlay.markers_visible, "Saliency points");
}

fn slice_section(ui: &mut egui::Ui, ctx: &egui::Context, app: &mut NeuroviewApp) {
    section_header(ui, "Slice Navigation", None);
    ui.add_space(4.0);

    let playback = &app.viewer.playback;
    let current = playback.current_slice();
    let last = playback.total_slices() - 1;
    let playing = playback.is_playing();

    ui.horizontal(|ui| {
        if ui.add_enabled(current > 0, egui::Button::new("|<")).clicked() {
            app.viewer.playback.seek_first();
        }
        if ui.add_enabled(current > 0, egui::Button::new("<")).clicked() {
            app.viewer.playback.step_backward();
        }
        if ui.button(if playing { "Pause" } else { "Play" }).clicked() {
            app.toggle_playback(ctx);
        }
        if ui.add_enabled(current < last, egui::Button::new(">")).clicked() {
            app.viewer.playback.step_forward();
        }
        if ui.add_enabled(current < last, egui::Button::new(">|")).clicked() {
            app.viewer.playback.seek_last();
        }
    });

    let mut idx = app.viewer.playback.current_slice();
    let response = ui.add(
        egui::Slider::new(&mut idx, 0..=last)
            .text("Slice")
            .clamping(egui::SliderClamping::Always),
    );
    if response.changed() {
        app.viewer.playback.seek(idx);
    }

    ui.small(format!(
        "Slice {} of {}",
        app.viewer.playback.current_slice() + 1,
        app.viewer.playback.total_slices()
    ));
}

fn actions_section(ui: &mut egui::Ui, ctx: &egui::Context, app: &mut NeuroviewApp) {
    section_header(ui, "Actions", None);
    ui.add_space(4.0);

    let can_export = app.viewer.base_texture.is_some();
    if ui
        .add_enabled(
            can_export,
            egui::Button::new("Export Frame").min_size(egui::vec2(ui.available_width(), 28.0)),
        )
        .clicked()
    {
        export_frame(app);
    }

    let fullscreen = app.viewer.mode.is_fullscreen();
    let label = if fullscreen {
        "Exit Fullscreen"
    } else {
        "Enter Fullscreen"
    };
    if ui
        .add(egui::Button::new(label).min_size(egui::vec2(ui.available_width(), 28.0)))
        .clicked()
    {
        app.set_fullscreen(ctx, !fullscreen);
    }
}
