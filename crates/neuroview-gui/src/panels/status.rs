use crate::app::NeuroviewApp;

pub fn show(ctx: &egui::Context, app: &mut NeuroviewApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Progress bar
        if app.ui_state.loading {
            ui.add(egui::ProgressBar::new(0.0).text("Loading...").animate(true));
        } else {
            // Invisible placeholder — same height, no animation
            ui.add(egui::ProgressBar::new(0.0).text(""));
        }

        // Log area — fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            if let Some(ref size) = app.viewer.image_size {
                ui.label(format!("{}x{}", size[0], size[1]));
                ui.separator();
            }
            ui.label(format!("Zoom: {:.0}%", app.viewer.transform.zoom() * 100.0));
            ui.separator();
            ui.label(format!("Rotation: {}°", app.viewer.transform.rotation_degrees()));
            ui.separator();
            ui.label(format!(
                "Slice: {}/{}",
                app.viewer.playback.current_slice() + 1,
                app.viewer.playback.total_slices()
            ));
            if let Some(ref id) = app.viewer.hovered_point {
                ui.separator();
                ui.label(format!("Point: {id}"));
            }
        });

        ui.add_space(2.0);
    });
}
