use crate::app::NeuroviewApp;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::state::ViewerPrefs;

pub fn show(ctx: &egui::Context, app: &mut NeuroviewApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui
                    .add(
                        egui::Button::new("Open Study...")
                            .shortcut_text(ctx.format_shortcut(&open_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    open_study(app);
                }

                if ui.button("Open Image...").clicked() {
                    ui.close();
                    open_image(app);
                }

                ui.separator();

                let export_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::E);
                if ui
                    .add(
                        egui::Button::new("Export Frame...")
                            .shortcut_text(ctx.format_shortcut(&export_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    export_frame(app);
                }

                ui.separator();

                if ui.button("Import View Settings...").clicked() {
                    ui.close();
                    import_prefs(app);
                }

                if ui.button("Export View Settings...").clicked() {
                    ui.close();
                    export_prefs(app);
                }

                ui.separator();

                let quit_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui
                    .add(
                        egui::Button::new("Quit")
                            .shortcut_text(ctx.format_shortcut(&quit_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Enter Fullscreen").clicked() {
                    ui.close();
                    app.set_fullscreen(ctx, true);
                }
                if ui.button("Reset View").clicked() {
                    ui.close();
                    app.viewer.transform = app.viewer.transform.reset();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::COMMAND,
                egui::Key::O,
            ))
        }) {
            open_study(app);
        }
        if ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::COMMAND,
                egui::Key::E,
            ))
        }) {
            export_frame(app);
        }
        if ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::COMMAND,
                egui::Key::Q,
            ))
        }) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn open_study(app: &NeuroviewApp) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Analysis reports", &["json"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = cmd_tx.send(WorkerCommand::LoadStudy { path });
        }
    });
}

fn open_image(app: &NeuroviewApp) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "bmp", "tiff", "tif"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = cmd_tx.send(WorkerCommand::OpenScanImage { path });
        }
    });
}

pub fn export_frame(app: &NeuroviewApp) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .add_filter("TIFF", &["tiff", "tif"])
            .set_file_name("scan-frame.png")
            .save_file()
        {
            let _ = cmd_tx.send(WorkerCommand::SaveFrame { path });
        }
    });
}

fn import_prefs(app: &NeuroviewApp) {
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        else {
            return;
        };
        // A bad file surfaces in the status log like every other failure.
        let msg = match ViewerPrefs::load(&path) {
            Ok(prefs) => WorkerResult::PrefsImported { prefs },
            Err(e) => WorkerResult::Error {
                message: format!("{e:#}"),
            },
        };
        let _ = result_tx.send(msg);
    });
}

fn export_prefs(app: &mut NeuroviewApp) {
    let prefs = ViewerPrefs::from_viewer(&app.viewer);
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("neuroview_prefs.toml")
            .save_file()
        {
            if let Ok(content) = toml::to_string_pretty(&prefs) {
                let _ = std::fs::write(path, content);
            }
        }
    });
}
