use neuroview_core::hit_test;
use neuroview_core::overlay::{self, FrameLayer, FramePlan};
use neuroview_core::saliency::MarkerEmphasis;
use neuroview_core::transform::{Point, ViewTransform};

use crate::app::NeuroviewApp;

const MARKER_RADIUS: f32 = 6.0;
const MARKER_RADIUS_HOVERED: f32 = 9.0;

pub fn show(ctx: &egui::Context, app: &mut NeuroviewApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        if app.viewer.base_texture.is_none() {
            app.viewer.hovered_point = None;
            show_placeholder(ui);
            return;
        }

        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
        let center = Point {
            x: rect.center().x,
            y: rect.center().y,
        };
        let image_size = app.viewer.image_size_f32();

        handle_zoom(ui, &response, app);
        handle_pan(&response, app);
        update_hover(&response, app, image_size, center);

        let plan = overlay::compose(
            app.viewer.base_layer.as_ref(),
            app.viewer.heatmap_layer.as_ref(),
            &app.viewer.overlay,
            &app.viewer.playback,
            &app.ui_state.saliency,
        );

        let painter = ui.painter_at(rect);
        for layer in &plan.layers {
            match layer {
                FrameLayer::Base { .. } => {
                    if let Some(ref texture) = app.viewer.base_texture {
                        draw_layer(
                            &painter,
                            texture.id(),
                            &app.viewer.transform,
                            image_size,
                            center,
                            egui::Color32::WHITE,
                        );
                    }
                }
                FrameLayer::Heatmap { opacity } => {
                    if let Some(ref texture) = app.viewer.heatmap_texture {
                        draw_layer(
                            &painter,
                            texture.id(),
                            &app.viewer.transform,
                            image_size,
                            center,
                            egui::Color32::WHITE.gamma_multiply(*opacity),
                        );
                    }
                }
                FrameLayer::Marker {
                    id, x, y, emphasis, ..
                } => {
                    let hovered = app.viewer.hovered_point.as_deref() == Some(id.as_str());
                    let pos = app.viewer.transform.project(
                        Point { x: *x, y: *y },
                        image_size,
                        center,
                    );
                    draw_marker(&painter, pos, *emphasis, hovered);
                }
            }
        }

        draw_slice_badge(&painter, rect, &plan);
        draw_zoom_label(&painter, rect, app.viewer.transform.zoom());
        if app.viewer.mode.is_fullscreen() {
            show_fullscreen_exit(ctx, rect, app);
        }
        show_tooltip(ctx, &response, app);
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// One zoom step per wheel event, matching the toolbar buttons.
fn handle_zoom(ui: &egui::Ui, response: &egui::Response, app: &mut NeuroviewApp) {
    if !response.hovered() {
        return;
    }
    let scroll = ui.input(|i| i.raw_scroll_delta.y);
    if scroll > 0.0 {
        app.viewer.transform = app.viewer.transform.zoom_in();
    } else if scroll < 0.0 {
        app.viewer.transform = app.viewer.transform.zoom_out();
    }
}

fn handle_pan(response: &egui::Response, app: &mut NeuroviewApp) {
    if response.dragged_by(egui::PointerButton::Primary) {
        let delta = response.drag_delta();
        // Ignored while not zoomed in; the transform enforces that.
        app.viewer.transform = app.viewer.transform.pan_by(delta.x, delta.y);
    }
}

fn update_hover(
    response: &egui::Response,
    app: &mut NeuroviewApp,
    image_size: (f32, f32),
    center: Point,
) {
    let hit = response.hover_pos().and_then(|pos| {
        hit_test::find_nearest(
            Point { x: pos.x, y: pos.y },
            &app.viewer.transform,
            image_size,
            center,
            &app.ui_state.saliency,
            &app.viewer.overlay,
        )
        .map(str::to_owned)
    });
    app.viewer.hovered_point = hit;
}

/// Draw a textured quad with the view transform applied. The corners are
/// projected individually so quarter-turn rotations come out exact.
fn draw_layer(
    painter: &egui::Painter,
    texture_id: egui::TextureId,
    transform: &ViewTransform,
    image_size: (f32, f32),
    center: Point,
    tint: egui::Color32,
) {
    let (w, h) = image_size;
    let corners = [
        (Point { x: 0.0, y: 0.0 }, egui::pos2(0.0, 0.0)),
        (Point { x: w, y: 0.0 }, egui::pos2(1.0, 0.0)),
        (Point { x: w, y: h }, egui::pos2(1.0, 1.0)),
        (Point { x: 0.0, y: h }, egui::pos2(0.0, 1.0)),
    ];

    let mut mesh = egui::Mesh::with_texture(texture_id);
    for (corner, uv) in corners {
        let s = transform.project(corner, image_size, center);
        mesh.vertices.push(egui::epaint::Vertex {
            pos: egui::pos2(s.x, s.y),
            uv,
            color: tint,
        });
    }
    mesh.indices.extend([0, 1, 2, 0, 2, 3]);
    painter.add(egui::Shape::mesh(mesh));
}

fn marker_color(emphasis: MarkerEmphasis) -> egui::Color32 {
    match emphasis {
        MarkerEmphasis::Critical => egui::Color32::from_rgb(239, 68, 68),
        MarkerEmphasis::Elevated => egui::Color32::from_rgb(249, 115, 22),
        MarkerEmphasis::Moderate => egui::Color32::from_rgb(234, 179, 8),
        MarkerEmphasis::Baseline => egui::Color32::from_rgb(59, 130, 246),
    }
}

fn draw_marker(painter: &egui::Painter, pos: Point, emphasis: MarkerEmphasis, hovered: bool) {
    let center = egui::pos2(pos.x, pos.y);
    let (radius, stroke_width) = if hovered {
        (MARKER_RADIUS_HOVERED, 2.0)
    } else {
        (MARKER_RADIUS, 1.5)
    };
    painter.circle_filled(center, radius, marker_color(emphasis));
    painter.circle_stroke(
        center,
        radius,
        egui::Stroke::new(stroke_width, egui::Color32::WHITE),
    );
}

fn draw_slice_badge(painter: &egui::Painter, rect: egui::Rect, plan: &FramePlan) {
    painter.text(
        rect.left_top() + egui::vec2(8.0, 8.0),
        egui::Align2::LEFT_TOP,
        format!("Slice {}/{}", plan.current_slice + 1, plan.total_slices),
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}

fn draw_zoom_label(painter: &egui::Painter, rect: egui::Rect, zoom: f32) {
    painter.text(
        rect.right_top() + egui::vec2(-8.0, 8.0),
        egui::Align2::RIGHT_TOP,
        format!("{:.0}%", zoom * 100.0),
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}

fn show_fullscreen_exit(ctx: &egui::Context, rect: egui::Rect, app: &mut NeuroviewApp) {
    egui::Area::new(egui::Id::new("fullscreen_exit"))
        .fixed_pos(rect.right_top() + egui::vec2(-8.0, 32.0))
        .pivot(egui::Align2::RIGHT_TOP)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            if ui.button("Exit Fullscreen (Esc)").clicked() {
                app.set_fullscreen(ctx, false);
            }
        });
}

fn show_tooltip(ctx: &egui::Context, response: &egui::Response, app: &NeuroviewApp) {
    let Some(ref id) = app.viewer.hovered_point else {
        return;
    };
    let Some(point) = app.ui_state.saliency.get(id) else {
        return;
    };
    let Some(pos) = response.hover_pos() else {
        return;
    };

    egui::Area::new(egui::Id::new("saliency_tooltip"))
        .fixed_pos(pos + egui::vec2(16.0, 16.0))
        .order(egui::Order::Tooltip)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.strong(&point.region);
                ui.label(format!("Position: ({:.0}, {:.0})", point.x, point.y));
                ui.label(format!("Saliency: {:.2}", point.score));
                ui.label(format!("Activation: {}", point.strength.name()));
                ui.label(format!("Confidence: {:.0}%", point.confidence * 100.0));
            });
        });
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open a study or scan image to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
