use rayon::prelude::*;

use neuroview_core::layer::ImageLayer;

/// Convert a decoded scan layer (RGBA8) to an egui ColorImage.
pub fn layer_to_color_image(layer: &ImageLayer) -> egui::ColorImage {
    let w = layer.width() as usize;
    let h = layer.height() as usize;
    let raw = layer.data.as_raw();

    let pixels: Vec<egui::Color32> = raw
        .par_chunks_exact(4)
        .map(|px| egui::Color32::from_rgba_unmultiplied(px[0], px[1], px[2], px[3]))
        .collect();

    egui::ColorImage {
        size: [w, h],
        pixels,
        source_size: Default::default(),
    }
}

/// Convert a heatmap layer for screen-style blending.
///
/// egui paints with plain alpha blending, so the brightening blend is baked
/// into the texture: each pixel's alpha is its luminance. Dark (inactive)
/// regions become transparent and bright regions add to the scan instead of
/// occluding it.
pub fn heatmap_to_color_image(layer: &ImageLayer) -> egui::ColorImage {
    let w = layer.width() as usize;
    let h = layer.height() as usize;
    let raw = layer.data.as_raw();

    let pixels: Vec<egui::Color32> = raw
        .par_chunks_exact(4)
        .map(|px| {
            let luminance =
                (0.299 * px[0] as f32 + 0.587 * px[1] as f32 + 0.114 * px[2] as f32) as u8;
            egui::Color32::from_rgba_unmultiplied(px[0], px[1], px[2], luminance)
        })
        .collect();

    egui::ColorImage {
        size: [w, h],
        pixels,
        source_size: Default::default(),
    }
}
