//! Frame export: rasterize the base scan at native resolution.

use std::path::Path;

use image::RgbaImage;

use crate::error::{NeuroviewError, Result};
use crate::layer::ImageLayer;

/// Produce the exportable frame: the base layer at its intrinsic
/// resolution, ignoring the on-screen transform.
///
/// Returns [`NeuroviewError::ExportNotReady`] while the base scan has not
/// finished loading — a recoverable condition the caller reports, never a
/// panic inside the render loop.
pub fn export_frame(base: Option<&ImageLayer>) -> Result<RgbaImage> {
    let layer = base.ok_or(NeuroviewError::ExportNotReady)?;
    Ok(layer.data.clone())
}

/// Export the current frame to an image file (format from the extension,
/// PNG for unknown extensions).
pub fn save_frame(base: Option<&ImageLayer>, path: &Path) -> Result<()> {
    let frame = export_frame(base)?;
    match path.extension() {
        Some(_) => frame.save(path)?,
        None => frame.save_with_format(path, image::ImageFormat::Png)?,
    }
    tracing::info!(path = %path.display(), "exported frame");
    Ok(())
}
