use std::path::Path;

use image::RgbaImage;

use crate::error::{NeuroviewError, Result};

/// A decoded raster layer (base scan or heatmap).
/// Immutable once constructed; the heatmap is assumed pixel-aligned with
/// the base scan (same intrinsic dimensions, no registration transform).
#[derive(Clone, Debug)]
pub struct ImageLayer {
    /// Decoded pixel data, RGBA8.
    pub data: RgbaImage,
}

impl ImageLayer {
    pub fn new(data: RgbaImage) -> Result<Self> {
        if data.width() == 0 || data.height() == 0 {
            return Err(NeuroviewError::InvalidDimensions {
                width: data.width(),
                height: data.height(),
            });
        }
        Ok(Self { data })
    }

    /// Decode a layer from an image file on disk.
    pub fn open(path: &Path) -> Result<Self> {
        let img = image::open(path)?.to_rgba8();
        tracing::debug!(path = %path.display(), w = img.width(), h = img.height(), "decoded layer");
        Self::new(img)
    }

    /// Intrinsic width in pixels.
    pub fn width(&self) -> u32 {
        self.data.width()
    }

    /// Intrinsic height in pixels.
    pub fn height(&self) -> u32 {
        self.data.height()
    }

    /// Intrinsic dimensions as floats, for transform math.
    pub fn size_f32(&self) -> (f32, f32) {
        (self.data.width() as f32, self.data.height() as f32)
    }
}
