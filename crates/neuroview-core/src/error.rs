use thiserror::Error;

#[derive(Error, Debug)]
pub enum NeuroviewError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid analysis report: {0}")]
    InvalidReport(String),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Base scan not loaded yet; nothing to export")]
    ExportNotReady,

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, NeuroviewError>;
