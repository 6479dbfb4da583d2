pub mod consts;
pub mod error;
pub mod export;
pub mod layer;
pub mod overlay;
pub mod playback;
pub mod report;
pub mod saliency;
pub mod transform;
pub mod view_mode;
