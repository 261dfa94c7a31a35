pub mod error;
pub mod traits;
pub mod types;

pub use error::ImageAssetError;
pub use traits::VisionModel;
pub use types::{CaptureOrigin, IdentificationResult, ImageAsset};
