use leafscan_core::ImageAssetError;
use thiserror::Error;

/// Failures while acquiring an image from any capture source.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported file type: {0}")]
    UnsupportedType(String),

    #[error(transparent)]
    InvalidAsset(#[from] ImageAssetError),

    #[error("camera access failed: {0}")]
    CameraAccess(String),

    #[error("camera is not streaming")]
    NotStreaming,

    #[error("no camera frame available")]
    NoFrame,

    #[error("failed to encode captured frame: {0}")]
    FrameEncode(String),
}
