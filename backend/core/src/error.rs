use thiserror::Error;

/// Invariant violations when constructing an [`ImageAsset`](crate::ImageAsset).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageAssetError {
    #[error("image payload is empty")]
    EmptyPayload,

    #[error("not an image MIME type: {0}")]
    NotAnImage(String),
}
