//! Image acquisition: turns user input into [`ImageAsset`]s.
//!
//! Three modalities produce identical downstream assets: picked files,
//! dropped files, and live camera frames snapshotted to JPEG. Every asset
//! carries a preview `data:` URL before it is handed to the upload path.
//!
//! [`ImageAsset`]: leafscan_core::ImageAsset

pub mod camera;
pub mod error;
pub mod sources;

pub use camera::{
    CameraDevice, CameraFrame, CameraState, CameraStream, CaptureController, FacingMode,
};
pub use error::CaptureError;
pub use sources::{from_dropped, from_file};
