//! File-based capture sources: picker selections and drag-drop payloads.
//!
//! The UI-level `image/*` filter is a convenience, not a boundary; both paths
//! sniff the payload bytes and refuse anything that is not an image.

use std::path::Path;

use leafscan_core::{CaptureOrigin, ImageAsset};
use tracing::debug;

use crate::error::CaptureError;

/// Build an asset from a user-picked file on disk.
pub fn from_file(path: &Path) -> Result<ImageAsset, CaptureError> {
    let data = std::fs::read(path).map_err(|source| CaptureError::FileRead {
        path: path.display().to_string(),
        source,
    })?;
    ingest(data, media::detect_mime_type(path), CaptureOrigin::FilePicker)
}

/// Build an asset from the first file of a drop payload.
///
/// The declared MIME type comes from the drop event; a disagreement with the
/// payload bytes resolves in favor of the bytes.
pub fn from_dropped(declared_mime: &str, data: Vec<u8>) -> Result<ImageAsset, CaptureError> {
    ingest(data, declared_mime, CaptureOrigin::DragDrop)
}

fn ingest(
    data: Vec<u8>,
    declared_mime: &str,
    origin: CaptureOrigin,
) -> Result<ImageAsset, CaptureError> {
    let mime = match media::sniff_image_mime(&data) {
        Some(sniffed) => sniffed,
        None => return Err(CaptureError::UnsupportedType(declared_mime.to_string())),
    };
    let preview = media::data_url(mime, &data);
    debug!(%origin, mime, bytes = data.len(), "image acquired");
    Ok(ImageAsset::new(data, mime, preview, origin)?)
}
