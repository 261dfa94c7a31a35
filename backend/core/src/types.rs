use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ImageAssetError;

/// Which capture path produced an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureOrigin {
    FilePicker,
    DragDrop,
    Camera,
}

impl fmt::Display for CaptureOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CaptureOrigin::FilePicker => "file_picker",
            CaptureOrigin::DragDrop => "drag_drop",
            CaptureOrigin::Camera => "camera",
        };
        f.write_str(s)
    }
}

/// A captured image ready for identification.
///
/// Constructed only through [`ImageAsset::new`], which enforces that the
/// payload is non-empty and carries an image MIME type. The preview is a
/// locally resolvable `data:` URL the UI can render without a round-trip.
#[derive(Debug, Clone)]
pub struct ImageAsset {
    data: Vec<u8>,
    mime: String,
    preview: String,
    origin: CaptureOrigin,
}

impl ImageAsset {
    pub fn new(
        data: Vec<u8>,
        mime: impl Into<String>,
        preview: String,
        origin: CaptureOrigin,
    ) -> Result<Self, ImageAssetError> {
        let mime = mime.into();
        if data.is_empty() {
            return Err(ImageAssetError::EmptyPayload);
        }
        if !mime.starts_with("image/") {
            return Err(ImageAssetError::NotAnImage(mime));
        }
        Ok(Self {
            data,
            mime,
            preview,
            origin,
        })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn preview(&self) -> &str {
        &self.preview
    }

    pub fn origin(&self) -> CaptureOrigin {
        self.origin
    }
}

/// The three-field identification returned to the UI.
///
/// Every field is always present; failed extractions are replaced by fixed
/// fallback strings rather than omitted. Replaced wholesale on each capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentificationResult {
    pub name: String,
    pub description: String,
    pub care_instructions: String,
}
