//! Live camera capture.
//!
//! Models the capture flow: request a stream, keep it bound while the user
//! frames the shot, snapshot one frame to a fixed-size JPEG, and always stop
//! the tracks afterwards. The device itself sits behind [`CameraDevice`] so
//! the controller logic is testable without hardware.

use image::imageops::FilterType;
use image::RgbImage;
use leafscan_core::{CaptureOrigin, ImageAsset};
use tracing::{info, warn};

use crate::error::CaptureError;

/// Output raster width for captured frames.
pub const CAPTURE_WIDTH: u32 = 640;
/// Output raster height for captured frames.
pub const CAPTURE_HEIGHT: u32 = 480;

/// Which camera to prefer when more than one is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FacingMode {
    /// Rear camera. Preferred: plants are usually in front of the user.
    #[default]
    Environment,
    User,
}

/// One frame of tightly packed RGB8 pixels from a live stream.
#[derive(Debug, Clone)]
pub struct CameraFrame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// A live stream bound to an open camera.
pub trait CameraStream: Send {
    /// Grab the current frame.
    fn read_frame(&mut self) -> Result<CameraFrame, CaptureError>;

    /// Stop all tracks, releasing the device. Must be idempotent.
    fn stop(&mut self);
}

/// An available camera device.
pub trait CameraDevice: Send + Sync {
    /// Request access and open a live stream.
    fn open(&self, facing: FacingMode) -> Result<Box<dyn CameraStream>, CaptureError>;
}

/// An open camera session.
///
/// Stops the stream when dropped, so the device is released even on exit
/// paths that never reach an explicit `stop`.
struct CameraSession {
    stream: Option<Box<dyn CameraStream>>,
}

impl CameraSession {
    fn new(stream: Box<dyn CameraStream>) -> Self {
        Self {
            stream: Some(stream),
        }
    }

    fn read_frame(&mut self) -> Result<CameraFrame, CaptureError> {
        match self.stream.as_mut() {
            Some(stream) => stream.read_frame(),
            None => Err(CaptureError::NotStreaming),
        }
    }

    fn stop(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.stop();
        }
    }
}

impl Drop for CameraSession {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Observable controller states. Captures, dismissals, and errors all land
/// back on `Idle`; nothing persists across them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraState {
    Idle,
    Requesting,
    Streaming,
}

/// Drives the camera capture state machine over a [`CameraDevice`].
pub struct CaptureController<D: CameraDevice> {
    device: D,
    session: Option<CameraSession>,
    state: CameraState,
}

impl<D: CameraDevice> CaptureController<D> {
    pub fn new(device: D) -> Self {
        Self {
            device,
            session: None,
            state: CameraState::Idle,
        }
    }

    pub fn state(&self) -> CameraState {
        self.state
    }

    /// Request a fresh stream.
    ///
    /// An already-open session is torn down first: two live streams must
    /// never coexist. On denial or device error the controller returns to
    /// idle with no half-open stream.
    pub fn start_camera(&mut self, facing: FacingMode) -> Result<(), CaptureError> {
        self.teardown();
        self.state = CameraState::Requesting;
        match self.device.open(facing) {
            Ok(stream) => {
                self.session = Some(CameraSession::new(stream));
                self.state = CameraState::Streaming;
                info!(?facing, "camera streaming");
                Ok(())
            }
            Err(err) => {
                self.state = CameraState::Idle;
                warn!(error = %err, "camera access failed");
                Err(err)
            }
        }
    }

    /// Snapshot the current frame as a 640x480 JPEG asset.
    ///
    /// The stream is stopped whether or not the snapshot succeeds.
    pub fn capture(&mut self) -> Result<ImageAsset, CaptureError> {
        let frame = match self.session.as_mut() {
            Some(session) => session.read_frame(),
            None => Err(CaptureError::NotStreaming),
        };
        self.teardown();

        let jpeg = encode_jpeg(&frame?)?;
        let preview = media::data_url("image/jpeg", &jpeg);
        info!(bytes = jpeg.len(), "camera frame captured");
        Ok(ImageAsset::new(jpeg, "image/jpeg", preview, CaptureOrigin::Camera)?)
    }

    /// Dismiss the capture UI without taking a frame.
    pub fn dismiss(&mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.stop();
        }
        self.state = CameraState::Idle;
    }
}

/// Rasterize a frame to the fixed capture dimensions and encode as JPEG.
fn encode_jpeg(frame: &CameraFrame) -> Result<Vec<u8>, CaptureError> {
    let img = RgbImage::from_raw(frame.width, frame.height, frame.pixels.clone())
        .ok_or(CaptureError::NoFrame)?;
    let resized = image::imageops::resize(&img, CAPTURE_WIDTH, CAPTURE_HEIGHT, FilterType::Triangle);
    let mut out = Vec::new();
    image::DynamicImage::ImageRgb8(resized)
        .write_to(&mut std::io::Cursor::new(&mut out), image::ImageFormat::Jpeg)
        .map_err(|e| CaptureError::FrameEncode(e.to_string()))?;
    Ok(out)
}
