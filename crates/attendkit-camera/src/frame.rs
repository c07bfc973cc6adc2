//! Frame capture abstraction.

use bytes::Bytes;
use std::future::Future;

/// Result type alias for capture operations.
pub type Result<T> = std::result::Result<T, CameraError>;

/// Errors from the capture pipeline.
#[derive(Debug, thiserror::Error)]
pub enum CameraError {
    /// The sensor produced no frame.
    #[error("Camera capture failed: {message}")]
    CaptureFailed { message: String },
}

impl CameraError {
    pub fn capture_failed(message: impl Into<String>) -> Self {
        Self::CaptureFailed {
            message: message.into(),
        }
    }
}

/// Requested capture resolution.
///
/// The face-recognition consumer pulls low-resolution frames for speed;
/// high resolution exists for inspection and enrollment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// 320x240 (QVGA).
    Low,

    /// 640x480 (VGA).
    High,
}

/// Source of JPEG frames.
///
/// The capture future is `Send` so implementations can be served from
/// axum handlers. Not object-safe; the HTTP server is generic over its
/// source instead.
pub trait FrameSource: Send + Sync {
    /// Capture the current frame as JPEG bytes.
    ///
    /// # Errors
    ///
    /// Returns `CameraError::CaptureFailed` when no frame is available.
    fn capture(&self, resolution: Resolution) -> impl Future<Output = Result<Bytes>> + Send;
}

/// Smallest well-formed JPEG stream: SOI marker and EOI marker only.
/// Enough for wire-level tests and demo serving.
const PLACEHOLDER_JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xD9];

/// Frame source that always serves the same image.
///
/// Used in demos and tests where no sensor exists.
#[derive(Debug, Clone)]
pub struct StaticFrameSource {
    frame: Bytes,
}

impl StaticFrameSource {
    /// Serve the given JPEG bytes for every capture.
    pub fn new(frame: impl Into<Bytes>) -> Self {
        Self {
            frame: frame.into(),
        }
    }

    /// Serve a built-in placeholder image.
    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_JPEG)
    }
}

impl FrameSource for StaticFrameSource {
    async fn capture(&self, _resolution: Resolution) -> Result<Bytes> {
        Ok(self.frame.clone())
    }
}

/// Frame source that fails every capture, for exercising the error path.
#[derive(Debug, Clone, Default)]
pub struct FailingFrameSource;

impl FrameSource for FailingFrameSource {
    async fn capture(&self, _resolution: Resolution) -> Result<Bytes> {
        Err(CameraError::capture_failed("no frame buffer"))
    }
}
