use interview_core::model::FaceDetection;

use crate::error::ProctorError;

/// One frame handed from the camera to the detector.
///
/// The engine never inspects pixel data; the buffer exists only to be
/// passed through to the detection capability.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Live camera capability.
pub trait FrameSource: Send + Sync {
    /// Grab the most recent frame.
    ///
    /// # Errors
    ///
    /// Returns `ProctorError` when the camera is unavailable or access was
    /// denied. The caller treats this as a degraded state, not a fatal one.
    fn current_frame(&self) -> Result<Frame, ProctorError>;
}

/// Face-detection capability over a single frame.
pub trait FaceDetector: Send + Sync {
    /// Detect zero or more faces with their landmark groups.
    ///
    /// # Errors
    ///
    /// Returns `ProctorError` when the detector cannot run.
    fn detect_faces(&self, frame: &Frame) -> Result<Vec<FaceDetection>, ProctorError>;
}
