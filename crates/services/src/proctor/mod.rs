//! Webcam-based integrity monitoring: capabilities, sampling, visibility
//! tracking, and score aggregation.

mod capabilities;
mod sampler;
mod score;
mod visibility;

pub use capabilities::{FaceDetector, Frame, FrameSource};
pub use sampler::{FrameSampler, SampleOutcome, SAMPLE_INTERVAL};
pub use score::{IntegrityTracker, IntegrityUpdate};
pub use visibility::{VisibilityMonitor, VisibilityState};

use interview_core::model::MonitorSignal;

/// Display state of the proctoring pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonitorStatus {
    /// Camera and detector not yet running.
    #[default]
    Starting,
    /// Last classified signal.
    Watching(MonitorSignal),
    /// A capability failed; integrity is no longer tracked.
    Degraded,
}

impl MonitorStatus {
    /// Human-readable status line for display.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            MonitorStatus::Starting => "Starting camera...",
            MonitorStatus::Watching(signal) => signal.status_message(),
            MonitorStatus::Degraded => "Camera unavailable. Integrity is not being tracked.",
        }
    }
}
