use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use interview_core::model::{classify_detections, MonitorSignal};

use super::capabilities::{FaceDetector, FrameSource};

/// Cadence at which the sampler polls the camera.
pub const SAMPLE_INTERVAL: Duration = Duration::from_secs(2);

/// One sampling tick's outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleOutcome {
    /// Frame classified; the signal carries the score delta.
    Signal(MonitorSignal),
    /// A capability failed; monitoring is off for the rest of the session.
    Degraded,
}

/// Polls the camera, runs detection, and classifies each frame.
///
/// The first capability failure switches the sampler into a permanent
/// degraded state: the failure is reported once and no further frames are
/// requested. The session continues without integrity scoring.
pub struct FrameSampler {
    source: Arc<dyn FrameSource>,
    detector: Arc<dyn FaceDetector>,
    degraded: bool,
}

impl FrameSampler {
    #[must_use]
    pub fn new(source: Arc<dyn FrameSource>, detector: Arc<dyn FaceDetector>) -> Self {
        Self {
            source,
            detector,
            degraded: false,
        }
    }

    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Classify the current frame.
    pub fn sample(&mut self) -> SampleOutcome {
        if self.degraded {
            return SampleOutcome::Degraded;
        }

        let frame = match self.source.current_frame() {
            Ok(frame) => frame,
            Err(err) => {
                warn!("camera capture failed: {err}; integrity monitoring disabled");
                self.degraded = true;
                return SampleOutcome::Degraded;
            }
        };

        match self.detector.detect_faces(&frame) {
            Ok(detections) => SampleOutcome::Signal(classify_detections(&detections)),
            Err(err) => {
                warn!("face detection failed: {err}; integrity monitoring disabled");
                self.degraded = true;
                SampleOutcome::Degraded
            }
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
