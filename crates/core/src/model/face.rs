use crate::model::MonitorSignal;

/// Landmark index of the outer left-eye corner.
pub const LEFT_EYE_CORNER: usize = 0;
/// Landmark index of the outer right-eye corner.
pub const RIGHT_EYE_CORNER: usize = 3;
/// Landmark index of the nose tip.
pub const NOSE_TIP: usize = 3;

/// Horizontal deviation, in detector units, above which a single face is
/// classified as looking away. The boundary is exclusive: exactly this
/// value does not trigger.
pub const GAZE_DEVIATION_LIMIT: f32 = 40.0;

/// 2-D landmark coordinate in the detector's units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandmarkPoint {
    pub x: f32,
    pub y: f32,
}

impl LandmarkPoint {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The narrow view of one detected face the engine depends on: indexable
/// point groups for the nose and both eyes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FaceDetection {
    nose: Vec<LandmarkPoint>,
    left_eye: Vec<LandmarkPoint>,
    right_eye: Vec<LandmarkPoint>,
}

impl FaceDetection {
    #[must_use]
    pub fn new(
        nose: Vec<LandmarkPoint>,
        left_eye: Vec<LandmarkPoint>,
        right_eye: Vec<LandmarkPoint>,
    ) -> Self {
        Self {
            nose,
            left_eye,
            right_eye,
        }
    }

    /// Horizontal distance between the eye midpoint and the nose tip.
    ///
    /// Returns `None` when a landmark group is too short to index; such a
    /// detection is treated as not deviating.
    #[must_use]
    pub fn gaze_deviation(&self) -> Option<f32> {
        let left = self.left_eye.get(LEFT_EYE_CORNER)?;
        let right = self.right_eye.get(RIGHT_EYE_CORNER)?;
        let nose_tip = self.nose.get(NOSE_TIP)?;

        let eye_midpoint_x = (left.x + right.x) / 2.0;
        Some((eye_midpoint_x - nose_tip.x).abs())
    }

    fn gaze_signal(&self) -> MonitorSignal {
        match self.gaze_deviation() {
            Some(deviation) if deviation > GAZE_DEVIATION_LIMIT => MonitorSignal::GazeAway,
            _ => MonitorSignal::Ok,
        }
    }
}

/// Classify one sampling tick's detections into a monitor signal.
#[must_use]
pub fn classify_detections(detections: &[FaceDetection]) -> MonitorSignal {
    match detections {
        [] => MonitorSignal::NoFace,
        [face] => face.gaze_signal(),
        _ => MonitorSignal::MultipleFaces,
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
