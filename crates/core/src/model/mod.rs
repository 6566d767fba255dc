mod face;
mod grade;
mod integrity;
mod profile;
mod question;
mod signal;

pub use face::{
    classify_detections, FaceDetection, LandmarkPoint, GAZE_DEVIATION_LIMIT, LEFT_EYE_CORNER,
    NOSE_TIP, RIGHT_EYE_CORNER,
};
pub use grade::{Grade, GradeLetter};
pub use integrity::IntegrityScore;
pub use profile::{CandidateProfile, ExperienceLevel, ProfileError};
pub use question::{Question, QuestionError, OPTION_COUNT};
pub use signal::MonitorSignal;
