#![forbid(unsafe_code)]

pub mod error;
pub mod generator;
pub mod proctor;
pub mod sessions;

pub use interview_core::Clock;

pub use error::{GenerationError, ProctorError, SessionError};
pub use generator::{QuestionGenConfig, QuestionGenService, QuestionSource, QUESTION_COUNT};

pub use proctor::{
    FaceDetector, Frame, FrameSampler, FrameSource, IntegrityTracker, IntegrityUpdate,
    MonitorStatus, SampleOutcome, VisibilityMonitor, VisibilityState, SAMPLE_INTERVAL,
};
pub use sessions::{
    ActiveInterview, AnswerSheet, CountdownTimer, InterviewService, InterviewSession,
    SessionConfig, SessionPhase, SessionRunner, SessionSnapshot, SignalOutcome, TickOutcome,
    SESSION_SECS,
};
