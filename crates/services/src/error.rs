//! Shared error types for the services crate.

use thiserror::Error;

use interview_core::model::{ProfileError, QuestionError};

use crate::sessions::SessionPhase;

/// Errors emitted by the question generation client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerationError {
    #[error("question generation is not configured")]
    Disabled,

    #[error("question service returned an empty response")]
    EmptyResponse,

    #[error("question service request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error("question payload is not valid JSON: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("expected {expected} questions, got {got}")]
    WrongQuestionCount { expected: usize, got: usize },

    #[error(transparent)]
    Question(#[from] QuestionError),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by the camera and face-detection capabilities.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProctorError {
    #[error("camera unavailable: {0}")]
    CameraUnavailable(String),

    #[error("face detector unavailable: {0}")]
    DetectorUnavailable(String),
}

/// Errors emitted by session operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("invalid session transition from {from} to {to}")]
    InvalidTransition {
        from: SessionPhase,
        to: SessionPhase,
    },

    #[error("session is not active")]
    NotActive,

    #[error("session state lock poisoned: {0}")]
    Lock(String),

    #[error(transparent)]
    Profile(#[from] ProfileError),
}
