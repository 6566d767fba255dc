use std::sync::{Arc, Mutex};

use tracing::info;

use interview_core::model::{CandidateProfile, ExperienceLevel, Grade};
use interview_core::Clock;

use crate::error::SessionError;
use crate::generator::QuestionSource;
use crate::proctor::{FaceDetector, FrameSampler, FrameSource, IntegrityUpdate, VisibilityState};

use super::runner::SessionRunner;
use super::service::InterviewSession;
use super::view::SessionSnapshot;

/// Default session length: 30 minutes.
pub const SESSION_SECS: u32 = 30 * 60;

/// Tunables for one interview attempt.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub total_secs: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            total_secs: SESSION_SECS,
        }
    }
}

//
// ─── INTERVIEW SERVICE ─────────────────────────────────────────────────────────
//

/// Orchestrates interview startup and restart over injected collaborators.
#[derive(Clone)]
pub struct InterviewService {
    clock: Clock,
    config: SessionConfig,
    questions: Arc<dyn QuestionSource>,
    camera: Arc<dyn FrameSource>,
    detector: Arc<dyn FaceDetector>,
}

impl InterviewService {
    #[must_use]
    pub fn new(
        clock: Clock,
        config: SessionConfig,
        questions: Arc<dyn QuestionSource>,
        camera: Arc<dyn FrameSource>,
        detector: Arc<dyn FaceDetector>,
    ) -> Self {
        Self {
            clock,
            config,
            questions,
            camera,
            detector,
        }
    }

    /// Validate candidate input and run one interview up to the active
    /// phase.
    ///
    /// Generation failure does not surface as `Err`: the returned interview
    /// is already in its terminal error state with no questions, no grade,
    /// and no timers running.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Profile` when the candidate input is invalid;
    /// no session exists and no timers were created in that case.
    pub async fn start_interview(
        &self,
        job_role: &str,
        experience: ExperienceLevel,
        tech_stack: &str,
    ) -> Result<ActiveInterview, SessionError> {
        let profile = CandidateProfile::new(job_role, experience, tech_stack)?;

        let mut session = InterviewSession::new(profile.clone(), self.config.total_secs);
        session.begin_generation()?;
        info!(
            "generating questions for {} ({})",
            profile.job_role(),
            profile.experience()
        );

        match self.questions.generate(&profile).await {
            Ok(questions) => {
                session.activate(questions, self.clock.now())?;
                let session = Arc::new(Mutex::new(session));
                let sampler =
                    FrameSampler::new(Arc::clone(&self.camera), Arc::clone(&self.detector));
                let runner = SessionRunner::launch(Arc::clone(&session), sampler, self.clock);
                Ok(ActiveInterview {
                    clock: self.clock,
                    session,
                    runner: Some(runner),
                })
            }
            Err(err) => {
                session.fail_generation(err.to_string(), self.clock.now())?;
                Ok(ActiveInterview {
                    clock: self.clock,
                    session: Arc::new(Mutex::new(session)),
                    runner: None,
                })
            }
        }
    }
}

//
// ─── ACTIVE INTERVIEW ──────────────────────────────────────────────────────────
//

/// Handle for one running (or terminally failed) interview attempt.
///
/// Dropping the handle discards the attempt and aborts its recurring work,
/// so restarting is simply dropping one handle and starting another;
/// nothing carries over.
pub struct ActiveInterview {
    clock: Clock,
    session: Arc<Mutex<InterviewSession>>,
    runner: Option<SessionRunner>,
}

impl std::fmt::Debug for ActiveInterview {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActiveInterview")
            .field("has_runner", &self.runner.is_some())
            .finish_non_exhaustive()
    }
}

impl ActiveInterview {
    fn lock(&self) -> Result<std::sync::MutexGuard<'_, InterviewSession>, SessionError> {
        self.session
            .lock()
            .map_err(|e| SessionError::Lock(e.to_string()))
    }

    /// Record an answer selection.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotActive` outside the active phase.
    pub fn select_answer(&self, question: usize, option: usize) -> Result<(), SessionError> {
        self.lock()?.select_answer(question, option)
    }

    /// Register an integrity observer notified synchronously after each
    /// applied signal.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Lock` if the state lock was poisoned.
    pub fn subscribe_integrity(
        &self,
        observer: impl Fn(IntegrityUpdate) + Send + 'static,
    ) -> Result<(), SessionError> {
        self.lock()?.subscribe_integrity(observer);
        Ok(())
    }

    /// Forward a visibility transition. Ignored when no monitoring is
    /// attached (terminally failed attempts).
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Lock` if a state lock was poisoned.
    pub fn report_visibility(&self, state: VisibilityState) -> Result<(), SessionError> {
        match &self.runner {
            Some(runner) => runner.report_visibility(state),
            None => Ok(()),
        }
    }

    /// Submit the interview, freezing state and cancelling all recurring
    /// work.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotActive` if the session already ended.
    pub fn submit(&mut self) -> Result<Grade, SessionError> {
        let grade = self.lock()?.submit(self.clock.now())?.clone();
        self.detach();
        Ok(grade)
    }

    /// Discard the attempt: abort timers and sampling without grading.
    pub fn abandon(&mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        if let Some(mut runner) = self.runner.take() {
            runner.stop();
        }
    }

    /// Aggregated view of the current session state.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Lock` if the state lock was poisoned.
    pub fn snapshot(&self) -> Result<SessionSnapshot, SessionError> {
        Ok(self.lock()?.snapshot())
    }

    /// The final grade, once the session ended normally.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Lock` if the state lock was poisoned.
    pub fn grade(&self) -> Result<Option<Grade>, SessionError> {
        Ok(self.lock()?.grade().cloned())
    }
}

impl Drop for ActiveInterview {
    fn drop(&mut self) {
        self.detach();
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{GenerationError, ProctorError};
    use crate::generator::QUESTION_COUNT;
    use crate::proctor::{Frame, MonitorStatus};
    use crate::sessions::SessionPhase;
    use async_trait::async_trait;
    use interview_core::model::{FaceDetection, Question};
    use interview_core::time::fixed_clock;

    struct FixedQuestions;

    #[async_trait]
    impl QuestionSource for FixedQuestions {
        async fn generate(
            &self,
            _profile: &CandidateProfile,
        ) -> Result<Vec<Question>, GenerationError> {
            Ok((0..QUESTION_COUNT)
                .map(|i| {
                    Question::new(
                        format!("Q{i}"),
                        vec!["a".into(), "b".into(), "c".into(), "d".into()],
                        0,
                    )
                    .unwrap()
                })
                .collect())
        }
    }

    struct FailingQuestions;

    #[async_trait]
    impl QuestionSource for FailingQuestions {
        async fn generate(
            &self,
            _profile: &CandidateProfile,
        ) -> Result<Vec<Question>, GenerationError> {
            Err(GenerationError::EmptyResponse)
        }
    }

    struct StaticCamera;

    impl FrameSource for StaticCamera {
        fn current_frame(&self) -> Result<Frame, ProctorError> {
            Ok(Frame::default())
        }
    }

    struct CenteredFaceDetector;

    impl FaceDetector for CenteredFaceDetector {
        fn detect_faces(&self, _frame: &Frame) -> Result<Vec<FaceDetection>, ProctorError> {
            use interview_core::model::LandmarkPoint;
            let point = LandmarkPoint::new(100.0, 50.0);
            Ok(vec![FaceDetection::new(
                vec![point; 4],
                vec![point; 1],
                vec![point; 4],
            )])
        }
    }

    fn service(questions: Arc<dyn QuestionSource>) -> InterviewService {
        InterviewService::new(
            fixed_clock(),
            SessionConfig { total_secs: 600 },
            questions,
            Arc::new(StaticCamera),
            Arc::new(CenteredFaceDetector),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn start_interview_reaches_the_active_phase() {
        let service = service(Arc::new(FixedQuestions));
        let interview = service
            .start_interview("Backend Developer", ExperienceLevel::Advanced, "Rust")
            .await
            .unwrap();

        let snapshot = interview.snapshot().unwrap();
        assert_eq!(snapshot.phase, SessionPhase::Active);
        assert_eq!(snapshot.total_questions, QUESTION_COUNT);
        assert_eq!(snapshot.remaining_secs, 600);
        assert_eq!(snapshot.integrity_score, 100);
        assert!(snapshot.failure.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn invalid_profile_never_creates_a_session() {
        let service = service(Arc::new(FixedQuestions));
        let err = service
            .start_interview("  ", ExperienceLevel::Beginner, "Rust")
            .await
            .unwrap_err();
        assert!(matches!(err, SessionError::Profile(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn generation_failure_is_terminal_and_ungraded() {
        let service = service(Arc::new(FailingQuestions));
        let interview = service
            .start_interview("Dev", ExperienceLevel::Beginner, "Rust")
            .await
            .unwrap();

        let snapshot = interview.snapshot().unwrap();
        assert_eq!(snapshot.phase, SessionPhase::Ended);
        assert_eq!(snapshot.total_questions, 0);
        assert!(snapshot.failure.is_some());
        assert!(snapshot.grade.is_none());

        assert!(matches!(
            interview.select_answer(0, 0),
            Err(SessionError::NotActive)
        ));
        // Visibility reports are ignored without monitoring attached.
        interview.report_visibility(VisibilityState::Hidden).unwrap();
        assert_eq!(interview.snapshot().unwrap().integrity_score, 100);
    }

    #[tokio::test(start_paused = true)]
    async fn submitted_interview_grades_and_freezes() {
        let service = service(Arc::new(FixedQuestions));
        let mut interview = service
            .start_interview("Dev", ExperienceLevel::Intermediate, "Rust")
            .await
            .unwrap();

        for question in 0..7 {
            interview.select_answer(question, 0).unwrap();
        }
        interview.select_answer(7, 2).unwrap();
        interview.report_visibility(VisibilityState::Hidden).unwrap();

        let grade = interview.submit().unwrap();
        assert_eq!(grade.quiz_score(), 7);
        assert_eq!(grade.total_questions(), QUESTION_COUNT as u32);
        assert_eq!(grade.integrity_score(), 90);

        // Frozen: the grade is stable and re-submission is rejected.
        assert_eq!(interview.grade().unwrap(), Some(grade));
        assert!(matches!(interview.submit(), Err(SessionError::NotActive)));
    }

    #[tokio::test(start_paused = true)]
    async fn restart_discards_prior_attempt_state() {
        let service = service(Arc::new(FixedQuestions));
        let mut first = service
            .start_interview("Dev", ExperienceLevel::Beginner, "Rust")
            .await
            .unwrap();
        first.select_answer(0, 0).unwrap();
        first.report_visibility(VisibilityState::Hidden).unwrap();
        first.abandon();

        let second = service
            .start_interview("Dev", ExperienceLevel::Beginner, "Rust")
            .await
            .unwrap();
        let snapshot = second.snapshot().unwrap();
        assert_eq!(snapshot.integrity_score, 100);
        assert_eq!(snapshot.answered, 0);
        assert_eq!(snapshot.remaining_secs, 600);
        assert_eq!(snapshot.monitor_message, MonitorStatus::Starting.message());
    }
}
