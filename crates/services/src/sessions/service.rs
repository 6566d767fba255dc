use chrono::{DateTime, Utc};
use std::fmt;

use tracing::{info, warn};

use interview_core::model::{CandidateProfile, Grade, MonitorSignal, Question};
use interview_core::time::format_mm_ss;

use crate::error::SessionError;
use crate::proctor::{IntegrityTracker, IntegrityUpdate, MonitorStatus};

use super::answers::AnswerSheet;
use super::countdown::{CountdownTimer, TickOutcome};
use super::phase::SessionPhase;
use super::view::SessionSnapshot;

//
// ─── SIGNAL OUTCOME ────────────────────────────────────────────────────────────
//

/// What happened to a proctoring signal handed to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalOutcome {
    /// Applied; carries the new integrity score.
    Applied(u8),
    /// The session is not active; the signal was discarded.
    Dropped,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Aggregate root for one interview attempt.
///
/// All mutable session state lives here: the question list fixed at
/// activation, the answer sheet, the integrity tracker, the countdown, and
/// the phase. Producers hand events in; the session decides whether they
/// still apply. Once ended, the state is frozen: late ticks and signals
/// are dropped, and the grade is computed exactly once.
pub struct InterviewSession {
    profile: CandidateProfile,
    questions: Vec<Question>,
    answers: AnswerSheet,
    integrity: IntegrityTracker,
    timer: CountdownTimer,
    phase: SessionPhase,
    monitor_status: MonitorStatus,
    failure: Option<String>,
    grade: Option<Grade>,
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
}

impl InterviewSession {
    /// Create a session for a validated profile. The countdown is armed
    /// but not started; the phase is `CollectingInput`.
    #[must_use]
    pub fn new(profile: CandidateProfile, total_secs: u32) -> Self {
        Self {
            profile,
            questions: Vec::new(),
            answers: AnswerSheet::new(),
            integrity: IntegrityTracker::new(),
            timer: CountdownTimer::new(total_secs),
            phase: SessionPhase::CollectingInput,
            monitor_status: MonitorStatus::Starting,
            failure: None,
            grade: None,
            started_at: None,
            ended_at: None,
        }
    }

    fn transition(&mut self, next: SessionPhase) -> Result<(), SessionError> {
        if !self.phase.can_transition(next) {
            return Err(SessionError::InvalidTransition {
                from: self.phase,
                to: next,
            });
        }
        self.phase = next;
        Ok(())
    }

    /// Mark the question request as in flight.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` unless the session is
    /// still collecting input.
    pub fn begin_generation(&mut self) -> Result<(), SessionError> {
        self.transition(SessionPhase::Generating)
    }

    /// Install the generated questions and start the countdown.
    ///
    /// The question list is immutable from here on.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` unless generation was in
    /// flight, so a session can never activate twice.
    pub fn activate(
        &mut self,
        questions: Vec<Question>,
        at: DateTime<Utc>,
    ) -> Result<(), SessionError> {
        self.transition(SessionPhase::Active)?;
        info!("session active with {} questions", questions.len());
        self.questions = questions;
        self.started_at = Some(at);
        self.timer.start();
        Ok(())
    }

    /// Terminal generation failure: the session ends with an error marker,
    /// no questions, and no grade.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` unless generation was in
    /// flight.
    pub fn fail_generation(
        &mut self,
        reason: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Result<(), SessionError> {
        self.transition(SessionPhase::Ended)?;
        let reason = reason.into();
        warn!("question generation failed: {reason}");
        self.failure = Some(reason);
        self.ended_at = Some(at);
        self.timer.stop();
        Ok(())
    }

    /// Record an answer selection, overwriting any prior choice.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotActive` outside the active phase.
    pub fn select_answer(&mut self, question: usize, option: usize) -> Result<(), SessionError> {
        if !self.phase.is_active() {
            return Err(SessionError::NotActive);
        }
        self.answers.select(question, option);
        Ok(())
    }

    /// Apply a proctoring signal to the integrity score.
    ///
    /// Signals arriving outside the active phase are dropped, which is what
    /// freezes the score once the session ends.
    pub fn apply_signal(&mut self, signal: MonitorSignal) -> SignalOutcome {
        if !self.phase.is_active() {
            return SignalOutcome::Dropped;
        }
        let score = self.integrity.apply(signal);
        self.monitor_status = MonitorStatus::Watching(signal);
        SignalOutcome::Applied(score)
    }

    /// Register an observer notified synchronously after each applied
    /// signal, e.g. a score display.
    pub fn subscribe_integrity(&mut self, observer: impl Fn(IntegrityUpdate) + Send + 'static) {
        self.integrity.subscribe(observer);
    }

    /// Note that monitoring degraded. The quiz continues unscored; the
    /// integrity score freezes at its last value.
    pub fn mark_degraded(&mut self) {
        if !self.phase.is_ended() {
            self.monitor_status = MonitorStatus::Degraded;
        }
    }

    /// Advance the countdown by one second. Expiry ends the session
    /// without explicit submission.
    pub fn clock_tick(&mut self, now: DateTime<Utc>) -> TickOutcome {
        if !self.phase.is_active() {
            return TickOutcome::Idle;
        }
        let outcome = self.timer.tick();
        if outcome == TickOutcome::Expired {
            self.finish(now);
        }
        outcome
    }

    /// Explicit submission: freeze state and grade.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotActive` outside the active phase.
    pub fn submit(&mut self, now: DateTime<Utc>) -> Result<&Grade, SessionError> {
        if !self.phase.is_active() {
            return Err(SessionError::NotActive);
        }
        self.finish(now);
        self.grade.as_ref().ok_or(SessionError::NotActive)
    }

    // Callers guarantee the phase is Active, for which Ended is always a
    // legal transition.
    fn finish(&mut self, now: DateTime<Utc>) {
        self.phase = SessionPhase::Ended;
        self.timer.stop();
        self.ended_at = Some(now);

        let correct = u32::try_from(self.answers.correct_count(&self.questions)).unwrap_or(u32::MAX);
        let total = u32::try_from(self.questions.len()).unwrap_or(u32::MAX);
        let grade = Grade::compute(
            correct,
            total,
            self.integrity.score(),
            self.timer.elapsed_secs(),
        );
        info!(
            "session ended: grade {} (combined {})",
            grade.letter(),
            grade.combined()
        );
        self.grade = Some(grade);
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn profile(&self) -> &CandidateProfile {
        &self.profile
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    #[must_use]
    pub fn integrity_score(&self) -> u8 {
        self.integrity.score()
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.timer.remaining_secs()
    }

    #[must_use]
    pub fn monitor_status(&self) -> MonitorStatus {
        self.monitor_status
    }

    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// The final grade, present once the session ended normally. A session
    /// that ended through generation failure has no grade.
    #[must_use]
    pub fn grade(&self) -> Option<&Grade> {
        self.grade.as_ref()
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    /// Cheap aggregated view for display polling.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            remaining_secs: self.timer.remaining_secs(),
            clock_display: format_mm_ss(self.timer.remaining_secs()),
            integrity_score: self.integrity.score(),
            monitor_message: self.monitor_status.message(),
            answered: self.answers.answered_count(),
            total_questions: self.questions.len(),
            failure: self.failure.clone(),
            grade: self.grade.clone(),
        }
    }
}

impl fmt::Debug for InterviewSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterviewSession")
            .field("phase", &self.phase)
            .field("questions_len", &self.questions.len())
            .field("answered", &self.answers.answered_count())
            .field("integrity_score", &self.integrity.score())
            .field("remaining_secs", &self.timer.remaining_secs())
            .field("failure", &self.failure)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
