use interview_core::model::Grade;

use super::phase::SessionPhase;

/// Aggregated view of session state, useful for display polling.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub remaining_secs: u32,
    /// Remaining time rendered as `mm:ss`.
    pub clock_display: String,
    pub integrity_score: u8,
    pub monitor_message: &'static str,
    pub answered: usize,
    pub total_questions: usize,
    pub failure: Option<String>,
    pub grade: Option<Grade>,
}
