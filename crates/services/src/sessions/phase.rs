use std::fmt;

/// Lifecycle of one interview attempt.
///
/// Transitions form a straight line; everything else is rejected. Restart
/// is not a transition, it discards the session entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Candidate is supplying role, experience, and stack. No timer, no
    /// score tracking.
    CollectingInput,
    /// Question request in flight.
    Generating,
    /// Clock and sampler running; answer writes accepted.
    Active,
    /// Frozen. Timers and sampling stopped, grade computed.
    Ended,
}

impl SessionPhase {
    /// Whether the machine may move from `self` to `next`.
    #[must_use]
    pub fn can_transition(self, next: SessionPhase) -> bool {
        matches!(
            (self, next),
            (SessionPhase::CollectingInput, SessionPhase::Generating)
                | (SessionPhase::Generating, SessionPhase::Active)
                | (SessionPhase::Generating, SessionPhase::Ended)
                | (SessionPhase::Active, SessionPhase::Ended)
        )
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self == SessionPhase::Active
    }

    #[must_use]
    pub fn is_ended(self) -> bool {
        self == SessionPhase::Ended
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SessionPhase::CollectingInput => "collecting_input",
            SessionPhase::Generating => "generating",
            SessionPhase::Active => "active",
            SessionPhase::Ended => "ended",
        }
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_forward_transitions_are_allowed() {
        use SessionPhase::{Active, CollectingInput, Ended, Generating};

        assert!(CollectingInput.can_transition(Generating));
        assert!(Generating.can_transition(Active));
        assert!(Generating.can_transition(Ended));
        assert!(Active.can_transition(Ended));

        assert!(!CollectingInput.can_transition(Active));
        assert!(!CollectingInput.can_transition(Ended));
        assert!(!Active.can_transition(Generating));
        assert!(!Ended.can_transition(Active));
        assert!(!Ended.can_transition(CollectingInput));
        assert!(!Active.can_transition(Active));
    }

    #[test]
    fn phase_names_are_stable() {
        assert_eq!(SessionPhase::CollectingInput.to_string(), "collecting_input");
        assert_eq!(SessionPhase::Ended.to_string(), "ended");
    }
}
