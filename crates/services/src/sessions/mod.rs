mod answers;
mod countdown;
mod phase;
mod runner;
mod service;
mod view;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use answers::AnswerSheet;
pub use countdown::{CountdownTimer, TickOutcome};
pub use phase::SessionPhase;
pub use runner::{SessionRunner, CLOCK_INTERVAL};
pub use service::{InterviewSession, SignalOutcome};
pub use view::SessionSnapshot;
pub use workflow::{ActiveInterview, InterviewService, SessionConfig, SESSION_SECS};
