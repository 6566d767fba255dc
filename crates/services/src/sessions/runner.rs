use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;
use tokio::time::{self, Duration};
use tracing::debug;

use interview_core::Clock;

use crate::error::SessionError;
use crate::proctor::{
    FrameSampler, SampleOutcome, VisibilityMonitor, VisibilityState, SAMPLE_INTERVAL,
};

use super::countdown::TickOutcome;
use super::service::{InterviewSession, SignalOutcome};

/// Interval between countdown ticks.
pub const CLOCK_INTERVAL: Duration = Duration::from_secs(1);

/// Owns the recurring work of one active session: the 1-second clock loop,
/// the 2-second sampler loop, and the visibility edge detector.
///
/// The loops stop on their own once the session leaves the active phase;
/// `stop` (also run on drop) aborts them outright, so no timer can outlive
/// the session or leak into a restarted one.
pub struct SessionRunner {
    session: Arc<Mutex<InterviewSession>>,
    visibility: Mutex<VisibilityMonitor>,
    tasks: Vec<JoinHandle<()>>,
}

impl SessionRunner {
    /// Spawn the clock and sampler loops for an activated session.
    #[must_use]
    pub fn launch(
        session: Arc<Mutex<InterviewSession>>,
        sampler: FrameSampler,
        clock: Clock,
    ) -> Self {
        let clock_task = tokio::spawn(run_clock(Arc::clone(&session), clock));
        let sampler_task = tokio::spawn(run_sampler(Arc::clone(&session), sampler));
        Self {
            session,
            visibility: Mutex::new(VisibilityMonitor::new()),
            tasks: vec![clock_task, sampler_task],
        }
    }

    /// Forward a visibility transition into the session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Lock` if a state lock was poisoned.
    pub fn report_visibility(&self, state: VisibilityState) -> Result<(), SessionError> {
        let signal = self
            .visibility
            .lock()
            .map_err(|e| SessionError::Lock(e.to_string()))?
            .observe(state);

        if let Some(signal) = signal {
            let mut session = self
                .session
                .lock()
                .map_err(|e| SessionError::Lock(e.to_string()))?;
            session.apply_signal(signal);
        }
        Ok(())
    }

    /// Abort all recurring work. Idempotent.
    pub fn stop(&mut self) {
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }
}

impl Drop for SessionRunner {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run_clock(session: Arc<Mutex<InterviewSession>>, clock: Clock) {
    let mut interval = time::interval(CLOCK_INTERVAL);
    // The first interval tick completes immediately; the countdown starts
    // one full second in.
    interval.tick().await;
    loop {
        interval.tick().await;
        let Ok(mut guard) = session.lock() else {
            return;
        };
        match guard.clock_tick(clock.now()) {
            TickOutcome::Running(_) => {}
            TickOutcome::Expired | TickOutcome::Idle => {
                debug!("clock loop finished");
                return;
            }
        }
    }
}

async fn run_sampler(session: Arc<Mutex<InterviewSession>>, mut sampler: FrameSampler) {
    let mut interval = time::interval(SAMPLE_INTERVAL);
    interval.tick().await;
    loop {
        interval.tick().await;
        // Sampling happens outside the session lock; whether the signal
        // still applies is decided inside it.
        let outcome = sampler.sample();
        let Ok(mut guard) = session.lock() else {
            return;
        };
        match outcome {
            SampleOutcome::Degraded => {
                guard.mark_degraded();
                return;
            }
            SampleOutcome::Signal(signal) => {
                if guard.apply_signal(signal) == SignalOutcome::Dropped {
                    debug!("sampler loop finished");
                    return;
                }
            }
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
