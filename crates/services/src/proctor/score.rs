use std::fmt;

use tracing::debug;

use interview_core::model::{IntegrityScore, MonitorSignal};

/// Snapshot handed to observers after every applied signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegrityUpdate {
    pub signal: MonitorSignal,
    pub score: u8,
}

type Observer = Box<dyn Fn(IntegrityUpdate) + Send>;

/// Single point of truth for the running integrity score.
///
/// Both signal producers write here. Every event is applied and published
/// in one step, with no batching and no debouncing, so observers always see
/// the score the event produced.
pub struct IntegrityTracker {
    score: IntegrityScore,
    observers: Vec<Observer>,
}

impl IntegrityTracker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            score: IntegrityScore::new(),
            observers: Vec::new(),
        }
    }

    #[must_use]
    pub fn score(&self) -> u8 {
        self.score.value()
    }

    /// Register an observer invoked synchronously after each update.
    pub fn subscribe(&mut self, observer: impl Fn(IntegrityUpdate) + Send + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Apply one signal's delta, clamped to [0, 100], and notify observers.
    pub fn apply(&mut self, signal: MonitorSignal) -> u8 {
        let score = self.score.apply(signal);
        if signal.is_violation() {
            debug!("integrity violation {signal:?}, score now {score}");
        }

        let update = IntegrityUpdate { signal, score };
        for observer in &self.observers {
            observer(update);
        }
        score
    }
}

impl Default for IntegrityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IntegrityTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntegrityTracker")
            .field("score", &self.score)
            .field("observers_len", &self.observers.len())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn applies_clamped_deltas() {
        let mut tracker = IntegrityTracker::new();
        assert_eq!(tracker.apply(MonitorSignal::NoFace), 90);
        assert_eq!(tracker.apply(MonitorSignal::TabSwitch), 80);
        assert_eq!(tracker.score(), 80);
    }

    #[test]
    fn observers_see_every_update_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut tracker = IntegrityTracker::new();
        tracker.subscribe(move |update| {
            sink.lock().unwrap().push((update.signal, update.score));
        });

        tracker.apply(MonitorSignal::GazeAway);
        tracker.apply(MonitorSignal::Ok);
        tracker.apply(MonitorSignal::MultipleFaces);

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                (MonitorSignal::GazeAway, 95),
                (MonitorSignal::Ok, 95),
                (MonitorSignal::MultipleFaces, 80),
            ]
        );
    }

    #[test]
    fn long_violation_run_floors_at_zero() {
        let mut tracker = IntegrityTracker::new();
        for _ in 0..20 {
            tracker.apply(MonitorSignal::NoFace);
        }
        assert_eq!(tracker.score(), 0);
    }
}
