use crate::model::MonitorSignal;

/// Running [0, 100] metric of monitoring compliance.
///
/// Starts at full score. Signal deltas are never positive, so the value is
/// non-increasing over a session; each application clamps independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegrityScore(u8);

impl IntegrityScore {
    pub const MAX: u8 = 100;

    #[must_use]
    pub fn new() -> Self {
        Self(Self::MAX)
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Apply one signal's delta and return the new score.
    pub fn apply(&mut self, signal: MonitorSignal) -> u8 {
        self.apply_delta(signal.delta())
    }

    /// `score = clamp(score + delta, 0, MAX)`.
    pub fn apply_delta(&mut self, delta: i32) -> u8 {
        let next = (i32::from(self.0) + delta).clamp(0, i32::from(Self::MAX));
        self.0 = next as u8;
        self.0
    }
}

impl Default for IntegrityScore {
    fn default() -> Self {
        Self::new()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
