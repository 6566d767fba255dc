use interview_core::model::MonitorSignal;

/// Visibility of the test-taker's window as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisibilityState {
    #[default]
    Visible,
    Hidden,
}

/// Edge detector over visibility transitions.
///
/// Emits exactly one `TabSwitch` per visible-to-hidden transition and
/// nothing for any other transition, so a single hide can never
/// double-fire. Lives only as long as the active session.
#[derive(Debug, Default)]
pub struct VisibilityMonitor {
    last: VisibilityState,
}

impl VisibilityMonitor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            last: VisibilityState::Visible,
        }
    }

    /// Record a visibility change and return the violation to apply, if any.
    pub fn observe(&mut self, state: VisibilityState) -> Option<MonitorSignal> {
        let fired =
            self.last == VisibilityState::Visible && state == VisibilityState::Hidden;
        self.last = state;
        fired.then_some(MonitorSignal::TabSwitch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hide_fires_a_single_tab_switch() {
        let mut monitor = VisibilityMonitor::new();
        assert_eq!(
            monitor.observe(VisibilityState::Hidden),
            Some(MonitorSignal::TabSwitch)
        );
    }

    #[test]
    fn repeated_hidden_reports_do_not_double_fire() {
        let mut monitor = VisibilityMonitor::new();
        assert!(monitor.observe(VisibilityState::Hidden).is_some());
        assert!(monitor.observe(VisibilityState::Hidden).is_none());
    }

    #[test]
    fn becoming_visible_fires_nothing() {
        let mut monitor = VisibilityMonitor::new();
        assert!(monitor.observe(VisibilityState::Visible).is_none());

        monitor.observe(VisibilityState::Hidden);
        assert!(monitor.observe(VisibilityState::Visible).is_none());
    }

    #[test]
    fn each_hide_edge_fires_once() {
        let mut monitor = VisibilityMonitor::new();
        assert!(monitor.observe(VisibilityState::Hidden).is_some());
        assert!(monitor.observe(VisibilityState::Visible).is_none());
        assert!(monitor.observe(VisibilityState::Hidden).is_some());
    }
}
