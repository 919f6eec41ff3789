use std::time::Duration;

use ratatui::layout::Rect;
use tokio::time::Instant;

use crate::ui::components::common::ScrollState;

/// How long "Copied!" stays visible after the latest successful copy.
pub const COPY_CONFIRMATION_WINDOW: Duration = Duration::from_millis(2000);

/// The copy-confirmation pulse: idle, or confirmed until a deadline.
///
/// There is at most one pending deadline. Confirming again replaces it, so
/// the flag drops back to idle exactly one window after the most recent
/// copy and never earlier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyConfirmation {
    confirmed_until: Option<Instant>,
}

impl CopyConfirmation {
    /// Whether the "Copied!" confirmation is showing.
    pub fn is_copied(&self) -> bool {
        self.confirmed_until.is_some()
    }

    /// The pending reset deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.confirmed_until
    }

    /// Enters the confirmed state and re-arms the deadline from `now`.
    pub fn confirm(&mut self, now: Instant) {
        self.confirmed_until = Some(now + COPY_CONFIRMATION_WINDOW);
    }

    /// Returns to idle if the deadline has passed. Returns `true` only on the
    /// transition, so a stale wake-up is a no-op.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.confirmed_until {
            Some(deadline) if deadline <= now => {
                self.confirmed_until = None;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.confirmed_until = None;
    }
}

/// State owned by the workflow tab.
#[derive(Debug, Default)]
pub struct WorkflowViewState {
    pub copy: CopyConfirmation,
    /// Reason for the last failed copy; cleared by the next attempt that succeeds.
    pub copy_error: Option<String>,
    pub json_scroll: ScrollState,
    /// Clickable region of the copy button from the last render.
    pub copy_button_area: Rect,
    /// JSON viewer region from the last render, used to route wheel events.
    pub json_area: Rect,
}

impl WorkflowViewState {
    pub fn record_copy_success(&mut self, now: Instant) {
        self.copy_error = None;
        self.copy.confirm(now);
    }

    /// A failed copy never shows the confirmation, even if an earlier pulse is still running.
    pub fn record_copy_failure(&mut self, reason: String) {
        self.copy.clear();
        self.copy_error = Some(reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_without_deadline() {
        let confirmation = CopyConfirmation::default();
        assert!(!confirmation.is_copied());
        assert_eq!(confirmation.deadline(), None);
    }

    #[test]
    fn confirmation_expires_after_the_window() {
        let start = Instant::now();
        let mut confirmation = CopyConfirmation::default();
        confirmation.confirm(start);
        assert!(confirmation.is_copied());

        assert!(!confirmation.expire(start + Duration::from_millis(1999)));
        assert!(confirmation.is_copied());

        assert!(confirmation.expire(start + COPY_CONFIRMATION_WINDOW));
        assert!(!confirmation.is_copied());
    }

    #[test]
    fn second_copy_supersedes_the_first_deadline() {
        let start = Instant::now();
        let mut confirmation = CopyConfirmation::default();
        let mut resets = Vec::new();

        confirmation.confirm(start);
        let second = start + Duration::from_millis(1500);
        confirmation.confirm(second);

        for elapsed_ms in (0..=4000).step_by(100) {
            let now = start + Duration::from_millis(elapsed_ms);
            if confirmation.expire(now) {
                resets.push(now);
            }
        }

        assert_eq!(resets, vec![second + COPY_CONFIRMATION_WINDOW]);
    }

    #[test]
    fn expire_without_pending_deadline_is_a_no_op() {
        let mut confirmation = CopyConfirmation::default();
        assert!(!confirmation.expire(Instant::now()));
    }

    #[test]
    fn failure_clears_a_running_pulse_and_success_clears_the_error() {
        let now = Instant::now();
        let mut state = WorkflowViewState::default();
        state.record_copy_success(now);
        state.record_copy_failure("clipboard unavailable".into());
        assert!(!state.copy.is_copied());
        assert_eq!(state.copy_error.as_deref(), Some("clipboard unavailable"));

        state.record_copy_success(now);
        assert!(state.copy.is_copied());
        assert!(state.copy_error.is_none());
    }
}
