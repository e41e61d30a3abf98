// SPDX-License-Identifier: MPL-2.0
//! Hide transitions played before a notification is detached.
//!
//! The center asks a [`Transition`] to start hiding a notification. The
//! transition either finishes on the spot or keeps running; a running one ends
//! when the host reports completion or, at the latest, when the dismiss
//! timeout elapses. That bound keeps a transition that never reports back
//! from leaving a hidden notification in the host forever.

use crate::config::MAX_DISMISS_TIMEOUT_MS;
use crate::dom::NodeId;
use std::time::{Duration, Instant};

/// Outcome of starting a hide transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionState {
    /// Nothing to wait for; detach now.
    Finished,
    /// Detach once the transition ends. `expected` is its length when known.
    Running { expected: Option<Duration> },
}

/// Starts the visual hide transition of a notification root.
pub trait Transition {
    fn start_hide(&mut self, root: NodeId) -> TransitionState;
}

/// No animation: notifications are detached as soon as they are dismissed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

impl Transition for Immediate {
    fn start_hide(&mut self, _root: NodeId) -> TransitionState {
        TransitionState::Finished
    }
}

/// Fixed-length animation driven by the center's clock.
#[derive(Debug, Clone, Copy)]
pub struct Animated {
    duration: Duration,
}

impl Animated {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

impl Transition for Animated {
    fn start_hide(&mut self, _root: NodeId) -> TransitionState {
        if self.duration.is_zero() {
            TransitionState::Finished
        } else {
            TransitionState::Running {
                expected: Some(self.duration),
            }
        }
    }
}

/// Animation played by the host (for example a CSS animation); its end is
/// reported through `NotificationCenter::transition_finished`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostSignalled;

impl Transition for HostSignalled {
    fn start_hide(&mut self, _root: NodeId) -> TransitionState {
        TransitionState::Running { expected: None }
    }
}

/// Timing of a notification that is being dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Closing {
    started: Instant,
    finishes_at: Option<Instant>,
    deadline: Instant,
}

impl Closing {
    /// An expected end or a deadline past what `Instant` can represent
    /// falls back to the next bound: the deadline, then the longest
    /// supported timeout.
    pub(crate) fn new(started: Instant, expected: Option<Duration>, timeout: Duration) -> Self {
        let deadline = started
            .checked_add(timeout)
            .or_else(|| started.checked_add(Duration::from_millis(MAX_DISMISS_TIMEOUT_MS)))
            .unwrap_or(started);
        Self {
            started,
            finishes_at: expected.and_then(|d| started.checked_add(d)),
            deadline,
        }
    }

    #[must_use]
    pub fn started(&self) -> Instant {
        self.started
    }

    /// The instant the notification will be detached at the latest.
    #[must_use]
    pub fn detach_at(&self) -> Instant {
        match self.finishes_at {
            Some(finish) => finish.min(self.deadline),
            None => self.deadline,
        }
    }

    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.detach_at()
    }

    /// Fraction of the hide transition elapsed at `now`, in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let total = self.detach_at().saturating_duration_since(self.started);
        if total.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[test]
    fn immediate_finishes_at_once() {
        assert_eq!(
            Immediate.start_hide(NodeId::from_raw(0)),
            TransitionState::Finished
        );
    }

    #[test]
    fn zero_length_animation_finishes_at_once() {
        let mut transition = Animated::new(Duration::ZERO);
        assert_eq!(
            transition.start_hide(NodeId::from_raw(0)),
            TransitionState::Finished
        );
    }

    #[test]
    fn expected_end_before_timeout_wins() {
        let now = Instant::now();
        let closing = Closing::new(now, Some(Duration::from_millis(300)), TIMEOUT);

        assert!(!closing.is_due(now + Duration::from_millis(299)));
        assert!(closing.is_due(now + Duration::from_millis(300)));
    }

    #[test]
    fn timeout_caps_long_transitions() {
        let now = Instant::now();
        let closing = Closing::new(now, Some(Duration::from_secs(60)), TIMEOUT);
        assert_eq!(closing.detach_at(), now + TIMEOUT);
    }

    #[test]
    fn unrepresentable_instants_fall_back_to_bounds() {
        let now = Instant::now();

        let closing = Closing::new(now, Some(Duration::MAX), TIMEOUT);
        assert_eq!(closing.detach_at(), now + TIMEOUT);

        let closing = Closing::new(now, None, Duration::MAX);
        assert_eq!(
            closing.detach_at(),
            now + Duration::from_millis(MAX_DISMISS_TIMEOUT_MS)
        );
    }

    #[test]
    fn unknown_length_waits_for_timeout() {
        let now = Instant::now();
        let closing = Closing::new(now, None, TIMEOUT);

        assert!(!closing.is_due(now + Duration::from_secs(4)));
        assert!(closing.is_due(now + TIMEOUT));
    }

    #[test]
    fn progress_is_clamped() {
        let now = Instant::now();
        let closing = Closing::new(now, Some(Duration::from_secs(1)), TIMEOUT);

        assert_eq!(closing.progress(now), 0.0);
        assert!((closing.progress(now + Duration::from_millis(500)) - 0.5).abs() < 1e-3);
        assert_eq!(closing.progress(now + Duration::from_secs(3)), 1.0);
    }
}
