// SPDX-License-Identifier: MPL-2.0
//! Click actions and the dismiss decision.
//!
//! An [`Action`] is bound to the notification body or to one of its buttons.
//! Clicking runs the action and yields a yes/no dismiss decision:
//!
//! | Action                | Decision                                   |
//! |-----------------------|--------------------------------------------|
//! | `Unset`               | dismiss                                    |
//! | `Fixed(b)`            | `b`                                        |
//! | `Callback(f)`         | `f(event)` as a [`Dismissal`]              |
//!
//! Callbacks answer with a three-way [`Dismissal`] so that "I have no
//! opinion" (`Default`, which dismisses) is distinct from an explicit `Keep`.

use crate::dom::NodeId;
use indexmap::IndexMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

/// Button label to action, in display order.
pub type ActionMap = IndexMap<String, Action>;

/// What a callback wants to happen to its notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dismissal {
    Dismiss,
    Keep,
    /// Defer to the default behaviour, which is to dismiss.
    #[default]
    Default,
}

impl Dismissal {
    #[must_use]
    pub fn should_dismiss(self) -> bool {
        match self {
            Dismissal::Dismiss | Dismissal::Default => true,
            Dismissal::Keep => false,
        }
    }
}

impl From<bool> for Dismissal {
    fn from(dismiss: bool) -> Self {
        if dismiss {
            Dismissal::Dismiss
        } else {
            Dismissal::Keep
        }
    }
}

impl From<()> for Dismissal {
    fn from((): ()) -> Self {
        Dismissal::Default
    }
}

/// A click delivered to a notification.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickEvent {
    /// The node that was clicked.
    pub target: NodeId,
    /// Pointer position relative to the host, when the front end knows it.
    pub position: Option<(f32, f32)>,
    /// 1 for a single click, 2 for a double click, and so on.
    pub click_count: u32,
}

impl ClickEvent {
    /// A single click on `target` with no position information.
    #[must_use]
    pub fn on(target: NodeId) -> Self {
        Self {
            target,
            position: None,
            click_count: 1,
        }
    }

    #[must_use]
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = Some((x, y));
        self
    }
}

pub type ActionCallback = Rc<dyn Fn(&ClickEvent) -> Dismissal>;

/// Behaviour bound to a click on a notification or one of its buttons.
#[derive(Clone, Default)]
pub enum Action {
    /// No behaviour configured; clicking dismisses.
    #[default]
    Unset,
    /// Always dismiss (`true`) or never dismiss (`false`).
    Fixed(bool),
    /// Run a callback and let it decide.
    Callback(ActionCallback),
}

impl Action {
    /// Wraps a closure returning anything convertible to [`Dismissal`]
    /// (`bool`, `()` or `Dismissal` itself).
    pub fn callback<F, R>(f: F) -> Self
    where
        F: Fn(&ClickEvent) -> R + 'static,
        R: Into<Dismissal>,
    {
        Action::Callback(Rc::new(move |event: &ClickEvent| f(event).into()))
    }

    /// Whether this value counts as "not provided" when merging options
    /// with defaults.
    #[must_use]
    pub(crate) fn is_falsy(&self) -> bool {
        matches!(self, Action::Unset | Action::Fixed(false))
    }

    /// Runs the action for `event` and returns whether the notification
    /// should be dismissed.
    ///
    /// A panicking callback is contained here and counts as [`Dismissal::Keep`].
    pub fn resolve(&self, event: &ClickEvent) -> bool {
        match self {
            Action::Unset => true,
            Action::Fixed(dismiss) => *dismiss,
            Action::Callback(callback) => {
                match panic::catch_unwind(AssertUnwindSafe(|| callback(event))) {
                    Ok(dismissal) => dismissal.should_dismiss(),
                    Err(_) => {
                        log::error!(
                            "action callback for node {:?} panicked; keeping notification",
                            event.target
                        );
                        false
                    }
                }
            }
        }
    }
}

impl From<bool> for Action {
    fn from(dismiss: bool) -> Self {
        Action::Fixed(dismiss)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Unset => write!(f, "Unset"),
            Action::Fixed(dismiss) => f.debug_tuple("Fixed").field(dismiss).finish(),
            Action::Callback(_) => write!(f, "Callback(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn click() -> ClickEvent {
        ClickEvent::on(NodeId::from_raw(3))
    }

    #[test]
    fn unset_dismisses() {
        assert!(Action::Unset.resolve(&click()));
    }

    #[test]
    fn fixed_values_are_used_as_is() {
        assert!(Action::Fixed(true).resolve(&click()));
        assert!(!Action::Fixed(false).resolve(&click()));
    }

    #[test]
    fn callback_without_opinion_dismisses() {
        assert!(Action::callback(|_| ()).resolve(&click()));
        assert!(Action::callback(|_| Dismissal::Default).resolve(&click()));
    }

    #[test]
    fn callback_keep_is_respected() {
        assert!(!Action::callback(|_| false).resolve(&click()));
        assert!(!Action::callback(|_| Dismissal::Keep).resolve(&click()));
        assert!(Action::callback(|_| true).resolve(&click()));
    }

    #[test]
    fn callback_receives_the_click_event() {
        let seen = Rc::new(Cell::new(None));
        let sink = Rc::clone(&seen);
        let action = Action::callback(move |event: &ClickEvent| {
            sink.set(Some((event.target, event.position)));
        });

        action.resolve(&click().at(4.0, 2.0));

        assert_eq!(seen.get(), Some((NodeId::from_raw(3), Some((4.0, 2.0)))));
    }

    #[test]
    fn panicking_callback_keeps_notification() {
        let action = Action::callback(|_| -> bool { panic!("callback failure") });
        assert!(!action.resolve(&click()));
    }

    #[test]
    fn falsy_actions() {
        assert!(Action::Unset.is_falsy());
        assert!(Action::Fixed(false).is_falsy());
        assert!(!Action::Fixed(true).is_falsy());
        assert!(!Action::callback(|_| false).is_falsy());
    }

    #[test]
    fn debug_hides_callback_body() {
        assert_eq!(format!("{:?}", Action::callback(|_| true)), "Callback(..)");
        assert_eq!(format!("{:?}", Action::Fixed(true)), "Fixed(true)");
    }
}
