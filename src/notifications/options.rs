// SPDX-License-Identifier: MPL-2.0
//! Creation options for a notification.

use super::action::{Action, ActionMap};

/// Options passed to `NotificationCenter::add_notification`.
///
/// Every field is optional. A field left as `None`, or set to a falsy value
/// (an empty string, `false`, `Action::Unset` or `Action::Fixed(false)`),
/// is replaced by the center's default. An empty action map is a real value:
/// it produces a notification without buttons.
#[derive(Debug, Clone, Default)]
pub struct NotificationOptions {
    pub icon: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub text: Option<String>,
    pub actions: Option<ActionMap>,
    pub minimal: Option<bool>,
    pub click: Option<Action>,
}

impl NotificationOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn actions(mut self, actions: ActionMap) -> Self {
        self.actions = Some(actions);
        self
    }

    /// Appends one button, keeping any already added.
    #[must_use]
    pub fn action(mut self, label: impl Into<String>, action: impl Into<Action>) -> Self {
        self.actions
            .get_or_insert_with(ActionMap::new)
            .insert(label.into(), action.into());
        self
    }

    #[must_use]
    pub fn minimal(mut self, minimal: bool) -> Self {
        self.minimal = Some(minimal);
        self
    }

    #[must_use]
    pub fn on_click(mut self, action: impl Into<Action>) -> Self {
        self.click = Some(action.into());
        self
    }
}
