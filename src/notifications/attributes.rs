// SPDX-License-Identifier: MPL-2.0
//! `n-*` attributes.
//!
//! Hosts that configure notifications declaratively set attributes such as
//! `n-title="Saved"` on the root node. Each one is applied exactly like the
//! matching property setter. `n-actions` carries a JSON object mapping labels
//! to `true`, `false` or `null`.

use super::action::{Action, ActionMap};
use super::center::NotificationMut;
use super::view::Property;
use crate::dom::Substrate;
use serde_json::Value;

const PREFIX: &str = "n-";

impl<D: Substrate> NotificationMut<'_, D> {
    /// Sets an attribute on the notification root. `n-*` attributes are
    /// additionally applied to the matching property.
    ///
    /// Never fails: unknown names and unparsable values are logged and
    /// leave the notification as it was.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> &mut Self {
        let root = self.view.nodes().root;
        if let Err(err) = self.dom.set_attribute(root, name, Some(value)) {
            log::warn!("attribute {name} not set on {root:?}: {err}");
        }

        let lowered = name.to_ascii_lowercase();
        let Some(key) = lowered.strip_prefix(PREFIX) else {
            return self;
        };
        match Property::from_name(key) {
            Some(property) => self.apply_attribute(property, value),
            None => log::warn!("ignoring unknown notification attribute {name}"),
        }
        self
    }

    pub(super) fn apply_attribute(&mut self, property: Property, value: &str) {
        match property {
            Property::Icon => {
                self.set_icon(value);
            }
            Property::Title => {
                self.set_title(value);
            }
            Property::Subtitle => {
                self.set_subtitle(value);
            }
            Property::Text => {
                self.set_text(value);
            }
            Property::Minimal => {
                self.set_minimal(parse_flag(value));
            }
            Property::Actions => match parse_actions(value) {
                Some(actions) => {
                    self.set_actions(actions);
                }
                None => log::warn!("ignoring n-actions: expected a JSON object, got {value:?}"),
            },
        }
    }
}

/// Boolean attribute semantics: present and not `"false"` means on.
fn parse_flag(value: &str) -> bool {
    !value.trim().eq_ignore_ascii_case("false")
}

/// Parses an `n-actions` value, keeping the object's key order.
pub(crate) fn parse_actions(value: &str) -> Option<ActionMap> {
    let Ok(Value::Object(entries)) = serde_json::from_str::<Value>(value) else {
        return None;
    };
    let actions = entries
        .into_iter()
        .map(|(label, value)| {
            let action = match value {
                Value::Null => Action::Unset,
                Value::Bool(dismiss) => Action::Fixed(dismiss),
                other => {
                    log::warn!("action {label:?} has malformed value {other}; it will not dismiss");
                    Action::Fixed(false)
                }
            };
            (label, action)
        })
        .collect();
    Some(actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::{NotificationCenter, NotificationOptions};

    #[test]
    fn parse_actions_keeps_order_and_maps_values() {
        let actions = parse_actions(r#"{"Zed": null, "Alpha": true, "Mid": false}"#).unwrap();
        let labels: Vec<_> = actions.keys().map(String::as_str).collect();
        assert_eq!(labels, vec!["Zed", "Alpha", "Mid"]);
        assert!(matches!(actions["Zed"], Action::Unset));
        assert!(matches!(actions["Alpha"], Action::Fixed(true)));
        assert!(matches!(actions["Mid"], Action::Fixed(false)));
    }

    #[test]
    fn malformed_action_values_never_dismiss() {
        let actions = parse_actions(r#"{"Odd": 42, "Text": "yes"}"#).unwrap();
        assert!(matches!(actions["Odd"], Action::Fixed(false)));
        assert!(matches!(actions["Text"], Action::Fixed(false)));
    }

    #[test]
    fn non_object_actions_are_rejected() {
        assert!(parse_actions("[\"Close\"]").is_none());
        assert!(parse_actions("{not json").is_none());
    }

    #[test]
    fn flags() {
        assert!(parse_flag(""));
        assert!(parse_flag("true"));
        assert!(parse_flag("minimal"));
        assert!(!parse_flag("FALSE"));
    }

    #[test]
    fn prefixed_attribute_goes_through_setter() {
        let mut center = NotificationCenter::new();
        let mut notification = center.add_notification(NotificationOptions::new());
        notification.set_attribute("N-Title", "From markup");
        let id = notification.id();

        let view = center.notification(id).unwrap();
        assert_eq!(view.title(), "From markup");
        assert_eq!(center.substrate().text(view.nodes().title), Some("From markup"));
        assert_eq!(
            center.substrate().attribute(view.nodes().root, "N-Title"),
            Some("From markup")
        );
    }

    #[test]
    fn invalid_actions_attribute_keeps_current_actions() {
        let mut center = NotificationCenter::new();
        let id = center
            .add_notification(NotificationOptions::new())
            .set_attribute("n-actions", "oops")
            .id();

        let labels: Vec<_> = center
            .notification(id)
            .unwrap()
            .actions()
            .keys()
            .cloned()
            .collect();
        assert_eq!(labels, vec!["Close"]);
    }

    #[test]
    fn plain_attributes_do_not_touch_properties() {
        let mut center = NotificationCenter::new();
        let id = center
            .add_notification(NotificationOptions::new().title("Kept"))
            .set_attribute("title", "tooltip")
            .id();

        assert_eq!(center.notification(id).unwrap().title(), "Kept");
    }
}
