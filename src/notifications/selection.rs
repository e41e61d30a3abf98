// SPDX-License-Identifier: MPL-2.0
//! Batch access to several notifications at once.
//!
//! A [`Selection`] is a set of notification ids borrowed from a center. It
//! offers the combined getter/setter style some front ends prefer:
//! `n(name)` reads a property of the first selected notification, `set` and
//! `set_many` write to all of them. Everything goes through the regular
//! property setters; ids that are no longer live are skipped.

use super::action::ActionMap;
use super::center::NotificationCenter;
use super::options::NotificationOptions;
use super::view::{NotificationId, NotificationView, Property};
use crate::dom::Substrate;

/// A property value read or written through a [`Selection`].
#[derive(Debug, Clone)]
pub enum PropertyValue {
    Text(String),
    Flag(bool),
    Actions(ActionMap),
}

impl From<&str> for PropertyValue {
    fn from(text: &str) -> Self {
        PropertyValue::Text(text.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(text: String) -> Self {
        PropertyValue::Text(text)
    }
}

impl From<bool> for PropertyValue {
    fn from(flag: bool) -> Self {
        PropertyValue::Flag(flag)
    }
}

impl From<ActionMap> for PropertyValue {
    fn from(actions: ActionMap) -> Self {
        PropertyValue::Actions(actions)
    }
}

impl PropertyValue {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            PropertyValue::Flag(flag) => Some(*flag),
            _ => None,
        }
    }

    fn read(view: &NotificationView, property: Property) -> Self {
        match property {
            Property::Icon => view.icon().into(),
            Property::Title => view.title().into(),
            Property::Subtitle => view.subtitle().into(),
            Property::Text => view.text().into(),
            Property::Minimal => view.minimal().into(),
            Property::Actions => view.actions().clone().into(),
        }
    }
}

pub struct Selection<'a, D: Substrate> {
    center: &'a mut NotificationCenter<D>,
    ids: Vec<NotificationId>,
}

impl<D: Substrate> NotificationCenter<D> {
    /// Selects the given notifications.
    pub fn select(&mut self, ids: impl IntoIterator<Item = NotificationId>) -> Selection<'_, D> {
        Selection {
            ids: ids.into_iter().collect(),
            center: self,
        }
    }

    /// Selects every live notification, newest first.
    pub fn select_all(&mut self) -> Selection<'_, D> {
        let ids = self.ids();
        self.select(ids)
    }
}

impl<D: Substrate> Selection<'_, D> {
    /// Selected ids that are still live.
    #[must_use]
    pub fn ids(&self) -> Vec<NotificationId> {
        self.ids
            .iter()
            .copied()
            .filter(|&id| self.center.contains(id))
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids().is_empty()
    }

    /// Creates a notification in the underlying center and adds it to the
    /// selection.
    pub fn add_notification(&mut self, opts: NotificationOptions) -> NotificationId {
        let id = self.center.add_notification(opts).id();
        self.ids.push(id);
        id
    }

    /// Reads `name` from the first live selected notification.
    #[must_use]
    pub fn n(&self, name: &str) -> Option<PropertyValue> {
        let property = Property::from_name(name)?;
        self.ids
            .iter()
            .find_map(|&id| self.center.notification(id))
            .map(|view| PropertyValue::read(view, property))
    }

    /// Writes `name` on every live selected notification.
    pub fn set(&mut self, name: &str, value: impl Into<PropertyValue>) -> &mut Self {
        let Some(property) = Property::from_name(name) else {
            log::warn!("ignoring unknown notification property {name}");
            return self;
        };
        let value = value.into();
        for &id in &self.ids {
            let Some(mut notification) = self.center.notification_mut(id) else {
                continue;
            };
            match (property, &value) {
                (_, PropertyValue::Text(text)) => notification.apply_attribute(property, text),
                (Property::Minimal, PropertyValue::Flag(flag)) => {
                    notification.set_minimal(*flag);
                }
                (Property::Actions, PropertyValue::Actions(actions)) => {
                    notification.set_actions(actions.clone());
                }
                _ => log::warn!("value {value:?} does not fit property {name}"),
            }
        }
        self
    }

    /// Writes several properties on every live selected notification.
    pub fn set_many<K, V>(&mut self, values: impl IntoIterator<Item = (K, V)>) -> &mut Self
    where
        K: AsRef<str>,
        V: Into<PropertyValue>,
    {
        for (name, value) in values {
            self.set(name.as_ref(), value);
        }
        self
    }
}
