// SPDX-License-Identifier: MPL-2.0
//! Class names of the notification subtree.
//!
//! Stylesheets (or the iced front end) key off these names, so they can be
//! changed from the settings file when a host uses its own CSS.

use serde::{Deserialize, Serialize};

/// Tag of the notification root node.
pub const ROOT_TAG: &str = "notification-box";

/// Tag of the host container node.
pub const HOST_TAG: &str = "notification-center";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    pub height_container: String,
    pub main: String,
    pub icon: String,
    pub msg: String,
    pub title: String,
    pub subtitle: String,
    pub text: String,
    pub actions: String,
    pub action: String,
    /// Added to the actions container in minimal mode.
    pub minimal: String,
    /// Added to the height container while the notification closes.
    pub hide: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            height_container: "height-container".into(),
            main: "main".into(),
            icon: "icon".into(),
            msg: "msg".into(),
            title: "title".into(),
            subtitle: "subtitle".into(),
            text: "text".into(),
            actions: "actions".into(),
            action: "action".into(),
            minimal: "minimal".into(),
            hide: "hide".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_table_keeps_other_defaults() {
        let classes: ClassNames = toml::from_str("hide = \"fade-out\"").unwrap();
        assert_eq!(classes.hide, "fade-out");
        assert_eq!(classes.actions, "actions");
    }
}
