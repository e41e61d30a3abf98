// SPDX-License-Identifier: MPL-2.0
//! This module handles the notification center's configuration, loading and
//! saving it to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use notification_center::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.defaults.title = "Heads up".to_string();
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **Environment variable** (`NOTIFICATION_CENTER_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::notifications::{Action, ActionMap, ClassNames};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "NotificationCenter";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "NOTIFICATION_CENTER_CONFIG_DIR";

/// One default button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionConfig {
    pub label: String,
    /// Omitted means "unset", which dismisses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dismiss: Option<bool>,
}

/// Factory defaults applied to options left empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub title: String,
    pub icon: String,
    pub to_minimal: bool,
    /// Whether clicking the body of a notification dismisses it.
    pub click_dismisses: bool,
    pub actions: Vec<ActionConfig>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            icon: String::new(),
            to_minimal: false,
            click_dismisses: false,
            actions: vec![ActionConfig {
                label: DEFAULT_ACTION_LABEL.to_string(),
                dismiss: None,
            }],
        }
    }
}

impl DefaultsConfig {
    /// The configured buttons as an action map, in file order.
    #[must_use]
    pub fn action_map(&self) -> ActionMap {
        self.actions
            .iter()
            .map(|action| {
                let value = action.dismiss.map_or(Action::Unset, Action::Fixed);
                (action.label.clone(), value)
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DismissConfig {
    pub timeout_ms: u64,
    pub animation_ms: u64,
}

impl Default for DismissConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_DISMISS_TIMEOUT_MS,
            animation_ms: DEFAULT_ANIMATION_MS,
        }
    }
}

impl DismissConfig {
    /// The dismiss timeout, clamped to the supported range.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(
            self.timeout_ms
                .clamp(MIN_DISMISS_TIMEOUT_MS, MAX_DISMISS_TIMEOUT_MS),
        )
    }

    #[must_use]
    pub fn animation(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub defaults: DefaultsConfig,
    pub dismiss: DismissConfig,
    pub classes: ClassNames,
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = base_dir {
        return Some(dir.join(CONFIG_FILE));
    }
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("ignoring {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some(format!("failed to load {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_defaults() {
        let mut config = Config::default();
        config.defaults.title = "Heads up".into();
        config.defaults.actions.push(ActionConfig {
            label: "Snooze".into(),
            dismiss: Some(false),
        });
        config.dismiss.timeout_ms = 2_000;
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_with_override_missing_file_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = valid = toml")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_some(), "should warn about parse error");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config: Config = toml::from_str("[dismiss]\ntimeout_ms = 1500\n").unwrap();
        assert_eq!(config.dismiss.timeout(), Duration::from_millis(1_500));
        assert_eq!(config.dismiss.animation_ms, DEFAULT_ANIMATION_MS);
        assert_eq!(config.defaults.title, DEFAULT_TITLE);
    }

    #[test]
    fn timeout_is_clamped() {
        let dismiss = DismissConfig {
            timeout_ms: 0,
            ..DismissConfig::default()
        };
        assert_eq!(dismiss.timeout(), Duration::from_millis(MIN_DISMISS_TIMEOUT_MS));

        let dismiss = DismissConfig {
            timeout_ms: u64::MAX,
            ..DismissConfig::default()
        };
        assert_eq!(dismiss.timeout(), Duration::from_millis(MAX_DISMISS_TIMEOUT_MS));
    }

    #[test]
    fn default_actions_map_to_unset_close() {
        let actions = DefaultsConfig::default().action_map();
        assert_eq!(actions.len(), 1);
        assert!(matches!(actions.get(DEFAULT_ACTION_LABEL), Some(Action::Unset)));
    }

    #[test]
    fn configured_dismiss_flags_become_fixed_actions() {
        let config: Config = toml::from_str(
            r#"
            [defaults]
            actions = [{ label = "Keep", dismiss = false }, { label = "Close" }]
            "#,
        )
        .unwrap();

        let actions = config.defaults.action_map();
        let labels: Vec<_> = actions.keys().map(String::as_str).collect();
        assert_eq!(labels, vec!["Keep", "Close"]);
        assert!(matches!(actions["Keep"], Action::Fixed(false)));
        assert!(matches!(actions["Close"], Action::Unset));
    }
}
