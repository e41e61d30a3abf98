// SPDX-License-Identifier: MPL-2.0
//! Messages and launch flags of the demo window.

use crate::ui::toast;
use std::time::Instant;

/// Demo notifications the window can post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// Title and text, default buttons.
    Plain,
    /// Subtitle and callback-driven buttons.
    Interactive,
    /// Minimal action bar.
    Minimal,
}

#[derive(Debug, Clone)]
pub enum Message {
    Post(Sample),
    /// Flips minimal mode for the defaults and every live notification.
    ToggleMinimal,
    DismissAll,
    Toast(toast::Message),
    Tick(Instant),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `NOTIFICATION_CENTER_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
