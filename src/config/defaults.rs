// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Content**: Placeholder title, text and the default button
//! - **Dismiss**: Hide animation length and the removal timeout
//! - **Front end**: Tick cadence of the iced shell

// ==========================================================================
// Content Defaults
// ==========================================================================

/// Title used when neither the options nor the center provide one.
pub const DEFAULT_TITLE: &str = "Notification";

/// Label of the single button a notification gets by default.
pub const DEFAULT_ACTION_LABEL: &str = "Close";

/// Stand-in for empty text so the body region keeps its height.
pub const PLACEHOLDER_TEXT: &str = "\u{a0}";

// ==========================================================================
// Dismiss Defaults
// ==========================================================================

/// Upper bound between a dismiss click and detaching the notification (in ms).
pub const DEFAULT_DISMISS_TIMEOUT_MS: u64 = 5_000;

/// Minimum dismiss timeout (in ms).
pub const MIN_DISMISS_TIMEOUT_MS: u64 = 100;

/// Maximum dismiss timeout (in ms).
pub const MAX_DISMISS_TIMEOUT_MS: u64 = 60_000;

/// Default hide animation length (in ms). Zero disables the animation.
pub const DEFAULT_ANIMATION_MS: u64 = 300;

// ==========================================================================
// Front-end Defaults
// ==========================================================================

/// Interval of the tick driving pending dismissals (in ms).
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_DISMISS_TIMEOUT_MS > 0);
    assert!(MAX_DISMISS_TIMEOUT_MS >= MIN_DISMISS_TIMEOUT_MS);
    assert!(DEFAULT_DISMISS_TIMEOUT_MS >= MIN_DISMISS_TIMEOUT_MS);
    assert!(DEFAULT_DISMISS_TIMEOUT_MS <= MAX_DISMISS_TIMEOUT_MS);
    assert!(DEFAULT_ANIMATION_MS < DEFAULT_DISMISS_TIMEOUT_MS);
    assert!(TICK_INTERVAL_MS < DEFAULT_ANIMATION_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_defaults_are_valid() {
        assert_eq!(DEFAULT_DISMISS_TIMEOUT_MS, 5_000);
        assert!(DEFAULT_DISMISS_TIMEOUT_MS >= MIN_DISMISS_TIMEOUT_MS);
        assert!(DEFAULT_DISMISS_TIMEOUT_MS <= MAX_DISMISS_TIMEOUT_MS);
    }

    #[test]
    fn placeholder_is_a_single_non_breaking_space() {
        assert_eq!(PLACEHOLDER_TEXT.chars().collect::<Vec<_>>(), vec!['\u{a0}']);
    }
}
