// SPDX-License-Identifier: MPL-2.0
//! Time subscription driving pending dismissals.

use super::Message;
use crate::config::TICK_INTERVAL_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Ticks only while a notification is closing, so an idle window stays idle.
pub fn create_tick_subscription(has_pending_dismissals: bool) -> Subscription<Message> {
    if has_pending_dismissals {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
