// SPDX-License-Identifier: MPL-2.0
//! iced front end for a [`NotificationCenter`](crate::notifications::NotificationCenter)
//! rendering into a [`MemoryDom`](crate::dom::MemoryDom).
//!
//! - [`toast`] - turns the rendered notification subtrees into widgets
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod toast;
