// SPDX-License-Identifier: MPL-2.0
//! `notification_center` renders toast notifications into a retained node
//! tree and runs their dismiss lifecycle.
//!
//! The core lives in [`notifications`] and is generic over the rendering
//! [`dom::Substrate`]; [`dom::MemoryDom`] is the bundled in-memory tree. The
//! [`ui`] and [`app`] modules put an iced window on top of it.

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod notifications;
pub mod ui;
