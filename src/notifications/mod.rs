// SPDX-License-Identifier: MPL-2.0
//! Toast notifications rendered into a retained node tree.
//!
//! A [`NotificationCenter`] hosts the notifications and creates them from
//! [`NotificationOptions`], filling anything left empty from its [`Defaults`].
//! Each notification is a [`NotificationView`]: a fixed subtree whose icon,
//! body and action regions are re-rendered as soon as a property changes.
//!
//! # Components
//!
//! - [`center`] - host, factory, click routing and the dismiss sequence
//! - [`view`] - one notification and its property-to-tree synchronisation
//! - [`action`] - button and click actions, and the three-way callback result
//! - [`transition`] - how the hide transition runs and when it is over
//! - [`attributes`] - declarative `n-*` attributes
//! - [`selection`] - reading and writing several notifications at once
//!
//! # Usage
//!
//! ```
//! use notification_center::notifications::{
//!     Action, ClickEvent, DispatchOutcome, NotificationCenter, NotificationOptions,
//! };
//!
//! let mut center = NotificationCenter::new();
//! let id = center
//!     .add_notification(
//!         NotificationOptions::new()
//!             .title("Upload finished")
//!             .action("Open", Action::Fixed(false))
//!             .action("Close", Action::Unset),
//!     )
//!     .id();
//!
//! let close = center
//!     .notification(id)
//!     .and_then(|view| view.action_nodes().find(|(_, label)| *label == "Close"))
//!     .map(|(node, _)| node)
//!     .unwrap();
//! assert_eq!(center.click(ClickEvent::on(close)), DispatchOutcome::Detached);
//! assert!(center.is_empty());
//! ```

pub mod action;
pub mod attributes;
pub mod center;
pub mod options;
pub mod selection;
pub mod template;
pub mod transition;
pub mod view;

pub use action::{Action, ActionCallback, ActionMap, ClickEvent, Dismissal};
pub use center::{Defaults, DispatchOutcome, NotificationCenter, NotificationMut};
pub use options::NotificationOptions;
pub use selection::{PropertyValue, Selection};
pub use template::{ClassNames, HOST_TAG, ROOT_TAG};
pub use transition::{Animated, Closing, HostSignalled, Immediate, Transition, TransitionState};
pub use view::{NotificationId, NotificationView, Property, ViewNodes};
