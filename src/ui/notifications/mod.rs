// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! Three kinds of transient messages (info, alert, confirm) are stacked in
//! containers pinned to one of six screen anchors. The [`Toaster`] owns
//! every toast and drives its lifecycle from host input; [`Toast`] renders
//! the current state with iced.
//!
//! # Components
//!
//! - [`notification`] - `Notification` read model, kinds and lifecycle
//! - [`position`] - Screen anchors and name resolution
//! - [`registry`] - One lazily created container per anchor
//! - [`options`] - Per-call overrides and action buttons
//! - [`manager`] - `Toaster` creation, timers, hover, keys and removal
//! - [`clock`] - Time source, with a manual clock for tests
//! - [`toast`] - iced widget for rendering toasts
//!
//! # Usage
//!
//! ```ignore
//! use iced_toast::ui::notifications::{Options, Toaster, Toast};
//!
//! let mut toaster = Toaster::new();
//! toaster.info("Saved", Options::new());
//!
//! // In `update`, forward toast messages and fire due timers
//! toaster.handle_message(&message);
//!
//! // In `view`, layer the overlay over your content
//! let overlay = Toast::view_overlay(&toaster);
//! ```

pub mod clock;
pub mod manager;
pub mod notification;
pub mod options;
pub mod position;
pub mod registry;
mod timer;
pub mod toast;

pub use clock::{Clock, ManualClock, SystemClock};
pub use manager::{Effect, Handle, Key, Message, Propagation, Toaster};
pub use notification::{
    AriaLive, AutoDismiss, Body, Button, ButtonRole, Control, Fragment, Kind, Lifecycle,
    Notification, NotificationId, Outcome,
};
pub use options::{Action, Callback, Options};
pub use position::{Position, UnknownPosition};
pub use registry::{Container, Registry};
pub use toast::Toast;
