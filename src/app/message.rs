// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::notifications;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded toast input (clicks, hover, keys, ticks).
    Toast(notifications::Message),
    ShowInfo,
    ShowAlert,
    ShowConfirm,
    ShowSticky,
    ShowWithActions,
    ClearAll,
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override (`--lang`).
    pub lang: Option<String>,
    /// Optional default anchor name (`--position`).
    pub position: Option<String>,
}
