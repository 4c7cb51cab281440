// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.
//!
//! Toast timers are driven by a fixed-rate tick; keyboard presses that no
//! widget captured are routed to the focused toast.

use super::Message;
use crate::config::TICK_INTERVAL_MS;
use crate::ui::notifications::{self, Toast};
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Creates the tick and keyboard subscriptions.
///
/// The tick only runs while toasts are on screen.
pub fn create(has_toasts: bool) -> Subscription<Message> {
    let keys = event::listen_with(|event, status, _window_id| {
        if matches!(status, event::Status::Captured) {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => Some(
                Message::Toast(notifications::Message::KeyPressed(Toast::key(&key))),
            ),
            _ => None,
        }
    });

    if has_toasts {
        let tick = time::every(Duration::from_millis(TICK_INTERVAL_MS))
            .map(|_| Message::Toast(notifications::Message::Tick));
        Subscription::batch([keys, tick])
    } else {
        keys
    }
}
