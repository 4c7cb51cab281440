// SPDX-License-Identifier: MPL-2.0
//! Demo application showing the toast system in an iced window.
//!
//! The `App` owns a [`Toaster`] and a small log of what confirm and action
//! callbacks reported. Buttons spawn each kind of toast; toast input is
//! forwarded to the manager and its effects are logged.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Overrides};
use crate::i18n::{I18n, Labels};
use crate::ui::notifications::{
    Action, AutoDismiss, Effect, Options, Position, SystemClock, Toaster,
};
use iced::{window, Element, Subscription, Task};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

const WINDOW_DEFAULT_WIDTH: f32 = 900.0;
const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;

/// How long the demo confirm waits before cancelling itself.
const CONFIRM_TIMEOUT_MS: u64 = 10_000;

/// Root iced application state.
pub struct App {
    i18n: I18n,
    toaster: Toaster<SystemClock>,
    /// Lines written by toast callbacks, newest last.
    log: Rc<RefCell<Vec<String>>>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("i18n", &self.i18n)
            .field("toaster", &self.toaster)
            .finish_non_exhaustive()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced requires a `Fn` boot function; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "failed to read config, using defaults");
            config::Config::default()
        });
        let i18n = I18n::new(flags.lang, &config);

        let mut toaster = Toaster::from_config(&config).with_labels(Labels::from_i18n(&i18n));
        if let Some(name) = flags.position.as_deref() {
            toaster.set_defaults(&Overrides {
                position: Some(Position::resolve(name)),
                ..Overrides::default()
            });
        }

        tracing::info!(
            locale = %i18n.current_locale(),
            position = toaster.defaults().position.name(),
            "demo started"
        );

        let app = Self {
            i18n,
            toaster,
            log: Rc::new(RefCell::new(Vec::new())),
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("demo-window-title")
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Toast(toast_message) => {
                self.toaster.handle_message(&toast_message);
            }
            Message::ShowInfo => {
                self.toaster
                    .info(self.i18n.tr("demo-info-message"), Options::new());
            }
            Message::ShowAlert => {
                self.toaster
                    .alert(self.i18n.tr("demo-alert-message"), Options::new());
            }
            Message::ShowConfirm => {
                let confirmed = self.logger(self.i18n.tr("demo-log-confirmed"));
                let cancelled = self.logger(self.i18n.tr("demo-log-cancelled"));
                self.toaster.confirm(
                    self.i18n.tr("demo-confirm-message"),
                    confirmed,
                    cancelled,
                    Options::new().duration_ms(CONFIRM_TIMEOUT_MS),
                );
            }
            Message::ShowSticky => {
                self.toaster.info(
                    self.i18n.tr("demo-sticky-message"),
                    Options::new().duration(AutoDismiss::Never),
                );
            }
            Message::ShowWithActions => {
                let actions = ["demo-action-update", "demo-action-later"].map(|key| {
                    let label = self.i18n.tr(key);
                    let line = self
                        .i18n
                        .tr_with_args("demo-log-action", &[("label", label.as_str())]);
                    Action::new(label).on_click(self.logger(line))
                });
                let [update, later] = actions;
                self.toaster.info(
                    self.i18n.tr("demo-actions-message"),
                    Options::new()
                        .sticky()
                        .action(update.class("primary"))
                        .action(later),
                );
            }
            Message::ClearAll => {
                let cleared = self.toaster.clear(None);
                tracing::debug!(cleared, "cleared toasts");
            }
        }

        for effect in self.toaster.take_effects() {
            match effect {
                Effect::ContainerMounted(position) => {
                    tracing::debug!(position = position.name(), "container mounted");
                }
                // iced has no per-widget focus for containers; the manager
                // already routes keys to the focused toast
                Effect::Focus(id) => tracing::trace!(%id, "toast focused"),
                Effect::Removed(id) => tracing::trace!(%id, "toast removed"),
            }
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            toaster: &self.toaster,
            log: self.log.borrow().clone(),
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create(!self.toaster.is_empty())
    }

    /// Returns a callback that appends `line` to the log.
    fn logger(&self, line: String) -> impl FnOnce() + 'static {
        let log = Rc::clone(&self.log);
        move || log.borrow_mut().push(line)
    }
}
