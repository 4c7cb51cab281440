// SPDX-License-Identifier: MPL-2.0
//! Per-call toast options.

use super::notification::{AriaLive, AutoDismiss};
use super::position::Position;
use crate::config::Overrides;
use std::fmt;

/// Callback invoked at most once by the toast manager.
pub type Callback = Box<dyn FnOnce() + 'static>;

/// A caller-supplied button on a non-confirm toast.
#[derive(Default)]
pub struct Action {
    pub(crate) label: Option<String>,
    pub(crate) class: Option<String>,
    pub(crate) on_click: Option<Callback>,
}

impl Action {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// An action whose label falls back to `Action N`.
    #[must_use]
    pub fn unlabeled() -> Self {
        Self::default()
    }

    /// Sets the style class (defaults to `secondary`).
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    #[must_use]
    pub fn on_click(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("label", &self.label)
            .field("class", &self.class)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

/// Options for a single toast. Unset values come from the manager defaults.
#[derive(Default)]
pub struct Options {
    pub(crate) overrides: Overrides,
    pub(crate) title: Option<String>,
    pub(crate) focus: bool,
    pub(crate) ok_text: Option<String>,
    pub(crate) cancel_text: Option<String>,
    pub(crate) actions: Vec<Action>,
    pub(crate) on_confirm: Option<Callback>,
    pub(crate) on_cancel: Option<Callback>,
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("overrides", &self.overrides)
            .field("title", &self.title)
            .field("focus", &self.focus)
            .field("ok_text", &self.ok_text)
            .field("cancel_text", &self.cancel_text)
            .field("actions", &self.actions)
            .field("on_confirm", &self.on_confirm.is_some())
            .field("on_cancel", &self.on_cancel.is_some())
            .finish()
    }
}

impl Options {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.overrides.position = Some(position);
        self
    }

    /// Sets the position by name; unknown names mean the default anchor.
    #[must_use]
    pub fn position_named(self, name: &str) -> Self {
        self.position(Position::resolve(name))
    }

    #[must_use]
    pub fn duration(mut self, duration: AutoDismiss) -> Self {
        self.overrides.duration = Some(duration);
        self
    }

    /// Shorthand for `duration(AutoDismiss::from_millis(ms))`.
    #[must_use]
    pub fn duration_ms(self, ms: u64) -> Self {
        self.duration(AutoDismiss::from_millis(ms))
    }

    /// Never auto-dismiss.
    #[must_use]
    pub fn sticky(self) -> Self {
        self.duration(AutoDismiss::Never)
    }

    #[must_use]
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.overrides.dismissible = Some(dismissible);
        self
    }

    #[must_use]
    pub fn max_visible(mut self, max_visible: usize) -> Self {
        self.overrides.max_visible = Some(max_visible);
        self
    }

    #[must_use]
    pub fn aria_live(mut self, aria_live: AriaLive) -> Self {
        self.overrides.aria_live = Some(aria_live);
        self
    }

    /// Replaces the kind's default title. An empty title leaves only the
    /// placeholder region.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Requests keyboard focus once the toast is inserted.
    #[must_use]
    pub fn focus(mut self, focus: bool) -> Self {
        self.focus = focus;
        self
    }

    #[must_use]
    pub fn ok_text(mut self, text: impl Into<String>) -> Self {
        self.ok_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = Some(text.into());
        self
    }

    /// Adds an action button. Only the first three are rendered.
    #[must_use]
    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Called when a confirm toast is accepted.
    #[must_use]
    pub fn on_confirm(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_confirm = Some(Box::new(callback));
        self
    }

    /// Called when a confirm toast is cancelled, by the user or by its timer.
    #[must_use]
    pub fn on_cancel(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_cancel = Some(Box::new(callback));
        self
    }
}
