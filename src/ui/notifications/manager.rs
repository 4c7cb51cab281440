// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Toaster` builds toasts, inserts them into their container, enforces
//! the per-container visible cap and drives every timer. Hosts feed it user
//! input and clock ticks through [`Message`]s (or the matching methods) and
//! drain [`Effect`]s for the things only they can do, such as moving focus.

use super::clock::{Clock, SystemClock};
use super::notification::{
    AriaLive, AutoDismiss, Body, Button, ButtonRole, Control, Kind, Lifecycle, Outcome, Notification,
    NotificationId,
};
use super::options::{Callback, Options};
use super::position::Position;
use super::registry::{Container, Registry};
use super::timer::{Purpose, Timer};
use crate::config::{
    Config, Defaults, Overrides, DEFAULT_ACTION_CLASS, FOCUS_DELAY_MS, MAX_ACTIONS,
    REMOVAL_FALLBACK_MS,
};
use crate::i18n::{I18n, Labels};
use std::collections::BTreeMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::time::Duration;
use web_time::Instant;

/// Input the host forwards to the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A control inside a toast was pressed.
    Clicked(NotificationId, Control),
    PointerEntered(NotificationId),
    PointerLeft(NotificationId),
    /// The exit animation of a toast finished.
    AnimationEnded(NotificationId),
    /// A key was pressed while the focused toast had keyboard focus.
    KeyPressed(Key),
    /// Time passed; fire due timers.
    Tick,
}

/// Keys toasts react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Other,
}

/// Whether an input event should keep bubbling to the rest of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

/// Side effects the host carries out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// A container was created and should be placed on screen.
    ContainerMounted(Position),
    /// A toast asks for keyboard focus. Best-effort.
    Focus(NotificationId),
    /// A toast left its container.
    Removed(NotificationId),
}

/// Returned by every creation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handle {
    id: NotificationId,
}

impl Handle {
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Closes the toast. Returns `false` if it was already closing or gone.
    pub fn close<C: Clock>(&self, toaster: &mut Toaster<C>) -> bool {
        toaster.close(self.id)
    }
}

struct Entry {
    toast: Notification,
    auto_dismiss: AutoDismiss,
    timer: Option<Timer>,
    focus_due: Option<Instant>,
    on_confirm: Option<Callback>,
    on_cancel: Option<Callback>,
    actions: Vec<Option<Callback>>,
}

impl Entry {
    fn is_pending(&self) -> bool {
        self.toast.lifecycle == Lifecycle::Pending
    }

    /// Info and alert toasts auto-dismiss unless sticky; confirm toasts never do.
    fn dismiss_delay(&self) -> Option<Duration> {
        match self.toast.kind {
            Kind::Confirm => None,
            Kind::Info | Kind::Alert => self.auto_dismiss.duration(),
        }
    }
}

/// The notification lifecycle manager.
pub struct Toaster<C: Clock = SystemClock> {
    clock: C,
    defaults: Defaults,
    labels: Labels,
    registry: Registry,
    entries: BTreeMap<NotificationId, Entry>,
    next_id: u64,
    focused: Option<NotificationId>,
    effects: Vec<Effect>,
}

impl Toaster<SystemClock> {
    /// Creates a manager with library defaults and English labels.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Creates a manager from a loaded configuration: its `[toast]` section
    /// becomes the defaults and its language selects the labels.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .with_defaults(config.toast.clone())
            .with_labels(Labels::from_i18n(&I18n::new(None, config)))
    }
}

impl Default for Toaster<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> fmt::Debug for Toaster<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toaster")
            .field("defaults", &self.defaults)
            .field("registry", &self.registry)
            .field("toasts", &self.entries.len())
            .field("focused", &self.focused)
            .finish()
    }
}

impl<C: Clock> Toaster<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            defaults: Defaults::default(),
            labels: Labels::default(),
            registry: Registry::new(),
            entries: BTreeMap::new(),
            next_id: 0,
            focused: None,
            effects: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_defaults(mut self, defaults: Defaults) -> Self {
        self.defaults = defaults;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Merges `overrides` into the defaults. Existing toasts are unaffected.
    pub fn set_defaults(&mut self, overrides: &Overrides) {
        self.defaults.apply(overrides);
    }

    #[must_use]
    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    // =========================================================================
    // Creation
    // =========================================================================

    /// Shows an informational toast titled with the localized "Info".
    pub fn info(&mut self, message: impl Into<Body>, mut options: Options) -> Handle {
        let title = options
            .title
            .take()
            .unwrap_or_else(|| self.labels.info_title.clone());
        self.create(Kind::Info, Some(title), message, options)
    }

    /// Shows an alert. Alerts are announced assertively unless the caller
    /// chose a verbosity.
    pub fn alert(&mut self, message: impl Into<Body>, mut options: Options) -> Handle {
        let title = options
            .title
            .take()
            .unwrap_or_else(|| self.labels.alert_title.clone());
        if options.overrides.aria_live.is_none() {
            options.overrides.aria_live = Some(AriaLive::Assertive);
        }
        self.create(Kind::Alert, Some(title), message, options)
    }

    /// Asks a question. Exactly one of `on_confirm`/`on_cancel` runs, at most once.
    pub fn confirm(
        &mut self,
        message: impl Into<Body>,
        on_confirm: impl FnOnce() + 'static,
        on_cancel: impl FnOnce() + 'static,
        options: Options,
    ) -> Handle {
        let mut options = options.on_confirm(on_confirm).on_cancel(on_cancel);
        let title = options
            .title
            .take()
            .unwrap_or_else(|| self.labels.confirm_title.clone());
        self.create(Kind::Confirm, Some(title), message, options)
    }

    /// Builds a toast, inserts it and applies the visible cap of its container.
    ///
    /// A `None` or empty title keeps only the placeholder title region.
    pub fn create(
        &mut self,
        kind: Kind,
        title: Option<String>,
        message: impl Into<Body>,
        options: Options,
    ) -> Handle {
        let now = self.clock.now();
        let Options {
            overrides,
            title: _,
            focus,
            ok_text,
            cancel_text,
            actions,
            on_confirm,
            on_cancel,
        } = options;

        let config = self.defaults.merged(&overrides);
        let sticky = config.duration.is_sticky();
        let id = NotificationId(self.next_id);
        self.next_id += 1;

        let dismiss_label = ((config.dismissible || sticky) && kind != Kind::Confirm)
            .then(|| self.labels.close.clone());

        let mut buttons = Vec::new();
        let mut action_callbacks = Vec::new();
        let mut timer = None;
        match kind {
            Kind::Confirm => {
                buttons.push(Button {
                    label: cancel_text.unwrap_or_else(|| self.labels.cancel.clone()),
                    class: "secondary".to_string(),
                    role: ButtonRole::Cancel,
                });
                buttons.push(Button {
                    label: ok_text.unwrap_or_else(|| self.labels.ok.clone()),
                    class: "primary".to_string(),
                    role: ButtonRole::Confirm,
                });
                // Sticky confirms wait for an answer.
                timer = config
                    .duration
                    .duration()
                    .map(|delay| Timer::new(now, delay, Purpose::AutoCancel));
            }
            Kind::Info | Kind::Alert => {
                for (index, action) in actions.into_iter().take(MAX_ACTIONS).enumerate() {
                    buttons.push(Button {
                        label: action.label.unwrap_or_else(|| self.labels.action(index)),
                        class: action
                            .class
                            .unwrap_or_else(|| DEFAULT_ACTION_CLASS.to_string()),
                        role: ButtonRole::Custom(index),
                    });
                    action_callbacks.push(action.on_click);
                }
            }
        }

        let focus_due = (kind == Kind::Confirm || focus)
            .then(|| now + Duration::from_millis(FOCUS_DELAY_MS));

        let entry = Entry {
            toast: Notification {
                id,
                kind,
                position: config.position,
                title: title.filter(|title| !title.is_empty()),
                body: message.into(),
                aria_live: config.aria_live,
                dismiss_label,
                buttons,
                lifecycle: Lifecycle::Pending,
                hovered: false,
                outcome: None,
            },
            auto_dismiss: config.duration,
            timer,
            focus_due,
            on_confirm,
            on_cancel,
            actions: action_callbacks,
        };
        self.entries.insert(id, entry);

        let container = self.registry.get(config.position);
        container.insert(id);
        let evicted = container.oldest_excess(config.visible_cap());
        self.effects.extend(
            self.registry
                .take_mounted()
                .into_iter()
                .map(Effect::ContainerMounted),
        );

        tracing::debug!(
            %id,
            ?kind,
            position = config.position.name(),
            sticky,
            "toast created"
        );

        for victim in evicted {
            if self.close_at(victim, now) {
                tracing::debug!(id = %victim, "toast evicted");
            }
        }

        self.arm_auto_dismiss(id, now);

        Handle { id }
    }

    // =========================================================================
    // Closing
    // =========================================================================

    /// Starts the exit of a toast. Returns `false` if it was already closing
    /// or is unknown.
    pub fn close(&mut self, id: NotificationId) -> bool {
        let now = self.clock.now();
        self.close_at(id, now)
    }

    /// Closes every toast in one container, or in all containers.
    /// Returns how many toasts started closing.
    pub fn clear(&mut self, position: Option<Position>) -> usize {
        let now = self.clock.now();
        let ids: Vec<NotificationId> = match position {
            Some(position) => self
                .registry
                .find(position)
                .map(|container| container.children().to_vec())
                .unwrap_or_default(),
            None => self
                .registry
                .containers()
                .flat_map(|container| container.children().iter().copied())
                .collect(),
        };
        ids.into_iter()
            .filter(|id| self.close_at(*id, now))
            .count()
    }

    fn close_at(&mut self, id: NotificationId, now: Instant) -> bool {
        let Some(entry) = self.entries.get_mut(&id) else {
            return false;
        };
        if !entry.is_pending() {
            return false;
        }
        entry.toast.lifecycle = Lifecycle::Closing;
        entry.focus_due = None;
        entry.timer = Some(Timer::new(
            now,
            Duration::from_millis(REMOVAL_FALLBACK_MS),
            Purpose::Remove,
        ));
        tracing::debug!(%id, "toast closing");
        true
    }

    fn remove(&mut self, id: NotificationId) {
        let Some(entry) = self.entries.remove(&id) else {
            return;
        };
        if let Some(container) = self.registry.find_mut(entry.toast.position) {
            container.remove(id);
        }
        if self.focused == Some(id) {
            self.focused = None;
        }
        self.effects.push(Effect::Removed(id));
        tracing::debug!(%id, "toast removed");
    }

    /// The exit animation finished; removes a closing toast right away.
    pub fn animation_ended(&mut self, id: NotificationId) {
        let closing = self
            .entries
            .get(&id)
            .is_some_and(|entry| entry.toast.lifecycle == Lifecycle::Closing);
        if closing {
            self.remove(id);
        }
    }

    // =========================================================================
    // Timers
    // =========================================================================

    fn arm_auto_dismiss(&mut self, id: NotificationId, now: Instant) {
        let Some(entry) = self.entries.get_mut(&id) else {
            return;
        };
        if !entry.is_pending() {
            return;
        }
        if let Some(delay) = entry.dismiss_delay() {
            entry.timer = Some(Timer::new(now, delay, Purpose::Dismiss));
        }
    }

    /// Disarms the pending auto-dismiss (or auto-cancel) timer.
    pub fn pointer_entered(&mut self, id: NotificationId) {
        let Some(entry) = self.entries.get_mut(&id) else {
            return;
        };
        entry.toast.hovered = true;
        if entry.is_pending() {
            entry.timer = None;
        }
    }

    /// Re-arms auto-dismiss with a fresh, full duration.
    ///
    /// Remaining time is not resumed. Confirm toasts stay without a timer
    /// once hovered.
    pub fn pointer_left(&mut self, id: NotificationId) {
        let now = self.clock.now();
        if let Some(entry) = self.entries.get_mut(&id) {
            entry.toast.hovered = false;
        }
        self.arm_auto_dismiss(id, now);
    }

    /// Fires every due timer and focus request.
    pub fn tick(&mut self) {
        let now = self.clock.now();

        let due_timers: Vec<(NotificationId, Purpose)> = self
            .entries
            .iter()
            .filter_map(|(id, entry)| {
                entry
                    .timer
                    .filter(|timer| timer.is_due(now))
                    .map(|timer| (*id, timer.purpose()))
            })
            .collect();
        let due_focus: Vec<NotificationId> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.focus_due.is_some_and(|due| now >= due))
            .map(|(id, _)| *id)
            .collect();

        for id in due_focus {
            if let Some(entry) = self.entries.get_mut(&id) {
                entry.focus_due = None;
                self.focused = Some(id);
                self.effects.push(Effect::Focus(id));
            }
        }

        for (id, purpose) in due_timers {
            if let Some(entry) = self.entries.get_mut(&id) {
                entry.timer = None;
            }
            match purpose {
                Purpose::Dismiss => {
                    self.close_at(id, now);
                }
                Purpose::AutoCancel => self.resolve(id, Outcome::Cancelled, now),
                Purpose::Remove => self.remove(id),
            }
        }
    }

    /// Returns the earliest pending deadline, for hosts that schedule
    /// wakeups instead of ticking at a fixed rate.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries
            .values()
            .flat_map(|entry| {
                entry
                    .timer
                    .map(|timer| timer.deadline())
                    .into_iter()
                    .chain(entry.focus_due)
            })
            .min()
    }

    // =========================================================================
    // Interaction
    // =========================================================================

    /// Handles a click on a control of toast `id`.
    pub fn clicked(&mut self, id: NotificationId, control: Control) {
        let now = self.clock.now();
        let Some(entry) = self.entries.get_mut(&id) else {
            return;
        };
        match control {
            Control::Dismiss => {
                if entry.toast.has_dismiss_control() {
                    self.close_at(id, now);
                }
            }
            Control::Button(index) => {
                let Some(role) = entry.toast.buttons.get(index).map(|button| button.role) else {
                    return;
                };
                match role {
                    ButtonRole::Cancel => self.resolve(id, Outcome::Cancelled, now),
                    ButtonRole::Confirm => self.resolve(id, Outcome::Confirmed, now),
                    ButtonRole::Custom(action) => {
                        if !entry.is_pending() {
                            return;
                        }
                        let callback = entry.actions.get_mut(action).and_then(Option::take);
                        if let Some(callback) = callback {
                            run_isolated(id, "action", callback);
                        }
                        self.close_at(id, now);
                    }
                }
            }
        }
    }

    /// Handles a key pressed while toast `id` has focus.
    ///
    /// Confirm toasts cancel on `Escape` and confirm on `Enter`, and keep
    /// both keys from reaching the rest of the page.
    pub fn key_pressed(&mut self, id: NotificationId, key: Key) -> Propagation {
        let now = self.clock.now();
        let is_confirm = self
            .entries
            .get(&id)
            .is_some_and(|entry| entry.toast.kind == Kind::Confirm);
        if !is_confirm {
            return Propagation::Continue;
        }
        match key {
            Key::Escape => {
                self.resolve(id, Outcome::Cancelled, now);
                Propagation::Stop
            }
            Key::Enter => {
                self.resolve(id, Outcome::Confirmed, now);
                Propagation::Stop
            }
            Key::Other => Propagation::Continue,
        }
    }

    /// Routes a key press to the focused toast, if any.
    pub fn focused_key_pressed(&mut self, key: Key) -> Propagation {
        match self.focused {
            Some(id) => self.key_pressed(id, key),
            None => Propagation::Continue,
        }
    }

    /// One-shot resolution of a confirm toast.
    fn resolve(&mut self, id: NotificationId, outcome: Outcome, now: Instant) {
        let Some(entry) = self.entries.get_mut(&id) else {
            return;
        };
        if entry.toast.outcome.is_some() || !entry.is_pending() {
            return;
        }
        entry.toast.outcome = Some(outcome);
        let callback = match outcome {
            Outcome::Confirmed => entry.on_confirm.take(),
            Outcome::Cancelled => entry.on_cancel.take(),
        };
        entry.on_confirm = None;
        entry.on_cancel = None;
        tracing::debug!(%id, ?outcome, "confirm resolved");

        if let Some(callback) = callback {
            run_isolated(id, "confirm", callback);
        }
        self.close_at(id, now);
    }

    /// Dispatches a host message. Only key presses can stop propagation.
    pub fn handle_message(&mut self, message: &Message) -> Propagation {
        match *message {
            Message::Clicked(id, control) => self.clicked(id, control),
            Message::PointerEntered(id) => self.pointer_entered(id),
            Message::PointerLeft(id) => self.pointer_left(id),
            Message::AnimationEnded(id) => self.animation_ended(id),
            Message::KeyPressed(key) => return self.focused_key_pressed(key),
            Message::Tick => self.tick(),
        }
        Propagation::Continue
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.entries.get(&id).map(|entry| &entry.toast)
    }

    /// Returns the lifecycle of `id`; untracked ids are `Removed`.
    #[must_use]
    pub fn lifecycle(&self, id: NotificationId) -> Lifecycle {
        self.get(id)
            .map_or(Lifecycle::Removed, |toast| toast.lifecycle)
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[must_use]
    pub fn container(&self, position: Position) -> Option<&Container> {
        self.registry.find(position)
    }

    /// Toasts at `position` in visual order, closing ones included.
    pub fn toasts_at(&self, position: Position) -> impl Iterator<Item = &Notification> {
        self.registry
            .find(position)
            .into_iter()
            .flat_map(|container| container.children().iter())
            .filter_map(move |id| self.get(*id))
    }

    /// Number of toasts at `position` that are not on their way out.
    #[must_use]
    pub fn visible_count(&self, position: Position) -> usize {
        self.toasts_at(position)
            .filter(|toast| toast.lifecycle == Lifecycle::Pending)
            .count()
    }

    /// Total number of tracked toasts, closing ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The toast that last received focus, while it is still present.
    #[must_use]
    pub fn focused(&self) -> Option<NotificationId> {
        self.focused
    }

    /// Drains the effects accumulated since the last call.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }
}

/// Runs a caller callback so that a panic inside it cannot skip cleanup.
///
/// This relies on unwinding. Under `panic = "abort"`, and on
/// `wasm32-unknown-unknown` where panics always abort, a panicking callback
/// takes the whole program down before any cleanup runs.
fn run_isolated(id: NotificationId, kind: &'static str, callback: Callback) {
    if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(callback)) {
        let reason = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        tracing::warn!(%id, callback = kind, %reason, "toast callback panicked");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_DURATION_MS;
    use crate::ui::notifications::clock::ManualClock;
    use crate::ui::notifications::notification::Fragment;
    use crate::ui::notifications::options::Action;
    use std::cell::Cell;
    use std::rc::Rc;

    fn toaster() -> (Toaster<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        (Toaster::with_clock(clock.clone()), clock)
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
        let count = Rc::new(Cell::new(0));
        let inner = count.clone();
        (count, move || inner.set(inner.get() + 1))
    }

    #[test]
    fn new_manager_is_empty() {
        let (toaster, _) = toaster();
        assert!(toaster.is_empty());
        assert_eq!(toaster.registry().containers().count(), 0);
        assert_eq!(toaster.next_deadline(), None);
    }

    #[test]
    fn info_uses_defaults() {
        let (mut toaster, _) = toaster();
        let handle = toaster.info("Saved", Options::new());
        let toast = toaster.get(handle.id()).expect("toast exists");

        assert_eq!(toast.title(), Some("Info"));
        assert_eq!(toast.role(), "status");
        assert_eq!(toast.aria_live(), AriaLive::Polite);
        assert_eq!(toast.position(), Position::TopRight);
        assert_eq!(toast.body().as_text(), Some("Saved"));
        assert_eq!(toast.dismiss_label(), Some("Close"));
        assert!(toast.buttons().is_empty());
    }

    #[test]
    fn first_toast_mounts_its_container_once() {
        let (mut toaster, _) = toaster();
        toaster.info("a", Options::new());
        toaster.info("b", Options::new());
        toaster.info("c", Options::new().position(Position::BottomLeft));

        assert_eq!(
            toaster.take_effects(),
            vec![
                Effect::ContainerMounted(Position::TopRight),
                Effect::ContainerMounted(Position::BottomLeft),
            ]
        );
    }

    #[test]
    fn empty_title_leaves_placeholder() {
        let (mut toaster, _) = toaster();
        let handle = toaster.info("x", Options::new().title(""));
        assert_eq!(toaster.get(handle.id()).and_then(Notification::title), None);
    }

    #[test]
    fn alert_is_assertive_unless_overridden() {
        let (mut toaster, _) = toaster();
        let loud = toaster.alert("x", Options::new());
        let quiet = toaster.alert("y", Options::new().aria_live(AriaLive::Polite));

        assert_eq!(toaster.get(loud.id()).map(Notification::aria_live), Some(AriaLive::Assertive));
        assert_eq!(toaster.get(quiet.id()).map(Notification::aria_live), Some(AriaLive::Polite));
        assert_eq!(toaster.get(loud.id()).map(Notification::role), Some("alert"));
    }

    #[test]
    fn auto_dismiss_after_duration_then_removal_fallback() {
        let (mut toaster, clock) = toaster();
        let handle = toaster.info("x", Options::new());

        clock.advance_ms(3999);
        toaster.tick();
        assert_eq!(toaster.lifecycle(handle.id()), Lifecycle::Pending);

        clock.advance_ms(1);
        toaster.tick();
        assert_eq!(toaster.lifecycle(handle.id()), Lifecycle::Closing);
        assert!(toaster.get(handle.id()).is_some_and(|t| t.class_name().ends_with(" hide")));

        clock.advance_ms(REMOVAL_FALLBACK_MS);
        toaster.tick();
        assert_eq!(toaster.lifecycle(handle.id()), Lifecycle::Removed);
        assert!(toaster.container(Position::TopRight).is_some_and(Container::is_empty));
    }

    #[test]
    fn animation_end_removes_before_fallback() {
        let (mut toaster, _) = toaster();
        let handle = toaster.info("x", Options::new());

        toaster.animation_ended(handle.id());
        assert_eq!(toaster.lifecycle(handle.id()), Lifecycle::Pending);

        assert!(handle.close(&mut toaster));
        toaster.animation_ended(handle.id());
        assert_eq!(toaster.lifecycle(handle.id()), Lifecycle::Removed);
        assert!(toaster.take_effects().contains(&Effect::Removed(handle.id())));
    }

    #[test]
    fn close_is_idempotent() {
        let (mut toaster, clock) = toaster();
        let handle = toaster.info("x", Options::new());

        assert!(toaster.close(handle.id()));
        clock.advance_ms(200);
        assert!(!toaster.close(handle.id()));

        // The second close must not push the removal deadline back.
        clock.advance_ms(200);
        toaster.tick();
        assert_eq!(toaster.lifecycle(handle.id()), Lifecycle::Removed);
        assert!(!toaster.close(handle.id()));
    }

    #[test]
    fn sticky_toasts_never_auto_dismiss() {
        let (mut toaster, clock) = toaster();
        let handle = toaster.info("x", Options::new().sticky().dismissible(false));

        clock.advance(Duration::from_secs(3600));
        toaster.tick();

        assert_eq!(toaster.lifecycle(handle.id()), Lifecycle::Pending);
        // Sticky toasts always keep a way out.
        assert!(toaster.get(handle.id()).is_some_and(Notification::has_dismiss_control));
    }

    #[test]
    fn non_dismissible_timed_toast_has_no_dismiss_control() {
        let (mut toaster, _) = toaster();
        let handle = toaster.info("x", Options::new().dismissible(false));
        assert!(!toaster.get(handle.id()).is_some_and(Notification::has_dismiss_control));
    }

    #[test]
    fn hover_disarms_and_leave_rearms_full_duration() {
        let (mut toaster, clock) = toaster();
        let handle = toaster.info("x", Options::new().duration_ms(1000));

        clock.advance_ms(900);
        toaster.pointer_entered(handle.id());
        clock.advance_ms(500);
        toaster.tick();
        assert_eq!(toaster.lifecycle(handle.id()), Lifecycle::Pending);

        toaster.pointer_left(handle.id());
        clock.advance_ms(999);
        toaster.tick();
        assert_eq!(toaster.lifecycle(handle.id()), Lifecycle::Pending);

        clock.advance_ms(1);
        toaster.tick();
        assert_eq!(toaster.lifecycle(handle.id()), Lifecycle::Closing);
    }

    #[test]
    fn hover_does_not_cancel_removal() {
        let (mut toaster, clock) = toaster();
        let handle = toaster.info("x", Options::new());
        toaster.close(handle.id());

        toaster.pointer_entered(handle.id());
        clock.advance_ms(REMOVAL_FALLBACK_MS);
        toaster.tick();

        assert_eq!(toaster.lifecycle(handle.id()), Lifecycle::Removed);
    }

    #[test]
    fn top_container_evicts_oldest_beyond_cap() {
        let (mut toaster, _) = toaster();
        let handles: Vec<Handle> = (0..4)
            .map(|i| toaster.info(format!("n{i}"), Options::new().max_visible(3)))
            .collect();

        assert_eq!(toaster.lifecycle(handles[0].id()), Lifecycle::Closing);
        assert_eq!(toaster.visible_count(Position::TopRight), 3);
        let order: Vec<NotificationId> = toaster.toasts_at(Position::TopRight).map(Notification::id).collect();
        assert_eq!(
            order,
            vec![handles[3].id(), handles[2].id(), handles[1].id(), handles[0].id()]
        );
    }

    #[test]
    fn bottom_container_evicts_from_the_start() {
        let (mut toaster, clock) = toaster();
        let options = || Options::new().position(Position::BottomCenter).max_visible(2);
        let first = toaster.info("1", options());
        let second = toaster.info("2", options());
        let third = toaster.info("3", options());

        assert_eq!(toaster.lifecycle(first.id()), Lifecycle::Closing);

        clock.advance_ms(REMOVAL_FALLBACK_MS);
        toaster.tick();
        let order: Vec<NotificationId> = toaster.toasts_at(Position::BottomCenter).map(Notification::id).collect();
        assert_eq!(order, vec![second.id(), third.id()]);
    }

    #[test]
    fn zero_cap_still_keeps_newest() {
        let (mut toaster, _) = toaster();
        let old = toaster.info("old", Options::new().max_visible(0));
        let new = toaster.info("new", Options::new().max_visible(0));

        assert_eq!(toaster.lifecycle(old.id()), Lifecycle::Closing);
        assert_eq!(toaster.lifecycle(new.id()), Lifecycle::Pending);
    }

    #[test]
    fn confirm_renders_cancel_then_ok_without_dismiss() {
        let (mut toaster, _) = toaster();
        let handle = toaster.confirm("Delete?", || {}, || {}, Options::new().ok_text("Yes"));
        let toast = toaster.get(handle.id()).expect("toast exists");

        assert_eq!(toast.role(), "alertdialog");
        assert!(!toast.has_dismiss_control());
        let labels: Vec<&str> = toast.buttons().iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Cancel", "Yes"]);
        assert_eq!(toast.buttons()[0].role, ButtonRole::Cancel);
        assert_eq!(toast.buttons()[1].class, "primary");
    }

    #[test]
    fn confirm_auto_cancels_after_default_duration() {
        let (mut toaster, clock) = toaster();
        let (yes, on_yes) = counter();
        let (no, on_no) = counter();
        let handle = toaster.confirm("?", on_yes, on_no, Options::new());

        clock.advance_ms(DEFAULT_DURATION_MS - 1);
        toaster.tick();
        assert_eq!(toaster.lifecycle(handle.id()), Lifecycle::Pending);

        clock.advance_ms(1);
        toaster.tick();
        assert_eq!(yes.get(), 0);
        assert_eq!(no.get(), 1);
        assert_eq!(toaster.lifecycle(handle.id()), Lifecycle::Closing);
    }

    #[test]
    fn confirm_auto_cancel_follows_manager_defaults() {
        let (mut toaster, clock) = toaster();
        toaster.set_defaults(&Overrides {
            duration: Some(AutoDismiss::from_millis(8000)),
            ..Overrides::default()
        });
        let (no, on_no) = counter();
        let handle = toaster.confirm("?", || {}, on_no, Options::new());

        clock.advance_ms(7999);
        toaster.tick();
        assert_eq!(no.get(), 0);

        clock.advance_ms(1);
        toaster.tick();
        assert_eq!(no.get(), 1);
        assert_eq!(toaster.lifecycle(handle.id()), Lifecycle::Closing);
    }

    #[test]
    fn sticky_confirm_never_auto_cancels() {
        let (mut toaster, clock) = toaster();
        let (no, on_no) = counter();
        let handle = toaster.confirm("?", || {}, on_no, Options::new().sticky());

        clock.advance(Duration::from_secs(60));
        toaster.tick();

        assert_eq!(no.get(), 0);
        assert_eq!(toaster.lifecycle(handle.id()), Lifecycle::Pending);
    }

    #[test]
    fn confirm_auto_cancels_with_explicit_duration() {
        let (mut toaster, clock) = toaster();
        let (yes, on_yes) = counter();
        let (no, on_no) = counter();
        let handle = toaster.confirm("?", on_yes, on_no, Options::new().duration_ms(500));

        clock.advance_ms(500);
        toaster.tick();

        assert_eq!(yes.get(), 0);
        assert_eq!(no.get(), 1);
        assert_eq!(toaster.get(handle.id()).and_then(Notification::outcome), Some(Outcome::Cancelled));
        assert_eq!(toaster.lifecycle(handle.id()), Lifecycle::Closing);
    }

    #[test]
    fn hovering_a_confirm_stops_its_auto_cancel() {
        let (mut toaster, clock) = toaster();
        let (no, on_no) = counter();
        let handle = toaster.confirm("?", || {}, on_no, Options::new().duration_ms(500));

        toaster.pointer_entered(handle.id());
        toaster.pointer_left(handle.id());
        clock.advance_ms(5000);
        toaster.tick();

        assert_eq!(no.get(), 0);
        assert_eq!(toaster.lifecycle(handle.id()), Lifecycle::Pending);
    }

    #[test]
    fn enter_then_escape_resolves_once() {
        let (mut toaster, _) = toaster();
        let (yes, on_yes) = counter();
        let (no, on_no) = counter();
        let handle = toaster.confirm("?", on_yes, on_no, Options::new());

        assert_eq!(toaster.key_pressed(handle.id(), Key::Enter), Propagation::Stop);
        assert_eq!(toaster.key_pressed(handle.id(), Key::Escape), Propagation::Stop);
        toaster.clicked(handle.id(), Control::Button(0));

        assert_eq!(yes.get(), 1);
        assert_eq!(no.get(), 0);
    }

    #[test]
    fn other_keys_propagate() {
        let (mut toaster, _) = toaster();
        let confirm = toaster.confirm("?", || {}, || {}, Options::new());
        let info = toaster.info("x", Options::new());

        assert_eq!(toaster.key_pressed(confirm.id(), Key::Other), Propagation::Continue);
        assert_eq!(toaster.key_pressed(info.id(), Key::Escape), Propagation::Continue);
        assert_eq!(toaster.lifecycle(info.id()), Lifecycle::Pending);
    }

    #[test]
    fn confirm_closed_externally_fires_no_callback() {
        let (mut toaster, _) = toaster();
        let (yes, on_yes) = counter();
        let (no, on_no) = counter();
        let handle = toaster.confirm("?", on_yes, on_no, Options::new());

        toaster.close(handle.id());
        toaster.key_pressed(handle.id(), Key::Enter);

        assert_eq!(yes.get() + no.get(), 0);
    }

    #[test]
    fn confirm_and_focus_option_request_focus_on_next_tick() {
        let (mut toaster, _) = toaster();
        let confirm = toaster.confirm("?", || {}, || {}, Options::new());
        let focused_info = toaster.info("x", Options::new().focus(true));
        let plain = toaster.info("y", Options::new());
        toaster.take_effects();

        toaster.tick();
        let effects = toaster.take_effects();

        assert!(effects.contains(&Effect::Focus(confirm.id())));
        assert!(effects.contains(&Effect::Focus(focused_info.id())));
        assert!(!effects.contains(&Effect::Focus(plain.id())));
        assert!(toaster.focused().is_some());
    }

    #[test]
    fn focus_request_for_removed_toast_is_dropped() {
        let (mut toaster, _) = toaster();
        let handle = toaster.confirm("?", || {}, || {}, Options::new());
        toaster.close(handle.id());
        toaster.animation_ended(handle.id());
        toaster.take_effects();

        toaster.tick();

        assert!(toaster.take_effects().is_empty());
        assert_eq!(toaster.focused(), None);
    }

    #[test]
    fn focused_confirm_receives_routed_keys() {
        let (mut toaster, _) = toaster();
        let (no, on_no) = counter();
        let handle = toaster.confirm("?", || {}, on_no, Options::new());
        assert_eq!(toaster.focused_key_pressed(Key::Escape), Propagation::Continue);

        toaster.tick();
        let propagation = toaster.handle_message(&Message::KeyPressed(Key::Escape));

        assert_eq!(propagation, Propagation::Stop);
        assert_eq!(no.get(), 1);
        assert_eq!(toaster.lifecycle(handle.id()), Lifecycle::Closing);
    }

    #[test]
    fn actions_are_capped_and_labelled() {
        let (mut toaster, _) = toaster();
        let options = Options::new()
            .action(Action::new("Undo").class("primary"))
            .action(Action::unlabeled())
            .action(Action::new("Three"))
            .action(Action::new("Four"));
        let handle = toaster.info("x", options);
        let buttons = toaster.get(handle.id()).map(|t| t.buttons().to_vec()).unwrap_or_default();

        assert_eq!(buttons.len(), MAX_ACTIONS);
        assert_eq!(buttons[0].label, "Undo");
        assert_eq!(buttons[0].class, "primary");
        assert_eq!(buttons[1].label, "Action 2");
        assert_eq!(buttons[1].class, DEFAULT_ACTION_CLASS);
        assert_eq!(buttons[2].role, ButtonRole::Custom(2));
    }

    #[test]
    fn action_click_runs_callback_then_closes() {
        let (mut toaster, _) = toaster();
        let (count, on_click) = counter();
        let handle = toaster.info("x", Options::new().action(Action::new("Go").on_click(on_click)));

        toaster.clicked(handle.id(), Control::Button(0));
        toaster.clicked(handle.id(), Control::Button(0));

        assert_eq!(count.get(), 1);
        assert_eq!(toaster.lifecycle(handle.id()), Lifecycle::Closing);
    }

    #[test]
    fn panicking_action_still_closes() {
        let (mut toaster, _) = toaster();
        let handle = toaster.info(
            "x",
            Options::new().action(Action::new("Boom").on_click(|| panic!("action failed"))),
        );

        toaster.clicked(handle.id(), Control::Button(0));

        assert_eq!(toaster.lifecycle(handle.id()), Lifecycle::Closing);
    }

    #[test]
    fn dismiss_click_closes() {
        let (mut toaster, _) = toaster();
        let handle = toaster.info("x", Options::new());
        toaster.handle_message(&Message::Clicked(handle.id(), Control::Dismiss));
        assert_eq!(toaster.lifecycle(handle.id()), Lifecycle::Closing);
    }

    #[test]
    fn clear_closes_one_container_or_all() {
        let (mut toaster, _) = toaster();
        let top = toaster.info("a", Options::new());
        let bottom = toaster.info("b", Options::new().position(Position::BottomLeft));

        assert_eq!(toaster.clear(Some(Position::BottomLeft)), 1);
        assert_eq!(toaster.lifecycle(top.id()), Lifecycle::Pending);
        assert_eq!(toaster.lifecycle(bottom.id()), Lifecycle::Closing);

        assert_eq!(toaster.clear(Some(Position::TopCenter)), 0);
        assert_eq!(toaster.clear(None), 1);
        assert_eq!(toaster.lifecycle(top.id()), Lifecycle::Closing);
    }

    #[test]
    fn set_defaults_affects_only_later_toasts() {
        let (mut toaster, clock) = toaster();
        let before = toaster.info("a", Options::new());
        toaster.set_defaults(&Overrides {
            position: Some(Position::BottomRight),
            duration: Some(AutoDismiss::Never),
            ..Overrides::default()
        });
        let after = toaster.info("b", Options::new());

        assert_eq!(toaster.get(before.id()).map(Notification::position), Some(Position::TopRight));
        assert_eq!(toaster.get(after.id()).map(Notification::position), Some(Position::BottomRight));

        clock.advance(Duration::from_secs(10));
        toaster.tick();
        assert_eq!(toaster.lifecycle(before.id()), Lifecycle::Closing);
        assert_eq!(toaster.lifecycle(after.id()), Lifecycle::Pending);
    }

    #[test]
    fn next_deadline_tracks_earliest_timer() {
        let (mut toaster, clock) = toaster();
        let start = clock.now();
        toaster.info("slow", Options::new().duration_ms(3000));
        toaster.info("fast", Options::new().duration_ms(1000));

        assert_eq!(toaster.next_deadline(), Some(start + Duration::from_millis(1000)));
    }

    #[test]
    fn fragments_are_kept_opaque() {
        let (mut toaster, _) = toaster();
        let handle = toaster.info(Fragment::new("rich".to_string()), Options::new());

        match toaster.get(handle.id()).map(Notification::body) {
            Some(Body::Fragment(fragment)) => {
                assert_eq!(
                    fragment.downcast_ref::<String>().map(String::as_str),
                    Some("rich")
                );
            }
            other => panic!("expected fragment body, got {other:?}"),
        }
    }
}
