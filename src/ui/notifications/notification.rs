// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` read model and the small enums that
//! describe its kind, accessibility attributes and lifecycle. The manager
//! owns every `Notification`; hosts only ever see shared references.

use super::position::Position;
use crate::config::defaults::DEFAULT_DURATION_MS;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Unique identifier for a toast, allocated by its manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub(crate) u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// The three flavours of toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Passive status message.
    Info,
    /// Attention-grabbing message.
    Alert,
    /// Question answered with OK / Cancel.
    Confirm,
}

impl Kind {
    /// Returns the accessibility role announced for this kind.
    #[must_use]
    pub fn role(self) -> &'static str {
        match self {
            Kind::Info => "status",
            Kind::Alert => "alert",
            Kind::Confirm => "alertdialog",
        }
    }

    /// Returns the style class for this kind (`toast-info`, ...).
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Kind::Info => "toast-info",
            Kind::Alert => "toast-alert",
            Kind::Confirm => "toast-confirm",
        }
    }
}

/// Controls automatic dismissal of notifications.
///
/// In configuration files a duration is written in milliseconds; `0` and
/// `false` both mean [`AutoDismiss::Never`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoDismiss {
    /// Sticky: stays until closed explicitly.
    Never,
    /// Dismisses after the given duration.
    After(Duration),
}

impl AutoDismiss {
    /// Builds a setting from milliseconds, where zero means sticky.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        if ms == 0 {
            AutoDismiss::Never
        } else {
            AutoDismiss::After(Duration::from_millis(ms))
        }
    }

    /// Returns the delay, or `None` when sticky.
    #[must_use]
    pub fn duration(self) -> Option<Duration> {
        match self {
            AutoDismiss::After(duration) if !duration.is_zero() => Some(duration),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_sticky(self) -> bool {
        self.duration().is_none()
    }
}

impl Default for AutoDismiss {
    fn default() -> Self {
        Self::from_millis(DEFAULT_DURATION_MS)
    }
}

impl Serialize for AutoDismiss {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let ms = self
            .duration()
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX));
        serializer.serialize_u64(ms)
    }
}

impl<'de> Deserialize<'de> for AutoDismiss {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Millis(u64),
            Enabled(bool),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Millis(ms) => AutoDismiss::from_millis(ms),
            Raw::Enabled(false) => AutoDismiss::Never,
            Raw::Enabled(true) => AutoDismiss::default(),
        })
    }
}

/// Screen reader verbosity hint (`aria-live`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AriaLive {
    Off,
    #[default]
    Polite,
    Assertive,
}

impl AriaLive {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AriaLive::Off => "off",
            AriaLive::Polite => "polite",
            AriaLive::Assertive => "assertive",
        }
    }
}

/// Opaque, pre-built content shown in place of a plain-text message.
///
/// The manager never looks inside; renderers downcast to the type they
/// know how to draw.
#[derive(Clone)]
pub struct Fragment(Arc<dyn Any + Send + Sync>);

impl Fragment {
    pub fn new<T: Any + Send + Sync>(content: T) -> Self {
        Self(Arc::new(content))
    }

    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl fmt::Debug for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Fragment(..)")
    }
}

/// The message region of a toast.
#[derive(Debug, Clone)]
pub enum Body {
    Text(String),
    Fragment(Fragment),
}

impl Body {
    /// Returns the text when the body is plain text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Body::Text(text) => Some(text),
            Body::Fragment(_) => None,
        }
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Body::Text(text.to_string())
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Body::Text(text)
    }
}

impl From<Fragment> for Body {
    fn from(fragment: Fragment) -> Self {
        Body::Fragment(fragment)
    }
}

/// What pressing a rendered button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonRole {
    Cancel,
    Confirm,
    /// Index into the caller's action list.
    Custom(usize),
}

/// A rendered action button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub class: String,
    pub role: ButtonRole,
}

/// A pointer target inside a toast, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// The dismiss (✕) control.
    Dismiss,
    /// The action button at this index.
    Button(usize),
}

/// Where a toast is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Visible and interactive.
    Pending,
    /// Exit animation running; removal follows.
    Closing,
    /// Gone from its container.
    Removed,
}

/// How a confirm toast was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Confirmed,
    Cancelled,
}

/// A notification as currently laid out.
#[derive(Debug, Clone)]
pub struct Notification {
    pub(crate) id: NotificationId,
    pub(crate) kind: Kind,
    pub(crate) position: Position,
    pub(crate) title: Option<String>,
    pub(crate) body: Body,
    pub(crate) aria_live: AriaLive,
    pub(crate) dismiss_label: Option<String>,
    pub(crate) buttons: Vec<Button>,
    pub(crate) lifecycle: Lifecycle,
    pub(crate) hovered: bool,
    pub(crate) outcome: Option<Outcome>,
}

impl Notification {
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the title, or `None` when the title region is an empty
    /// placeholder kept for layout alignment.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn body(&self) -> &Body {
        &self.body
    }

    #[must_use]
    pub fn role(&self) -> &'static str {
        self.kind.role()
    }

    #[must_use]
    pub fn aria_live(&self) -> AriaLive {
        self.aria_live
    }

    /// Returns the accessible label of the dismiss control, if the toast has one.
    #[must_use]
    pub fn dismiss_label(&self) -> Option<&str> {
        self.dismiss_label.as_deref()
    }

    #[must_use]
    pub fn has_dismiss_control(&self) -> bool {
        self.dismiss_label.is_some()
    }

    #[must_use]
    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Returns how a confirm toast was answered, `None` while unresolved.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the style classes of the toast element, including `hide`
    /// while the exit animation runs.
    #[must_use]
    pub fn class_name(&self) -> String {
        let mut class = format!("toast {}", self.kind.class_name());
        if self.lifecycle == Lifecycle::Closing {
            class.push_str(" hide");
        }
        class
    }
}
