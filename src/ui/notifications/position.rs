// SPDX-License-Identifier: MPL-2.0
//! Screen anchors for toast containers.
//!
//! Six fixed anchors exist. Names coming from configuration files or
//! callers are validated here; anything unknown resolves to the default
//! anchor instead of failing.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Where a toast container is anchored on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Position {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
    TopCenter,
    BottomCenter,
}

/// Returned by [`Position::from_str`] for names outside the enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown toast position: {0}")]
pub struct UnknownPosition(pub String);

impl Position {
    /// Every anchor, in declaration order.
    pub const ALL: [Position; 6] = [
        Position::TopRight,
        Position::TopLeft,
        Position::BottomRight,
        Position::BottomLeft,
        Position::TopCenter,
        Position::BottomCenter,
    ];

    /// Returns the kebab-case name used in configuration (`top-right`, ...).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Position::TopRight => "top-right",
            Position::TopLeft => "top-left",
            Position::BottomRight => "bottom-right",
            Position::BottomLeft => "bottom-left",
            Position::TopCenter => "top-center",
            Position::BottomCenter => "bottom-center",
        }
    }

    /// Returns the style class that pins a container to this anchor.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Position::TopRight => "toast-top-right",
            Position::TopLeft => "toast-top-left",
            Position::BottomRight => "toast-bottom-right",
            Position::BottomLeft => "toast-bottom-left",
            Position::TopCenter => "toast-top-center",
            Position::BottomCenter => "toast-bottom-center",
        }
    }

    /// Bottom-anchored containers grow upwards: new toasts are appended so
    /// the newest one sits closest to the bottom edge.
    #[must_use]
    pub fn is_bottom(self) -> bool {
        matches!(
            self,
            Position::BottomRight | Position::BottomLeft | Position::BottomCenter
        )
    }

    /// Resolves a position name, falling back to the default anchor for
    /// unknown values.
    #[must_use]
    pub fn resolve(name: &str) -> Self {
        name.parse::<Position>().unwrap_or_else(|err| {
            tracing::debug!(%err, fallback = Position::default().name(), "falling back to default position");
            Position::default()
        })
    }
}

impl FromStr for Position {
    type Err = UnknownPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|position| position.name() == s)
            .ok_or_else(|| UnknownPosition(s.to_string()))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Position::resolve(&name))
    }
}
