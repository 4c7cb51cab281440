// SPDX-License-Identifier: MPL-2.0
//! Per-toast deadline.
//!
//! Each toast owns at most one pending timer. Arming a new one replaces
//! the previous, so a toast never has two deadlines racing.

use std::time::Duration;
use web_time::Instant;

/// What happens when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Purpose {
    /// Close the toast (info/alert auto-dismiss).
    Dismiss,
    /// Resolve a confirm toast as cancelled.
    AutoCancel,
    /// Drop a closing toast whose exit animation never reported back.
    Remove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Timer {
    deadline: Instant,
    purpose: Purpose,
}

impl Timer {
    pub(crate) fn new(now: Instant, delay: Duration, purpose: Purpose) -> Self {
        Self {
            deadline: now + delay,
            purpose,
        }
    }

    pub(crate) fn deadline(&self) -> Instant {
        self.deadline
    }

    pub(crate) fn purpose(&self) -> Purpose {
        self.purpose
    }

    pub(crate) fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}
