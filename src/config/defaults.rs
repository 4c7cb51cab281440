// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for toast configuration.
//!
//! This module is the single source of truth for the numbers the toast
//! manager falls back to. Constants are organized by category.
//!
//! # Categories
//!
//! - **Display**: How long toasts stay and how many stack up
//! - **Lifecycle**: Exit animation safeguard and focus scheduling
//! - **Actions**: Limits on caller-supplied buttons

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Default auto-dismiss delay (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 4000;

/// Default number of toasts a single container shows at once.
pub const DEFAULT_MAX_VISIBLE: usize = 5;

/// Smallest accepted visible-count cap.
pub const MIN_MAX_VISIBLE: usize = 1;

// ==========================================================================
// Lifecycle Defaults
// ==========================================================================

/// Delay after which a closing toast is removed even if the exit animation
/// never reported completion (in milliseconds).
pub const REMOVAL_FALLBACK_MS: u64 = 400;

/// Delay between insertion and the focus request (in milliseconds).
pub const FOCUS_DELAY_MS: u64 = 0;

/// Interval at which hosts are expected to drive `Toaster::tick` (in milliseconds).
pub const TICK_INTERVAL_MS: u64 = 50;

// ==========================================================================
// Action Defaults
// ==========================================================================

/// Maximum number of custom action buttons rendered on one toast.
pub const MAX_ACTIONS: usize = 3;

/// Style class used for action buttons that don't name one.
pub const DEFAULT_ACTION_CLASS: &str = "secondary";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_MAX_VISIBLE >= MIN_MAX_VISIBLE);
    assert!(MIN_MAX_VISIBLE > 0);
    assert!(REMOVAL_FALLBACK_MS > 0);
    assert!(TICK_INTERVAL_MS < REMOVAL_FALLBACK_MS);
    assert!(MAX_ACTIONS > 0);
};
