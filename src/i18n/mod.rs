// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for toast labels.
//!
//! This module provides localization using the Fluent localization system.
//! Translation files are embedded at build time from `assets/i18n/`.
//!
//! # Features
//!
//! - Locale selection from an explicit request, the config file, or the OS
//! - Fallback to `en-US` when no shipped locale matches
//! - [`Labels`]: the strings a toast manager needs, resolved once

pub mod fluent;
mod labels;

pub use fluent::I18n;
pub use labels::Labels;
