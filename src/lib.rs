// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` is a transient notification ("toast") system for iced
//! applications.
//!
//! Info, alert and confirm toasts are stacked in containers pinned to one of
//! six screen anchors, auto-dismiss after a configurable delay, pause while
//! hovered, and are labelled through Fluent translations.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
