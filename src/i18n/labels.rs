// SPDX-License-Identifier: MPL-2.0
//! Library strings resolved from the active locale.

use super::fluent::I18n;

/// Default titles and button texts used by the toast manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub info_title: String,
    pub alert_title: String,
    pub confirm_title: String,
    pub ok: String,
    pub cancel: String,
    pub close: String,
    action_fallback: Vec<String>,
}

impl Labels {
    /// Resolves every label from `i18n`.
    pub fn from_i18n(i18n: &I18n) -> Self {
        let action_fallback = (1..=crate::config::MAX_ACTIONS)
            .map(|index| {
                let index = index.to_string();
                i18n.tr_with_args("toast-action-fallback", &[("index", index.as_str())])
            })
            .collect();

        Self {
            info_title: i18n.tr("toast-title-info"),
            alert_title: i18n.tr("toast-title-alert"),
            confirm_title: i18n.tr("toast-title-confirm"),
            ok: i18n.tr("toast-button-ok"),
            cancel: i18n.tr("toast-button-cancel"),
            close: i18n.tr("toast-button-close"),
            action_fallback,
        }
    }

    /// Label for an unlabeled action button at zero-based `index`.
    pub fn action(&self, index: usize) -> String {
        self.action_fallback
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("Action {}", index + 1))
    }
}

impl Default for Labels {
    /// English labels, independent of the OS locale.
    fn default() -> Self {
        Self::from_i18n(&I18n::with_locale(super::fluent::DEFAULT_LOCALE))
    }
}
