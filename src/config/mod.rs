// SPDX-License-Identifier: MPL-2.0
//! This module handles toast configuration: the library-wide defaults every
//! toast starts from, the per-call overrides merged on top of them, and
//! loading/saving those defaults from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - top level - `language` used for default titles and button labels
//! - `[toast]` - default position, duration, dismissibility, visible cap
//!   and screen reader verbosity
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_TOAST_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Config};
//! use iced_toast::ui::notifications::Position;
//!
//! let mut config = config::load().unwrap_or_default();
//! config.toast.position = Position::BottomLeft;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::ui::notifications::{AriaLive, AutoDismiss, Position};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToast";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_TOAST_CONFIG_DIR";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub toast: Defaults,
}

/// Fully resolved toast configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Defaults {
    pub position: Position,
    pub duration: AutoDismiss,
    pub dismissible: bool,
    pub max_visible: usize,
    pub aria_live: AriaLive,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            position: Position::default(),
            duration: AutoDismiss::default(),
            dismissible: true,
            max_visible: DEFAULT_MAX_VISIBLE,
            aria_live: AriaLive::default(),
        }
    }
}

impl Defaults {
    /// Overwrites every field the overrides set.
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(position) = overrides.position {
            self.position = position;
        }
        if let Some(duration) = overrides.duration {
            self.duration = duration;
        }
        if let Some(dismissible) = overrides.dismissible {
            self.dismissible = dismissible;
        }
        if let Some(max_visible) = overrides.max_visible {
            self.max_visible = max_visible;
        }
        if let Some(aria_live) = overrides.aria_live {
            self.aria_live = aria_live;
        }
    }

    /// Returns a copy with the overrides applied.
    #[must_use]
    pub fn merged(&self, overrides: &Overrides) -> Self {
        let mut merged = self.clone();
        merged.apply(overrides);
        merged
    }

    /// Returns the visible-count cap, never below one.
    #[must_use]
    pub fn visible_cap(&self) -> usize {
        self.max_visible.max(MIN_MAX_VISIBLE)
    }
}

/// A partial configuration: only the set fields take effect.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Overrides {
    pub position: Option<Position>,
    pub duration: Option<AutoDismiss>,
    pub dismissible: Option<bool>,
    pub max_visible: Option<usize>,
    pub aria_live: Option<AriaLive>,
}

fn get_default_config_path() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads a configuration file. Unparseable content yields the defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_else(|err| {
        tracing::warn!(path = %path.display(), %err, "invalid toast config, using defaults");
        Config::default()
    }))
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_toast_section() {
        let config = Config {
            language: Some("ko".to_string()),
            toast: Defaults {
                position: Position::BottomCenter,
                duration: AutoDismiss::Never,
                dismissible: false,
                max_visible: 2,
                aria_live: AriaLive::Assertive,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn unknown_position_in_file_falls_back_to_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[toast]\nposition = \"middle\"\nduration = false\nmax-visible = 3\n",
        )
        .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.toast.position, Position::TopRight);
        assert_eq!(loaded.toast.duration, AutoDismiss::Never);
        assert_eq!(loaded.toast.max_visible, 3);
        assert!(loaded.toast.dismissible);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn default_toast_section_matches_library_defaults() {
        let defaults = Defaults::default();
        assert_eq!(defaults.position, Position::TopRight);
        assert_eq!(
            defaults.duration,
            AutoDismiss::After(Duration::from_millis(DEFAULT_DURATION_MS))
        );
        assert!(defaults.dismissible);
        assert_eq!(defaults.max_visible, DEFAULT_MAX_VISIBLE);
        assert_eq!(defaults.aria_live, AriaLive::Polite);
    }

    #[test]
    fn overrides_only_touch_set_fields() {
        let base = Defaults::default();
        let merged = base.merged(&Overrides {
            position: Some(Position::BottomLeft),
            aria_live: Some(AriaLive::Off),
            ..Overrides::default()
        });

        assert_eq!(merged.position, Position::BottomLeft);
        assert_eq!(merged.aria_live, AriaLive::Off);
        assert_eq!(merged.duration, base.duration);
        assert_eq!(merged.max_visible, base.max_visible);
    }

    #[test]
    fn visible_cap_is_at_least_one() {
        let defaults = Defaults {
            max_visible: 0,
            ..Defaults::default()
        };
        assert_eq!(defaults.visible_cap(), 1);
    }
}
