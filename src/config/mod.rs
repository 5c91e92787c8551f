// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[dialog]` - Settings-window behavior (network tab, notification cadence)
//! - `[branding]` - Branding variants (single-account mode)
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `SYNCDECK_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Settings-window behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DialogConfig {
    /// Whether the Network tab is present in the toolbar.
    #[serde(default = "default_show_network_tab")]
    pub show_network_tab: bool,

    /// Notification refresh interval handed to activity panes, in seconds.
    #[serde(
        default = "default_notification_refresh_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub notification_refresh_secs: Option<u64>,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            show_network_tab: default_show_network_tab(),
            notification_refresh_secs: default_notification_refresh_secs(),
        }
    }
}

/// Branding variants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrandingConfig {
    /// Single-account branding labels the account action "Account" instead of
    /// the account display name and hides the tooltip.
    #[serde(default = "default_single_account")]
    pub single_account: bool,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            single_account: default_single_account(),
        }
    }
}

/// User preferences, persisted as `settings.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub dialog: DialogConfig,

    #[serde(default)]
    pub branding: BrandingConfig,
}

impl Config {
    /// Effective theme mode after considering the system preference.
    pub fn theme_mode(&self) -> ThemeMode {
        self.general.theme_mode
    }

    /// Notification refresh interval with the default applied.
    pub fn notification_refresh_secs(&self) -> u64 {
        self.dialog
            .notification_refresh_secs
            .unwrap_or(DEFAULT_NOTIFICATION_REFRESH_SECS)
    }
}

fn config_file_path() -> Option<PathBuf> {
    paths::get_app_config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Returns a tuple of (config, optional warning key). A missing file yields
/// defaults without a warning; an unreadable or unparsable file yields
/// defaults plus a warning key for the caller to surface.
pub fn load() -> (Config, Option<&'static str>) {
    let Some(path) = config_file_path() else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(_) => (Config::default(), Some("notification-config-parse-error")),
    }
}

/// Loads the configuration from an explicit path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    let path = config_file_path()
        .ok_or_else(|| Error::Config("could not determine config directory".into()))?;
    save_to_path(config, &path)
}

/// Saves the configuration to an explicit path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}
