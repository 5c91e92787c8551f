// SPDX-License-Identifier: MPL-2.0
//! Window state persistence using CBOR format.
//!
//! This module handles transient application state that persists across
//! sessions but is not user-configurable (unlike preferences in
//! `settings.toml`): the settings window geometry. Both close paths of the
//! window (accept and reject) write through the same [`AppState::save`] call,
//! so the geometry restored on the next open is identical regardless of how
//! the window was dismissed.
//!
//! # Path Resolution
//!
//! 1. Use `load_from()`/`save_to()` with explicit path override
//! 2. Set `SYNCDECK_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Persisted window geometry in physical pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WindowGeometry {
    pub width: f32,
    pub height: f32,
    /// Window position; `None` lets the window manager place the window.
    #[serde(default)]
    pub x: Option<i32>,
    #[serde(default)]
    pub y: Option<i32>,
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self {
            width: crate::app::WINDOW_DEFAULT_WIDTH as f32,
            height: crate::app::WINDOW_DEFAULT_HEIGHT as f32,
            x: None,
            y: None,
        }
    }
}

/// Application state that persists across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Last known settings window geometry.
    #[serde(default)]
    pub geometry: Option<WindowGeometry>,
}

impl AppState {
    /// Loads application state from the default location.
    ///
    /// Returns (state, optional warning key). Failures degrade to defaults
    /// with a warning the caller can log.
    pub fn load() -> (Self, Option<&'static str>) {
        Self::load_from(None)
    }

    /// Loads application state from a custom directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<&'static str>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(state) => (state, None),
                    Err(_) => (Self::default(), Some("notification-state-parse-error")),
                }
            }
            Err(_) => (Self::default(), Some("notification-state-read-error")),
        }
    }

    /// Saves application state to the default location.
    ///
    /// Creates the parent directory if it doesn't exist. Returns an optional
    /// warning key if the save failed.
    pub fn save(&self) -> Option<&'static str> {
        self.save_to(None)
    }

    /// Saves application state to a custom directory.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<&'static str> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("notification-state-path-error");
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-state-dir-error");
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if ciborium::into_writer(self, writer).is_err() {
                    return Some("notification-state-write-error");
                }
                None
            }
            Err(_) => Some("notification-state-create-error"),
        }
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_state_has_no_geometry() {
        let state = AppState::default();
        assert!(state.geometry.is_none());
    }

    #[test]
    fn save_and_load_round_trip_geometry() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let original = AppState {
            geometry: Some(WindowGeometry {
                width: 1024.0,
                height: 720.0,
                x: Some(120),
                y: Some(64),
            }),
        };

        let save_result = original.save_to(Some(base_dir.clone()));
        assert!(save_result.is_none(), "save should succeed");

        let (loaded, warning) = AppState::load_from(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(original, loaded);
    }

    #[test]
    fn load_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("create temp dir");
        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn load_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let state_path = base_dir.join(STATE_FILE);
        fs::write(&state_path, "not valid cbor data").expect("write file");

        let (state, warning) = AppState::load_from(Some(base_dir));
        assert_eq!(warning, Some("notification-state-parse-error"));
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested_dir = temp_dir.path().join("nested").join("deeply");

        let state = AppState {
            geometry: Some(WindowGeometry::default()),
        };

        let result = state.save_to(Some(nested_dir.clone()));
        assert!(result.is_none(), "save should succeed");
        assert!(nested_dir.join(STATE_FILE).exists());
    }

    #[test]
    fn default_geometry_matches_window_defaults() {
        let geometry = WindowGeometry::default();
        assert_eq!(geometry.width, crate::app::WINDOW_DEFAULT_WIDTH as f32);
        assert_eq!(geometry.height, crate::app::WINDOW_DEFAULT_HEIGHT as f32);
        assert!(geometry.x.is_none());
    }
}
