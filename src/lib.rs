// SPDX-License-Identifier: MPL-2.0
//! SyncDeck is the settings window of a desktop file-sync client, built with
//! the Iced GUI framework.
//!
//! It manages multiple connected accounts through a toolbar-driven dialog:
//! per-account activity and settings panes, theme switching with palette-
//! aware icons, and a two-phase account removal flow.

pub mod accounts;
pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod logging;
pub mod ui;
