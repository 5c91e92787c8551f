// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::accounts::{AccountEvent, AccountId};
use crate::ui::{log_browser, settings_window};
use iced::{window, Point, Size};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    SettingsWindow(settings_window::Message),
    LogBrowser(log_browser::Message),
    /// An account-manager change notification (also injectable by external
    /// subsystems such as an account wizard).
    Account(AccountEvent),
    /// Phase two of the removal protocol: the confirmation dialog resolved.
    /// Arrives after the requesting handler has fully unwound.
    RemovalConfirmed { account: AccountId, confirmed: bool },
    /// Deferred one-tick startup task: select the first toolbar action.
    ShowFirstPage,
    /// Accept path (Ctrl+W / close action): persist geometry, hide.
    CloseRequested,
    /// Reject path (Escape): persist geometry, hide.
    RejectRequested,
    /// F12: toggle the log browser overlay.
    ToggleLogBrowser,
    /// Native window lifecycle, used for geometry tracking.
    WindowOpened {
        id: window::Id,
        position: Option<Point>,
        size: Size,
    },
    WindowMoved {
        id: window::Id,
        position: Point,
    },
    WindowResized {
        id: window::Id,
        size: Size,
    },
    /// OS close button: persist geometry and quit.
    WindowCloseRequested(window::Id),
    /// The window gained focus; forwarded as the activation notification.
    WindowFocused(window::Id),
    /// Periodic check for a system light/dark flip while in System mode.
    SystemThemeTick,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional data directory override (for the state file).
    /// Takes precedence over `SYNCDECK_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml, accounts.toml).
    /// Takes precedence over `SYNCDECK_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
