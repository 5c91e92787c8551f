// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.

use crate::ui::theming::ThemeMode;

/// Default theme mode follows the system light/dark preference.
pub fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

/// Default cadence for activity-pane notification refresh, in seconds.
pub const DEFAULT_NOTIFICATION_REFRESH_SECS: u64 = 300;

pub fn default_notification_refresh_secs() -> Option<u64> {
    Some(DEFAULT_NOTIFICATION_REFRESH_SECS)
}

/// The network tab ships disabled; enabling it is an explicit opt-in.
pub fn default_show_network_tab() -> bool {
    false
}

/// Multi-account branding is the default; single-account branding relabels
/// the account action to a generic "Account".
pub fn default_single_account() -> bool {
    false
}
