// SPDX-License-Identifier: MPL-2.0
//! User interface modules.
//!
//! `settings_window` is the dialog itself; `panes` holds the stacked content
//! widgets it shows; the remaining modules are shared presentation concerns
//! (theming, tokens, icons, styles) and the log browser overlay.

pub mod design_tokens;
pub mod icons;
pub mod log_browser;
pub mod panes;
pub mod settings_window;
pub mod styles;
pub mod theming;
