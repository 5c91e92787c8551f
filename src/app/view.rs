// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The settings window is the whole surface; the log browser overlays it
//! while open.

use super::Message;
use crate::accounts::AccountManager;
use crate::i18n::fluent::I18n;
use crate::logging::SharedLogBuffer;
use crate::ui::settings_window::{self, ViewContext as WindowViewContext};
use crate::ui::theming::ThemeMode;
use crate::ui::log_browser;
use iced::Element;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub accounts: &'a AccountManager,
    pub window: &'a settings_window::State,
    pub log_browser: &'a log_browser::State,
    pub log_buffer: &'a SharedLogBuffer,
    pub theme_mode: ThemeMode,
    pub window_width: f32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    if ctx.log_browser.is_visible() {
        return ctx
            .log_browser
            .view(ctx.i18n, ctx.log_buffer)
            .map(Message::LogBrowser);
    }

    ctx.window
        .view(WindowViewContext {
            i18n: ctx.i18n,
            accounts: ctx.accounts,
            theme_mode: ctx.theme_mode,
            window_width: ctx.window_width,
        })
        .map(Message::SettingsWindow)
}
