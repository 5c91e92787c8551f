// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The removal confirmation lives here as phase one of the two-phase
//! protocol: [`confirm_removal`] runs the native dialog as an async task, so
//! the handler that requested it returns before anything is deleted. Phase
//! two ([`handle_removal_confirmed`]) re-validates that the account still
//! exists before touching the manager; the account set can change while the
//! dialog is open.

use super::{state_store::AppState, state_store::WindowGeometry, Message};
use crate::accounts::{AccountEvent, AccountId, AccountManager};
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::log_browser;
use crate::ui::settings_window::{self, Event as WindowEvent};
use crate::ui::theming::{ColorScheme, ThemeMode};
use fluent_bundle::FluentArgs;
use iced::{window, Task};
use unic_langid::LanguageIdentifier;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub config: &'a mut Config,
    pub theme_mode: &'a mut ThemeMode,
    pub scheme: &'a mut ColorScheme,
    pub accounts: &'a mut AccountManager,
    pub window: &'a mut settings_window::State,
    pub log_browser: &'a mut log_browser::State,
    pub state: &'a mut AppState,
    pub geometry: &'a mut WindowGeometry,
    pub window_id: &'a mut Option<window::Id>,
}

pub fn handle_settings_window_message(
    ctx: &mut UpdateContext<'_>,
    message: settings_window::Message,
) -> Task<Message> {
    let event = ctx.window.update(message, ctx.accounts, ctx.i18n);
    handle_window_event(ctx, event)
}

pub fn handle_account_event(ctx: &mut UpdateContext<'_>, event: AccountEvent) -> Task<Message> {
    let window_event = ctx.window.handle_account_event(event, ctx.accounts, ctx.i18n);
    handle_window_event(ctx, window_event)
}

/// Translates a settings-window event into side effects.
pub fn handle_window_event(ctx: &mut UpdateContext<'_>, event: WindowEvent) -> Task<Message> {
    match event {
        WindowEvent::None => Task::none(),
        WindowEvent::FolderChanged => {
            tracing::info!("folder configuration changed");
            Task::none()
        }
        WindowEvent::OpenFolder(alias) => {
            tracing::info!(folder = %alias, "open folder requested");
            Task::none()
        }
        WindowEvent::RefreshRequested(account) => {
            tracing::debug!(account = %account, "activity refresh requested");
            Task::none()
        }
        WindowEvent::RemovalRequested(account) => match ctx.accounts.get(account) {
            Some(entry) => confirm_removal(account, entry.display_name(), ctx.i18n),
            None => Task::none(),
        },
        WindowEvent::ThemeModeChanged(mode) => {
            apply_theme_mode(ctx, mode);
            Task::none()
        }
        WindowEvent::LanguageChanged(locale) => {
            apply_language(ctx, locale);
            Task::none()
        }
        WindowEvent::Hidden => {
            // First-run empty state: geometry still persists, window hides.
            persist_geometry(ctx);
            hide_window(*ctx.window_id)
        }
    }
}

/// Phase one: run the native confirmation dialog off the update loop.
/// Nothing is deleted here; the answer arrives as `RemovalConfirmed`.
pub fn confirm_removal(account: AccountId, display_name: &str, i18n: &I18n) -> Task<Message> {
    let mut args = FluentArgs::new();
    args.set("name", display_name.to_string());
    let title = i18n.tr("confirm-remove-title");
    let body = i18n.tr_args("confirm-remove-body", &args);
    let yes = i18n.tr("confirm-remove-yes");
    let cancel = i18n.tr("confirm-remove-cancel");

    Task::perform(
        async move {
            let confirm_label = yes.clone();
            let result = rfd::AsyncMessageDialog::new()
                .set_level(rfd::MessageLevel::Warning)
                .set_title(title.as_str())
                .set_description(body.as_str())
                .set_buttons(rfd::MessageButtons::OkCancelCustom(yes, cancel))
                .show()
                .await;
            matches!(&result, rfd::MessageDialogResult::Custom(label) if *label == confirm_label)
                || matches!(result, rfd::MessageDialogResult::Ok)
        },
        move |confirmed| Message::RemovalConfirmed { account, confirmed },
    )
}

/// Phase two: the dialog resolved. Re-validates account lifetime, then
/// deletes and persists through the manager and routes the resulting event
/// into the window.
pub fn handle_removal_confirmed(
    ctx: &mut UpdateContext<'_>,
    account: AccountId,
    confirmed: bool,
) -> Task<Message> {
    if !confirmed {
        tracing::debug!(account = %account, "account removal cancelled");
        return Task::none();
    }
    if ctx.accounts.get(account).is_none() {
        // The account disappeared while the dialog was open.
        tracing::debug!(account = %account, "stale removal confirmation ignored");
        return Task::none();
    }

    let Some(event) = ctx.accounts.delete_account(account) else {
        return Task::none();
    };
    if let Err(err) = ctx.accounts.save() {
        tracing::warn!(%err, "failed to persist account store");
    }
    handle_account_event(ctx, event)
}

/// Applies a theme mode change: persists it and broadcasts the new style.
pub fn apply_theme_mode(ctx: &mut UpdateContext<'_>, mode: ThemeMode) {
    *ctx.theme_mode = mode;
    ctx.config.general.theme_mode = mode;
    save_config(ctx.config);
    apply_scheme(ctx, ColorScheme::from_mode(mode));
}

/// Re-resolves the System scheme; broadcasts only on an actual flip.
pub fn system_theme_tick(ctx: &mut UpdateContext<'_>) {
    if *ctx.theme_mode != ThemeMode::System {
        return;
    }
    let scheme = ColorScheme::from_mode(ThemeMode::System);
    if scheme != *ctx.scheme {
        apply_scheme(ctx, scheme);
    }
}

fn apply_scheme(ctx: &mut UpdateContext<'_>, scheme: ColorScheme) {
    ctx.window.style_changed(&scheme);
    *ctx.scheme = scheme;
}

pub fn apply_language(ctx: &mut UpdateContext<'_>, locale: LanguageIdentifier) {
    ctx.i18n.set_locale(locale.clone());
    ctx.config.general.language = Some(locale.to_string());
    save_config(ctx.config);
}

fn save_config(config: &Config) {
    if let Err(err) = config::save(config) {
        tracing::warn!(%err, "failed to save configuration");
    }
}

/// Writes the tracked geometry through the state store. Both close paths
/// (accept and reject) call this with identical behavior.
pub fn persist_geometry(ctx: &mut UpdateContext<'_>) {
    ctx.state.geometry = Some(*ctx.geometry);
    if let Some(key) = ctx.state.save() {
        tracing::warn!(warning = key, "failed to persist window state");
    }
}

/// Hides the native window, if its id is known.
pub fn hide_window(window_id: Option<window::Id>) -> Task<Message> {
    match window_id {
        Some(id) => window::set_mode(id, window::Mode::Hidden),
        None => Task::none(),
    }
}
