// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` owns the domain collaborators (account manager, configuration,
//! persisted window state) and the settings window component, and translates
//! messages into side effects: registry mutation, geometry persistence, the
//! two-phase account removal, and theme propagation. It also plays the
//! owning-controller role for events the window forwards upward
//! (folder-changed, open-folder, log-toggle, activation).

pub mod paths;
pub mod state_store;

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::accounts::AccountManager;
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::logging;
use crate::ui::log_browser;
use crate::ui::settings_window::{self, Options};
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use state_store::{AppState, WindowGeometry};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 500;
pub const MIN_WINDOW_HEIGHT: u32 = 400;

/// Root Iced application state bridging the settings window, the account
/// domain, and persisted preferences.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme_mode: ThemeMode,
    scheme: ColorScheme,
    accounts: AccountManager,
    window: settings_window::State,
    log_browser: log_browser::State,
    log_buffer: logging::SharedLogBuffer,
    state: AppState,
    /// Live window geometry, tracked from native move/resize events and
    /// persisted on both close paths.
    geometry: WindowGeometry,
    window_id: Option<window::Id>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("accounts", &self.accounts.len())
            .field("window_visible", &self.window.is_visible())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        let i18n = I18n::default();
        let theme_mode = config.general.theme_mode;
        let scheme = ColorScheme::from_mode(theme_mode);
        let accounts = AccountManager::new();
        let window = settings_window::State::new(
            Options::from(&config),
            scheme.clone(),
            &accounts,
            &i18n,
        );
        Self {
            i18n,
            config,
            theme_mode,
            scheme,
            accounts,
            window,
            log_browser: log_browser::State::new(),
            log_buffer: logging::buffer(),
            state: AppState::default(),
            geometry: WindowGeometry::default(),
            window_id: None,
        }
    }
}

/// Builds the native window settings, restoring persisted geometry.
fn window_settings(geometry: WindowGeometry) -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(geometry.width, geometry.height),
        position: match (geometry.x, geometry.y) {
            (Some(x), Some(y)) => window::Position::Specific(iced::Point::new(x as f32, y as f32)),
            _ => window::Position::default(),
        },
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        // Close requests are handled in `update` so geometry persists first.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    logging::init();
    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    // Restore persisted geometry before the first window opens.
    let (state, _) = AppState::load();
    let geometry = state.geometry.unwrap_or_default();

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings(geometry))
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from configuration, the account store,
    /// and persisted window state, then defers the first page selection by
    /// one tick so initial layout settles.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(key) = config_warning {
            tracing::warn!(warning = key, "configuration fell back to defaults");
        }

        let i18n = I18n::new(flags.lang.clone(), &config);
        let theme_mode = config.general.theme_mode;
        let scheme = ColorScheme::from_mode(theme_mode);

        let (accounts, accounts_warning) = AccountManager::load();
        if let Some(warning) = accounts_warning {
            tracing::warn!(warning, "account store fell back to empty");
        }

        let (state, state_warning) = AppState::load();
        if let Some(key) = state_warning {
            tracing::warn!(warning = key, "window state fell back to defaults");
        }
        let geometry = state.geometry.unwrap_or_default();

        let window = settings_window::State::new(
            Options::from(&config),
            scheme.clone(),
            &accounts,
            &i18n,
        );

        let app = Self {
            i18n,
            config,
            theme_mode,
            scheme,
            accounts,
            window,
            log_browser: log_browser::State::new(),
            log_buffer: logging::buffer(),
            state,
            geometry,
            window_id: None,
        };

        // Fire-once deferred task: select the first page after layout
        // settles. Not cancellable.
        let task = Task::perform(
            tokio::time::sleep(std::time::Duration::from_millis(1)),
            |()| Message::ShowFirstPage,
        );

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_theme_subscription(self.theme_mode),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            config: &mut self.config,
            theme_mode: &mut self.theme_mode,
            scheme: &mut self.scheme,
            accounts: &mut self.accounts,
            window: &mut self.window,
            log_browser: &mut self.log_browser,
            state: &mut self.state,
            geometry: &mut self.geometry,
            window_id: &mut self.window_id,
        };

        match message {
            Message::SettingsWindow(window_message) => {
                update::handle_settings_window_message(&mut ctx, window_message)
            }
            Message::LogBrowser(log_message) => {
                ctx.log_browser.update(log_message);
                Task::none()
            }
            Message::Account(event) => update::handle_account_event(&mut ctx, event),
            Message::RemovalConfirmed { account, confirmed } => {
                update::handle_removal_confirmed(&mut ctx, account, confirmed)
            }
            Message::ShowFirstPage => {
                ctx.window.show_first_page();
                Task::none()
            }
            Message::CloseRequested | Message::RejectRequested => {
                // Accept and reject persist geometry identically, then hide.
                update::persist_geometry(&mut ctx);
                update::hide_window(*ctx.window_id)
            }
            Message::ToggleLogBrowser => {
                ctx.log_browser.toggle();
                Task::none()
            }
            Message::WindowOpened { id, position, size } => {
                *ctx.window_id = Some(id);
                ctx.geometry.width = size.width;
                ctx.geometry.height = size.height;
                if let Some(position) = position {
                    ctx.geometry.x = Some(position.x as i32);
                    ctx.geometry.y = Some(position.y as i32);
                }
                if ctx.window.is_visible() {
                    Task::none()
                } else {
                    // First-run state: no account configured, stay hidden.
                    update::hide_window(Some(id))
                }
            }
            Message::WindowMoved { id, position } => {
                *ctx.window_id = Some(id);
                ctx.geometry.x = Some(position.x as i32);
                ctx.geometry.y = Some(position.y as i32);
                Task::none()
            }
            Message::WindowResized { id, size } => {
                *ctx.window_id = Some(id);
                ctx.geometry.width = size.width;
                ctx.geometry.height = size.height;
                Task::none()
            }
            Message::WindowCloseRequested(id) => {
                *ctx.window_id = Some(id);
                update::persist_geometry(&mut ctx);
                iced::exit()
            }
            Message::WindowFocused(id) => {
                *ctx.window_id = Some(id);
                // Forwarded activation notification for the tray controller.
                tracing::debug!("settings window activated");
                Task::none()
            }
            Message::SystemThemeTick => {
                update::system_theme_tick(&mut ctx);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            accounts: &self.accounts,
            window: &self.window,
            log_browser: &self.log_browser,
            log_buffer: &self.log_buffer,
            theme_mode: self.theme_mode,
            window_width: self.geometry.width,
        })
    }
}
