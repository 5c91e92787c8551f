// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The keyboard shortcuts (Ctrl+W accept, Escape reject, F12 log browser)
//! are subscriptions owned by the running application, so their lifetime is
//! the window's own lifecycle rather than an ambient global hook. Window
//! move/resize events feed the geometry tracking that both close paths
//! persist.

use super::Message;
use crate::ui::theming::ThemeMode;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Native window and keyboard event routing.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(window::Event::Opened { position, size }) => {
            Some(Message::WindowOpened {
                id: window_id,
                position,
                size,
            })
        }
        event::Event::Window(window::Event::Moved(position)) => Some(Message::WindowMoved {
            id: window_id,
            position,
        }),
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            id: window_id,
            size,
        }),
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(window::Event::Focused) => Some(Message::WindowFocused(window_id)),
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            match key.as_ref() {
                // People perceive this as a window, so Ctrl+W closes it.
                keyboard::Key::Character("w") if modifiers.command() => {
                    Some(Message::CloseRequested)
                }
                keyboard::Key::Named(keyboard::key::Named::F12) => {
                    Some(Message::ToggleLogBrowser)
                }
                keyboard::Key::Named(keyboard::key::Named::Escape) => {
                    Some(Message::RejectRequested)
                }
                _ => None,
            }
        }
        _ => None,
    })
}

/// Polls for a system light/dark flip while following the system theme.
pub fn create_theme_subscription(mode: ThemeMode) -> Subscription<Message> {
    if mode == ThemeMode::System {
        time::every(Duration::from_secs(5)).map(|_| Message::SystemThemeTick)
    } else {
        Subscription::none()
    }
}
