// SPDX-License-Identifier: MPL-2.0
//! F12 log browser: renders the tracing ring buffer.
//!
//! Toggled by a keyboard shortcut scoped to the settings window; shown as an
//! overlay panel above the content area.

use crate::i18n::fluent::I18n;
use crate::logging::SharedLogBuffer;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::widget::{button, container, scrollable, Column, Text};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    ClosePressed,
}

#[derive(Debug, Default)]
pub struct State {
    visible: bool,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::ClosePressed => self.visible = false,
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n, buffer: &SharedLogBuffer) -> Element<'a, Message> {
        let mut column = Column::new()
            .spacing(spacing::SM)
            .padding(spacing::MD)
            .push(Text::new(i18n.tr("log-browser-title")).size(20));

        let lines: Vec<String> = buffer
            .lock()
            .map(|buffer| buffer.iter().map(|line| line.display()).collect())
            .unwrap_or_default();

        if lines.is_empty() {
            column = column.push(Text::new(i18n.tr("log-browser-empty")));
        } else {
            let mut list = Column::new().spacing(spacing::XXS);
            for line in lines {
                list = list.push(Text::new(line).size(12).font(iced::Font::MONOSPACE));
            }
            column = column.push(scrollable(list).height(Length::Fill));
        }

        column = column.push(
            button(Text::new(i18n.tr("log-browser-close")))
                .style(styles::button::unselected)
                .on_press(Message::ClosePressed),
        );

        container(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::card)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::create_log_buffer;

    #[test]
    fn toggle_flips_visibility() {
        let mut state = State::new();
        assert!(!state.is_visible());
        state.toggle();
        assert!(state.is_visible());
        state.toggle();
        assert!(!state.is_visible());
    }

    #[test]
    fn close_message_hides() {
        let mut state = State::new();
        state.toggle();
        state.update(Message::ClosePressed);
        assert!(!state.is_visible());
    }

    #[test]
    fn view_renders_empty_and_filled_buffer() {
        let i18n = I18n::default();
        let state = State::new();
        let buffer = create_log_buffer();
        let _ = state.view(&i18n, &buffer);

        buffer
            .lock()
            .unwrap()
            .push(crate::logging::LogLine {
                timestamp: chrono::Local::now(),
                level: tracing::Level::INFO,
                target: "syncdeck".into(),
                message: "account added".into(),
            });
        let _ = state.view(&i18n, &buffer);
    }
}
