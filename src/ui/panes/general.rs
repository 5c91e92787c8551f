// SPDX-License-Identifier: MPL-2.0
//! General settings pane: theme mode and display language.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::widget::{button, container, Column, Row, Text};
use iced::{Element, Length};
use unic_langid::LanguageIdentifier;

#[derive(Debug, Clone)]
pub enum Message {
    ThemeModeSelected(ThemeMode),
    LanguageSelected(LanguageIdentifier),
}

/// Events propagated to the owning window.
#[derive(Debug, Clone)]
pub enum Event {
    ThemeModeChanged(ThemeMode),
    LanguageChanged(LanguageIdentifier),
}

#[derive(Debug, Clone)]
pub struct State {
    scheme: ColorScheme,
}

impl State {
    pub fn new(scheme: ColorScheme) -> Self {
        Self { scheme }
    }

    /// Re-themes cached colors after a style change.
    pub fn style_changed(&mut self, scheme: &ColorScheme) {
        self.scheme = scheme.clone();
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::ThemeModeSelected(mode) => Event::ThemeModeChanged(mode),
            Message::LanguageSelected(locale) => Event::LanguageChanged(locale),
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n, current_mode: ThemeMode) -> Element<'a, Message> {
        let mut theme_row = Row::new().spacing(spacing::SM);
        for mode in ThemeMode::ALL {
            let label = Text::new(i18n.tr(mode.i18n_key()));
            let styled = if mode == current_mode {
                button(label).style(styles::button::selected)
            } else {
                button(label).style(styles::button::unselected)
            };
            theme_row = theme_row.push(styled.on_press(Message::ThemeModeSelected(mode)));
        }

        let mut language_column = Column::new().spacing(spacing::XS);
        for locale in &i18n.available_locales {
            let name_key = format!("language-name-{}", locale);
            let translated = i18n.tr(&name_key);
            let label = if translated.starts_with("MISSING:") {
                locale.to_string()
            } else {
                format!("{} ({})", translated, locale)
            };

            let text = Text::new(label);
            let styled = if i18n.current_locale() == locale {
                button(text).style(styles::button::selected)
            } else {
                button(text).style(styles::button::unselected)
            };
            language_column =
                language_column.push(styled.on_press(Message::LanguageSelected(locale.clone())));
        }

        container(
            Column::new()
                .spacing(spacing::MD)
                .padding(spacing::MD)
                .push(Text::new(i18n.tr("general-title")).size(24))
                .push(
                    Text::new(i18n.tr("general-theme-label"))
                        .size(18)
                        .color(self.scheme.text_secondary),
                )
                .push(theme_row)
                .push(
                    Text::new(i18n.tr("general-language-label"))
                        .size(18)
                        .color(self.scheme.text_secondary),
                )
                .push(language_column),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::pane)
        .into()
    }
}
