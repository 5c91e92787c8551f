// SPDX-License-Identifier: MPL-2.0
//! Network settings pane: bandwidth limits.
//!
//! Only present when `dialog.show_network_tab` is enabled in the
//! configuration. Limit values are kept locally; enforcing them is the sync
//! engine's concern.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use fluent_bundle::FluentArgs;
use iced::widget::{button, container, text_input, Column, Row, Text};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    DownloadInputChanged(String),
    UploadInputChanged(String),
    ApplyPressed,
}

#[derive(Debug, Clone)]
pub struct State {
    download_limit_kbps: Option<u32>,
    upload_limit_kbps: Option<u32>,
    download_input: String,
    upload_input: String,
    scheme: ColorScheme,
}

impl State {
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            download_limit_kbps: None,
            upload_limit_kbps: None,
            download_input: String::new(),
            upload_input: String::new(),
            scheme,
        }
    }

    pub fn download_limit_kbps(&self) -> Option<u32> {
        self.download_limit_kbps
    }

    pub fn upload_limit_kbps(&self) -> Option<u32> {
        self.upload_limit_kbps
    }

    /// Re-themes cached colors after a style change.
    pub fn style_changed(&mut self, scheme: &ColorScheme) {
        self.scheme = scheme.clone();
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::DownloadInputChanged(value) => self.download_input = value,
            Message::UploadInputChanged(value) => self.upload_input = value,
            Message::ApplyPressed => {
                // Empty input clears the limit; invalid input leaves it unchanged.
                self.download_limit_kbps =
                    parse_limit(&self.download_input).unwrap_or(self.download_limit_kbps);
                self.upload_limit_kbps =
                    parse_limit(&self.upload_input).unwrap_or(self.upload_limit_kbps);
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let limit_text = |limit: Option<u32>| match limit {
            None => i18n.tr("network-no-limit"),
            Some(value) => {
                let mut args = FluentArgs::new();
                args.set("value", value);
                i18n.tr_args("network-limit-kbps", &args)
            }
        };

        container(
            Column::new()
                .spacing(spacing::MD)
                .padding(spacing::MD)
                .push(Text::new(i18n.tr("network-title")).size(24))
                .push(Text::new(i18n.tr("network-download-limit")).size(18))
                .push(
                    Row::new()
                        .spacing(spacing::SM)
                        .push(
                            text_input("0", &self.download_input)
                                .on_input(Message::DownloadInputChanged)
                                .width(120),
                        )
                        .push(
                            Text::new(limit_text(self.download_limit_kbps))
                                .color(self.scheme.text_secondary),
                        ),
                )
                .push(Text::new(i18n.tr("network-upload-limit")).size(18))
                .push(
                    Row::new()
                        .spacing(spacing::SM)
                        .push(
                            text_input("0", &self.upload_input)
                                .on_input(Message::UploadInputChanged)
                                .width(120),
                        )
                        .push(
                            Text::new(limit_text(self.upload_limit_kbps))
                                .color(self.scheme.text_secondary),
                        ),
                )
                .push(
                    button(Text::new(i18n.tr("network-apply")))
                        .style(styles::button::unselected)
                        .on_press(Message::ApplyPressed),
                ),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::pane)
        .into()
    }
}

/// `Ok(None)` clears the limit, `Ok(Some(v))` sets it, `Err(())` keeps the
/// previous value.
fn parse_limit(input: &str) -> Result<Option<u32>, ()> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<u32>() {
        Ok(0) => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(_) => Err(()),
    }
}
