// SPDX-License-Identifier: MPL-2.0
//! Button styles shared across panes.

use crate::ui::design_tokens::radius;
use iced::widget::button;
use iced::{Border, Theme};

/// Style for the currently selected entry in a list of choices
/// (e.g. the active theme mode or language in the General pane).
pub fn selected(theme: &Theme, _status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    button::Style {
        background: Some(palette.primary.strong.color.into()),
        text_color: palette.primary.strong.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style for an interactive but visually quiet list entry.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        _ => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
    }
}

/// Style for a disabled entry.
pub fn disabled() -> impl Fn(&Theme, button::Status) -> button::Style {
    |theme: &Theme, _status| {
        let palette = theme.extended_palette();
        button::Style {
            background: None,
            text_color: palette.background.weak.text,
            border: Border::default(),
            ..Default::default()
        }
    }
}
