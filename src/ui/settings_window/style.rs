// SPDX-License-Identifier: MPL-2.0
//! Toolbar style computation.
//!
//! The toolbar look derives from exactly four palette colors: surface
//! background, border, highlight background, and highlight text. The style
//! is a pure function of the color scheme, so repeated theme events
//! recompute an identical value without accumulating state.

use crate::ui::theming::ColorScheme;
use iced::widget::{button, container};
use iced::{Background, Border};

/// The four palette-derived toolbar colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolbarStyle {
    pub background: iced::Color,
    pub border: iced::Color,
    pub highlight_background: iced::Color,
    pub highlight_text: iced::Color,
}

impl ToolbarStyle {
    pub fn from_scheme(scheme: &ColorScheme) -> Self {
        Self {
            background: scheme.surface_secondary,
            border: scheme.text_tertiary,
            highlight_background: scheme.brand_primary,
            highlight_text: scheme.overlay_text,
        }
    }

    /// Container style for the toolbar strip.
    pub fn container(&self) -> container::Style {
        container::Style {
            background: Some(Background::Color(self.background)),
            border: Border {
                width: 0.0,
                color: self.border,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Button style for a toolbar action; `checked` selects the highlight
    /// colors.
    pub fn action_button(&self, checked: bool, text_color: iced::Color) -> button::Style {
        if checked {
            button::Style {
                background: Some(Background::Color(self.highlight_background)),
                text_color: self.highlight_text,
                border: Border::default(),
                ..Default::default()
            }
        } else {
            button::Style {
                background: Some(Background::Color(self.background)),
                text_color,
                border: Border::default(),
                ..Default::default()
            }
        }
    }
}
