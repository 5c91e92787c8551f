// SPDX-License-Identifier: MPL-2.0
//! View rendering for the settings window.
//!
//! The toolbar renders as a menu-bar strip: account buttons (icon above
//! label, vertically expanded), separators between account blocks, an
//! expanding spacer at the sentinel boundary, then the General/Network
//! block. Entries that do not fit the window width collapse into an
//! overflow menu where they fall back to default text-only rendering.

use super::registry::ActionEntry;
use super::{Message, State};
use crate::accounts::AccountManager;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::panes::PaneViewContext;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, container, tooltip, Column, Image, Row, Space, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Context required to render the window.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub accounts: &'a AccountManager,
    pub theme_mode: ThemeMode,
    pub window_width: f32,
}

/// Number of button slots that fit the toolbar at the given window width.
fn visible_capacity(window_width: f32) -> usize {
    let budget = f32::from(sizing::TOOLBAR_BUTTON_WIDTH);
    ((window_width / budget).floor() as usize).max(3)
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let registry = state.registry();

    // Partition entries into inline toolbar slots and overflow.
    let entries: Vec<&ActionEntry> = registry.items().iter().collect();
    let slot_count = entries.iter().filter(|e| !e.is_separator()).count();
    let capacity = visible_capacity(ctx.window_width);
    let overflowing = slot_count > capacity;
    let inline_budget = if overflowing { capacity - 1 } else { slot_count };

    let mut toolbar = Row::new()
        .spacing(0)
        .height(Length::Fixed(f32::from(sizing::TOOLBAR_BUTTON_HEIGHT)));
    let mut overflow_entries: Vec<&ActionEntry> = Vec::new();

    let mut used = 0usize;
    for (index, entry) in entries.iter().copied().enumerate() {
        if entry.is_separator() {
            if used < inline_budget {
                toolbar = toolbar.push(separator(state));
            }
            continue;
        }
        // The expanding spacer sits at the sentinel boundary, between the
        // account block and the fixed block.
        if index == registry.sentinel_index() {
            toolbar = toolbar.push(
                Space::new()
                    .width(Length::Fill)
                    .height(Length::Fixed(f32::from(sizing::TOOLBAR_SPACER_MIN))),
            );
        }
        if used < inline_budget {
            toolbar = toolbar.push(toolbar_button(state, entry));
            used += 1;
        } else {
            overflow_entries.push(entry);
        }
    }

    if overflowing {
        toolbar = toolbar.push(overflow_toggle(state));
    }

    let toolbar_style = *state.toolbar_style();
    let mut column = Column::new().push(
        container(toolbar)
            .width(Length::Fill)
            .style(move |_theme| toolbar_style.container()),
    );

    if state.overflow_open() && !overflow_entries.is_empty() {
        column = column.push(overflow_menu(state, &overflow_entries));
    }

    let content: Element<'a, Message> = match registry.selected_pane() {
        Some(pane_id) => match registry.pane(pane_id) {
            Some(pane) => pane
                .view(&PaneViewContext {
                    i18n: ctx.i18n,
                    accounts: ctx.accounts,
                    theme_mode: ctx.theme_mode,
                })
                .map(move |message| Message::Pane(pane_id, message)),
            None => Space::new().width(Length::Fill).height(Length::Fill).into(),
        },
        None => Space::new().width(Length::Fill).height(Length::Fill).into(),
    };

    column
        .push(
            container(content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .into()
}

/// A toolbar slot: icon above label, fixed width, expanded height.
fn toolbar_button<'a>(state: &'a State, entry: &'a ActionEntry) -> Element<'a, Message> {
    let checked = state.registry().is_selected(entry.id);
    let toolbar_style = *state.toolbar_style();
    let text_color = state.scheme().text_primary;

    let mut body = Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::XXS)
        .width(Length::Fixed(f32::from(sizing::TOOLBAR_BUTTON_WIDTH)));

    if let Some(handle) = state.cached_icon(entry.id) {
        body = body.push(
            Image::new(handle)
                .width(Length::Fixed(f32::from(sizing::TOOLBAR_ICON)))
                .height(Length::Fixed(f32::from(sizing::TOOLBAR_ICON))),
        );
    }
    body = body.push(Text::new(entry.label.as_str()).size(13));

    let widget = button(body)
        .on_press(Message::ActionPressed(entry.id))
        .height(Length::Fill)
        .padding(spacing::XS)
        .style(move |_theme, _status| toolbar_style.action_button(checked, text_color));

    match &entry.tooltip {
        Some(text) => tooltip(
            widget,
            container(Text::new(text.as_str()).size(13)).padding(spacing::XS),
            tooltip::Position::Bottom,
        )
        .into(),
        None => widget.into(),
    }
}

/// Thin vertical rule between account blocks.
fn separator(state: &State) -> Element<'_, Message> {
    let color = state.toolbar_style().border;
    container(Space::new().width(Length::Fixed(1.0)).height(Length::Fill))
        .padding([spacing::SM, spacing::XS])
        .style(move |_theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(color)),
            ..Default::default()
        })
        .into()
}

/// The `»` button opening the overflow menu.
fn overflow_toggle(state: &State) -> Element<'_, Message> {
    let toolbar_style = *state.toolbar_style();
    let checked = state.overflow_open();
    let text_color = state.scheme().text_primary;
    button(Text::new("»").size(18))
        .on_press(Message::OverflowToggled)
        .height(Length::Fill)
        .padding(spacing::XS)
        .style(move |_theme, _status| toolbar_style.action_button(checked, text_color))
        .into()
}

/// Overflowed entries fall back to default rendering: plain text buttons,
/// no icon-above-text treatment.
fn overflow_menu<'a>(state: &'a State, entries: &[&'a ActionEntry]) -> Element<'a, Message> {
    let toolbar_style = *state.toolbar_style();
    let text_color = state.scheme().text_primary;

    let mut menu = Column::new().spacing(spacing::XXS).padding(spacing::XS);
    for &entry in entries {
        let checked = state.registry().is_selected(entry.id);
        menu = menu.push(
            button(Text::new(entry.label.as_str()))
                .on_press(Message::ActionPressed(entry.id))
                .width(Length::Fill)
                .style(move |_theme, _status| toolbar_style.action_button(checked, text_color)),
        );
    }

    container(menu)
        .width(Length::Fixed(200.0))
        .style(move |_theme| toolbar_style.container())
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::{AccountEvent, NewAccount};
    use crate::ui::settings_window::Options;
    use crate::ui::theming::ColorScheme;

    #[test]
    fn capacity_grows_with_width_and_never_below_three() {
        assert_eq!(visible_capacity(0.0), 3);
        assert_eq!(visible_capacity(104.0 * 5.0), 5);
        assert!(visible_capacity(2000.0) > visible_capacity(500.0));
    }

    #[test]
    fn view_renders_with_accounts() {
        let i18n = I18n::default();
        let mut manager = AccountManager::new();
        for name in ["alice", "bob"] {
            let AccountEvent::Added(_) = manager.add_account(NewAccount {
                url: "https://cloud.example.org".into(),
                display_name: name.into(),
            }) else {
                panic!("expected Added");
            };
        }
        let state = State::new(Options::default(), ColorScheme::dark(), &manager, &i18n);

        let _wide = view(
            &state,
            ViewContext {
                i18n: &i18n,
                accounts: &manager,
                theme_mode: ThemeMode::Dark,
                window_width: 1200.0,
            },
        );
        // Narrow enough to force the overflow path.
        let _narrow = view(
            &state,
            ViewContext {
                i18n: &i18n,
                accounts: &manager,
                theme_mode: ThemeMode::Dark,
                window_width: 200.0,
            },
        );
    }

    #[test]
    fn view_renders_with_no_accounts() {
        let i18n = I18n::default();
        let manager = AccountManager::new();
        let state = State::new(Options::default(), ColorScheme::dark(), &manager, &i18n);
        let _ = view(
            &state,
            ViewContext {
                i18n: &i18n,
                accounts: &manager,
                theme_mode: ThemeMode::System,
                window_width: 800.0,
            },
        );
    }
}
