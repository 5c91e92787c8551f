// SPDX-License-Identifier: MPL-2.0
//! Content panes of the settings window.
//!
//! The stacked content area shows exactly one [`Pane`] at a time. Panes are
//! stored in the window's registry arena and addressed by handle; this module
//! provides the uniform dispatch surface (update, view, style broadcast) over
//! the concrete pane kinds.

pub mod account;
pub mod activity;
pub mod general;
pub mod network;

use crate::accounts::{AccountId, AccountManager};
use crate::i18n::fluent::I18n;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::Element;
use unic_langid::LanguageIdentifier;

/// A pane instance in the content stack.
#[derive(Debug, Clone)]
pub enum Pane {
    Activity(activity::State),
    AccountSettings(account::State),
    General(general::State),
    Network(network::State),
}

/// Messages routed to a pane by the owning window.
#[derive(Debug, Clone)]
pub enum PaneMessage {
    Activity(activity::Message),
    Account(account::Message),
    General(general::Message),
    Network(network::Message),
}

/// Events a pane propagates to the owning window.
#[derive(Debug, Clone)]
pub enum PaneEvent {
    None,
    RefreshRequested(AccountId),
    OpenFolder(String),
    FolderChanged,
    ShowIssues(AccountId),
    ThemeModeChanged(ThemeMode),
    LanguageChanged(LanguageIdentifier),
}

/// Context required to render a pane.
pub struct PaneViewContext<'a> {
    pub i18n: &'a I18n,
    pub accounts: &'a AccountManager,
    pub theme_mode: ThemeMode,
}

impl Pane {
    /// Routes a message to the pane. A message of the wrong kind (possible
    /// when a queued message outlives a pane swap) short-circuits to
    /// [`PaneEvent::None`].
    pub fn update(&mut self, message: PaneMessage) -> PaneEvent {
        match (self, message) {
            (Pane::Activity(state), PaneMessage::Activity(message)) => {
                match state.update(message) {
                    activity::Event::None => PaneEvent::None,
                    activity::Event::RefreshRequested(id) => PaneEvent::RefreshRequested(id),
                }
            }
            (Pane::AccountSettings(state), PaneMessage::Account(message)) => {
                match state.update(message) {
                    account::Event::None => PaneEvent::None,
                    account::Event::OpenFolder(alias) => PaneEvent::OpenFolder(alias),
                    account::Event::FolderChanged => PaneEvent::FolderChanged,
                    account::Event::ShowIssues(id) => PaneEvent::ShowIssues(id),
                }
            }
            (Pane::General(state), PaneMessage::General(message)) => match state.update(message) {
                general::Event::ThemeModeChanged(mode) => PaneEvent::ThemeModeChanged(mode),
                general::Event::LanguageChanged(locale) => PaneEvent::LanguageChanged(locale),
            },
            (Pane::Network(state), PaneMessage::Network(message)) => {
                state.update(message);
                PaneEvent::None
            }
            _ => PaneEvent::None,
        }
    }

    /// Broadcast target for the window's style-changed notification.
    pub fn style_changed(&mut self, scheme: &ColorScheme) {
        match self {
            Pane::Activity(state) => state.style_changed(scheme),
            Pane::AccountSettings(state) => state.style_changed(scheme),
            Pane::General(state) => state.style_changed(scheme),
            Pane::Network(state) => state.style_changed(scheme),
        }
    }

    pub fn view<'a>(&'a self, ctx: &PaneViewContext<'a>) -> Element<'a, PaneMessage> {
        match self {
            Pane::Activity(state) => state.view(ctx.i18n).map(PaneMessage::Activity),
            Pane::AccountSettings(state) => state
                .view(ctx.i18n, ctx.accounts.get(state.account()))
                .map(PaneMessage::Account),
            Pane::General(state) => state
                .view(ctx.i18n, ctx.theme_mode)
                .map(PaneMessage::General),
            Pane::Network(state) => state.view(ctx.i18n).map(PaneMessage::Network),
        }
    }

    /// The account this activity pane belongs to, if it is one.
    pub fn activity_account(&self) -> Option<AccountId> {
        match self {
            Pane::Activity(state) => Some(state.account()),
            _ => None,
        }
    }

    /// The account this settings pane belongs to, if it is one.
    pub fn settings_account(&self) -> Option<AccountId> {
        match self {
            Pane::AccountSettings(state) => Some(state.account()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::{AccountEvent, NewAccount};

    fn account_id() -> AccountId {
        let mut manager = AccountManager::new();
        let AccountEvent::Added(id) = manager.add_account(NewAccount {
            url: "https://cloud.example.org".into(),
            display_name: "alice".into(),
        }) else {
            panic!("expected Added");
        };
        id
    }

    #[test]
    fn mismatched_message_kind_is_noop() {
        let id = account_id();
        let mut pane = Pane::Activity(activity::State::new(id, ColorScheme::dark()));
        let event = pane.update(PaneMessage::General(general::Message::ThemeModeSelected(
            ThemeMode::Dark,
        )));
        assert!(matches!(event, PaneEvent::None));
    }

    #[test]
    fn activity_account_only_set_for_activity_panes() {
        let id = account_id();
        let activity = Pane::Activity(activity::State::new(id, ColorScheme::dark()));
        let general = Pane::General(general::State::new(ColorScheme::dark()));

        assert_eq!(activity.activity_account(), Some(id));
        assert_eq!(general.activity_account(), None);
        assert_eq!(activity.settings_account(), None);
    }

    #[test]
    fn settings_account_identifies_owner() {
        let id = account_id();
        let pane = Pane::AccountSettings(account::State::new(id, ColorScheme::dark()));
        assert_eq!(pane.settings_account(), Some(id));
    }

    #[test]
    fn show_issues_event_flows_through_dispatch() {
        let id = account_id();
        let mut pane = Pane::AccountSettings(account::State::new(id, ColorScheme::dark()));
        let event = pane.update(PaneMessage::Account(account::Message::ShowIssues));
        assert!(matches!(event, PaneEvent::ShowIssues(account) if account == id));
    }
}
