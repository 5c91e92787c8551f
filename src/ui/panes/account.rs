// SPDX-License-Identifier: MPL-2.0
//! Per-account settings pane.
//!
//! Displays the account identity, its connectivity status, and the list of
//! synchronized folders. Folder lifecycle itself is managed elsewhere; this
//! pane renders the folders it is given and forwards folder interactions
//! upward as events.

use crate::accounts::{Account, AccountId};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, scrollable, Column, Row, Text};
use iced::{Element, Length};
use std::path::PathBuf;

/// A folder configured for synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncFolder {
    pub alias: String,
    pub local_path: PathBuf,
    pub paused: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    OpenFolder(String),
    TogglePause(String),
    ShowIssues,
}

/// Events propagated to the owning window.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The user asked to open a folder by alias.
    OpenFolder(String),
    /// A folder's configuration changed (pause toggled).
    FolderChanged,
    /// Navigate to this account's issues list.
    ShowIssues(AccountId),
}

#[derive(Debug, Clone)]
pub struct State {
    account: AccountId,
    folders: Vec<SyncFolder>,
    scheme: ColorScheme,
}

impl State {
    pub fn new(account: AccountId, scheme: ColorScheme) -> Self {
        Self {
            account,
            folders: Vec::new(),
            scheme,
        }
    }

    pub fn account(&self) -> AccountId {
        self.account
    }

    pub fn folders(&self) -> &[SyncFolder] {
        &self.folders
    }

    pub fn set_folders(&mut self, folders: Vec<SyncFolder>) {
        self.folders = folders;
    }

    /// Re-themes cached colors after a style change.
    pub fn style_changed(&mut self, scheme: &ColorScheme) {
        self.scheme = scheme.clone();
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::OpenFolder(alias) => Event::OpenFolder(alias),
            Message::TogglePause(alias) => {
                let Some(folder) = self.folders.iter_mut().find(|f| f.alias == alias) else {
                    return Event::None;
                };
                folder.paused = !folder.paused;
                Event::FolderChanged
            }
            Message::ShowIssues => Event::ShowIssues(self.account),
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n, account: Option<&'a Account>) -> Element<'a, Message> {
        let mut content = Column::new().spacing(spacing::MD).padding(spacing::MD);

        if let Some(account) = account {
            let status_key = if account.connectivity().is_connected() {
                "account-status-connected"
            } else {
                "account-status-disconnected"
            };
            let status_color = if account.connectivity().is_connected() {
                self.scheme.success
            } else {
                self.scheme.text_tertiary
            };

            content = content
                .push(Text::new(account.display_name()).size(24))
                .push(
                    Row::new()
                        .spacing(spacing::SM)
                        .push(Text::new(account.url()))
                        .push(Text::new(i18n.tr(status_key)).color(status_color)),
                );
        }

        content = content.push(Text::new(i18n.tr("account-folders-title")).size(18));
        content = content.push(self.view_folders(i18n));
        content = content.push(
            button(Text::new(i18n.tr("account-show-issues")))
                .style(styles::button::unselected)
                .on_press(Message::ShowIssues),
        );

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::pane)
            .into()
    }

    fn view_folders<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        if self.folders.is_empty() {
            return Text::new(i18n.tr("account-no-folders")).into();
        }

        let mut list = Column::new().spacing(spacing::XS);
        for folder in &self.folders {
            let pause_label = if folder.paused { "▶" } else { "⏸" };
            list = list.push(
                container(
                    Row::new()
                        .spacing(spacing::SM)
                        .push(Text::new(folder.alias.as_str()))
                        .push(Text::new(folder.local_path.to_string_lossy().into_owned()))
                        .push(
                            button(Text::new(i18n.tr("account-open-folder")))
                                .style(styles::button::unselected)
                                .on_press(Message::OpenFolder(folder.alias.clone())),
                        )
                        .push(
                            button(Text::new(pause_label))
                                .style(styles::button::unselected)
                                .on_press(Message::TogglePause(folder.alias.clone())),
                        ),
                )
                .padding(spacing::XS)
                .style(styles::container::card)
                .width(Length::Fill),
            );
        }
        scrollable(list).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::{AccountEvent, AccountManager, NewAccount};

    fn manager_with_account() -> (AccountManager, AccountId) {
        let mut manager = AccountManager::new();
        let AccountEvent::Added(id) = manager.add_account(NewAccount {
            url: "https://cloud.example.org".into(),
            display_name: "alice".into(),
        }) else {
            panic!("expected Added");
        };
        (manager, id)
    }

    fn folder(alias: &str) -> SyncFolder {
        SyncFolder {
            alias: alias.to_string(),
            local_path: PathBuf::from("/home/user/Sync"),
            paused: false,
        }
    }

    #[test]
    fn open_folder_forwards_alias() {
        let (_, id) = manager_with_account();
        let mut state = State::new(id, ColorScheme::dark());
        state.set_folders(vec![folder("Documents")]);

        let event = state.update(Message::OpenFolder("Documents".into()));
        assert!(matches!(event, Event::OpenFolder(alias) if alias == "Documents"));
    }

    #[test]
    fn toggle_pause_flips_folder_and_reports_change() {
        let (_, id) = manager_with_account();
        let mut state = State::new(id, ColorScheme::dark());
        state.set_folders(vec![folder("Documents")]);

        let event = state.update(Message::TogglePause("Documents".into()));
        assert!(matches!(event, Event::FolderChanged));
        assert!(state.folders()[0].paused);
    }

    #[test]
    fn toggle_pause_on_unknown_folder_is_noop() {
        let (_, id) = manager_with_account();
        let mut state = State::new(id, ColorScheme::dark());

        let event = state.update(Message::TogglePause("Nope".into()));
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn show_issues_names_the_account() {
        let (_, id) = manager_with_account();
        let mut state = State::new(id, ColorScheme::dark());

        let event = state.update(Message::ShowIssues);
        assert!(matches!(event, Event::ShowIssues(account) if account == id));
    }

    #[test]
    fn view_renders_with_and_without_account() {
        let i18n = I18n::default();
        let (manager, id) = manager_with_account();
        let mut state = State::new(id, ColorScheme::dark());
        state.set_folders(vec![folder("Documents")]);

        let _ = state.view(&i18n, manager.get(id));
        let _ = state.view(&i18n, None);
    }
}
