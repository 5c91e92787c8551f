// SPDX-License-Identifier: MPL-2.0
//! Per-account activity pane.
//!
//! Shows the account's recent activity feed and its sync issues list as two
//! tabs. Feed population lives outside this component: the owning window
//! pushes entries and issues in, and the pane only renders and manages its
//! own tab state. `remove_account` tears the content down when the account
//! disappears.

use crate::accounts::AccountId;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use chrono::{DateTime, Local};
use iced::widget::{button, container, scrollable, Column, Row, Text};
use iced::{Element, Length};
use std::time::Duration;

/// One entry of the activity feed, newest first.
#[derive(Debug, Clone)]
pub struct ActivityEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
}

/// Severity of a sync issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Warning,
    Error,
}

/// One entry of the issues list.
#[derive(Debug, Clone)]
pub struct Issue {
    pub severity: IssueSeverity,
    pub folder: Option<String>,
    pub message: String,
}

/// Visible tab of the pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Activity,
    Issues,
}

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    RefreshPressed,
}

/// Events propagated to the owning window.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    RefreshRequested(AccountId),
}

#[derive(Debug, Clone)]
pub struct State {
    account: AccountId,
    tab: Tab,
    entries: Vec<ActivityEntry>,
    issues: Vec<Issue>,
    refresh_interval: Duration,
    last_refresh: Option<DateTime<Local>>,
    scheme: ColorScheme,
}

impl State {
    pub fn new(account: AccountId, scheme: ColorScheme) -> Self {
        Self {
            account,
            tab: Tab::default(),
            entries: Vec::new(),
            issues: Vec::new(),
            refresh_interval: Duration::from_secs(
                crate::config::DEFAULT_NOTIFICATION_REFRESH_SECS,
            ),
            last_refresh: None,
            scheme,
        }
    }

    pub fn account(&self) -> AccountId {
        self.account
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    pub fn last_refresh(&self) -> Option<DateTime<Local>> {
        self.last_refresh
    }

    /// Selects the issues tab directly; used when an account settings pane
    /// requests navigation to the issues list.
    pub fn show_issues(&mut self) {
        self.tab = Tab::Issues;
    }

    /// Inserts a feed entry at the top.
    pub fn push_entry(&mut self, message: String) {
        self.entries.insert(
            0,
            ActivityEntry {
                timestamp: Local::now(),
                message,
            },
        );
    }

    pub fn push_issue(&mut self, issue: Issue) {
        self.issues.insert(0, issue);
    }

    /// Stamps a refresh; the feed itself is pushed in by the owner.
    pub fn refresh(&mut self) {
        self.last_refresh = Some(Local::now());
    }

    /// Cadence at which the owner should refresh notifications.
    pub fn set_notification_refresh_interval(&mut self, interval: Duration) {
        self.refresh_interval = interval;
    }

    pub fn notification_refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    /// Tears down content when the account is removed.
    pub fn remove_account(&mut self) {
        self.entries.clear();
        self.issues.clear();
        self.last_refresh = None;
    }

    /// Re-themes cached colors after a style change.
    pub fn style_changed(&mut self, scheme: &ColorScheme) {
        self.scheme = scheme.clone();
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::TabSelected(tab) => {
                self.tab = tab;
                Event::None
            }
            Message::RefreshPressed => Event::RefreshRequested(self.account),
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let tab_button = |label_key: &str, tab: Tab| {
            let label = Text::new(i18n.tr(label_key));
            let styled = if self.tab == tab {
                button(label).style(styles::button::selected)
            } else {
                button(label).style(styles::button::unselected)
            };
            styled.on_press(Message::TabSelected(tab))
        };

        let tabs = Row::new()
            .spacing(spacing::SM)
            .push(tab_button("activity-tab-activity", Tab::Activity))
            .push(tab_button("activity-tab-issues", Tab::Issues))
            .push(
                button(Text::new(i18n.tr("activity-refresh-button")))
                    .style(styles::button::unselected)
                    .on_press(Message::RefreshPressed),
            );

        let body: Element<'a, Message> = match self.tab {
            Tab::Activity => self.view_feed(i18n),
            Tab::Issues => self.view_issues(i18n),
        };

        container(
            Column::new()
                .spacing(spacing::MD)
                .padding(spacing::MD)
                .push(tabs)
                .push(body),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::pane)
        .into()
    }

    fn view_feed<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        if self.entries.is_empty() {
            return Text::new(i18n.tr("activity-empty")).into();
        }

        let mut list = Column::new().spacing(spacing::XS);
        for entry in &self.entries {
            list = list.push(
                container(
                    Row::new()
                        .spacing(spacing::SM)
                        .push(Text::new(entry.timestamp.format("%H:%M").to_string()))
                        .push(Text::new(entry.message.as_str())),
                )
                .padding(spacing::XS)
                .style(styles::container::card)
                .width(Length::Fill),
            );
        }
        scrollable(list).height(Length::Fill).into()
    }

    fn view_issues<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        if self.issues.is_empty() {
            return Text::new(i18n.tr("activity-issues-empty")).into();
        }

        let mut list = Column::new().spacing(spacing::XS);
        for issue in &self.issues {
            let color = match issue.severity {
                IssueSeverity::Warning => self.scheme.warning,
                IssueSeverity::Error => self.scheme.error,
            };
            let mut row = Row::new()
                .spacing(spacing::SM)
                .push(Text::new(issue.message.as_str()).color(color));
            if let Some(folder) = &issue.folder {
                row = row.push(Text::new(folder.as_str()));
            }
            list = list.push(
                container(row)
                    .padding(spacing::XS)
                    .style(styles::container::card)
                    .width(Length::Fill),
            );
        }
        scrollable(list).height(Length::Fill).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::{AccountEvent, AccountManager, NewAccount};

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

    fn state() -> State {
        State::new(account_id(), ColorScheme::dark())
    }

    #[test]
    fn starts_on_activity_tab_with_empty_feed() {
        let state = state();
        assert_eq!(state.tab(), Tab::Activity);
        assert!(state.entries().is_empty());
        assert!(state.issues().is_empty());
    }

    #[test]
    fn tab_selection_updates_state() {
        let mut state = state();
        let event = state.update(Message::TabSelected(Tab::Issues));
        assert!(matches!(event, Event::None));
        assert_eq!(state.tab(), Tab::Issues);
    }

    #[test]
    fn refresh_button_requests_refresh_for_owner() {
        let mut state = state();
        let account = state.account();
        let event = state.update(Message::RefreshPressed);
        assert!(matches!(event, Event::RefreshRequested(id) if id == account));
    }

    #[test]
    fn entries_are_newest_first() {
        let mut state = state();
        state.push_entry("first".into());
        state.push_entry("second".into());
        assert_eq!(state.entries()[0].message, "second");
        assert_eq!(state.entries()[1].message, "first");
    }

    #[test]
    fn remove_account_clears_content() {
        let mut state = state();
        state.push_entry("synced".into());
        state.push_issue(Issue {
            severity: IssueSeverity::Error,
            folder: Some("Documents".into()),
            message: "conflict".into(),
        });
        state.refresh();

        state.remove_account();

        assert!(state.entries().is_empty());
        assert!(state.issues().is_empty());
        assert!(state.last_refresh().is_none());
    }

    #[test]
    fn show_issues_switches_tab_without_message() {
        let mut state = state();
        state.show_issues();
        assert_eq!(state.tab(), Tab::Issues);
    }

    #[test]
    fn style_changed_is_idempotent() {
        let mut state = state();
        state.style_changed(&ColorScheme::light());
        let after_first = state.clone();
        state.style_changed(&ColorScheme::light());
        assert_eq!(state.scheme, after_first.scheme);
    }

    #[test]
    fn view_renders_for_both_tabs() {
        let i18n = I18n::default();
        let mut state = state();
        state.push_entry("synced Documents".into());
        let _ = state.view(&i18n);
        state.show_issues();
        let _ = state.view(&i18n);
    }
}
