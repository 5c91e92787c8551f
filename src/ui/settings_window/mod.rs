// SPDX-License-Identifier: MPL-2.0
//! The settings window: a toolbar-driven dialog over a stacked content area.
//!
//! The toolbar holds one action per connected account (plus its logout
//! action), a separator between account blocks, and a fixed General/Network
//! block after the sentinel boundary. Clicking a checkable action switches
//! the visible pane; account-manager events mutate the registry; theme
//! events recompute the toolbar style and re-render every themed icon.
//!
//! Account removal is a two-phase protocol: the logout action only emits
//! [`Event::RemovalRequested`]; the owning controller runs the confirmation
//! dialog asynchronously and performs the deletion in a later message, after
//! this component's handler has fully unwound. A removal event for an
//! account the registry no longer knows is a checked no-op.

pub mod registry;
pub mod style;
mod view;

pub use registry::{ActionId, ActionRole, PaneId};
pub use view::ViewContext;

use crate::accounts::{AccountEvent, AccountId, AccountManager};
use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::ui::icons;
use crate::ui::panes::{account, activity, general, network, Pane, PaneEvent, PaneMessage};
use crate::ui::theming::{ColorScheme, ThemeMode};
use fluent_bundle::FluentArgs;
use iced::widget::image::Handle;
use iced::Element;
use registry::{EntryTemplate, IconSource, Registry};
use std::collections::HashMap;
use std::time::Duration;
use unic_langid::LanguageIdentifier;

/// Character budget for toolbar button labels; longer display names are
/// elided in the middle.
pub const LABEL_CHAR_BUDGET: usize = 16;

/// Construction options distilled from the configuration.
#[derive(Debug, Clone)]
pub struct Options {
    pub single_account: bool,
    pub show_network_tab: bool,
    pub notification_refresh: Duration,
}

impl From<&Config> for Options {
    fn from(config: &Config) -> Self {
        Self {
            single_account: config.branding.single_account,
            show_network_tab: config.dialog.show_network_tab,
            notification_refresh: Duration::from_secs(config.notification_refresh_secs()),
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    /// A toolbar action was pressed.
    ActionPressed(ActionId),
    /// Select the first toolbar action (deferred startup, removal fallback).
    ShowFirstPage,
    /// Toggle the toolbar overflow menu.
    OverflowToggled,
    /// Message routed to the pane with the given handle.
    Pane(PaneId, PaneMessage),
}

/// Events propagated to the owning controller.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// A folder's configuration changed in some account pane.
    FolderChanged,
    /// Open the folder with this alias in the file manager.
    OpenFolder(String),
    /// The user pressed an account's logout action; run the confirmation
    /// flow and, on confirm, delete the account.
    RemovalRequested(AccountId),
    /// An activity pane asked for a feed refresh from the backend.
    RefreshRequested(AccountId),
    ThemeModeChanged(ThemeMode),
    LanguageChanged(LanguageIdentifier),
    /// The last account disappeared; the window hid itself and the owner
    /// should hide the native window too.
    Hidden,
}

#[derive(Debug)]
pub struct State {
    registry: Registry,
    visible: bool,
    overflow_open: bool,
    options: Options,
    scheme: ColorScheme,
    toolbar_style: style::ToolbarStyle,
    icon_cache: HashMap<ActionId, Handle>,
}

impl State {
    /// Builds the toolbar and seeds the registry from the accounts already
    /// known to the manager. The window starts hidden when no account is
    /// configured (first-run state).
    pub fn new(
        options: Options,
        scheme: ColorScheme,
        manager: &AccountManager,
        i18n: &I18n,
    ) -> Self {
        let mut state = Self {
            registry: Registry::new(),
            visible: false,
            overflow_open: false,
            toolbar_style: style::ToolbarStyle::from_scheme(&scheme),
            options,
            scheme,
            icon_cache: HashMap::new(),
        };

        let general_pane = state
            .registry
            .add_pane(Pane::General(general::State::new(state.scheme.clone())));
        let general_action = state.registry.push_fixed(EntryTemplate {
            role: ActionRole::General,
            label: i18n.tr("action-general"),
            icon: IconSource::Themed(icons::paths::SETTINGS),
            tooltip: None,
        });
        state.registry.map_action(general_action, general_pane);

        if state.options.show_network_tab {
            let network_pane = state
                .registry
                .add_pane(Pane::Network(network::State::new(state.scheme.clone())));
            let network_action = state.registry.push_fixed(EntryTemplate {
                role: ActionRole::Network,
                label: i18n.tr("action-network"),
                icon: IconSource::Themed(icons::paths::NETWORK),
                tooltip: None,
            });
            state.registry.map_action(network_action, network_pane);
        }

        let seeded: Vec<AccountId> = manager.accounts().iter().map(|a| a.id()).collect();
        for id in seeded {
            state.add_account(id, manager, i18n);
        }
        state.visible = !manager.is_empty();
        state.rebuild_icon_cache();
        state
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Re-shows the window (e.g. from the tray controller).
    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn overflow_open(&self) -> bool {
        self.overflow_open
    }

    pub fn toolbar_style(&self) -> &style::ToolbarStyle {
        &self.toolbar_style
    }

    pub fn scheme(&self) -> &ColorScheme {
        &self.scheme
    }

    pub(crate) fn cached_icon(&self, action: ActionId) -> Option<Handle> {
        self.icon_cache.get(&action).cloned()
    }

    // ------------------------------------------------------------------
    // Account events
    // ------------------------------------------------------------------

    /// Routes an account-manager event into the registry.
    ///
    /// For `Removed`, the manager has already dropped the account; the
    /// registry tears down its panes and toolbar entries here.
    pub fn handle_account_event(
        &mut self,
        event: AccountEvent,
        manager: &AccountManager,
        i18n: &I18n,
    ) -> Event {
        match event {
            AccountEvent::Added(id) => {
                self.add_account(id, manager, i18n);
                Event::None
            }
            AccountEvent::Removed(id) => self.remove_account(id, manager),
            AccountEvent::AvatarChanged(id) => {
                self.refresh_avatar(id, manager);
                Event::None
            }
            AccountEvent::DisplayNameChanged(id) => {
                self.refresh_display_name(id, manager);
                Event::None
            }
            AccountEvent::ConnectivityChanged(id, connected) => {
                // Refresh immediately when getting online.
                if connected {
                    self.refresh_activity(id, manager, i18n);
                }
                Event::None
            }
        }
    }

    /// Creates the activity and settings panes for an account and inserts
    /// its toolbar entries before the sentinel. The new account's activity
    /// pane becomes the visible page.
    fn add_account(&mut self, id: AccountId, manager: &AccountManager, i18n: &I18n) {
        let Some(account) = manager.get(id) else {
            return;
        };

        let mut activity_state = activity::State::new(id, self.scheme.clone());
        activity_state.set_notification_refresh_interval(self.options.notification_refresh);
        let activity_pane = self.registry.add_pane(Pane::Activity(activity_state));
        let settings_pane = self
            .registry
            .add_pane(Pane::AccountSettings(account::State::new(
                id,
                self.scheme.clone(),
            )));

        // Not the first account: a separator opens the new block. It maps to
        // the activity pane so teardown finds it.
        if self.registry.account_count() > 0 {
            let separator = self.registry.insert_before_sentinel(EntryTemplate::separator());
            self.registry.map_action(separator, activity_pane);
        }

        let (label, tooltip) = if self.options.single_account {
            (i18n.tr("action-account"), None)
        } else {
            (
                account.short_display_name(LABEL_CHAR_BUDGET),
                Some(account.display_name().to_string()),
            )
        };
        let icon = match account.avatar() {
            Some(avatar) => IconSource::Avatar(avatar.clone()),
            None => IconSource::Themed(icons::paths::ACCOUNT),
        };

        let account_action = self.registry.insert_before_sentinel(EntryTemplate {
            role: ActionRole::Account(id),
            label,
            icon,
            tooltip,
        });
        self.registry.map_action(account_action, activity_pane);

        let logout_action = self.registry.insert_before_sentinel(EntryTemplate {
            role: ActionRole::Logout(id),
            label: i18n.tr("action-logout"),
            icon: IconSource::Themed(icons::paths::LOGOUT),
            tooltip: None,
        });
        self.registry.map_action(logout_action, activity_pane);

        self.registry
            .register_account(id, account_action, activity_pane, settings_pane);

        // Synthesized click: the new account's activity page becomes visible.
        self.registry.select(account_action);

        self.cache_entry_icons(&[account_action, logout_action]);
        self.visible = true;
    }

    fn remove_account(&mut self, id: AccountId, manager: &AccountManager) -> Event {
        // Tear the activity content down before the pane is dropped.
        if let Some(pane_id) = self.registry.activity_pane_id(id) {
            if let Some(Pane::Activity(state)) = self.registry.pane_mut(pane_id) {
                state.remove_account();
            }
        }

        let Some(outcome) = self.registry.remove_account(id) else {
            // Stale event for an account the registry never knew.
            return Event::None;
        };

        for action in &outcome.removed_actions {
            self.icon_cache.remove(action);
        }

        if outcome.selection_lost {
            self.show_first_page();
        }

        // Hide when the last account is deleted: same state as a client
        // started without any account configured.
        if manager.is_empty() {
            self.visible = false;
            return Event::Hidden;
        }
        Event::None
    }

    fn refresh_avatar(&mut self, id: AccountId, manager: &AccountManager) {
        let Some(avatar) = manager.get(id).and_then(|a| a.avatar()).cloned() else {
            return;
        };
        let Some(action) = self.registry.account_action(id) else {
            return;
        };
        if let Some(entry) = self.registry.entry_mut(action) {
            self.icon_cache.insert(action, avatar.handle());
            entry.icon = IconSource::Avatar(avatar);
        }
    }

    fn refresh_display_name(&mut self, id: AccountId, manager: &AccountManager) {
        if self.options.single_account {
            // Branded label stays "Account".
            return;
        }
        let Some(account) = manager.get(id) else {
            return;
        };
        let label = account.short_display_name(LABEL_CHAR_BUDGET);
        let tooltip = Some(account.display_name().to_string());
        let Some(action) = self.registry.account_action(id) else {
            return;
        };
        if let Some(entry) = self.registry.entry_mut(action) {
            entry.label = label;
            entry.tooltip = tooltip;
        }
    }

    fn refresh_activity(&mut self, id: AccountId, manager: &AccountManager, i18n: &I18n) {
        let Some(account) = manager.get(id) else {
            return;
        };
        let entry_text = {
            let mut args = FluentArgs::new();
            args.set("name", account.display_name().to_string());
            i18n.tr_args("activity-connected-entry", &args)
        };
        let Some(pane_id) = self.registry.activity_pane_id(id) else {
            return;
        };
        if let Some(Pane::Activity(state)) = self.registry.pane_mut(pane_id) {
            state.push_entry(entry_text);
            state.refresh();
        }
    }

    // ------------------------------------------------------------------
    // Page switching
    // ------------------------------------------------------------------

    /// Sets the visible content to the pane mapped to the action and takes
    /// the exclusive selection.
    pub fn switch_page(&mut self, action: ActionId) {
        self.registry.select(action);
    }

    /// Selects the first toolbar action, if any exist.
    pub fn show_first_page(&mut self) {
        if let Some(first) = self.registry.first_checkable() {
            self.registry.select(first);
        }
    }

    /// Shows an account's activity pane directly (issues navigation) and
    /// reverse-looks-up the owning action so the exclusive-check state stays
    /// consistent.
    pub fn show_activity_page_for(&mut self, id: AccountId) {
        let Some(pane_id) = self.registry.activity_pane_id(id) else {
            return;
        };
        if let Some(Pane::Activity(state)) = self.registry.pane_mut(pane_id) {
            state.show_issues();
        }
        if let Some(action) = self.registry.action_for_pane(pane_id) {
            self.registry.select(action);
        }
    }

    // ------------------------------------------------------------------
    // Update
    // ------------------------------------------------------------------

    pub fn update(&mut self, message: Message, manager: &AccountManager, i18n: &I18n) -> Event {
        match message {
            Message::ActionPressed(action) => {
                let Some(role) = self.registry.entry(action).map(|entry| entry.role) else {
                    return Event::None;
                };
                match role {
                    ActionRole::Logout(account) => Event::RemovalRequested(account),
                    ActionRole::Account(_) | ActionRole::General | ActionRole::Network => {
                        self.overflow_open = false;
                        self.switch_page(action);
                        Event::None
                    }
                    ActionRole::Separator => Event::None,
                }
            }
            Message::ShowFirstPage => {
                self.show_first_page();
                Event::None
            }
            Message::OverflowToggled => {
                self.overflow_open = !self.overflow_open;
                Event::None
            }
            Message::Pane(pane_id, pane_message) => {
                let Some(pane) = self.registry.pane_mut(pane_id) else {
                    return Event::None;
                };
                match pane.update(pane_message) {
                    PaneEvent::None => Event::None,
                    PaneEvent::OpenFolder(alias) => Event::OpenFolder(alias),
                    PaneEvent::FolderChanged => Event::FolderChanged,
                    PaneEvent::ShowIssues(account) => {
                        self.show_activity_page_for(account);
                        Event::None
                    }
                    PaneEvent::RefreshRequested(account) => {
                        self.refresh_activity(account, manager, i18n);
                        Event::RefreshRequested(account)
                    }
                    PaneEvent::ThemeModeChanged(mode) => Event::ThemeModeChanged(mode),
                    PaneEvent::LanguageChanged(locale) => Event::LanguageChanged(locale),
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Style adaptation
    // ------------------------------------------------------------------

    /// Recomputes the toolbar style, re-renders every themed action icon,
    /// and broadcasts the style change to all panes. Idempotent.
    pub fn style_changed(&mut self, scheme: &ColorScheme) {
        self.scheme = scheme.clone();
        self.toolbar_style = style::ToolbarStyle::from_scheme(scheme);
        self.rebuild_icon_cache();
        for pane in self.registry.panes_mut() {
            pane.style_changed(scheme);
        }
    }

    fn rebuild_icon_cache(&mut self) {
        let actions: Vec<ActionId> = self.registry.items().iter().map(|e| e.id).collect();
        self.cache_entry_icons(&actions);
    }

    fn cache_entry_icons(&mut self, actions: &[ActionId]) {
        for &action in actions {
            let Some(entry) = self.registry.entry(action) else {
                continue;
            };
            match &entry.icon {
                IconSource::Themed(path) => {
                    self.icon_cache
                        .insert(action, icons::color_aware(path, &self.scheme));
                }
                IconSource::Avatar(avatar) => {
                    self.icon_cache.insert(action, avatar.handle());
                }
                IconSource::None => {}
            }
        }
    }

    // ------------------------------------------------------------------
    // View
    // ------------------------------------------------------------------

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        view::view(self, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::{Avatar, NewAccount};

    fn i18n() -> I18n {
        I18n::default()
    }

    fn add(manager: &mut AccountManager, name: &str) -> AccountId {
        let AccountEvent::Added(id) = manager.add_account(NewAccount {
            url: format!("https://cloud.example.org/{name}"),
            display_name: name.to_string(),
        }) else {
            panic!("expected Added");
        };
        id
    }

    /// Window plus manager with `names` accounts already routed through the
    /// add path.
    fn setup(names: &[&str]) -> (State, AccountManager, I18n, Vec<AccountId>) {
        let i18n = i18n();
        let mut manager = AccountManager::new();
        let mut state = State::new(
            Options::default(),
            ColorScheme::dark(),
            &manager,
            &i18n,
        );
        let mut ids = Vec::new();
        for name in names {
            let id = add(&mut manager, name);
            state.handle_account_event(AccountEvent::Added(id), &manager, &i18n);
            ids.push(id);
        }
        (state, manager, i18n, ids)
    }

    fn account_action_count(state: &State) -> usize {
        state
            .registry()
            .items()
            .iter()
            .filter(|e| matches!(e.role, ActionRole::Account(_)))
            .count()
    }

    fn logout_action(state: &State, id: AccountId) -> ActionId {
        state
            .registry()
            .items()
            .iter()
            .find(|e| e.role == ActionRole::Logout(id))
            .map(|e| e.id)
            .expect("logout action")
    }

    #[test]
    fn starts_hidden_with_zero_accounts() {
        let (state, ..) = setup(&[]);
        assert!(!state.is_visible());
        assert_eq!(account_action_count(&state), 0);
        // The fixed General action is still there.
        assert!(state.registry().first_checkable().is_some());
    }

    #[test]
    fn network_tab_is_config_gated() {
        let i18n = i18n();
        let manager = AccountManager::new();

        let without = State::new(Options::default(), ColorScheme::dark(), &manager, &i18n);
        assert!(!without
            .registry()
            .items()
            .iter()
            .any(|e| e.role == ActionRole::Network));

        let options = Options {
            show_network_tab: true,
            ..Options::default()
        };
        let with = State::new(options, ColorScheme::dark(), &manager, &i18n);
        assert!(with
            .registry()
            .items()
            .iter()
            .any(|e| e.role == ActionRole::Network));
    }

    #[test]
    fn added_account_shows_its_activity_pane_checked() {
        let (state, _, _, ids) = setup(&["alice"]);

        assert!(state.is_visible());
        assert_eq!(account_action_count(&state), 1);

        // Exactly one activity and one settings pane for alice.
        let activity = state.registry().activity_pane_id(ids[0]).expect("activity");
        let settings = state.registry().settings_pane_id(ids[0]).expect("settings");
        assert!(state.registry().pane(activity).is_some());
        assert!(state.registry().pane(settings).is_some());

        // The activity pane (not the settings pane) is visible and checked.
        assert_eq!(state.registry().selected_pane(), Some(activity));
        let action = state.registry().account_action(ids[0]).expect("action");
        assert!(state.registry().is_selected(action));
    }

    #[test]
    fn action_count_matches_live_accounts_across_sequences() {
        let (mut state, mut manager, i18n, ids) = setup(&["alice", "bob", "carol"]);
        assert_eq!(account_action_count(&state), 3);

        manager.delete_account(ids[1]);
        state.handle_account_event(AccountEvent::Removed(ids[1]), &manager, &i18n);
        assert_eq!(account_action_count(&state), 2);

        let dave = add(&mut manager, "dave");
        state.handle_account_event(AccountEvent::Added(dave), &manager, &i18n);
        assert_eq!(account_action_count(&state), 3);
        assert_eq!(account_action_count(&state), manager.len());
    }

    #[test]
    fn spec_scenario_add_add_remove_remove() {
        // Zero accounts: hidden.
        let (mut state, mut manager, i18n, _) = setup(&[]);
        assert!(!state.is_visible());

        // Add alice: one action labeled alice, activity visible.
        let alice = add(&mut manager, "alice");
        state.handle_account_event(AccountEvent::Added(alice), &manager, &i18n);
        assert!(state.is_visible());
        assert_eq!(account_action_count(&state), 1);
        let alice_action = state.registry().account_action(alice).expect("action");
        assert_eq!(state.registry().entry(alice_action).unwrap().label, "alice");
        assert_eq!(
            state.registry().selected_pane(),
            state.registry().activity_pane_id(alice)
        );

        // Add bob: separator inserted, two actions, bob's activity wins focus.
        let bob = add(&mut manager, "bob");
        state.handle_account_event(AccountEvent::Added(bob), &manager, &i18n);
        assert_eq!(account_action_count(&state), 2);
        assert!(state.registry().items().iter().any(|e| e.is_separator()));
        assert_eq!(
            state.registry().selected_pane(),
            state.registry().activity_pane_id(bob)
        );

        // Remove alice: bob remains and stays visible.
        manager.delete_account(alice);
        let event = state.handle_account_event(AccountEvent::Removed(alice), &manager, &i18n);
        assert!(matches!(event, Event::None));
        assert_eq!(account_action_count(&state), 1);
        assert_eq!(
            state.registry().selected_pane(),
            state.registry().activity_pane_id(bob)
        );

        // Remove bob: window hides.
        manager.delete_account(bob);
        let event = state.handle_account_event(AccountEvent::Removed(bob), &manager, &i18n);
        assert!(matches!(event, Event::Hidden));
        assert!(!state.is_visible());
        assert_eq!(account_action_count(&state), 0);
    }

    #[test]
    fn removing_visible_account_falls_back_to_first_page() {
        let (mut state, mut manager, i18n, ids) = setup(&["alice", "bob"]);

        // bob (last added) is visible; remove bob.
        manager.delete_account(ids[1]);
        state.handle_account_event(AccountEvent::Removed(ids[1]), &manager, &i18n);

        // First remaining action (alice's) is selected and its pane shown.
        let alice_action = state.registry().account_action(ids[0]).expect("action");
        assert!(state.registry().is_selected(alice_action));
        assert_eq!(
            state.registry().selected_pane(),
            state.registry().activity_pane_id(ids[0])
        );
    }

    #[test]
    fn single_account_branding_uses_generic_label() {
        let i18n = i18n();
        let mut manager = AccountManager::new();
        let options = Options {
            single_account: true,
            ..Options::default()
        };
        let mut state = State::new(options, ColorScheme::dark(), &manager, &i18n);

        let id = add(&mut manager, "alice");
        state.handle_account_event(AccountEvent::Added(id), &manager, &i18n);

        let action = state.registry().account_action(id).expect("action");
        let entry = state.registry().entry(action).expect("entry");
        assert_eq!(entry.label, "Account");
        assert!(entry.tooltip.is_none());

        // Display-name changes keep the branded label.
        manager.set_display_name(id, "renamed".into());
        state.handle_account_event(AccountEvent::DisplayNameChanged(id), &manager, &i18n);
        let entry = state.registry().entry(action).expect("entry");
        assert_eq!(entry.label, "Account");
    }

    #[test]
    fn display_name_change_updates_only_that_action() {
        let (mut state, mut manager, i18n, ids) = setup(&["alice", "bob"]);

        manager.set_display_name(ids[0], "alice.renamed".into());
        state.handle_account_event(AccountEvent::DisplayNameChanged(ids[0]), &manager, &i18n);

        let alice_action = state.registry().account_action(ids[0]).expect("action");
        let bob_action = state.registry().account_action(ids[1]).expect("action");
        assert_eq!(
            state.registry().entry(alice_action).unwrap().label,
            "alice.renamed"
        );
        assert_eq!(state.registry().entry(bob_action).unwrap().label, "bob");
    }

    #[test]
    fn avatar_change_updates_only_that_action() {
        let (mut state, mut manager, i18n, ids) = setup(&["alice", "bob"]);

        let avatar = Avatar::from_rgba(vec![200; 8 * 8 * 4], 8, 8).expect("avatar");
        manager.set_avatar(ids[0], avatar);
        state.handle_account_event(AccountEvent::AvatarChanged(ids[0]), &manager, &i18n);

        let alice_action = state.registry().account_action(ids[0]).expect("action");
        let bob_action = state.registry().account_action(ids[1]).expect("action");
        assert!(matches!(
            state.registry().entry(alice_action).unwrap().icon,
            IconSource::Avatar(_)
        ));
        assert!(matches!(
            state.registry().entry(bob_action).unwrap().icon,
            IconSource::Themed(_)
        ));
    }

    #[test]
    fn logout_press_requests_removal_without_mutating() {
        let (mut state, manager, i18n, ids) = setup(&["alice"]);
        let logout = logout_action(&state, ids[0]);

        let event = state.update(Message::ActionPressed(logout), &manager, &i18n);
        assert!(matches!(event, Event::RemovalRequested(id) if id == ids[0]));
        // Nothing removed yet; deletion happens in a later message.
        assert_eq!(account_action_count(&state), 1);
        assert!(state.is_visible());
    }

    #[test]
    fn stale_removed_event_is_checked_noop() {
        let (mut state, mut manager, i18n, ids) = setup(&["alice"]);

        manager.delete_account(ids[0]);
        state.handle_account_event(AccountEvent::Removed(ids[0]), &manager, &i18n);
        // Second delivery of the same removal: nothing to tear down.
        let event = state.handle_account_event(AccountEvent::Removed(ids[0]), &manager, &i18n);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn switch_page_keeps_exactly_one_checked() {
        let (mut state, manager, i18n, ids) = setup(&["alice", "bob"]);
        let general = state
            .registry()
            .items()
            .iter()
            .find(|e| e.role == ActionRole::General)
            .map(|e| e.id)
            .expect("general action");

        state.update(Message::ActionPressed(general), &manager, &i18n);

        let checked: Vec<ActionId> = state
            .registry()
            .items()
            .iter()
            .filter(|e| state.registry().is_selected(e.id))
            .map(|e| e.id)
            .collect();
        assert_eq!(checked, vec![general]);

        let alice_action = state.registry().account_action(ids[0]).expect("action");
        state.update(Message::ActionPressed(alice_action), &manager, &i18n);
        let checked: Vec<ActionId> = state
            .registry()
            .items()
            .iter()
            .filter(|e| state.registry().is_selected(e.id))
            .map(|e| e.id)
            .collect();
        assert_eq!(checked, vec![alice_action]);
    }

    #[test]
    fn show_first_page_selects_first_action() {
        let (mut state, manager, i18n, ids) = setup(&["alice", "bob"]);
        // bob currently selected (last added wins focus).
        state.update(Message::ShowFirstPage, &manager, &i18n);

        let alice_action = state.registry().account_action(ids[0]).expect("action");
        assert!(state.registry().is_selected(alice_action));
    }

    #[test]
    fn issues_navigation_selects_owner_action_and_issues_tab() {
        let (mut state, manager, i18n, ids) = setup(&["alice", "bob"]);

        // alice's settings pane requests its issues list while bob is shown.
        let settings_pane = state.registry().settings_pane_id(ids[0]).expect("settings");
        state.update(
            Message::Pane(
                settings_pane,
                PaneMessage::Account(account::Message::ShowIssues),
            ),
            &manager,
            &i18n,
        );

        let activity_pane = state.registry().activity_pane_id(ids[0]).expect("activity");
        assert_eq!(state.registry().selected_pane(), Some(activity_pane));
        let alice_action = state.registry().account_action(ids[0]).expect("action");
        assert!(state.registry().is_selected(alice_action));
        if let Some(Pane::Activity(pane)) = state.registry().pane(activity_pane) {
            assert_eq!(pane.tab(), activity::Tab::Issues);
        } else {
            panic!("expected activity pane");
        }
    }

    #[test]
    fn connectivity_refreshes_activity_feed() {
        let (mut state, mut manager, i18n, ids) = setup(&["alice"]);

        manager.set_connected(ids[0], true);
        state.handle_account_event(
            AccountEvent::ConnectivityChanged(ids[0], true),
            &manager,
            &i18n,
        );

        let pane_id = state.registry().activity_pane_id(ids[0]).expect("pane");
        let Some(Pane::Activity(pane)) = state.registry().pane(pane_id) else {
            panic!("expected activity pane");
        };
        assert_eq!(pane.entries().len(), 1);
        assert!(pane.entries()[0].message.contains("alice"));
        assert!(pane.last_refresh().is_some());
    }

    #[test]
    fn style_change_is_idempotent_and_rebuilds_icons() {
        let (mut state, _, _, ids) = setup(&["alice"]);

        state.style_changed(&ColorScheme::light());
        let style_after_first = *state.toolbar_style();
        let keys_after_first: Vec<ActionId> = {
            let mut keys: Vec<_> = state.icon_cache.keys().copied().collect();
            keys.sort();
            keys
        };

        state.style_changed(&ColorScheme::light());
        let keys_after_second: Vec<ActionId> = {
            let mut keys: Vec<_> = state.icon_cache.keys().copied().collect();
            keys.sort();
            keys
        };

        assert_eq!(*state.toolbar_style(), style_after_first);
        assert_eq!(keys_after_first, keys_after_second);

        // Every non-separator action has a rendered icon.
        let action = state.registry().account_action(ids[0]).expect("action");
        assert!(state.cached_icon(action).is_some());
    }

    #[test]
    fn notification_refresh_interval_reaches_activity_panes() {
        let i18n = i18n();
        let mut manager = AccountManager::new();
        let options = Options {
            notification_refresh: Duration::from_secs(42),
            ..Options::default()
        };
        let mut state = State::new(options, ColorScheme::dark(), &manager, &i18n);

        let id = add(&mut manager, "alice");
        state.handle_account_event(AccountEvent::Added(id), &manager, &i18n);

        let pane_id = state.registry().activity_pane_id(id).expect("pane");
        let Some(Pane::Activity(pane)) = state.registry().pane(pane_id) else {
            panic!("expected activity pane");
        };
        assert_eq!(
            pane.notification_refresh_interval(),
            Duration::from_secs(42)
        );
    }

    #[test]
    fn seeding_from_manager_matches_event_driven_adds() {
        let i18n = i18n();
        let mut manager = AccountManager::new();
        add(&mut manager, "alice");
        add(&mut manager, "bob");

        let state = State::new(Options::default(), ColorScheme::dark(), &manager, &i18n);
        assert!(state.is_visible());
        assert_eq!(account_action_count(&state), 2);
        assert!(state.registry().items().iter().any(|e| e.is_separator()));
    }
}
