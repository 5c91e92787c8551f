// SPDX-License-Identifier: MPL-2.0
//! The toolbar action / content pane registry.
//!
//! Actions and panes live in arenas addressed by stable handles; the toolbar
//! is an ordered list of action entries split by a sentinel index into the
//! per-account block (before) and the fixed General/Network block (after).
//! Side tables map accounts to their action, activity pane, and settings
//! pane, so teardown never chases widget references.
//!
//! Selection is an explicit state machine: `selected: Option<ActionId>`, with
//! [`Registry::select`] the only mutation path. At most one checkable action
//! is ever selected, and separators/logout entries cannot take the selection.
//!
//! Ordering invariant: every mutation keeps account entries strictly before
//! the sentinel and fixed entries after it. Handles are never reused.

use crate::accounts::{AccountId, Avatar};
use crate::ui::panes::Pane;
use std::collections::HashMap;
use std::fmt;

/// Stable handle of a toolbar action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionId(u64);

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "action-{}", self.0)
    }
}

/// Stable handle of a content pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PaneId(u64);

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pane-{}", self.0)
    }
}

/// What a toolbar entry does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionRole {
    /// Account button; default click shows the account's activity pane.
    Account(AccountId),
    /// Per-account logout button; triggers the removal confirmation flow.
    Logout(AccountId),
    /// Structural separator between account blocks.
    Separator,
    General,
    Network,
}

/// Where an entry's icon comes from.
///
/// Themed icons keep their logical path so the style adapter can re-render
/// them for the active palette; avatars are account images and bypass
/// tinting.
#[derive(Debug, Clone)]
pub enum IconSource {
    Themed(&'static str),
    Avatar(Avatar),
    None,
}

/// One toolbar entry.
#[derive(Debug, Clone)]
pub struct ActionEntry {
    pub id: ActionId,
    pub role: ActionRole,
    /// Label shown under the icon, already elided to the button budget.
    pub label: String,
    pub icon: IconSource,
    /// Full display name for hover, when the label is elided or branded.
    pub tooltip: Option<String>,
}

impl ActionEntry {
    pub fn is_separator(&self) -> bool {
        matches!(self.role, ActionRole::Separator)
    }

    /// Checkable actions participate in the exclusive selection group.
    pub fn is_checkable(&self) -> bool {
        matches!(
            self.role,
            ActionRole::Account(_) | ActionRole::General | ActionRole::Network
        )
    }
}

/// Result of tearing down an account's registry entries.
#[derive(Debug)]
pub struct RemovalOutcome {
    pub removed_actions: Vec<ActionId>,
    pub removed_panes: Vec<PaneId>,
    /// True when the removed entries included the current selection; the
    /// caller falls back to the first page.
    pub selection_lost: bool,
}

#[derive(Debug, Default)]
pub struct Registry {
    items: Vec<ActionEntry>,
    /// Index of the insertion boundary: account entries live in
    /// `items[..sentinel]`, fixed entries in `items[sentinel..]`.
    sentinel: usize,
    panes: HashMap<PaneId, Pane>,
    action_pane: HashMap<ActionId, PaneId>,
    account_action: HashMap<AccountId, ActionId>,
    activity_pane: HashMap<AccountId, PaneId>,
    settings_pane: HashMap<AccountId, PaneId>,
    selected: Option<ActionId>,
    next_action: u64,
    next_pane: u64,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            next_action: 1,
            next_pane: 1,
            ..Self::default()
        }
    }

    // ------------------------------------------------------------------
    // Arena management
    // ------------------------------------------------------------------

    /// Stores a pane and returns its handle.
    pub fn add_pane(&mut self, pane: Pane) -> PaneId {
        let id = PaneId(self.next_pane);
        self.next_pane += 1;
        self.panes.insert(id, pane);
        id
    }

    pub fn pane(&self, id: PaneId) -> Option<&Pane> {
        self.panes.get(&id)
    }

    pub fn pane_mut(&mut self, id: PaneId) -> Option<&mut Pane> {
        self.panes.get_mut(&id)
    }

    /// All panes, for the style-changed broadcast.
    pub fn panes_mut(&mut self) -> impl Iterator<Item = &mut Pane> {
        self.panes.values_mut()
    }

    pub fn pane_count(&self) -> usize {
        self.panes.len()
    }

    fn new_action_id(&mut self) -> ActionId {
        let id = ActionId(self.next_action);
        self.next_action += 1;
        id
    }

    /// Inserts an entry at the end of the account block (before the
    /// sentinel).
    pub fn insert_before_sentinel(&mut self, entry_template: EntryTemplate) -> ActionId {
        let id = self.new_action_id();
        self.items.insert(self.sentinel, entry_template.build(id));
        self.sentinel += 1;
        id
    }

    /// Appends an entry to the fixed block (after the sentinel).
    pub fn push_fixed(&mut self, entry_template: EntryTemplate) -> ActionId {
        let id = self.new_action_id();
        self.items.push(entry_template.build(id));
        id
    }

    pub fn items(&self) -> &[ActionEntry] {
        &self.items
    }

    /// Index of the sentinel boundary (end of the account block).
    pub fn sentinel_index(&self) -> usize {
        self.sentinel
    }

    pub fn entry(&self, id: ActionId) -> Option<&ActionEntry> {
        self.items.iter().find(|e| e.id == id)
    }

    pub fn entry_mut(&mut self, id: ActionId) -> Option<&mut ActionEntry> {
        self.items.iter_mut().find(|e| e.id == id)
    }

    // ------------------------------------------------------------------
    // Mappings
    // ------------------------------------------------------------------

    /// Maps an action to the pane it shows. Several actions may map to the
    /// same pane.
    pub fn map_action(&mut self, action: ActionId, pane: PaneId) {
        self.action_pane.insert(action, pane);
    }

    pub fn pane_for_action(&self, action: ActionId) -> Option<PaneId> {
        self.action_pane.get(&action).copied()
    }

    /// Registers an account's side-table entries.
    pub fn register_account(
        &mut self,
        account: AccountId,
        action: ActionId,
        activity: PaneId,
        settings: PaneId,
    ) {
        self.account_action.insert(account, action);
        self.activity_pane.insert(account, activity);
        self.settings_pane.insert(account, settings);
    }

    pub fn account_action(&self, account: AccountId) -> Option<ActionId> {
        self.account_action.get(&account).copied()
    }

    pub fn activity_pane_id(&self, account: AccountId) -> Option<PaneId> {
        self.activity_pane.get(&account).copied()
    }

    pub fn settings_pane_id(&self, account: AccountId) -> Option<PaneId> {
        self.settings_pane.get(&account).copied()
    }

    /// Number of live accounts known to the registry.
    pub fn account_count(&self) -> usize {
        self.account_action.len()
    }

    /// First checkable action that shows the given pane, in toolbar order.
    /// Used for reverse lookups when a pane is shown without a click.
    pub fn action_for_pane(&self, pane: PaneId) -> Option<ActionId> {
        self.items
            .iter()
            .filter(|entry| entry.is_checkable())
            .find(|entry| self.action_pane.get(&entry.id) == Some(&pane))
            .map(|entry| entry.id)
    }

    // ------------------------------------------------------------------
    // Selection state machine
    // ------------------------------------------------------------------

    /// Selects a checkable action and returns the pane it maps to.
    ///
    /// Unknown ids, separators, logout entries, and unmapped actions are
    /// checked no-ops returning `None`; the previous selection stays.
    pub fn select(&mut self, action: ActionId) -> Option<PaneId> {
        let entry = self.entry(action)?;
        if !entry.is_checkable() {
            return None;
        }
        let pane = self.pane_for_action(action)?;
        self.selected = Some(action);
        Some(pane)
    }

    pub fn selected(&self) -> Option<ActionId> {
        self.selected
    }

    pub fn is_selected(&self, action: ActionId) -> bool {
        self.selected == Some(action)
    }

    /// Pane of the current selection.
    pub fn selected_pane(&self) -> Option<PaneId> {
        self.selected.and_then(|action| self.pane_for_action(action))
    }

    /// First checkable toolbar action, in order.
    pub fn first_checkable(&self) -> Option<ActionId> {
        self.items
            .iter()
            .find(|entry| entry.is_checkable())
            .map(|entry| entry.id)
    }

    // ------------------------------------------------------------------
    // Teardown
    // ------------------------------------------------------------------

    /// Removes everything the registry holds for an account: its settings
    /// pane and registry entry, its activity pane, and every toolbar entry
    /// referencing either pane (account action, separator, logout).
    ///
    /// Returns `None` for an account the registry does not know (stale
    /// event). Sentinel and selection state stay consistent.
    pub fn remove_account(&mut self, account: AccountId) -> Option<RemovalOutcome> {
        let settings = self.settings_pane.remove(&account);
        let activity = self.activity_pane.remove(&account);
        self.account_action.remove(&account);

        if settings.is_none() && activity.is_none() {
            return None;
        }
        let doomed: Vec<PaneId> = settings.into_iter().chain(activity).collect();

        let mut removed_actions = Vec::new();
        let mut kept = Vec::with_capacity(self.items.len());
        let mut sentinel = self.sentinel;
        for (index, entry) in std::mem::take(&mut self.items).into_iter().enumerate() {
            let mapped = self.action_pane.get(&entry.id).copied();
            let is_doomed = mapped.is_some_and(|pane| doomed.contains(&pane));
            if is_doomed {
                self.action_pane.remove(&entry.id);
                if index < self.sentinel {
                    sentinel -= 1;
                }
                removed_actions.push(entry.id);
            } else {
                kept.push(entry);
            }
        }
        self.items = kept;
        self.sentinel = sentinel;

        let mut removed_panes = Vec::new();
        for pane in &doomed {
            if self.panes.remove(pane).is_some() {
                removed_panes.push(*pane);
            }
        }

        let selection_lost = self
            .selected
            .is_some_and(|selected| removed_actions.contains(&selected));
        if selection_lost {
            self.selected = None;
        }

        Some(RemovalOutcome {
            removed_actions,
            removed_panes,
            selection_lost,
        })
    }
}

/// Template for creating a toolbar entry; the registry assigns the id.
#[derive(Debug, Clone)]
pub struct EntryTemplate {
    pub role: ActionRole,
    pub label: String,
    pub icon: IconSource,
    pub tooltip: Option<String>,
}

impl EntryTemplate {
    pub fn separator() -> Self {
        Self {
            role: ActionRole::Separator,
            label: String::new(),
            icon: IconSource::None,
            tooltip: None,
        }
    }

    fn build(self, id: ActionId) -> ActionEntry {
        ActionEntry {
            id,
            role: self.role,
            label: self.label,
            icon: self.icon,
            tooltip: self.tooltip,
        }
    }
}
