// SPDX-License-Identifier: MPL-2.0
//! Account domain: connected accounts, their connectivity state, and the
//! manager that owns them.
//!
//! The settings window never owns account data. It consumes the manager's
//! read accessors plus the [`AccountEvent`] stream produced by every
//! mutation, and routes those events into its action/pane registry. Deleting
//! an account persists the remaining set to `accounts.toml` in the config
//! directory.

mod avatar;

pub use avatar::Avatar;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

const ACCOUNTS_FILE: &str = "accounts.toml";

/// Stable handle identifying an account for the lifetime of the process.
///
/// Handles are never reused, so a stale id held by the UI (e.g. a
/// confirmation dialog resolving after the account is gone) can only miss,
/// never alias another account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId(u64);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "account-{}", self.0)
    }
}

/// Connectivity state of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    Connected,
    #[default]
    Disconnected,
}

impl Connectivity {
    pub fn is_connected(self) -> bool {
        matches!(self, Connectivity::Connected)
    }
}

/// A connected account.
#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    url: String,
    display_name: String,
    avatar: Option<Avatar>,
    connectivity: Connectivity,
}

impl Account {
    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn avatar(&self) -> Option<&Avatar> {
        self.avatar.as_ref()
    }

    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Display name elided in the middle so it fits a toolbar button label.
    ///
    /// `max_chars` is the label character budget; names within the budget are
    /// returned unchanged.
    pub fn short_display_name(&self, max_chars: usize) -> String {
        elide_middle(&self.display_name, max_chars)
    }
}

fn elide_middle(name: &str, max_chars: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_chars || max_chars < 2 {
        return name.to_string();
    }
    let keep = max_chars - 1;
    let head = keep / 2 + keep % 2;
    let tail = keep / 2;
    let mut out: String = chars[..head].iter().collect();
    out.push('…');
    out.extend(&chars[chars.len() - tail..]);
    out
}

/// Change notifications produced by manager mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountEvent {
    Added(AccountId),
    Removed(AccountId),
    AvatarChanged(AccountId),
    DisplayNameChanged(AccountId),
    ConnectivityChanged(AccountId, bool),
}

/// Input for creating an account.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub url: String,
    pub display_name: String,
}

/// Serialized form of the account store.
#[derive(Debug, Default, Serialize, Deserialize)]
struct AccountsFile {
    #[serde(default, rename = "account")]
    accounts: Vec<PersistedAccount>,
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedAccount {
    url: String,
    display_name: String,
}

/// Owns the set of connected accounts.
///
/// Accounts keep their insertion order; "the first account" in toolbar
/// semantics is the first element here.
#[derive(Debug)]
pub struct AccountManager {
    accounts: Vec<Account>,
    next_id: u64,
    /// Store directory override for tests; `None` resolves via `app::paths`.
    store_dir: Option<PathBuf>,
}

impl Default for AccountManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountManager {
    /// Creates an empty manager using the default store location.
    pub fn new() -> Self {
        Self {
            accounts: Vec::new(),
            next_id: 1,
            store_dir: None,
        }
    }

    /// Creates an empty manager persisting under `dir` (tests, portable use).
    pub fn with_store_dir(dir: PathBuf) -> Self {
        Self {
            accounts: Vec::new(),
            next_id: 1,
            store_dir: Some(dir),
        }
    }

    /// Loads accounts from the default location.
    ///
    /// Returns (manager, optional warning key); an unreadable store degrades
    /// to an empty manager with a warning the caller can log.
    pub fn load() -> (Self, Option<&'static str>) {
        Self::load_from(None)
    }

    /// Loads accounts from a custom directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<&'static str>) {
        let mut manager = match base_dir.clone() {
            Some(dir) => Self::with_store_dir(dir),
            None => Self::new(),
        };

        let Some(path) = manager.store_path() else {
            return (manager, None);
        };
        if !path.exists() {
            return (manager, None);
        }

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(_) => return (manager, Some("accounts store unreadable")),
        };
        let file: AccountsFile = match toml::from_str(&contents) {
            Ok(file) => file,
            Err(_) => return (manager, Some("accounts store unparsable")),
        };

        for persisted in file.accounts {
            manager.add_account(NewAccount {
                url: persisted.url,
                display_name: persisted.display_name,
            });
        }
        (manager, None)
    }

    /// Persists the current account set.
    pub fn save(&self) -> Result<()> {
        let path = self
            .store_path()
            .ok_or_else(|| Error::Config("could not determine config directory".into()))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = AccountsFile {
            accounts: self
                .accounts
                .iter()
                .map(|a| PersistedAccount {
                    url: a.url.clone(),
                    display_name: a.display_name.clone(),
                })
                .collect(),
        };
        let contents = toml::to_string_pretty(&file)?;
        fs::write(path, contents)?;
        Ok(())
    }

    fn store_path(&self) -> Option<PathBuf> {
        paths::get_app_config_dir_with_override(self.store_dir.clone()).map(|mut path| {
            path.push(ACCOUNTS_FILE);
            path
        })
    }

    /// Accounts in insertion order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn get(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn first(&self) -> Option<AccountId> {
        self.accounts.first().map(|a| a.id)
    }

    /// Adds an account and returns the corresponding event.
    pub fn add_account(&mut self, new: NewAccount) -> AccountEvent {
        let id = AccountId(self.next_id);
        self.next_id += 1;
        self.accounts.push(Account {
            id,
            url: new.url,
            display_name: new.display_name,
            avatar: None,
            connectivity: Connectivity::Disconnected,
        });
        tracing::info!(account = %id, "account added");
        AccountEvent::Added(id)
    }

    /// Deletes an account. Returns `None` for an unknown id (e.g. a stale
    /// confirmation for an account that was already removed).
    pub fn delete_account(&mut self, id: AccountId) -> Option<AccountEvent> {
        let index = self.accounts.iter().position(|a| a.id == id)?;
        self.accounts.remove(index);
        tracing::info!(account = %id, "account removed");
        Some(AccountEvent::Removed(id))
    }

    /// Replaces an account's avatar.
    pub fn set_avatar(&mut self, id: AccountId, avatar: Avatar) -> Option<AccountEvent> {
        let account = self.accounts.iter_mut().find(|a| a.id == id)?;
        account.avatar = Some(avatar);
        Some(AccountEvent::AvatarChanged(id))
    }

    /// Renames an account.
    pub fn set_display_name(&mut self, id: AccountId, name: String) -> Option<AccountEvent> {
        let account = self.accounts.iter_mut().find(|a| a.id == id)?;
        account.display_name = name;
        Some(AccountEvent::DisplayNameChanged(id))
    }

    /// Updates connectivity. Returns an event only on an actual transition.
    pub fn set_connected(&mut self, id: AccountId, connected: bool) -> Option<AccountEvent> {
        let account = self.accounts.iter_mut().find(|a| a.id == id)?;
        let next = if connected {
            Connectivity::Connected
        } else {
            Connectivity::Disconnected
        };
        if account.connectivity == next {
            return None;
        }
        account.connectivity = next;
        Some(AccountEvent::ConnectivityChanged(id, connected))
    }
}
