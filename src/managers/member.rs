//! Member Manager
//!
//! Owns user accounts and their karma.

use crate::entities::Account;
use crate::error::Result;
use crate::store::Store;

/// Owns every account
#[derive(Default)]
pub struct MemberManager {
    profiles: Store<Account>,
}

impl MemberManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new account with zero karma
    pub fn register_user(&self, display_name: &str) -> Account {
        let account = self
            .profiles
            .insert_with(|id| Account::new(id, display_name));
        tracing::debug!(user_id = %account.id, "user registered");
        account
    }

    pub fn fetch_user(&self, user_id: &str) -> Result<Account> {
        self.profiles.get(user_id)
    }

    pub fn remove_user(&self, user_id: &str) -> bool {
        let removed = self.profiles.remove(user_id).is_some();
        tracing::debug!(user_id, removed, "user remove");
        removed
    }

    pub fn list_users(&self) -> Vec<Account> {
        self.profiles.list()
    }

    pub fn rename_user(&self, user_id: &str, display_name: &str) -> Result<Account> {
        self.profiles
            .update(user_id, |account| account.rename(display_name))
    }

    /// Add `delta` (possibly negative) to the account's karma
    pub fn adjust_karma(&self, user_id: &str, delta: i64) -> Result<Account> {
        self.profiles
            .update(user_id, |account| account.adjust_karma(delta))
    }
}
