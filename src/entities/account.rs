//! User account

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{timestamp, Entity, EntityKind};

/// A registered user and their karma
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub username: String,
    pub karma: i64,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Account {
    pub fn new(id: String, username: impl Into<String>) -> Self {
        let now = timestamp::now();
        Self {
            id,
            username: username.into(),
            karma: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn increment_karma(&mut self, value: i64) {
        self.adjust_karma(value);
    }

    pub fn decrement_karma(&mut self, value: i64) {
        self.karma = self.karma.saturating_sub(value);
        self.updated_at = timestamp::now();
    }

    /// Add a signed delta, saturating at the i64 bounds
    pub fn adjust_karma(&mut self, delta: i64) {
        self.karma = self.karma.saturating_add(delta);
        self.updated_at = timestamp::now();
    }

    pub fn rename(&mut self, username: impl Into<String>) {
        self.username = username.into();
        self.updated_at = timestamp::now();
    }
}

impl Entity for Account {
    const KIND: EntityKind = EntityKind::Account;

    fn id(&self) -> &str {
        &self.id
    }
}
