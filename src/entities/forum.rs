//! Forum (subreddit)

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{timestamp, Entity, EntityKind};

/// A forum with its members and the posts submitted to it
///
/// Membership is plain presence in `members`. `post_ids` refers into the
/// PostManager, which stays the only owner of post data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forum {
    pub id: String,
    pub name: String,
    pub members: BTreeSet<String>,
    pub post_ids: Vec<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Forum {
    pub fn new(id: String, name: impl Into<String>) -> Self {
        let now = timestamp::now();
        Self {
            id,
            name: name.into(),
            members: BTreeSet::new(),
            post_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Add a member, returning false if already present
    pub fn add_member(&mut self, user_id: impl Into<String>) -> bool {
        let added = self.members.insert(user_id.into());
        if added {
            self.updated_at = timestamp::now();
        }
        added
    }

    /// Remove a member, returning false if absent
    pub fn remove_member(&mut self, user_id: &str) -> bool {
        let removed = self.members.remove(user_id);
        if removed {
            self.updated_at = timestamp::now();
        }
        removed
    }

    pub fn is_member(&self, user_id: &str) -> bool {
        self.members.contains(user_id)
    }

    pub fn add_post(&mut self, post_id: impl Into<String>) {
        self.post_ids.push(post_id.into());
        self.updated_at = timestamp::now();
    }

    /// Drop a post id, returning false if it was not listed
    pub fn remove_post(&mut self, post_id: &str) -> bool {
        let before = self.post_ids.len();
        self.post_ids.retain(|id| id != post_id);
        let removed = self.post_ids.len() != before;
        if removed {
            self.updated_at = timestamp::now();
        }
        removed
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

impl Entity for Forum {
    const KIND: EntityKind = EntityKind::Forum;

    fn id(&self) -> &str {
        &self.id
    }
}
