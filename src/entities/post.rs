//! Post

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{timestamp, Entity, EntityKind};

/// A post submitted to a forum
///
/// `author_id` and `forum_id` are soft references; neither is checked at
/// creation. Vote counters only ever move by one per vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub author_id: String,
    pub forum_id: String,
    pub content: String,
    pub upvotes: u64,
    pub downvotes: u64,
    pub comment_ids: Vec<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn new(
        id: String,
        author_id: impl Into<String>,
        forum_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let now = timestamp::now();
        Self {
            id,
            author_id: author_id.into(),
            forum_id: forum_id.into(),
            content: content.into(),
            upvotes: 0,
            downvotes: 0,
            comment_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn add_upvote(&mut self) {
        self.upvotes += 1;
        self.updated_at = timestamp::now();
    }

    pub fn add_downvote(&mut self) {
        self.downvotes += 1;
        self.updated_at = timestamp::now();
    }

    pub fn add_comment(&mut self, comment_id: impl Into<String>) {
        self.comment_ids.push(comment_id.into());
        self.updated_at = timestamp::now();
    }

    /// Drop a comment id, returning false if it was not listed
    pub fn remove_comment(&mut self, comment_id: &str) -> bool {
        let before = self.comment_ids.len();
        self.comment_ids.retain(|id| id != comment_id);
        let removed = self.comment_ids.len() != before;
        if removed {
            self.updated_at = timestamp::now();
        }
        removed
    }

    /// Upvotes minus downvotes
    pub fn score(&self) -> i64 {
        self.upvotes as i64 - self.downvotes as i64
    }
}

impl Entity for Post {
    const KIND: EntityKind = EntityKind::Post;

    fn id(&self) -> &str {
        &self.id
    }
}
