//! Comment tree

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// A comment together with its reply subtree
///
/// This is the caller-facing snapshot. The CommentManager keeps comments in
/// a flat registry and builds this tree on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author_id: String,
    pub content: String,
    /// Comment this one replied to, if any
    pub parent_id: Option<String>,
    /// Direct replies, oldest first
    pub replies: Vec<Comment>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Ids of the direct replies
    pub fn reply_ids(&self) -> Vec<&str> {
        self.replies.iter().map(|r| r.id.as_str()).collect()
    }

    /// Number of comments below this one
    pub fn descendant_count(&self) -> usize {
        self.replies
            .iter()
            .map(|reply| 1 + reply.descendant_count())
            .sum()
    }

    /// Find a comment anywhere in this subtree
    pub fn find(&self, id: &str) -> Option<&Comment> {
        if self.id == id {
            return Some(self);
        }
        self.replies.iter().find_map(|reply| reply.find(id))
    }
}
