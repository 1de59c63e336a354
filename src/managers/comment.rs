//! Comment Manager
//!
//! Comments form a tree but are stored flat: every comment, root or nested,
//! has its own registry entry so lookup by id is O(1) at any depth. Each
//! record keeps its parent id and the ids of its direct replies; the tree
//! handed to callers is rebuilt from those links.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::config::CommentRemoval;
use crate::entities::{next_id, timestamp, Comment, Entity, EntityKind};
use crate::error::{AgoraError, Result};
use crate::store::Store;

/// Registry entry for one comment
#[derive(Debug, Clone)]
struct CommentRecord {
    id: String,
    author_id: String,
    content: String,
    parent_id: Option<String>,
    reply_ids: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Entity for CommentRecord {
    const KIND: EntityKind = EntityKind::Comment;

    fn id(&self) -> &str {
        &self.id
    }
}

impl CommentRecord {
    fn new(id: String, parent_id: Option<String>, author_id: &str, content: &str) -> Self {
        let now = timestamp::now();
        Self {
            id,
            author_id: author_id.to_string(),
            content: content.to_string(),
            parent_id,
            reply_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Build the caller-facing tree rooted at this record
    ///
    /// Reply ids with no registry entry are skipped.
    fn materialize(&self, registry: &HashMap<String, CommentRecord>) -> Comment {
        Comment {
            id: self.id.clone(),
            author_id: self.author_id.clone(),
            content: self.content.clone(),
            parent_id: self.parent_id.clone(),
            replies: self
                .reply_ids
                .iter()
                .filter_map(|id| registry.get(id))
                .map(|reply| reply.materialize(registry))
                .collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Owns every comment
pub struct CommentManager {
    comments: Store<CommentRecord>,
    removal: CommentRemoval,
}

impl CommentManager {
    pub fn new(removal: CommentRemoval) -> Self {
        Self {
            comments: Store::new(),
            removal,
        }
    }

    /// Removal policy in effect
    pub fn removal_policy(&self) -> CommentRemoval {
        self.removal
    }

    /// Create a comment, as a reply when `parent_id` is given
    ///
    /// An empty parent id counts as none. A missing parent fails with
    /// `ParentNotFound` and nothing is inserted.
    pub fn add_comment(
        &self,
        parent_id: Option<&str>,
        author_id: &str,
        content: &str,
    ) -> Result<Comment> {
        let parent_id = parent_id.filter(|id| !id.is_empty());

        let comment = self.comments.transact(|table| {
            if let Some(parent_id) = parent_id {
                if !table.entries.contains_key(parent_id) {
                    return Err(AgoraError::ParentNotFound(parent_id.to_string()));
                }
            }

            let record = CommentRecord::new(
                next_id(EntityKind::Comment),
                parent_id.map(str::to_string),
                author_id,
                content,
            );

            if let Some(parent_id) = parent_id {
                let parent = table.get_mut(parent_id)?;
                parent.reply_ids.push(record.id.clone());
                parent.updated_at = timestamp::now();
            }

            let comment = record.materialize(&table.entries);
            table.insert(record);
            Ok(comment)
        })?;

        tracing::debug!(comment_id = %comment.id, parent_id = ?comment.parent_id, "comment added");
        Ok(comment)
    }

    /// Fetch a comment with its reply subtree
    pub fn fetch_comment(&self, comment_id: &str) -> Result<Comment> {
        self.comments.transact(|table| {
            let record = table.get(comment_id)?;
            Ok(record.materialize(&table.entries))
        })
    }

    /// Remove a comment
    ///
    /// The id is always removed from the registry and from its parent's
    /// reply list. Under `Orphan` its replies keep their own entries; under
    /// `Cascade` the whole subtree goes.
    pub fn remove_comment(&self, comment_id: &str) -> bool {
        let removal = self.removal;

        let removed = self.comments.transact(|table| {
            let Some(record) = table.entries.remove(comment_id) else {
                return None;
            };

            if let Some(parent_id) = &record.parent_id {
                if let Some(parent) = table.entries.get_mut(parent_id) {
                    parent.reply_ids.retain(|id| id != comment_id);
                    parent.updated_at = timestamp::now();
                }
            }

            let mut count = 1;
            if removal == CommentRemoval::Cascade {
                let mut pending = record.reply_ids;
                while let Some(id) = pending.pop() {
                    if let Some(child) = table.entries.remove(&id) {
                        count += 1;
                        pending.extend(child.reply_ids);
                    }
                }
            }
            Some(count)
        });

        match removed {
            Some(count) => {
                tracing::debug!(comment_id, count, ?removal, "comment removed");
                true
            }
            None => false,
        }
    }

    /// Number of comments in the registry, reachable or not
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }
}

impl Default for CommentManager {
    fn default() -> Self {
        Self::new(CommentRemoval::default())
    }
}
