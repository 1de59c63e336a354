//! Forum Manager

use crate::entities::Forum;
use crate::error::Result;
use crate::store::Store;

/// Owns every forum
#[derive(Default)]
pub struct ForumManager {
    forums: Store<Forum>,
}

impl ForumManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a forum with no members and no posts
    pub fn add_forum(&self, name: &str) -> Forum {
        let forum = self.forums.insert_with(|id| Forum::new(id, name));
        tracing::debug!(forum_id = %forum.id, "forum added");
        forum
    }

    pub fn retrieve_forum(&self, forum_id: &str) -> Result<Forum> {
        self.forums.get(forum_id)
    }

    pub fn remove_forum(&self, forum_id: &str) -> bool {
        let removed = self.forums.remove(forum_id).is_some();
        tracing::debug!(forum_id, removed, "forum remove");
        removed
    }

    pub fn list_forums(&self) -> Vec<Forum> {
        self.forums.list()
    }

    /// Add a user to the forum; joining twice is a no-op
    pub fn add_member(&self, forum_id: &str, user_id: &str) -> Result<Forum> {
        self.forums.update(forum_id, |forum| {
            forum.add_member(user_id);
        })
    }

    /// Remove a user from the forum; leaving twice is a no-op
    pub fn remove_member(&self, forum_id: &str, user_id: &str) -> Result<Forum> {
        self.forums.update(forum_id, |forum| {
            forum.remove_member(user_id);
        })
    }

    /// Record a post id in the forum's post list
    pub fn attach_post(&self, forum_id: &str, post_id: &str) -> Result<Forum> {
        self.forums
            .update(forum_id, |forum| forum.add_post(post_id))
    }

    /// Drop a post id from the forum's post list
    pub fn detach_post(&self, forum_id: &str, post_id: &str) -> Result<Forum> {
        self.forums.update(forum_id, |forum| {
            forum.remove_post(post_id);
        })
    }
}
