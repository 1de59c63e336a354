//! Post Manager
//!
//! The single authoritative store for posts. Forums only hold post ids.

use crate::entities::Post;
use crate::error::Result;
use crate::store::Store;

/// Owns every post
#[derive(Default)]
pub struct PostManager {
    posts: Store<Post>,
}

impl PostManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a post; author and forum are not checked
    pub fn add_post(&self, forum_id: &str, author_id: &str, content: &str) -> Post {
        let post = self
            .posts
            .insert_with(|id| Post::new(id, author_id, forum_id, content));
        tracing::debug!(post_id = %post.id, forum_id, author_id, "post added");
        post
    }

    pub fn retrieve_post(&self, post_id: &str) -> Result<Post> {
        self.posts.get(post_id)
    }

    /// Snapshot of all posts, in no particular order
    pub fn retrieve_all_posts(&self) -> Vec<Post> {
        self.posts.list()
    }

    pub fn remove_post(&self, post_id: &str) -> bool {
        self.take_post(post_id).is_some()
    }

    /// Remove a post and hand it back, so callers can unlink it elsewhere
    pub fn take_post(&self, post_id: &str) -> Option<Post> {
        let post = self.posts.remove(post_id);
        tracing::debug!(post_id, removed = post.is_some(), "post remove");
        post
    }

    /// Increment the upvote counter by exactly one
    pub fn upvote(&self, post_id: &str) -> Result<Post> {
        self.posts.update(post_id, Post::add_upvote)
    }

    /// Increment the downvote counter by exactly one
    pub fn downvote(&self, post_id: &str) -> Result<Post> {
        self.posts.update(post_id, Post::add_downvote)
    }

    /// Append a comment id to the post's comment list
    pub fn attach_comment(&self, post_id: &str, comment_id: &str) -> Result<Post> {
        self.posts
            .update(post_id, |post| post.add_comment(comment_id))
    }

    /// Drop a comment id from whichever post lists it
    ///
    /// Returns the id of the post it was listed under.
    pub fn detach_comment(&self, comment_id: &str) -> Option<String> {
        self.posts.transact(|table| {
            table
                .entries
                .values_mut()
                .find_map(|post| post.remove_comment(comment_id).then(|| post.id.clone()))
        })
    }

    pub fn post_count(&self) -> usize {
        self.posts.len()
    }
}
