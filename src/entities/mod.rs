//! Entities Module
//!
//! Value objects for the forum domain.
//!
//! ## Ownership
//! - `Account`  → MemberManager
//! - `Forum`    → ForumManager
//! - `Post`     → PostManager
//! - `Comment`  → CommentManager (tree of replies, flat registry by id)
//! - `Message`  → MessageManager (dual-indexed by sender and receiver)
//!
//! Entities reference each other by id only. Each kind has exactly one
//! authoritative store.

mod account;
mod comment;
mod forum;
mod id;
mod message;
mod post;
pub mod timestamp;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use account::Account;
pub use comment::Comment;
pub use forum::Forum;
pub use id::{next_id, IdGenerator};
pub use message::Message;
pub use post::Post;

/// Kind of entity, also the prefix of its identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Account,
    Forum,
    Post,
    Comment,
    Message,
}

impl EntityKind {
    /// Identifier prefix for this kind
    pub fn prefix(&self) -> &'static str {
        match self {
            EntityKind::Account => "user",
            EntityKind::Forum => "forum",
            EntityKind::Post => "post",
            EntityKind::Comment => "comment",
            EntityKind::Message => "message",
        }
    }

    /// Infer the kind from an identifier's prefix
    ///
    /// "post_42" → Some(Post)
    pub fn of_id(id: &str) -> Option<Self> {
        let (prefix, suffix) = id.split_once('_')?;
        if suffix.is_empty() {
            return None;
        }
        [
            EntityKind::Account,
            EntityKind::Forum,
            EntityKind::Post,
            EntityKind::Comment,
            EntityKind::Message,
        ]
        .into_iter()
        .find(|kind| kind.prefix() == prefix)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Account => "account",
            EntityKind::Forum => "forum",
            EntityKind::Post => "post",
            EntityKind::Comment => "comment",
            EntityKind::Message => "message",
        };
        f.write_str(name)
    }
}

/// An entity held by a [`Store`](crate::store::Store)
pub trait Entity: Clone + Send + 'static {
    /// Kind of this entity
    const KIND: EntityKind;

    /// Unique, immutable identifier
    fn id(&self) -> &str;
}
