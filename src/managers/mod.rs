//! Managers Module
//!
//! One manager per entity kind, each a thin command surface over its own
//! [`Store`](crate::store::Store).
//!
//! ## Contract
//! - Create: allocates an id, stamps created/updated time, returns the entity
//! - Get: `NotFound` when the id is absent
//! - Delete: returns whether something was removed, never fails
//! - List (where offered): unordered snapshot
//!
//! Managers never call each other. Anything spanning two managers lives in
//! the [`Engine`](crate::engine::Engine).

mod comment;
mod forum;
mod member;
mod message;
mod post;

pub use comment::CommentManager;
pub use forum::ForumManager;
pub use member::MemberManager;
pub use message::MessageManager;
pub use post::PostManager;
