//! # Agora
//!
//! An in-memory, concurrency-safe entity store for a forum domain:
//! - Five independent managers (forums, members, posts, comments, messages)
//! - One generic lock-guarded store behind every manager
//! - Vote → karma coordination across managers
//! - Per-manager mailboxes with bounded request timeouts
//! - TCP-based client protocol
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      TCP Server                              │
//! │                  (Multiple Clients)                          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Dispatcher                               │
//! │          (one mailbox per manager, bounded wait)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Engine                                 │
//! │        (routing, vote/karma, post/comment linking)           │
//! └──┬──────────┬──────────┬──────────┬──────────┬──────────────┘
//!    ▼          ▼          ▼          ▼          ▼
//!  Forum     Member      Post      Comment    Message
//!  Manager   Manager    Manager    Manager    Manager
//!    │          │          │          │          │
//!    └──────────┴──── Store<E, X> (Mutex) ───────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;

pub mod dispatch;
pub mod engine;
pub mod entities;
pub mod managers;
pub mod network;
pub mod protocol;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use config::{CommentRemoval, Config};
pub use dispatch::Dispatcher;
pub use engine::{Engine, KarmaChange, PostSubmission, VoteOutcome};
pub use error::{AgoraError, Result};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Agora
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
