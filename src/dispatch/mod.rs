//! Dispatch Module
//!
//! Request/reply over per-manager mailboxes.
//!
//! ## Architecture
//! - One mailbox (crossbeam channel) and one worker thread per [`Target`]
//! - A request carries its own single-use reply channel
//! - Callers wait a bounded time; expiry is `AgoraError::Timeout`
//!
//! ```text
//!   caller ──Envelope──▶ [forum mailbox]   ──▶ worker ──▶ Engine::execute
//!   caller ──Envelope──▶ [post mailbox]    ──▶ worker ──▶ Engine::execute
//!     ▲                                             │
//!     └──────────────── reply channel ◀─────────────┘
//! ```
//!
//! A worker always finishes the command it started. If the caller has
//! already given up, the reply is dropped.
//!
//! [`Target`]: crate::protocol::Target

mod dispatcher;

pub use dispatcher::{Dispatcher, Execute};
