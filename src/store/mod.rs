//! Store Module
//!
//! The generic locked map every manager is built on.
//!
//! ## Responsibilities
//! - Own an id → entity map for one entity kind
//! - Allocate ids and insert new entities
//! - Serialize every operation behind one mutex
//! - Carry an optional side index under the same lock (message inboxes)
//!
//! ## Data Structure Choice
//! `HashMap` wrapped in a `parking_lot::Mutex`:
//! - O(1) lookup by id, order is not part of the contract
//! - One lock per store, held for the whole operation and never released
//!   midway; stores never take each other's locks

mod table;

pub use table::{Store, Table};
