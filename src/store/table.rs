//! Store implementation
//!
//! HashMap-based table behind a single Mutex.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::entities::{next_id, Entity};
use crate::error::{AgoraError, Result};

/// Everything a store guards: the entities plus a side index
#[derive(Debug)]
pub struct Table<E, X = ()> {
    /// Entities by id
    pub entries: HashMap<String, E>,

    /// Extra lookup structure kept consistent with `entries`
    pub index: X,
}

impl<E: Entity, X> Table<E, X> {
    /// Insert an entity under its own id
    pub fn insert(&mut self, entity: E) {
        self.entries.insert(entity.id().to_string(), entity);
    }

    /// Look up an entity, or fail with `NotFound`
    pub fn get(&self, id: &str) -> Result<&E> {
        self.entries
            .get(id)
            .ok_or_else(|| AgoraError::not_found(E::KIND, id))
    }

    /// Mutable lookup, or fail with `NotFound`
    pub fn get_mut(&mut self, id: &str) -> Result<&mut E> {
        self.entries
            .get_mut(id)
            .ok_or_else(|| AgoraError::not_found(E::KIND, id))
    }
}

/// A lock-guarded map of one entity kind
///
/// ## Concurrency:
/// - `table`: one Mutex, held for the full duration of every method
/// - All methods use `&self`; share the store behind an `Arc` or inside a
///   longer-lived owner
pub struct Store<E, X = ()> {
    table: Mutex<Table<E, X>>,
}

impl<E: Entity, X: Default> Store<E, X> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            table: Mutex::new(Table {
                entries: HashMap::new(),
                index: X::default(),
            }),
        }
    }
}

impl<E: Entity, X: Default> Default for Store<E, X> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity, X> Store<E, X> {
    /// Allocate a fresh id, build the entity from it and insert it
    ///
    /// Returns a copy of the stored entity.
    pub fn insert_with<F>(&self, build: F) -> E
    where
        F: FnOnce(String) -> E,
    {
        let entity = build(next_id(E::KIND));
        let mut table = self.table.lock();
        table.insert(entity.clone());
        entity
    }

    /// Get a copy of an entity by id
    pub fn get(&self, id: &str) -> Result<E> {
        self.table.lock().get(id).cloned()
    }

    /// Whether an entity with this id exists
    pub fn contains(&self, id: &str) -> bool {
        self.table.lock().entries.contains_key(id)
    }

    /// Remove an entity, returning it if it was present
    pub fn remove(&self, id: &str) -> Option<E> {
        self.table.lock().entries.remove(id)
    }

    /// Snapshot of all entities, in no particular order
    pub fn list(&self) -> Vec<E> {
        self.table.lock().entries.values().cloned().collect()
    }

    /// Mutate an entity in place and return a copy of the result
    pub fn update<F>(&self, id: &str, mutate: F) -> Result<E>
    where
        F: FnOnce(&mut E),
    {
        let mut table = self.table.lock();
        let entity = table.get_mut(id)?;
        mutate(entity);
        Ok(entity.clone())
    }

    /// Run `f` over the whole table under the lock
    ///
    /// For operations that touch several entries, or entries and the index,
    /// and must appear atomic.
    pub fn transact<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut Table<E, X>) -> R,
    {
        let mut table = self.table.lock();
        f(&mut table)
    }

    /// Number of entities
    pub fn len(&self) -> usize {
        self.table.lock().entries.len()
    }

    /// Whether the store holds no entities
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
