//! Identifier generation
//!
//! Ids look like `<prefix>_<n>`. `n` comes from a single atomic sequence
//! seeded once per process from the thread RNG, so concurrent callers never
//! share a mutable seed and never collide.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

use super::EntityKind;

/// Monotonic id allocator
pub struct IdGenerator {
    sequence: AtomicU64,
}

impl IdGenerator {
    /// Create a generator seeded from the thread RNG
    pub fn new() -> Self {
        // Random high bits keep ids from separate runs apart
        let seed = u64::from(rand::random::<u32>()) << 20;
        Self::starting_at(seed)
    }

    /// Create a generator starting at a fixed value
    pub fn starting_at(start: u64) -> Self {
        Self {
            sequence: AtomicU64::new(start),
        }
    }

    /// Allocate the next id for `kind`
    pub fn next(&self, kind: EntityKind) -> String {
        let n = self.sequence.fetch_add(1, Ordering::Relaxed);
        format!("{}_{}", kind.prefix(), n)
    }

    /// The process-wide generator
    pub fn global() -> &'static IdGenerator {
        static GLOBAL: OnceLock<IdGenerator> = OnceLock::new();
        GLOBAL.get_or_init(IdGenerator::new)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Allocate a fresh id from the process-wide generator
pub fn next_id(kind: EntityKind) -> String {
    IdGenerator::global().next(kind)
}
