//! Direct-mapped cache of pawn entries, one table per evaluation worker.
//!
//! The slot for a fingerprint is `key & (capacity - 1)`. A new fingerprint
//! landing on an occupied slot overwrites it. Every probe checks the stored
//! key first, so a collision only costs a recompute and never yields another
//! configuration's data.

use chess_core::Position;
use tracing::{debug, trace};

use crate::config::{ConfigError, DEFAULT_CAPACITY, PawnConfig, validate_capacity};
use crate::entry::Entry;
use crate::pawns::compute_entry;

/// Probe counters, mostly for diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TableStats {
    pub hits: u64,
    pub misses: u64,
}

/// Fixed-capacity pawn hash table.
///
/// Not meant to be shared: each thread that evaluates positions owns its own
/// table, so no synchronization is needed.
pub struct PawnTable {
    entries: Box<[Entry]>,
    mask: usize,
    stats: TableStats,
}

impl PawnTable {
    /// Table with `DEFAULT_CAPACITY` slots.
    pub fn new() -> Self {
        Self::allocate(DEFAULT_CAPACITY)
    }

    /// Table with `capacity` slots. `capacity` must be a non-zero power of two.
    pub fn with_capacity(capacity: usize) -> Result<Self, ConfigError> {
        validate_capacity(capacity)?;
        Ok(Self::allocate(capacity))
    }

    pub fn from_config(config: &PawnConfig) -> Result<Self, ConfigError> {
        Self::with_capacity(config.pawn_table.capacity)
    }

    fn allocate(capacity: usize) -> Self {
        debug_assert!(capacity.is_power_of_two());
        debug!(
            capacity,
            bytes = capacity * std::mem::size_of::<Entry>(),
            "allocating pawn table"
        );
        PawnTable {
            entries: vec![Entry::default(); capacity].into_boxed_slice(),
            mask: capacity - 1,
            stats: TableStats::default(),
        }
    }

    /// Entry for the pawn configuration of `pos`, computing and storing it on
    /// a miss.
    pub fn probe(&mut self, pos: &Position) -> &mut Entry {
        let key = pos.pawn_key();
        let slot = (key as usize) & self.mask;
        let entry = &mut self.entries[slot];

        if entry.key == key {
            self.stats.hits += 1;
            return entry;
        }

        self.stats.misses += 1;
        trace!(key, slot, "pawn table miss");
        compute_entry(pos, entry);
        entry
    }

    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    pub fn stats(&self) -> TableStats {
        self.stats
    }

    /// Forget every stored entry and reset the counters (e.g. for a new game).
    pub fn clear(&mut self) {
        debug!(capacity = self.capacity(), "clearing pawn table");
        self.entries.fill(Entry::default());
        self.stats = TableStats::default();
    }
}

impl Default for PawnTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod table_tests;
