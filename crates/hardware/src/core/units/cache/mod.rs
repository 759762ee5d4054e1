//! Set-Associative Cache Model.
//!
//! This module models one cache instance for hit/miss and replacement
//! bookkeeping only: blocks carry a valid bit, a tag and a recency counter,
//! but no data. Main memory always holds the data.
//!
//! Addresses are word addresses, so the block offset is never tracked:
//!
//! ```text
//! block = addr / blocksize
//! row   = block % rows
//! tag   = block / rows
//! ```

/// Two-level coordinator (L1 plus optional L2).
pub mod hierarchy;

/// Recency-counter LRU aging and victim selection.
pub mod lru;

use tracing::trace;

use self::lru::VictimPreference;
use crate::common::{AccessKind, CacheLevel, ConfigError, WordAddr};
use crate::config::CacheConfig;

pub use self::hierarchy::{CacheAccess, CacheHierarchy, HierarchyAccess};

/// One block (way) of a cache row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheBlock {
    /// Whether the block holds a tag.
    pub valid: bool,
    /// Tag of the memory block held, meaningful only when `valid`.
    pub tag: usize,
    /// Accesses to this row since the block was last used; larger is older.
    pub recency: u64,
}

/// One row (set) of `associativity` blocks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheRow {
    blocks: Vec<CacheBlock>,
}

impl CacheRow {
    fn new(associativity: usize) -> Self {
        Self {
            blocks: vec![CacheBlock::default(); associativity],
        }
    }

    /// Returns the blocks of the row in way order.
    pub fn blocks(&self) -> &[CacheBlock] {
        &self.blocks
    }

    fn find(&self, tag: usize) -> Option<usize> {
        self.blocks
            .iter()
            .position(|block| block.valid && block.tag == tag)
    }

    fn install(&mut self, way: usize, tag: usize) {
        self.blocks[way] = CacheBlock {
            valid: true,
            tag,
            recency: 0,
        };
    }
}

/// A single cache: configuration plus `rows` rows of blocks.
#[derive(Clone, Debug)]
pub struct Cache {
    level: CacheLevel,
    config: CacheConfig,
    num_rows: usize,
    rows: Vec<CacheRow>,
}

impl Cache {
    /// Creates an empty cache (all blocks invalid, recency 0).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Geometry`] if any parameter is zero or the size
    /// is not an exact multiple of `associativity * blocksize`.
    pub fn new(level: CacheLevel, config: CacheConfig) -> Result<Self, ConfigError> {
        config.validate(level)?;
        let num_rows = config.num_rows();
        Ok(Self {
            level,
            config,
            num_rows,
            rows: vec![CacheRow::new(config.associativity); num_rows],
        })
    }

    /// Returns the level this cache was built for.
    pub const fn level(&self) -> CacheLevel {
        self.level
    }

    /// Returns the cache geometry.
    pub const fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Returns the number of rows.
    pub const fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns a row by index.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.num_rows()`.
    pub fn row(&self, idx: usize) -> &CacheRow {
        &self.rows[idx]
    }

    /// Splits an address into `(row, tag)`.
    #[inline]
    pub fn locate(&self, addr: WordAddr) -> (usize, usize) {
        let block = addr.index() / self.config.block_size;
        (block % self.num_rows, block / self.num_rows)
    }

    /// Checks for the address without touching replacement state.
    pub fn contains(&self, addr: WordAddr) -> bool {
        let (row, tag) = self.locate(addr);
        self.rows[row].find(tag).is_some()
    }

    /// Simulates a load-word access.
    ///
    /// Ages every block of the row once. On a tag match the block becomes
    /// most recently used; otherwise the oldest block is replaced.
    ///
    /// # Returns
    ///
    /// `(hit, row)`.
    pub fn load_word(&mut self, addr: WordAddr) -> (bool, usize) {
        let (row_idx, tag) = self.locate(addr);
        let row = &mut self.rows[row_idx];

        lru::age(&mut row.blocks);

        let hit = match row.find(tag) {
            Some(way) => {
                row.blocks[way].recency = 0;
                true
            }
            None => {
                let way = lru::select_victim(&row.blocks, VictimPreference::OldestOnly);
                row.install(way, tag);
                false
            }
        };

        trace!(
            level = %self.level,
            addr = %addr,
            row = row_idx,
            tag,
            kind = %AccessKind::from_hit(hit),
            "cache load"
        );
        (hit, row_idx)
    }

    /// Simulates a store-word access.
    ///
    /// Stores are never classified as hit or miss: the victim is chosen with
    /// invalid blocks preferred, every block is aged, and the tag is
    /// installed, even if it was already present in another way.
    ///
    /// # Returns
    ///
    /// The row index.
    pub fn store_word(&mut self, addr: WordAddr) -> usize {
        let (row_idx, tag) = self.locate(addr);
        let row = &mut self.rows[row_idx];

        let way = lru::select_victim(&row.blocks, VictimPreference::InvalidOrOldest);
        lru::age(&mut row.blocks);
        row.install(way, tag);

        trace!(level = %self.level, addr = %addr, row = row_idx, tag, way, "cache store");
        row_idx
    }
}
