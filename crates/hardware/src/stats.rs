//! Simulation statistics collection and reporting.
//!
//! This module tracks counters for a run. It provides:
//! 1. **Instruction counts:** Retired instructions, loads, stores, and taken jumps.
//! 2. **Cache hierarchy:** Hit, miss, and store counts for L1 and L2.
//! 3. **Reporting:** A human-readable summary via `Display`.

use std::fmt;

use crate::common::{AccessKind, CacheLevel};
use crate::core::units::cache::CacheAccess;

/// Access counters for one cache level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LevelStats {
    /// Load hits.
    pub hits: u64,
    /// Load misses.
    pub misses: u64,
    /// Store accesses.
    pub stores: u64,
}

impl LevelStats {
    /// Counts one access.
    pub const fn record(&mut self, kind: AccessKind) {
        match kind {
            AccessKind::Hit => self.hits += 1,
            AccessKind::Miss => self.misses += 1,
            AccessKind::Store => self.stores += 1,
        }
    }

    /// Returns the number of load accesses that reached this level.
    pub const fn loads(&self) -> u64 {
        self.hits + self.misses
    }

    /// Returns the load hit rate in `[0, 1]`, or `None` if no load reached this level.
    pub fn hit_rate(&self) -> Option<f64> {
        match self.loads() {
            0 => None,
            loads => Some(self.hits as f64 / loads as f64),
        }
    }
}

/// Statistics for a whole run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Instructions executed, not counting the final halt.
    pub instructions_retired: u64,
    /// Load-word instructions executed.
    pub loads: u64,
    /// Store-word instructions executed.
    pub stores: u64,
    /// Taken control transfers (`j`, `jal`, `jr`, taken `jeq`).
    pub jumps_taken: u64,
    /// L1 counters.
    pub l1: LevelStats,
    /// L2 counters.
    pub l2: LevelStats,
}

impl SimStats {
    /// Creates zeroed statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one cache access at its level.
    pub const fn record_access(&mut self, access: &CacheAccess) {
        match access.level {
            CacheLevel::L1 => self.l1.record(access.kind),
            CacheLevel::L2 => self.l2.record(access.kind),
        }
    }
}

fn write_level(f: &mut fmt::Formatter<'_>, level: CacheLevel, stats: &LevelStats) -> fmt::Result {
    write!(
        f,
        "  {level}: {} hits, {} misses, {} stores",
        stats.hits, stats.misses, stats.stores
    )?;
    match stats.hit_rate() {
        Some(rate) => writeln!(f, " (hit rate {:.2}%)", rate * 100.0),
        None => writeln!(f),
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Statistics:")?;
        writeln!(f, "  instructions: {}", self.instructions_retired)?;
        writeln!(f, "  loads:        {}", self.loads)?;
        writeln!(f, "  stores:       {}", self.stores)?;
        writeln!(f, "  jumps taken:  {}", self.jumps_taken)?;
        write_level(f, CacheLevel::L1, &self.l1)?;
        write_level(f, CacheLevel::L2, &self.l2)
    }
}
