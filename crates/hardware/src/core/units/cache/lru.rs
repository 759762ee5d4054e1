//! Recency-Counter LRU Replacement.
//!
//! Each block carries a recency counter: every access to a row ages all of
//! the row's blocks by one, and the block that is hit or installed is reset
//! to zero. The larger the counter, the longer ago the block was used.
//!
//! Loads and stores choose victims differently:
//!
//! - A load miss evicts the block with the strictly largest counter, with
//!   ties going to the lowest way. Validity is not considered.
//! - A store scans the row once and takes a block whenever it is invalid or
//!   older than every block taken so far. The last block taken wins, so an
//!   empty row is filled from its highest way downwards.
//!
//! Both rules go through [`select_victim`] with an explicit
//! [`VictimPreference`].

use super::CacheBlock;

/// Which blocks qualify as victims during the scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VictimPreference {
    /// Only a strictly larger recency counter qualifies (load misses).
    OldestOnly,
    /// An invalid block also qualifies, regardless of its counter (stores).
    InvalidOrOldest,
}

/// Ages every block of a row by one access.
#[inline]
pub fn age(blocks: &mut [CacheBlock]) {
    for block in blocks {
        block.recency = block.recency.saturating_add(1);
    }
}

/// Returns the way to replace within a row.
///
/// The running maximum starts below every counter, so way 0 always
/// qualifies first. For a non-empty row the result is always a valid way.
pub fn select_victim(blocks: &[CacheBlock], preference: VictimPreference) -> usize {
    let mut victim = 0;
    let mut max_recency: Option<u64> = None;

    for (way, block) in blocks.iter().enumerate() {
        let older = max_recency.is_none_or(|max| block.recency > max);
        let qualifies = match preference {
            VictimPreference::OldestOnly => older,
            VictimPreference::InvalidOrOldest => !block.valid || older,
        };
        if qualifies {
            victim = way;
            max_recency = Some(block.recency);
        }
    }

    victim
}
