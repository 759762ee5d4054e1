//! Cache access classification types.
//!
//! Shared between the cache engine, the hierarchy coordinator, the trace
//! printer and the statistics collector.

use std::fmt;

/// Level of a cache within the hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CacheLevel {
    /// First-level cache, consulted on every access.
    L1,
    /// Optional second-level cache, consulted on L1 load misses and on every store.
    L2,
}

impl CacheLevel {
    /// Returns the label printed in configuration and trace lines.
    pub const fn name(self) -> &'static str {
        match self {
            Self::L1 => "L1",
            Self::L2 => "L2",
        }
    }
}

impl fmt::Display for CacheLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classification of a single cache access.
///
/// Loads are classified as hits or misses; stores are never classified and
/// are always reported as `Store`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessKind {
    /// The tag was present in the row.
    Hit,
    /// The tag was absent and a victim block was replaced.
    Miss,
    /// A store-word access.
    Store,
}

impl AccessKind {
    /// Returns the label printed in trace lines.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hit => "HIT",
            Self::Miss => "MISS",
            Self::Store => "SW",
        }
    }

    /// Classifies a load access.
    #[inline]
    pub const fn from_hit(hit: bool) -> Self {
        if hit { Self::Hit } else { Self::Miss }
    }
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
