//! Cache Hierarchy Coordinator.
//!
//! Sequences a memory access through up to two cache levels:
//!
//! - Loads always access L1. L2, if present, is accessed only when L1
//!   missed. The overall load is a hit if any consulted level hit.
//! - Stores always access L1 and, if present, L2.
//!
//! Every level touched produces one [`CacheAccess`].

use super::Cache;
use crate::common::{AccessKind, CacheLevel, ConfigError, WordAddr};
use crate::config::CacheHierarchyConfig;

/// Outcome of one access at one cache level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheAccess {
    /// Level that was accessed.
    pub level: CacheLevel,
    /// Classification of the access.
    pub kind: AccessKind,
    /// Row the address mapped to.
    pub row: usize,
}

/// The per-level accesses made for one load or store, in level order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HierarchyAccess {
    /// L1 access; always made.
    pub l1: CacheAccess,
    /// L2 access, if L2 exists and was consulted.
    pub l2: Option<CacheAccess>,
}

impl HierarchyAccess {
    /// Returns true if the access was a load that hit in any consulted level.
    pub fn is_hit(&self) -> bool {
        self.iter().any(|access| access.kind == AccessKind::Hit)
    }

    /// Iterates over the accesses in level order.
    pub fn iter(&self) -> impl Iterator<Item = &CacheAccess> {
        std::iter::once(&self.l1).chain(self.l2.as_ref())
    }
}

/// L1 cache plus an optional L2 cache.
#[derive(Clone, Debug)]
pub struct CacheHierarchy {
    l1: Cache,
    l2: Option<Cache>,
}

impl CacheHierarchy {
    /// Builds empty caches for every configured level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Geometry`] naming the first invalid level.
    pub fn new(config: &CacheHierarchyConfig) -> Result<Self, ConfigError> {
        let l1 = Cache::new(CacheLevel::L1, config.l1)?;
        let l2 = config
            .l2
            .map(|l2| Cache::new(CacheLevel::L2, l2))
            .transpose()?;
        Ok(Self { l1, l2 })
    }

    /// Returns the L1 cache.
    pub const fn l1(&self) -> &Cache {
        &self.l1
    }

    /// Returns the L2 cache, if configured.
    pub const fn l2(&self) -> Option<&Cache> {
        self.l2.as_ref()
    }

    /// Iterates over the configured caches, L1 first.
    pub fn levels(&self) -> impl Iterator<Item = &Cache> {
        std::iter::once(&self.l1).chain(self.l2.as_ref())
    }

    /// Simulates a load-word access.
    pub fn load(&mut self, addr: WordAddr) -> HierarchyAccess {
        let (l1_hit, l1_row) = self.l1.load_word(addr);
        let l1 = CacheAccess {
            level: CacheLevel::L1,
            kind: AccessKind::from_hit(l1_hit),
            row: l1_row,
        };

        let l2 = match self.l2.as_mut() {
            Some(l2) if !l1_hit => {
                let (hit, row) = l2.load_word(addr);
                Some(CacheAccess {
                    level: CacheLevel::L2,
                    kind: AccessKind::from_hit(hit),
                    row,
                })
            }
            _ => None,
        };

        HierarchyAccess { l1, l2 }
    }

    /// Simulates a store-word access on every level.
    pub fn store(&mut self, addr: WordAddr) -> HierarchyAccess {
        let l1 = CacheAccess {
            level: CacheLevel::L1,
            kind: AccessKind::Store,
            row: self.l1.store_word(addr),
        };
        let l2 = self.l2.as_mut().map(|l2| CacheAccess {
            level: CacheLevel::L2,
            kind: AccessKind::Store,
            row: l2.store_word(addr),
        });
        HierarchyAccess { l1, l2 }
    }
}
