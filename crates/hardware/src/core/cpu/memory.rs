//! Memory Access Helpers.
//!
//! This module provides the interface between the CPU and the memory subsystem.
//! It performs the following:
//! 1. **Data Movement:** Reads and writes main memory, which always holds the data.
//! 2. **Cache Simulation:** Runs each access through the cache hierarchy, if any.
//! 3. **Trace Emission:** Reports one event per cache level touched.

use super::Cpu;
use crate::common::{SimError, WordAddr};
use crate::config::LoadPolicy;
use crate::core::units::cache::HierarchyAccess;
use crate::sim::trace::{AccessEvent, TraceSink};

impl Cpu {
    /// Performs a load-word into register `dst`.
    ///
    /// Under [`LoadPolicy::MissOnly`] the register is written only when no
    /// consulted cache level hit. Without caches every load counts as a miss.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Trace`] if a trace line can't be written.
    pub fn load<S: TraceSink + ?Sized>(
        &mut self,
        dst: usize,
        addr: WordAddr,
        sink: &mut S,
    ) -> Result<(), SimError> {
        self.stats.loads += 1;

        let access = self.caches.as_mut().map(|caches| caches.load(addr));
        let hit = match access {
            Some(access) => {
                self.report(&access, addr, sink)?;
                access.is_hit()
            }
            None => false,
        };

        if !hit || self.load_policy == LoadPolicy::AlwaysRead {
            self.regs.write(dst, self.memory.read(addr));
        }
        Ok(())
    }

    /// Performs a store-word of `value`.
    ///
    /// Memory is written first; the cache model only records the access.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Trace`] if a trace line can't be written.
    pub fn store<S: TraceSink + ?Sized>(
        &mut self,
        addr: WordAddr,
        value: u16,
        sink: &mut S,
    ) -> Result<(), SimError> {
        self.stats.stores += 1;
        self.memory.write(addr, value);

        if let Some(access) = self.caches.as_mut().map(|caches| caches.store(addr)) {
            self.report(&access, addr, sink)?;
        }
        Ok(())
    }

    fn report<S: TraceSink + ?Sized>(
        &mut self,
        access: &HierarchyAccess,
        addr: WordAddr,
        sink: &mut S,
    ) -> Result<(), SimError> {
        for level in access.iter() {
            self.stats.record_access(level);
            sink.record(&AccessEvent {
                level: level.level,
                kind: level.kind,
                pc: self.pc,
                addr,
                row: level.row,
            })?;
        }
        Ok(())
    }
}
