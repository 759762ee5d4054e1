//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire processor state. It coordinates the following:
//! 1. **State Management:** Maintains the register file and the 13-bit program counter.
//! 2. **Memory:** Owns the 8192-word data/instruction memory.
//! 3. **Memory Hierarchy:** Optionally routes loads and stores through an L1/L2 cache model.
//! 4. **Statistics:** Counts retired instructions and per-level cache accesses.

/// Instruction execution (ALU, immediates, jumps, branches).
pub mod execution;

/// Load/store handling through the cache hierarchy.
pub mod memory;

use crate::common::{ConfigError, WordAddr};
use crate::config::{Config, LoadPolicy};
use crate::core::arch::{Memory, RegisterFile};
use crate::core::units::cache::CacheHierarchy;
use crate::sim::loader::ProgramImage;
use crate::stats::SimStats;

/// Architectural state of an E20 processor plus its optional cache model.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General purpose registers `$0`..`$7`.
    pub regs: RegisterFile,
    /// Program counter.
    pub pc: WordAddr,
    /// Main memory.
    pub memory: Memory,
    /// Cache model; `None` runs uncached.
    pub caches: Option<CacheHierarchy>,
    /// What a load does to its destination register.
    pub load_policy: LoadPolicy,
    /// Run statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a CPU with the program at address 0, zeroed registers, and `pc = 0`.
    pub fn new(
        image: &ProgramImage,
        caches: Option<CacheHierarchy>,
        load_policy: LoadPolicy,
    ) -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: WordAddr::default(),
            memory: Memory::from_image(image.words()),
            caches,
            load_policy,
            stats: SimStats::new(),
        }
    }

    /// Creates a CPU with caches built from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Geometry`] if a configured cache is unusable.
    pub fn from_config(config: &Config, image: &ProgramImage) -> Result<Self, ConfigError> {
        let caches = config.cache.as_ref().map(CacheHierarchy::new).transpose()?;
        Ok(Self::new(image, caches, config.load_policy))
    }

    /// Reads the instruction word at the program counter.
    #[inline]
    pub fn fetch(&self) -> u16 {
        self.memory.read(self.pc)
    }
}
