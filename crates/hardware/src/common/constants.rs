//! Global Machine Constants.
//!
//! This module defines the architectural constants of the E20 machine. It includes:
//! 1. **Register Constants:** Register count and the indices with fixed roles.
//! 2. **Memory Constants:** Memory size and the 13-bit address mask.
//! 3. **Reporting Constants:** Layout of the final-state memory dump.

/// Number of general-purpose registers (`$0`-`$7`).
pub const NUM_REGS: usize = 8;

/// Register hardwired to zero after every instruction.
pub const ZERO_REG: usize = 0;

/// Register written by `jal` with the return address.
pub const LINK_REG: usize = 7;

/// Number of bits in a memory address.
pub const ADDR_BITS: u32 = 13;

/// Number of 16-bit words in main memory (2^13).
pub const MEM_SIZE: usize = 1 << ADDR_BITS;

/// Mask applied to every computed address and to the program counter.
pub const ADDR_MASK: u16 = (MEM_SIZE - 1) as u16;

/// Number of memory words printed by the default final-state dump.
pub const DEFAULT_DUMP_WORDS: usize = 128;

/// Number of memory words printed per line of the final-state dump.
pub const DUMP_WORDS_PER_LINE: usize = 8;
