//! E20 General-Purpose Register File.
//!
//! This module implements the register file of the E20. It performs the following:
//! 1. **Storage:** Maintains 8 independent 16-bit registers (`$0`-`$7`).
//! 2. **Invariant Enforcement:** Register `$0` is forced back to zero after every
//!    instruction, even if the instruction's data path targeted it.
//! 3. **Debugging:** Provides a one-line dump of the register state.

use crate::common::constants::{NUM_REGS, ZERO_REG};

/// General-purpose register file.
///
/// Writes to `$0` are accepted so that an instruction sees exactly the data
/// path the hardware would; [`RegisterFile::clear_zero`] restores the
/// invariant once the instruction completes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u16; NUM_REGS],
}

impl RegisterFile {
    /// Creates a register file with all registers set to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7), as extracted from a 3-bit field.
    #[inline(always)]
    pub fn read(&self, idx: usize) -> u16 {
        self.regs[idx]
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    /// * `val` - The 16-bit value to write.
    #[inline(always)]
    pub fn write(&mut self, idx: usize, val: u16) {
        self.regs[idx] = val;
    }

    /// Forces `$0` back to zero. Called at the end of every instruction.
    #[inline(always)]
    pub fn clear_zero(&mut self) {
        self.regs[ZERO_REG] = 0;
    }

    /// Returns all register values in index order.
    pub fn values(&self) -> &[u16; NUM_REGS] {
        &self.regs
    }

    /// Formats the registers on one line for debug logging.
    pub fn dump(&self) -> String {
        self.regs
            .iter()
            .enumerate()
            .map(|(i, v)| format!("${i}={v}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
