//! E20 architectural state.
//!
//! This module contains the programmer-visible storage of the machine:
//! 1. **GPRs:** The 8-entry general-purpose register file.
//! 2. **Memory:** The 8192-word main memory.
//!
//! The program counter is a [`crate::common::WordAddr`] held by the CPU.

/// General-Purpose Register file implementation.
pub mod gpr;

/// Main memory.
pub mod memory;

pub use gpr::RegisterFile;
pub use memory::Memory;
