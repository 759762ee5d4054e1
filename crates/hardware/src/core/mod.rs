//! Core processor implementation.
//!
//! This module contains the CPU, its architectural state, and the execution
//! units it drives.

/// Architecture-specific components (register file, memory).
pub mod arch;

/// CPU core implementation and execution.
pub mod cpu;

/// Execution units (ALU, cache).
pub mod units;

pub use self::cpu::Cpu;
