//! Unit tests for the processor core.


/// Instruction execution and load/store handling.
pub mod cpu;
