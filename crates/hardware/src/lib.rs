//! E20 processor simulator library.
//!
//! This crate implements an instruction-level simulator for the 16-bit E20
//! teaching ISA with an optional LRU cache model:
//! 1. **Core:** Register file, 13-bit program counter, 8192-word memory, and execution.
//! 2. **Memory:** One or two levels of set-associative caches with recency-counter LRU.
//! 3. **ISA:** Field extraction, decoding, and disassembly.
//! 4. **Simulation:** Machine-code loader, run loop, cache trace, and final-state report.

/// Common types and constants (addresses, access kinds, errors).
pub mod common;
/// Simulator configuration (cache geometry, load policy, JSON config).
pub mod config;
/// CPU core (architectural state, execution units, caches).
pub mod core;
/// Instruction set (encodings, decode, disassembly).
pub mod isa;
/// Program loading, run loop, trace, and state report.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, memory, caches, and stats.
pub use crate::core::Cpu;
/// Run loop over a [`Cpu`]; construct with `Simulator::from_config`.
pub use crate::sim::Simulator;
