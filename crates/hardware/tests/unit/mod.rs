//! # Unit Components
//!
//! This module serves as the central hub for the unit tests, organized the
//! same way as the library: shared types, the processor core, ISA
//! definitions, and the simulation layer.

/// Unit tests for shared types (word addresses, errors).
pub mod common;


/// Core definitions: architectural state, execution, ALU, and caches.
pub mod core;

/// Unit tests for the E20 Instruction Set Architecture.
///
/// This module aggregates tests for:
/// - Instruction decoding and field extraction.
/// - Disassembler mnemonic generation.
pub mod isa;

/// Loader, run loop, trace, and final-state report.
pub mod sim;
