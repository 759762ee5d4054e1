//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the E20 opcode and function-code encodings, field extraction,
//! decoding into a closed set of instruction shapes, and a disassembler.
//!
//! # Shapes
//!
//! * Register-register (opcode `000`): `add`, `sub`, `or`, `and`, `slt`, `jr`.
//! * Register-immediate / memory: `addi`, `slti`, `lw`, `sw`, `jeq`.
//! * Control transfer: `j`, `jal`.

/// Instruction decoding into [`decode::Instruction`].
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction field extraction and immediate sign extension.
pub mod instruction;

/// Opcode and function-code constants.
pub mod opcodes;
