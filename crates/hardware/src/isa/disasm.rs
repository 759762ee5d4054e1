//! Instruction Disassembler for the E20.
//!
//! Converts a 16-bit instruction encoding into E20 assembly text for debug
//! tracing, logging, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use e20sim_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0b001_000_001_0000101), "addi $1, $0, 5");
//! ```

use crate::isa::decode::{ImmOp, Instruction, JumpOp, RegOp, decode};

/// Disassembles a 16-bit E20 instruction into assembly text.
///
/// Immediates of the register-immediate shape are shown as signed values,
/// jump targets as absolute addresses. Unrecognized register-register
/// function codes render as `.fill` of the raw word.
pub fn disassemble(word: u16) -> String {
    match decode(word) {
        Instruction::Reg {
            op,
            src_a,
            src_b,
            dst,
        } => match op {
            RegOp::Alu(alu) => format!("{} ${dst}, ${src_a}, ${src_b}", alu.mnemonic()),
            RegOp::Jr => format!("jr ${src_a}"),
            RegOp::Nop(_) => format!(".fill {word}"),
        },
        Instruction::Imm {
            op,
            reg_a,
            reg_b,
            imm,
        } => {
            let imm = imm as i16;
            match op {
                ImmOp::Lw | ImmOp::Sw => {
                    format!("{} ${reg_b}, {imm}(${reg_a})", op.mnemonic())
                }
                ImmOp::Jeq => format!("jeq ${reg_a}, ${reg_b}, {imm}"),
                ImmOp::Addi | ImmOp::Slti => {
                    format!("{} ${reg_b}, ${reg_a}, {imm}", op.mnemonic())
                }
            }
        }
        Instruction::Jump { op, target } => match op {
            JumpOp::J => format!("j {target}"),
            JumpOp::Jal => format!("jal {target}"),
        },
    }
}
