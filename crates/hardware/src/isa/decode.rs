//! E20 Instruction Decoder.
//!
//! This module turns a 16-bit instruction word into a structured
//! [`Instruction`]. Decoding is pure and total: every one of the 65536 words
//! decodes to exactly one of the three instruction shapes, and the 7-bit
//! immediate of the register-immediate shape is sign-extended here, once.

use crate::common::WordAddr;
use crate::core::units::alu::AluOp;
use crate::isa::instruction::{InstructionBits, sign_extend7};
use crate::isa::opcodes;

/// Operation of a register-register (opcode `000`) instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegOp {
    /// `regC <- regA op regB`.
    Alu(AluOp),
    /// `pc <- regA`.
    Jr,
    /// Unrecognized function code; only advances the PC.
    Nop(u16),
}

/// Operation of a register-immediate or memory instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImmOp {
    /// `regB <- regA + imm`.
    Addi,
    /// `regB <- regA < imm` (unsigned, against the 16-bit sign-extended immediate).
    Slti,
    /// `regB <- mem[regA + imm]`.
    Lw,
    /// `mem[regA + imm] <- regB`.
    Sw,
    /// `if regA == regB { pc <- pc + 1 + imm }`.
    Jeq,
}

impl ImmOp {
    /// Returns the assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Addi => "addi",
            Self::Slti => "slti",
            Self::Lw => "lw",
            Self::Sw => "sw",
            Self::Jeq => "jeq",
        }
    }
}

/// Operation of a control-transfer instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JumpOp {
    /// `pc <- target`.
    J,
    /// `$7 <- pc + 1; pc <- target`.
    Jal,
}

/// A decoded E20 instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Register-register shape.
    Reg {
        /// Operation selected by the function code.
        op: RegOp,
        /// First source register.
        src_a: usize,
        /// Second source register.
        src_b: usize,
        /// Destination register.
        dst: usize,
    },
    /// Register-immediate / memory shape.
    Imm {
        /// Operation selected by the opcode.
        op: ImmOp,
        /// Base / first source register (regA).
        reg_a: usize,
        /// Destination, store source, or second comparand (regB).
        reg_b: usize,
        /// Immediate, sign-extended to 16 bits.
        imm: u16,
    },
    /// Control-transfer shape.
    Jump {
        /// Plain jump or jump-and-link.
        op: JumpOp,
        /// Absolute 13-bit target.
        target: WordAddr,
    },
}

impl Instruction {
    /// Returns true if this instruction is the halt pattern when fetched at `pc`:
    /// an unconditional `j` whose target is its own address.
    #[inline]
    pub fn is_halt_at(&self, pc: WordAddr) -> bool {
        matches!(self, Self::Jump { op: JumpOp::J, target } if *target == pc)
    }

    /// Returns true for load-word and store-word.
    #[inline]
    pub const fn is_memory_access(&self) -> bool {
        matches!(
            self,
            Self::Imm {
                op: ImmOp::Lw | ImmOp::Sw,
                ..
            }
        )
    }
}

/// Decodes a 16-bit instruction word.
pub fn decode(word: u16) -> Instruction {
    match word.opcode() {
        opcodes::OP_REG => Instruction::Reg {
            op: decode_funct(word.funct()),
            src_a: word.reg_a(),
            src_b: word.reg_b(),
            dst: word.reg_c(),
        },
        opcodes::OP_J => Instruction::Jump {
            op: JumpOp::J,
            target: WordAddr::new(word.imm13()),
        },
        opcodes::OP_JAL => Instruction::Jump {
            op: JumpOp::Jal,
            target: WordAddr::new(word.imm13()),
        },
        opcode => {
            let op = match opcode {
                opcodes::OP_ADDI => ImmOp::Addi,
                opcodes::OP_LW => ImmOp::Lw,
                opcodes::OP_SW => ImmOp::Sw,
                opcodes::OP_JEQ => ImmOp::Jeq,
                // The opcode field is three bits wide, so this is OP_SLTI.
                _ => ImmOp::Slti,
            };
            Instruction::Imm {
                op,
                reg_a: word.reg_a(),
                reg_b: word.reg_b(),
                imm: sign_extend7(word.imm7()),
            }
        }
    }
}

fn decode_funct(funct: u16) -> RegOp {
    match funct {
        opcodes::FUNCT_ADD => RegOp::Alu(AluOp::Add),
        opcodes::FUNCT_SUB => RegOp::Alu(AluOp::Sub),
        opcodes::FUNCT_OR => RegOp::Alu(AluOp::Or),
        opcodes::FUNCT_AND => RegOp::Alu(AluOp::And),
        opcodes::FUNCT_SLT => RegOp::Alu(AluOp::Slt),
        opcodes::FUNCT_JR => RegOp::Jr,
        other => RegOp::Nop(other),
    }
}
