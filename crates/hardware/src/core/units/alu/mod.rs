//! Arithmetic Logic Unit.
//!
//! Implements the register-register data path of the E20. All arithmetic is
//! performed on 16-bit unsigned values and wraps modulo 2^16; comparisons are
//! unsigned.

/// ALU operation selected by a register-register function code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Bitwise OR.
    Or,
    /// Bitwise AND.
    And,
    /// Set to 1 if `a < b` (unsigned), else 0.
    Slt,
}

impl AluOp {
    /// Returns the assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Or => "or",
            Self::And => "and",
            Self::Slt => "slt",
        }
    }
}

/// Executes an ALU operation on two 16-bit operands.
#[inline]
pub const fn execute(op: AluOp, a: u16, b: u16) -> u16 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        AluOp::Or => a | b,
        AluOp::And => a & b,
        AluOp::Slt => set_less_than(a, b),
    }
}

/// Unsigned set-less-than shared by `slt` and `slti`.
#[inline]
pub const fn set_less_than(a: u16, b: u16) -> u16 {
    (a < b) as u16
}
