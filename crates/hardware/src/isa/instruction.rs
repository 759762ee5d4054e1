//! Instruction field extraction.
//!
//! Provides bit extraction for every field of a 16-bit E20 instruction word:
//!
//! ```text
//!  15  13 12  10 9    7 6    4 3      0
//! +------+------+------+------+--------+
//! |  op  | regA | regB | regC | funct  |   register-register
//! |  op  | regA | regB |     imm7      |   register-immediate / memory
//! |  op  |            imm13            |   control transfer
//! +------+-----------------------------+
//! ```

/// Bit shift of the opcode field (bits 13-15).
pub const OPCODE_SHIFT: u16 = 13;
/// Bit mask for the opcode field after shifting.
pub const OPCODE_MASK: u16 = 0x7;
/// Bit shift of the regA field (bits 10-12).
pub const REG_A_SHIFT: u16 = 10;
/// Bit shift of the regB field (bits 7-9).
pub const REG_B_SHIFT: u16 = 7;
/// Bit shift of the regC field (bits 4-6).
pub const REG_C_SHIFT: u16 = 4;
/// Bit mask for a register field after shifting.
pub const REG_MASK: u16 = 0x7;
/// Bit mask for the function code (bits 0-3).
pub const FUNCT_MASK: u16 = 0xF;
/// Bit mask for the 7-bit immediate (bits 0-6).
pub const IMM7_MASK: u16 = 0x7F;
/// Sign bit of the 7-bit immediate.
pub const IMM7_SIGN_BIT: u16 = 0x40;
/// Bits set when sign-extending a negative 7-bit immediate to 16 bits.
pub const IMM7_EXTENSION: u16 = 0xFF80;
/// Bit mask for the 13-bit jump target (bits 0-12).
pub const IMM13_MASK: u16 = 0x1FFF;

/// Field accessors for an encoded E20 instruction.
pub trait InstructionBits {
    /// Extracts the 3-bit opcode (bits 13-15).
    fn opcode(&self) -> u16;

    /// Extracts the regA field (bits 10-12).
    fn reg_a(&self) -> usize;

    /// Extracts the regB field (bits 7-9).
    fn reg_b(&self) -> usize;

    /// Extracts the regC field (bits 4-6), the destination of register-register instructions.
    fn reg_c(&self) -> usize;

    /// Extracts the 4-bit function code (bits 0-3).
    fn funct(&self) -> u16;

    /// Extracts the raw, unextended 7-bit immediate (bits 0-6).
    fn imm7(&self) -> u16;

    /// Extracts the 13-bit absolute jump target (bits 0-12).
    fn imm13(&self) -> u16;
}

impl InstructionBits for u16 {
    #[inline(always)]
    fn opcode(&self) -> u16 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn reg_a(&self) -> usize {
        ((self >> REG_A_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn reg_b(&self) -> usize {
        ((self >> REG_B_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn reg_c(&self) -> usize {
        ((self >> REG_C_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct(&self) -> u16 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn imm7(&self) -> u16 {
        self & IMM7_MASK
    }

    #[inline(always)]
    fn imm13(&self) -> u16 {
        self & IMM13_MASK
    }
}

/// Sign-extends a 7-bit immediate to 16 bits by copying bit 6 into bits 7-15.
///
/// Bits above bit 6 of the input are ignored.
#[inline(always)]
pub const fn sign_extend7(imm: u16) -> u16 {
    let imm = imm & IMM7_MASK;
    if imm & IMM7_SIGN_BIT != 0 {
        imm | IMM7_EXTENSION
    } else {
        imm
    }
}
