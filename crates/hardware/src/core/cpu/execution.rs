//! Instruction Execution.
//!
//! Applies one decoded instruction to the architectural state. Every
//! instruction either advances the PC by one or transfers control; `$0` is
//! forced back to zero afterwards whatever the instruction wrote.

use super::Cpu;
use crate::common::constants::LINK_REG;
use crate::common::{SimError, WordAddr};
use crate::core::units::alu;
use crate::isa::decode::{ImmOp, Instruction, JumpOp, RegOp};
use crate::sim::trace::TraceSink;

impl Cpu {
    /// Executes one instruction fetched from the current PC.
    ///
    /// The halt pattern is not special here; a `j` to its own address simply
    /// loops. Callers detect halt before executing.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Trace`] if a cache trace line can't be written.
    pub fn execute<S: TraceSink + ?Sized>(
        &mut self,
        inst: Instruction,
        sink: &mut S,
    ) -> Result<(), SimError> {
        match inst {
            Instruction::Reg {
                op,
                src_a,
                src_b,
                dst,
            } => self.execute_reg(op, src_a, src_b, dst),
            Instruction::Imm {
                op,
                reg_a,
                reg_b,
                imm,
            } => self.execute_imm(op, reg_a, reg_b, imm, sink)?,
            Instruction::Jump { op, target } => self.execute_jump(op, target),
        }

        self.regs.clear_zero();
        self.stats.instructions_retired += 1;
        Ok(())
    }

    fn execute_reg(&mut self, op: RegOp, src_a: usize, src_b: usize, dst: usize) {
        match op {
            RegOp::Alu(alu_op) => {
                let result = alu::execute(alu_op, self.regs.read(src_a), self.regs.read(src_b));
                self.regs.write(dst, result);
                self.pc = self.pc.next();
            }
            RegOp::Jr => {
                self.pc = WordAddr::new(self.regs.read(src_a));
                self.stats.jumps_taken += 1;
            }
            RegOp::Nop(_) => self.pc = self.pc.next(),
        }
    }

    fn execute_imm<S: TraceSink + ?Sized>(
        &mut self,
        op: ImmOp,
        reg_a: usize,
        reg_b: usize,
        imm: u16,
        sink: &mut S,
    ) -> Result<(), SimError> {
        let base = self.regs.read(reg_a);
        match op {
            ImmOp::Addi => self.regs.write(reg_b, base.wrapping_add(imm)),
            ImmOp::Slti => self.regs.write(reg_b, alu::set_less_than(base, imm)),
            ImmOp::Lw => self.load(reg_b, WordAddr::new(base.wrapping_add(imm)), sink)?,
            ImmOp::Sw => {
                let value = self.regs.read(reg_b);
                self.store(WordAddr::new(base.wrapping_add(imm)), value, sink)?;
            }
            ImmOp::Jeq => {
                if base == self.regs.read(reg_b) {
                    self.pc = self.pc.next().offset(imm);
                    self.stats.jumps_taken += 1;
                    return Ok(());
                }
            }
        }
        self.pc = self.pc.next();
        Ok(())
    }

    fn execute_jump(&mut self, op: JumpOp, target: WordAddr) {
        if op == JumpOp::Jal {
            self.regs.write(LINK_REG, self.pc.val().wrapping_add(1));
        }
        self.pc = target;
        self.stats.jumps_taken += 1;
    }
}
