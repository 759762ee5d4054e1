//! Simulator: drives the CPU from reset to halt.
//!
//! Each step fetches the word at the PC and decodes it. A `j` whose target
//! is its own address halts the machine without executing; anything else is
//! executed and retired. An optional step cap turns a runaway program into a
//! [`SimError::StepLimitExceeded`].

use tracing::{debug, info};

use crate::common::{ConfigError, SimError, WordAddr};
use crate::config::Config;
use crate::core::Cpu;
use crate::isa::decode::decode;
use crate::isa::disasm::disassemble;
use crate::sim::loader::ProgramImage;
use crate::sim::trace::TraceSink;

/// Result of a single [`Simulator::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// An instruction was executed; the program keeps running.
    Continue,
    /// The halt instruction is at the PC.
    Halted,
}

/// Summary of a completed run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Instructions executed, not counting the halt.
    pub steps: u64,
    /// Address of the halt instruction.
    pub final_pc: WordAddr,
}

/// Top-level simulator: CPU state plus run control.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, memory, caches, stats).
    pub cpu: Cpu,
    max_steps: Option<u64>,
    halted: bool,
}

impl Simulator {
    /// Wraps a CPU with an optional step cap.
    pub const fn new(cpu: Cpu, max_steps: Option<u64>) -> Self {
        Self {
            cpu,
            max_steps,
            halted: false,
        }
    }

    /// Builds the CPU and caches described by `config` and loads `image`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Geometry`] for an unusable cache.
    pub fn from_config(config: &Config, image: &ProgramImage) -> Result<Self, ConfigError> {
        let cpu = Cpu::from_config(config, image)?;
        Ok(Self::new(cpu, config.max_steps))
    }

    /// Returns true once the halt instruction has been reached.
    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    /// Returns the number of instructions executed so far.
    pub const fn steps(&self) -> u64 {
        self.cpu.stats.instructions_retired
    }

    /// Executes at most one instruction.
    ///
    /// # Errors
    ///
    /// - [`SimError::StepLimitExceeded`] if the step cap has been reached.
    /// - [`SimError::Trace`] if a trace line can't be written.
    pub fn step<S: TraceSink + ?Sized>(&mut self, sink: &mut S) -> Result<StepOutcome, SimError> {
        if self.halted {
            return Ok(StepOutcome::Halted);
        }

        let pc = self.cpu.pc;
        let word = self.cpu.fetch();
        let inst = decode(word);
        if inst.is_halt_at(pc) {
            self.halted = true;
            info!(pc = %pc, steps = self.steps(), "halted");
            debug!(regs = %self.cpu.regs.dump(), "final registers");
            return Ok(StepOutcome::Halted);
        }

        let steps = self.steps();
        if self.max_steps.is_some_and(|max| steps >= max) {
            return Err(SimError::StepLimitExceeded { steps, pc });
        }

        debug!(pc = %pc, word = format_args!("{word:#06x}"), "{}", disassemble(word));
        self.cpu.execute(inst, sink)?;
        Ok(StepOutcome::Continue)
    }

    /// Runs until the halt instruction is reached.
    ///
    /// # Errors
    ///
    /// As [`Simulator::step`].
    pub fn run<S: TraceSink + ?Sized>(&mut self, sink: &mut S) -> Result<RunSummary, SimError> {
        while self.step(sink)? == StepOutcome::Continue {}
        Ok(RunSummary {
            steps: self.steps(),
            final_pc: self.cpu.pc,
        })
    }
}
