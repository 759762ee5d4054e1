//! Final machine-state dump.
//!
//! ```text
//! Final state:
//! 	pc=    3
//! 	$0=    0
//! 	...
//! 2085 2102 2103 0000 0000 0000 0000 0000
//! ```

use std::io::{self, Write};

use crate::common::WordAddr;
use crate::common::constants::DUMP_WORDS_PER_LINE;
use crate::core::arch::{Memory, RegisterFile};

/// Writes the program counter, every register, and the first `words` memory cells.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_final_state<W: Write + ?Sized>(
    out: &mut W,
    pc: WordAddr,
    regs: &RegisterFile,
    memory: &Memory,
    words: usize,
) -> io::Result<()> {
    writeln!(out, "Final state:")?;
    writeln!(out, "\tpc={pc:>5}")?;
    for (idx, value) in regs.values().iter().enumerate() {
        writeln!(out, "\t${idx}={value:>5}")?;
    }

    let shown = &memory.words()[..words.min(memory.words().len())];
    for line in shown.chunks(DUMP_WORDS_PER_LINE) {
        for word in line {
            write!(out, "{word:04x} ")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
