//! Cache access trace.
//!
//! Every cache level touched by a load or store produces one
//! [`AccessEvent`]. Events are handed to a [`TraceSink`] as soon as they
//! happen; the CLI prints them, tests collect them into a `Vec`.
//!
//! Line formats:
//!
//! ```text
//! Cache L1 has size 4, associativity 1, blocksize 1, rows 4
//! L1 MISS  pc:    2	addr:    0	row:   0
//! ```

use std::fmt;
use std::io::{self, Write};

use crate::common::{AccessKind, CacheLevel, WordAddr};
use crate::core::units::cache::Cache;

/// One cache access, as reported in the trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessEvent {
    /// Cache that was accessed.
    pub level: CacheLevel,
    /// HIT, MISS or SW.
    pub kind: AccessKind,
    /// Address of the load or store instruction.
    pub pc: WordAddr,
    /// Effective memory address.
    pub addr: WordAddr,
    /// Row the address mapped to.
    pub row: usize,
}

impl fmt::Display for AccessEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = format!("{} {}", self.level, self.kind);
        write!(
            f,
            "{label:<8} pc:{:>5}\taddr:{:>5}\trow:{:>4}",
            self.pc, self.addr, self.row
        )
    }
}

/// Consumer of trace events.
pub trait TraceSink {
    /// Receives one event.
    ///
    /// # Errors
    ///
    /// Returns an error if the event could not be written.
    fn record(&mut self, event: &AccessEvent) -> io::Result<()>;
}

impl TraceSink for Vec<AccessEvent> {
    fn record(&mut self, event: &AccessEvent) -> io::Result<()> {
        self.push(*event);
        Ok(())
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn record(&mut self, _event: &AccessEvent) -> io::Result<()> {
        Ok(())
    }
}

/// Writes each event as one line.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    out: W,
}

impl<W: Write> WriterSink<W> {
    /// Wraps a writer.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TraceSink for WriterSink<W> {
    fn record(&mut self, event: &AccessEvent) -> io::Result<()> {
        writeln!(self.out, "{event}")
    }
}

/// Formats the configuration line announcing a cache's resolved geometry.
pub fn format_cache_config(cache: &Cache) -> String {
    let config = cache.config();
    format!(
        "Cache {} has size {}, associativity {}, blocksize {}, rows {}",
        cache.level(),
        config.size,
        config.associativity,
        config.block_size,
        cache.num_rows()
    )
}

/// Writes one configuration line per cache, L1 first.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_cache_configs<'a, W: Write>(
    out: &mut W,
    caches: impl IntoIterator<Item = &'a Cache>,
) -> io::Result<()> {
    for cache in caches {
        writeln!(out, "{}", format_cache_config(cache))?;
    }
    Ok(())
}
