//! Error definitions.
//!
//! This module defines every failure the simulator can report. It provides:
//! 1. **Load Errors:** Problems reading or parsing a machine-code listing.
//! 2. **Configuration Errors:** Malformed cache configuration strings, invalid
//!    cache geometry, and unreadable JSON configuration.
//! 3. **Simulation Errors:** Conditions that stop a run before it halts.
//!
//! Execution itself never fails: arithmetic wraps, addresses are masked, and
//! unknown function codes are no-ops.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::addr::WordAddr;
use super::constants::MEM_SIZE;
use super::data::CacheLevel;

/// Failure to load a machine-code listing into memory.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be opened or read.
    #[error("Can't open file {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A line does not have the form `ram[N] = 16'bBITS;`.
    #[error("Can't parse line {line_number}: {line}")]
    Parse {
        /// One-based line number within the listing.
        line_number: usize,
        /// The offending line.
        line: String,
    },

    /// A line's address is not the next sequential address.
    #[error("Memory addresses encountered out of sequence: {found} (expected {expected})")]
    OutOfSequence {
        /// Address the loader expected next.
        expected: usize,
        /// Address found on the line.
        found: usize,
    },

    /// The listing has more words than main memory holds.
    #[error("Program too big for memory: address {0} exceeds {max}", max = MEM_SIZE - 1)]
    ProgramTooLarge(usize),
}

/// Invalid geometry for a single cache.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// One of size, associativity or blocksize is zero.
    #[error("{0} must be non-zero")]
    Zero(&'static str),

    /// `size` exceeds the number of words in main memory.
    #[error("size {size} exceeds memory size {max}", max = MEM_SIZE)]
    TooLarge {
        /// Total size in words.
        size: usize,
    },

    /// `size` is not an exact multiple of `associativity * blocksize`.
    #[error(
        "size {size} is not a multiple of associativity {associativity} x blocksize {block_size}"
    )]
    NonDividing {
        /// Total size in words.
        size: usize,
        /// Blocks per row.
        associativity: usize,
        /// Words per block.
        block_size: usize,
    },
}

/// Failure to build a cache configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The cache string does not hold exactly 3 or 6 values.
    #[error("Invalid cache config: expected 3 or 6 comma-separated values, got {0}")]
    InvalidPartCount(usize),

    /// A cache string value is not a non-negative decimal integer.
    #[error("Invalid cache config: '{0}' is not a number")]
    InvalidNumber(String),

    /// A cache level has an unusable geometry.
    #[error("Invalid cache config for {level}: {source}")]
    Geometry {
        /// Level whose geometry was rejected.
        level: CacheLevel,
        /// Why the geometry was rejected.
        #[source]
        source: GeometryError,
    },

    /// A JSON configuration could not be deserialized.
    #[error("Invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration file could not be read.
    #[error("Can't read configuration {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// Failure that ends a simulation run without reaching the halt instruction.
#[derive(Debug, Error)]
pub enum SimError {
    /// The configured instruction cap was reached.
    #[error("No halt after {steps} instructions (pc={pc})")]
    StepLimitExceeded {
        /// Instructions executed before giving up.
        steps: u64,
        /// Program counter at the time the cap was hit.
        pc: WordAddr,
    },

    /// Writing a trace line failed.
    #[error("Trace output failed: {0}")]
    Trace(#[from] io::Error),
}
