//! Machine-Code Loader.
//!
//! This module reads E20 machine-code listings. It performs:
//! 1. **Parsing:** Each line must read `ram[N] = 16'bBITS;` followed by
//!    anything (usually a comment).
//! 2. **Sequencing:** Addresses must start at 0 and increase by one per line.
//! 3. **Capacity:** A listing may not extend past the last memory word.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::common::LoadError;
use crate::common::constants::MEM_SIZE;

const LINE_PREFIX: &str = "ram[";
const VALUE_PREFIX: &str = "] = 16'b";
const BINARY_RADIX: u32 = 2;

/// A parsed program: the words to place at addresses 0, 1, 2, ...
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgramImage {
    words: Vec<u16>,
}

impl ProgramImage {
    /// Creates an image from words starting at address 0.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::ProgramTooLarge`] if there are more words than
    /// memory holds.
    pub fn new(words: Vec<u16>) -> Result<Self, LoadError> {
        if words.len() > MEM_SIZE {
            return Err(LoadError::ProgramTooLarge(MEM_SIZE));
        }
        Ok(Self { words })
    }

    /// Returns the program words.
    pub fn words(&self) -> &[u16] {
        &self.words
    }

    /// Returns the number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the program has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Splits one listing line into `(address, word)`.
fn parse_line(line: &str) -> Option<(usize, u16)> {
    let rest = line.strip_prefix(LINE_PREFIX)?;
    let digits_end = rest.find(|c: char| !c.is_ascii_digit())?;
    let (addr, rest) = rest.split_at(digits_end);
    let rest = rest.strip_prefix(VALUE_PREFIX)?;
    let (bits, _trailer) = rest.split_once(';')?;

    if addr.is_empty() || bits.is_empty() || !bits.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }

    let addr = addr.parse().ok()?;
    let word = u16::from_str_radix(bits, BINARY_RADIX).ok()?;
    Some((addr, word))
}

/// Parses a machine-code listing.
///
/// # Errors
///
/// - [`LoadError::Parse`] for a malformed line or a value wider than 16 bits.
/// - [`LoadError::OutOfSequence`] if an address is not the next one expected.
/// - [`LoadError::ProgramTooLarge`] if an address is beyond the end of memory.
pub fn parse_program(text: &str) -> Result<ProgramImage, LoadError> {
    let mut words = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        let (addr, word) = parse_line(line).ok_or_else(|| LoadError::Parse {
            line_number: idx + 1,
            line: line.to_string(),
        })?;

        if addr != words.len() {
            return Err(LoadError::OutOfSequence {
                expected: words.len(),
                found: addr,
            });
        }
        if addr >= MEM_SIZE {
            return Err(LoadError::ProgramTooLarge(addr));
        }
        words.push(word);
    }

    Ok(ProgramImage { words })
}

/// Reads and parses a machine-code file.
///
/// # Errors
///
/// [`LoadError::Io`] if the file can't be read, otherwise as [`parse_program`].
pub fn load_program_file(path: &Path) -> Result<ProgramImage, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = parse_program(&text)?;
    info!(path = %path.display(), words = image.len(), "loaded program");
    Ok(image)
}
