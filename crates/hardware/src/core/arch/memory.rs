//! E20 Main Memory.
//!
//! A flat array of 8192 16-bit words. Memory is only indexed through
//! [`WordAddr`], which is masked to 13 bits on construction, so every access
//! is in range. Memory holds the data; the cache model only tracks tags.

use crate::common::WordAddr;
use crate::common::constants::MEM_SIZE;

/// Word-addressed main memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    words: Box<[u16]>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    /// Creates a zero-filled memory of `MEM_SIZE` words.
    pub fn new() -> Self {
        Self {
            words: vec![0; MEM_SIZE].into_boxed_slice(),
        }
    }

    /// Creates a memory holding `image` at address 0 and zeros elsewhere.
    ///
    /// Words beyond `MEM_SIZE` are ignored; the loader never produces them.
    pub fn from_image(image: &[u16]) -> Self {
        let mut mem = Self::new();
        for (slot, &word) in mem.words.iter_mut().zip(image) {
            *slot = word;
        }
        mem
    }

    /// Reads the word at `addr`.
    #[inline(always)]
    pub fn read(&self, addr: WordAddr) -> u16 {
        self.words[addr.index()]
    }

    /// Writes the word at `addr`.
    #[inline(always)]
    pub fn write(&mut self, addr: WordAddr, val: u16) {
        self.words[addr.index()] = val;
    }

    /// Returns the whole memory contents.
    pub fn words(&self) -> &[u16] {
        &self.words
    }
}
