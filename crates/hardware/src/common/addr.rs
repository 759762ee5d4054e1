//! Word address type.
//!
//! E20 memory is word-addressed and only 13 bits wide. `WordAddr` masks on
//! construction, so every value of the type is a valid index into main
//! memory and out-of-range access cannot be expressed.

use std::fmt;

use super::constants::ADDR_MASK;

/// A 13-bit word address (0-8191).
///
/// Used both for data addresses and for the program counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordAddr(u16);

impl WordAddr {
    /// Creates an address, discarding every bit above bit 12.
    #[inline(always)]
    pub const fn new(raw: u16) -> Self {
        Self(raw & ADDR_MASK)
    }

    /// Returns the address as a 16-bit value.
    #[inline(always)]
    pub const fn val(self) -> u16 {
        self.0
    }

    /// Returns the address as a memory index.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the address `offset` words further on, wrapping at 8192.
    ///
    /// `offset` is a 16-bit two's-complement quantity, so a sign-extended
    /// immediate moves the address backwards.
    #[inline(always)]
    pub const fn offset(self, offset: u16) -> Self {
        Self::new(self.0.wrapping_add(offset))
    }

    /// Returns the next sequential address.
    #[inline(always)]
    pub const fn next(self) -> Self {
        self.offset(1)
    }
}

impl From<u16> for WordAddr {
    fn from(raw: u16) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for WordAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
