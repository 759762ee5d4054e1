//! # Word Address Arithmetic
//!
//! `WordAddr` masks to 13 bits on construction and wraps on every offset.

use e20sim_core::common::WordAddr;
use e20sim_core::common::constants::{ADDR_MASK, MEM_SIZE};
use proptest::prelude::*;

#[test]
fn new_discards_high_bits() {
    assert_eq!(WordAddr::new(0xFFFF).val(), 0x1FFF);
    assert_eq!(WordAddr::new(0x2000).val(), 0);
    assert_eq!(WordAddr::new(8192 + 5).val(), 5);
}

#[test]
fn next_wraps_at_end_of_memory() {
    assert_eq!(WordAddr::new(8191).next(), WordAddr::new(0));
}

#[test]
fn negative_offset_moves_backwards() {
    // -2 as a sign-extended 16-bit immediate.
    assert_eq!(WordAddr::new(5).offset(0xFFFE), WordAddr::new(3));
    assert_eq!(WordAddr::new(1).offset(0xFFFE), WordAddr::new(8191));
}

#[test]
fn display_is_decimal() {
    assert_eq!(WordAddr::new(1234).to_string(), "1234");
    assert_eq!(format!("{:>5}", WordAddr::new(7)), "    7");
}

proptest! {
    #[test]
    fn every_address_indexes_memory(raw in any::<u16>()) {
        let addr = WordAddr::new(raw);
        prop_assert!(addr.index() < MEM_SIZE);
        prop_assert_eq!(addr.val(), raw & ADDR_MASK);
    }

    #[test]
    fn offset_is_modular(base in any::<u16>(), off in any::<u16>()) {
        let expected = base.wrapping_add(off) & ADDR_MASK;
        prop_assert_eq!(WordAddr::new(base).offset(off).val(), expected);
    }
}
