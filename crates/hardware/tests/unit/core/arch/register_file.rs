//! # Register File Tests

use e20sim_core::common::constants::NUM_REGS;
use e20sim_core::core::arch::RegisterFile;

#[test]
fn starts_zeroed() {
    let regs = RegisterFile::new();
    assert_eq!(regs.values(), &[0; NUM_REGS]);
}

#[test]
fn registers_are_independent() {
    let mut regs = RegisterFile::new();
    for idx in 1..NUM_REGS {
        regs.write(idx, idx as u16 * 100);
    }
    for idx in 1..NUM_REGS {
        assert_eq!(regs.read(idx), idx as u16 * 100);
    }
}

#[test]
fn clear_zero_only_touches_register_zero() {
    let mut regs = RegisterFile::new();
    regs.write(0, 0xFFFF);
    regs.write(7, 0xFFFF);
    regs.clear_zero();
    assert_eq!(regs.read(0), 0);
    assert_eq!(regs.read(7), 0xFFFF);
}

#[test]
fn dump_lists_every_register() {
    let mut regs = RegisterFile::new();
    regs.write(3, 12);
    assert_eq!(regs.dump(), "$0=0 $1=0 $2=0 $3=12 $4=0 $5=0 $6=0 $7=0");
}
