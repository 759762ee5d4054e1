//! # ALU Tests

use e20sim_core::core::units::alu::{self, AluOp};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(AluOp::Add, 0xFFFF, 1, 0)]
#[case(AluOp::Sub, 3, 5, 0xFFFE)]
#[case(AluOp::Or, 0xF0F0, 0x0F0F, 0xFFFF)]
#[case(AluOp::And, 0xF0F0, 0x0FF0, 0x00F0)]
#[case(AluOp::Slt, 0x7FFF, 0x8000, 1)]
#[case(AluOp::Slt, 0x8000, 0x7FFF, 0)]
fn execute_cases(#[case] op: AluOp, #[case] a: u16, #[case] b: u16, #[case] expected: u16) {
    assert_eq!(alu::execute(op, a, b), expected);
}

#[test]
fn mnemonics() {
    let names: Vec<_> = [AluOp::Add, AluOp::Sub, AluOp::Or, AluOp::And, AluOp::Slt]
        .into_iter()
        .map(AluOp::mnemonic)
        .collect();
    assert_eq!(names, ["add", "sub", "or", "and", "slt"]);
}

proptest! {
    #[test]
    fn set_less_than_is_boolean(a in any::<u16>(), b in any::<u16>()) {
        let r = alu::set_less_than(a, b);
        prop_assert!(r == 0 || r == 1);
        prop_assert_eq!(r == 1, a < b);
    }
}
