//! # Listing Parsing Tests
//!
//! The loader accepts `ram[N] = 16'bBITS;` lines with sequential addresses
//! and rejects anything else with a specific error.

use crate::common::ProgramBuilder;
use crate::common::instruction::*;
use e20sim_core::common::LoadError;
use e20sim_core::sim::loader::parse_program;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn parses_sequential_lines_with_comments() {
    let text = "ram[0] = 16'b0010000010000101;\t\t// addi $1,$0,5\n\
                ram[1] = 16'b0100000000000001;\t\t// halt\n";
    let image = parse_program(text).unwrap();
    assert_eq!(image.words(), &[0x2085, 0x4001]);
}

#[test]
fn builder_listing_round_trips() {
    let program = ProgramBuilder::new()
        .push(addi(1, 0, -5))
        .push(lw(2, 1, 3))
        .push(sw(2, 0, 7))
        .halt();
    let image = parse_program(&program.listing()).unwrap();
    assert_eq!(image.words(), program.words());
}

#[test]
fn empty_input_is_empty_program() {
    let image = parse_program("").unwrap();
    assert!(image.is_empty());
}

#[test]
fn crlf_line_endings_are_accepted() {
    let image = parse_program("ram[0] = 16'b0000000000000001;\r\nram[1] = 16'b0000000000000010;\r\n")
        .unwrap();
    assert_eq!(image.words(), &[1, 2]);
}

#[test]
fn short_binary_literal_is_accepted() {
    let image = parse_program("ram[0] = 16'b101;").unwrap();
    assert_eq!(image.words(), &[5]);
}

#[rstest]
#[case("garbage")]
#[case("ram[0] = 16'b0000000000000000")]
#[case("ram[0] = 16'b000000000000000020;")]
#[case("ram[] = 16'b0;")]
#[case("ram[0]=16'b0;")]
#[case("ram[0] = 16'b11111111111111111;")]
#[case("")]
fn malformed_line(#[case] line: &str) {
    let text = format!("ram[0] = 16'b0;\n{line}\n");
    match parse_program(&text) {
        Err(LoadError::Parse { line_number, line: found }) => {
            assert_eq!(line_number, 2);
            assert_eq!(found, line);
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn address_gap_is_out_of_sequence() {
    let text = "ram[0] = 16'b0;\nram[2] = 16'b0;\n";
    assert!(matches!(
        parse_program(text),
        Err(LoadError::OutOfSequence {
            expected: 1,
            found: 2
        })
    ));
}

#[test]
fn first_address_must_be_zero() {
    assert!(matches!(
        parse_program("ram[1] = 16'b0;"),
        Err(LoadError::OutOfSequence {
            expected: 0,
            found: 1
        })
    ));
}

#[test]
fn full_memory_listing_loads() {
    let program = ProgramBuilder::new().extend(&[0; 8191]).halt();
    let image = parse_program(&program.listing()).unwrap();
    assert_eq!(image.len(), 8192);
}

#[test]
fn address_past_memory_is_too_large() {
    let mut text = ProgramBuilder::new().extend(&[0; 8192]).listing();
    text.push_str("ram[8192] = 16'b0;\n");
    assert!(matches!(
        parse_program(&text),
        Err(LoadError::ProgramTooLarge(8192))
    ));
}
