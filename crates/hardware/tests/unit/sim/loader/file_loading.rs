//! # File Loading Tests

use crate::common::ProgramBuilder;
use crate::common::instruction::*;
use e20sim_core::common::LoadError;
use e20sim_core::sim::loader::load_program_file;
use std::io::Write;
use tempfile::NamedTempFile;

/// Helper function to create a temporary listing file for testing.
fn create_temp_listing(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn loads_listing_from_disk() {
    let program = ProgramBuilder::new().push(addi(1, 0, 5)).halt();
    let file = create_temp_listing(&program.listing());
    let image = load_program_file(file.path()).unwrap();
    assert_eq!(image.words(), program.words());
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.bin");
    match load_program_file(&path) {
        Err(LoadError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn io_error_message_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.bin");
    let err = load_program_file(&path).unwrap_err();
    assert!(err.to_string().starts_with("Can't open file "));
    assert!(err.to_string().contains("nope.bin"));
}

#[test]
fn parse_errors_propagate() {
    let file = create_temp_listing("ram[0] = 16'b0;\nram[0] = 16'b1;\n");
    assert!(matches!(
        load_program_file(file.path()),
        Err(LoadError::OutOfSequence { .. })
    ));
}
