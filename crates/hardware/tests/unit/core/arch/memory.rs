//! # Main Memory Tests

use e20sim_core::common::WordAddr;
use e20sim_core::common::constants::MEM_SIZE;
use e20sim_core::core::arch::Memory;

#[test]
fn new_memory_is_zeroed_and_full_size() {
    let memory = Memory::new();
    assert_eq!(memory.words().len(), MEM_SIZE);
    assert!(memory.words().iter().all(|&w| w == 0));
}

#[test]
fn image_is_placed_from_address_zero() {
    let memory = Memory::from_image(&[0x1111, 0x2222, 0x3333]);
    assert_eq!(memory.read(WordAddr::new(0)), 0x1111);
    assert_eq!(memory.read(WordAddr::new(2)), 0x3333);
    assert_eq!(memory.read(WordAddr::new(3)), 0);
    assert_eq!(memory.words().len(), MEM_SIZE);
}

#[test]
fn last_word_is_addressable() {
    let mut memory = Memory::new();
    memory.write(WordAddr::new(8191), 0xBEEF);
    assert_eq!(memory.read(WordAddr::new(0x3FFF)), 0xBEEF);
}
