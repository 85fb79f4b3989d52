//! Main Memory Tests.

use pipesim_core::common::constants::{ADDR_MASK, MAIN_MEM_SIZE};
use pipesim_core::soc::memory::MainMemory;
use pipesim_core::soc::traits::DataPort;
use pretty_assertions::assert_eq;

#[test]
fn default_size() {
    assert_eq!(MainMemory::default().len(), MAIN_MEM_SIZE);
}

#[test]
fn size_rounds_up_to_power_of_two() {
    assert_eq!(MainMemory::new(1000).len(), 1024);
    assert_eq!(MainMemory::new(0).len(), 1);
}

#[test]
fn size_is_capped_at_address_space() {
    let mut memory = MainMemory::new(MAIN_MEM_SIZE * 4);
    assert_eq!(memory.len(), MAIN_MEM_SIZE);
    assert_eq!(memory.read_word(ADDR_MASK), 0);
}

#[test]
fn addresses_wrap_at_memory_size() {
    let mut memory = MainMemory::new(1024);
    memory.write_word(1024 + 5, 7);
    assert_eq!(memory.read_word(5), 7);
    assert_eq!(memory.read_word(u32::MAX), memory.read_word(1023));
}

#[test]
fn default_memory_uses_21_bit_addresses() {
    let mut memory = MainMemory::default();
    memory.write_word(ADDR_MASK + 1 + 3, 9);
    assert_eq!(memory.read_word(3), 9);
}

#[test]
fn load_places_image_at_zero() {
    let mut memory = MainMemory::new(4);
    memory.load(&[1, 2, 3, 4, 5, 6]);
    assert_eq!(memory.words(), &[1, 2, 3, 4]);
}

#[test]
fn dump_extends_to_last_nonzero_word() {
    let mut memory = MainMemory::new(128);
    assert_eq!(memory.dump(8).len(), 8);

    memory.write_word(20, 1);
    assert_eq!(memory.dump(8).len(), 21);
    assert_eq!(memory.dump(200).len(), 128, "never longer than memory");
}
