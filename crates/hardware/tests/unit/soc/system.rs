//! System Construction Tests.

use pretty_assertions::assert_eq;
use rv32pipe_core::{Config, SimError, System};

#[test]
fn sized_from_config() {
    let mut config = Config::default();
    config.memory.imem_words = 16;
    config.memory.dmem_bytes = 64;
    let system = System::new(&config);
    assert_eq!(system.imem.depth(), 16);
    assert_eq!(system.dmem.size(), 64);
}

#[test]
fn images_are_placed_at_zero() {
    let system = System::with_images(&Config::default(), &[0x13], &[0xDEAD_BEEF]).expect("fits");
    assert_eq!(system.imem.fetch(0), Ok(0x13));
    assert_eq!(system.dmem.read_word(0), Some(0xDEAD_BEEF));
}

#[test]
fn oversized_images_are_invalid_input() {
    let mut config = Config::default();
    config.memory.imem_words = 1;
    let err = System::with_images(&config, &[0x13, 0x13], &[]).expect_err("too large");
    assert!(matches!(err, SimError::InvalidInput(_)));
}

#[test]
fn images_keep_configured_capacity() {
    let mut config = Config::default();
    config.memory.imem_words = 8;
    config.memory.dmem_bytes = 32;
    let system = System::with_images(&config, &[0x13, 0x13], &[0xDEAD_BEEF]).expect("fits");
    assert_eq!(system.imem.depth(), 8);
    assert_eq!(system.dmem.size(), 32);
    assert_eq!(system.dmem.read_word(0), Some(0xDEAD_BEEF));
}
