//! Error and trap display formats.

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rv32pipe_core::{SimError, Trap};

#[test]
fn trap_display_names_cause_and_value() {
    assert_eq!(
        Trap::IllegalInstruction(0xFFFF_FFFF).to_string(),
        "IllegalInstruction(0xffffffff)"
    );
    assert_eq!(Trap::LoadAccessFault(0x1000).to_string(), "LoadAccessFault(0x1000)");
    assert_eq!(
        Trap::InstructionAddressMisaligned(6).to_string(),
        "InstructionAddressMisaligned(0x6)"
    );
}

#[test]
fn sim_error_trap_includes_pc() {
    let err = SimError::Trap {
        pc: 4,
        trap: Trap::StoreAccessFault(0x2000),
    };
    assert_eq!(err.to_string(), "trap at pc=0x00000004: StoreAccessFault(0x2000)");
}

#[test]
fn io_error_reports_cannot_find() {
    let err = SimError::Io {
        path: PathBuf::from("missing.txt"),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    };
    assert_eq!(err.to_string(), "Cannot find missing.txt");
}

#[test]
fn invalid_input_is_message_verbatim() {
    assert_eq!(SimError::invalid_input("Incorrect format").to_string(), "Incorrect format");
}
