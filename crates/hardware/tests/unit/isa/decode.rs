//! Decoder Unit Tests.
//!
//! Field extraction is checked against the raw bit positions for arbitrary words; the
//! immediate decoders are checked for sign-extension and alignment invariants.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rv32pipe_core::isa::decode::{
    decode, decode_b_type_imm, decode_i_type_imm, decode_j_type_imm, decode_s_type_imm,
    decode_u_type_imm,
};
use rv32pipe_core::isa::rv32i::opcodes;

use crate::common::builder::InstructionBuilder;

#[test]
fn addi_fields() {
    let inst = InstructionBuilder::new().addi(10, 11, -42).build();
    let d = decode(inst);
    assert_eq!(d.opcode, opcodes::OP_IMM);
    assert_eq!(d.rd, 10);
    assert_eq!(d.rs1, 11);
    assert_eq!(d.funct3, 0);
    assert_eq!(d.imm, -42);
    assert_eq!(d.raw, inst);
}

#[test]
fn store_immediate_spans_both_fields() {
    let inst = InstructionBuilder::new().sw(2, 1, -4).build();
    let d = decode(inst);
    assert_eq!(d.opcode, opcodes::OP_STORE);
    assert_eq!(d.rs1, 2);
    assert_eq!(d.rs2, 1);
    assert_eq!(d.imm, -4);
}

#[test]
fn branch_immediate_reassembles_scrambled_bits() {
    let inst = InstructionBuilder::new().bne(1, 2, -2048).build();
    assert_eq!(decode(inst).imm, -2048);
    let inst = InstructionBuilder::new().beq(1, 2, 4094).build();
    assert_eq!(decode(inst).imm, 4094);
}

#[test]
fn jal_immediate_reaches_full_range() {
    let inst = InstructionBuilder::new().jal(1, -1_048_576).build();
    assert_eq!(decode(inst).imm, -1_048_576);
    let inst = InstructionBuilder::new().jal(1, 1_048_574).build();
    assert_eq!(decode(inst).imm, 1_048_574);
}

#[test]
fn upper_immediate_keeps_low_bits_clear() {
    let inst = InstructionBuilder::new().lui(1, 0x12345).build();
    assert_eq!(decode(inst).imm, 0x1234_5000);
    let inst = InstructionBuilder::new().auipc(1, 0xFFFFF).build();
    assert_eq!(decode(inst).imm, 0xFFFF_F000_u32 as i32);
}

#[test]
fn register_format_has_zero_immediate() {
    let inst = InstructionBuilder::new().sub(3, 1, 2).build();
    let d = decode(inst);
    assert_eq!(d.imm, 0);
    assert_eq!(d.funct7, 0b0100000);
}

proptest! {
    #[test]
    fn fields_come_from_fixed_bit_positions(raw in any::<u32>()) {
        let d = decode(raw);
        prop_assert_eq!(d.raw, raw);
        prop_assert_eq!(d.opcode, raw & 0x7F);
        prop_assert_eq!(d.rd, ((raw >> 7) & 0x1F) as usize);
        prop_assert_eq!(d.funct3, (raw >> 12) & 0x7);
        prop_assert_eq!(d.rs1, ((raw >> 15) & 0x1F) as usize);
        prop_assert_eq!(d.rs2, ((raw >> 20) & 0x1F) as usize);
        prop_assert_eq!(d.funct7, raw >> 25);
    }

    #[test]
    fn i_immediate_is_top_twelve_bits_signed(raw in any::<u32>()) {
        let imm = decode_i_type_imm(raw);
        prop_assert!((-2048..=2047).contains(&imm));
        prop_assert_eq!(imm < 0, raw >> 31 == 1);
        prop_assert_eq!((imm as u32) & 0xFFF, raw >> 20);
    }

    #[test]
    fn s_immediate_is_twelve_bits_signed(raw in any::<u32>()) {
        let imm = decode_s_type_imm(raw);
        prop_assert!((-2048..=2047).contains(&imm));
        prop_assert_eq!(imm < 0, raw >> 31 == 1);
    }

    #[test]
    fn b_immediate_is_even_and_in_range(raw in any::<u32>()) {
        let imm = decode_b_type_imm(raw);
        prop_assert_eq!(imm & 1, 0);
        prop_assert!((-4096..=4094).contains(&imm));
        prop_assert_eq!(imm < 0, raw >> 31 == 1);
    }

    #[test]
    fn j_immediate_is_even_and_in_range(raw in any::<u32>()) {
        let imm = decode_j_type_imm(raw);
        prop_assert_eq!(imm & 1, 0);
        prop_assert!((-1_048_576..=1_048_574).contains(&imm));
        prop_assert_eq!(imm < 0, raw >> 31 == 1);
    }

    #[test]
    fn u_immediate_clears_low_twelve_bits(raw in any::<u32>()) {
        let imm = decode_u_type_imm(raw) as u32;
        prop_assert_eq!(imm & 0xFFF, 0);
        prop_assert_eq!(imm >> 12, raw >> 12);
    }

    #[test]
    fn addi_immediate_survives_encoding(imm in -2048i32..=2047) {
        let inst = InstructionBuilder::new().addi(1, 2, imm).build();
        prop_assert_eq!(decode(inst).imm, imm);
    }
}
