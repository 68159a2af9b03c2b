//! Memory Scenarios.

use pretty_assertions::assert_eq;

use crate::common::builder::InstructionBuilder;
use crate::common::harness::TestContext;

fn b() -> InstructionBuilder {
    InstructionBuilder::new()
}

#[test]
fn load_widths_and_extension() {
    let mut ctx = TestContext::new()
        .load_program(&[
            b().lb(1, 0, 0).build(),
            b().lbu(2, 0, 0).build(),
            b().lh(3, 0, 0).build(),
            b().lhu(4, 0, 0).build(),
            b().lw(5, 0, 0).build(),
            b().lb(6, 0, 3).build(),
            b().lh(7, 0, 1).build(),
        ])
        .load_data(&[0x8081_82FF]);

    ctx.run(20);
    assert_eq!(ctx.get_reg(1), 0xFFFF_FFFF);
    assert_eq!(ctx.get_reg(2), 0x0000_00FF);
    assert_eq!(ctx.get_reg(3), 0xFFFF_82FF);
    assert_eq!(ctx.get_reg(4), 0x0000_82FF);
    assert_eq!(ctx.get_reg(5), 0x8081_82FF);
    assert_eq!(ctx.get_reg(6), 0xFFFF_FF80);
    assert_eq!(ctx.get_reg(7), 0xFFFF_8182, "unaligned halfword");
    assert_eq!(ctx.stats().inst_load, 7);
}

#[test]
fn store_widths() {
    let mut ctx = TestContext::new().load_program(&[
        b().lui(1, 0x12345).build(),
        b().addi(1, 1, 0x678).build(),
        b().sb(0, 1, 0).build(),
        b().sh(0, 1, 4).build(),
        b().sw(0, 1, 8).build(),
        b().sw(0, 1, 13).build(),
    ]);

    ctx.run(20);
    assert_eq!(ctx.dmem_word(0), 0x0000_0078);
    assert_eq!(ctx.dmem_word(1), 0x0000_5678);
    assert_eq!(ctx.dmem_word(2), 0x1234_5678);
    assert_eq!(ctx.dmem_word(3), 0x3456_7800, "unaligned word spans two words");
    assert_eq!(ctx.dmem_word(4), 0x0000_0012);
    assert_eq!(ctx.stats().inst_store, 4);
}

#[test]
fn store_then_load_round_trip_through_memory() {
    let mut ctx = TestContext::new().load_program(&[
        b().addi(1, 0, -2).build(),
        b().sh(0, 1, 6).build(),
        b().lhu(2, 0, 6).build(),
        b().lh(3, 0, 6).build(),
    ]);

    ctx.run(12);
    assert_eq!(ctx.get_reg(2), 0xFFFE);
    assert_eq!(ctx.get_reg(3), 0xFFFF_FFFE);
}
