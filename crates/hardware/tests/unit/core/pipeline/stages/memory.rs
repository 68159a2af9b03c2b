//! Memory Stage Tests.

use pretty_assertions::assert_eq;
use rv32pipe_core::Trap;
use rv32pipe_core::core::pipeline::latches::{ExMem, ExMemEntry, IdEx, IdExEntry};
use rv32pipe_core::core::pipeline::signals::{ControlSignals, MemWidth};
use rv32pipe_core::core::pipeline::stages::mem_stage;

use crate::common::harness::TestContext;

fn load(rd: usize, addr: u32, width: MemWidth, signed: bool) -> ExMem {
    ExMem::valid(ExMemEntry {
        rd,
        alu: addr,
        ctrl: ControlSignals {
            reg_write: true,
            mem_read: true,
            width,
            signed_load: signed,
            ..ControlSignals::default()
        },
        ..ExMemEntry::default()
    })
}

fn store(addr: u32, data: u32, width: MemWidth) -> ExMem {
    ExMem::valid(ExMemEntry {
        alu: addr,
        store_data: data,
        ctrl: ControlSignals {
            mem_write: true,
            width,
            ..ControlSignals::default()
        },
        ..ExMemEntry::default()
    })
}

#[test]
fn load_extends_data() {
    let mut ctx = TestContext::new().load_data(&[0x8081_82FF]);
    ctx.cpu_mut().ex_mem = load(1, 1, MemWidth::Half, true);
    mem_stage(ctx.cpu_mut());
    let wb = ctx.cpu().mem_wb;
    assert!(wb.enable);
    assert_eq!(wb.entry.load_data, 0xFFFF_8182);
    assert_eq!(wb.entry.writeback_value(), 0xFFFF_8182);
}

#[test]
fn store_writes_only_its_bytes() {
    let mut ctx = TestContext::new().load_data(&[0x1122_3344]);
    ctx.cpu_mut().ex_mem = store(1, 0xAABB_CCDD, MemWidth::Byte);
    mem_stage(ctx.cpu_mut());
    assert_eq!(ctx.dmem_word(0), 0x1122_DD44);
}

#[test]
fn out_of_range_access_records_fault() {
    let mut ctx = TestContext::new();
    ctx.cpu_mut().ex_mem = load(1, 4094, MemWidth::Word, false);
    mem_stage(ctx.cpu_mut());
    assert_eq!(ctx.cpu().mem_wb.entry.trap, Some(Trap::LoadAccessFault(4094)));

    ctx.cpu_mut().ex_mem = store(4096, 1, MemWidth::Byte);
    mem_stage(ctx.cpu_mut());
    assert_eq!(ctx.cpu().mem_wb.entry.trap, Some(Trap::StoreAccessFault(4096)));
}

#[test]
fn carried_trap_skips_memory() {
    let mut ctx = TestContext::new();
    let mut ex = store(0, 0xFF, MemWidth::Word);
    ex.entry.trap = Some(Trap::IllegalInstruction(0xFFFF_FFFF));
    ctx.cpu_mut().ex_mem = ex;
    mem_stage(ctx.cpu_mut());
    assert_eq!(ctx.dmem_word(0), 0);
    assert_eq!(
        ctx.cpu().mem_wb.entry.trap,
        Some(Trap::IllegalInstruction(0xFFFF_FFFF))
    );
}

#[test]
fn forwards_loaded_value() {
    let mut ctx = TestContext::new().load_data(&[0x2A]);
    ctx.cpu_mut().ex_mem = load(1, 0, MemWidth::Word, false);
    ctx.cpu_mut().id_ex = IdEx::valid(IdExEntry {
        rs2: Some(1),
        ..IdExEntry::default()
    });
    mem_stage(ctx.cpu_mut());
    assert_eq!(ctx.cpu().id_ex.entry.rv2, 0x2A);
    assert_eq!(ctx.stats().forwards_mem, 1);
}

#[test]
fn faulting_load_is_not_forwarded() {
    let mut ctx = TestContext::new();
    ctx.cpu_mut().ex_mem = load(1, 0xFFFF_FFFC, MemWidth::Word, false);
    ctx.cpu_mut().id_ex = IdEx::valid(IdExEntry {
        rs1: Some(1),
        rv1: 3,
        ..IdExEntry::default()
    });
    mem_stage(ctx.cpu_mut());
    assert_eq!(ctx.cpu().id_ex.entry.rv1, 3);
    assert_eq!(ctx.stats().forwards_mem, 0);
}
