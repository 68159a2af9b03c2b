//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the instruction pipeline.
//! It performs loads and stores against data memory, applies load extension,
//! raises access faults, and forwards the produced value to the instruction
//! waiting in ID/EX (MEM→EX).

use tracing::trace;

use crate::core::Cpu;
use crate::core::pipeline::hazards::{ForwardSource, forward_to_execute};
use crate::core::pipeline::latches::{MemWb, MemWbEntry};
use crate::core::units::lsu::Lsu;

/// Executes the memory stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Behavior
///
/// - Loads 1, 2, or 4 bytes and sign- or zero-extends them
/// - Stores the low 1, 2, or 4 bytes of the store operand
/// - Records `LoadAccessFault`/`StoreAccessFault` for out-of-range accesses
/// - Forwards loaded data (for loads) or the ALU/link value into ID/EX
/// - Instructions already carrying a trap pass through without touching memory
pub fn mem_stage(cpu: &mut Cpu) {
    let ex = std::mem::take(&mut cpu.ex_mem);
    if !ex.enable {
        cpu.mem_wb = MemWb::bubble();
        return;
    }
    let e = ex.entry;

    let mut trap = e.trap;
    let mut load_data = 0;

    if trap.is_none() {
        if e.ctrl.mem_read {
            match cpu.system.dmem.load(e.alu, e.ctrl.width) {
                Ok(raw) => {
                    load_data = Lsu::extend(raw, e.ctrl.width, e.ctrl.signed_load);
                    trace!(pc = e.pc, "MEM load [{:#x}] -> {load_data:#010x}", e.alu);
                }
                Err(t) => trap = Some(t),
            }
        } else if e.ctrl.mem_write {
            let val = Lsu::store_value(e.store_data, e.ctrl.width);
            match cpu.system.dmem.store(e.alu, e.ctrl.width, val) {
                Ok(()) => trace!(pc = e.pc, "MEM store [{:#x}] <- {val:#010x}", e.alu),
                Err(t) => trap = Some(t),
            }
        }
    }

    let out = MemWbEntry {
        pc: e.pc,
        inst: e.inst,
        rd: e.rd,
        alu: e.alu,
        load_data,
        ctrl: e.ctrl,
        trap,
    };

    if out.trap.is_none()
        && out.ctrl.reg_write
        && forward_to_execute(
            &mut cpu.id_ex,
            Some(out.rd),
            out.writeback_value(),
            ForwardSource::Memory,
        )
    {
        cpu.stats.forwards_mem += 1;
    }

    cpu.mem_wb = MemWb::valid(out);
}
