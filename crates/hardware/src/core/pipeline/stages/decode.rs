//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the pipeline. It performs the following:
//! 1. **Flush:** Discards the fetched instruction when execute redirected this cycle.
//! 2. **Decoding:** Converts raw 32-bit instruction bits into a classified instruction and
//!    its control signals.
//! 3. **Hazard Detection:** Stalls one cycle on a load-use dependency.
//! 4. **Register Read:** Reads source operands from the Register File.

use tracing::{debug, trace};

use crate::common::constants::INSTRUCTION_ZERO;
use crate::common::error::Trap;
use crate::core::Cpu;
use crate::core::pipeline::hazards::need_stall_load_use;
use crate::core::pipeline::latches::{IdEx, IdExEntry};
use crate::core::pipeline::signals::ControlSignals;
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::decode::decode;
use crate::isa::disasm::disassemble;
use crate::isa::instruction::Instruction;

/// Builds an ID/EX entry that carries a trap to writeback without executing.
fn trap_entry(pc: u32, inst: u32, trap: Trap) -> IdEx {
    IdEx::valid(IdExEntry {
        pc,
        inst,
        trap: Some(trap),
        ..IdExEntry::default()
    })
}

/// Executes the instruction decode stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Behavior
///
/// - On a redirect from execute, IF/ID and ID/EX are flushed
/// - An all-zero instruction word becomes a bubble
/// - Unsupported encodings become an `IllegalInstruction` trap entry
/// - On a load-use hazard, a bubble enters ID/EX and IF/ID is held
pub fn decode_stage(cpu: &mut Cpu) {
    if cpu.signals.redirect.is_some() {
        if cpu.if_id.enable {
            debug!(pc = cpu.if_id.entry.pc, "ID  squashed");
        }
        cpu.if_id.flush();
        cpu.id_ex = IdEx::bubble();
        return;
    }

    if cpu.if_id.is_empty() {
        cpu.id_ex = IdEx::bubble();
        return;
    }

    let fetched = cpu.if_id.entry;
    if let Some(trap) = fetched.trap {
        cpu.id_ex = trap_entry(fetched.pc, fetched.inst, trap);
        return;
    }
    if fetched.inst == INSTRUCTION_ZERO {
        cpu.id_ex = IdEx::bubble();
        return;
    }

    let op = match Instruction::classify(&decode(fetched.inst)) {
        Ok(op) => op,
        Err(trap) => {
            debug!(pc = fetched.pc, "ID  {trap}");
            cpu.id_ex = trap_entry(fetched.pc, fetched.inst, trap);
            return;
        }
    };

    if need_stall_load_use(&cpu.ex_mem, &op) {
        debug!(
            pc = fetched.pc,
            "load-use hazard on x{}, stalling",
            cpu.ex_mem.entry.rd
        );
        cpu.signals.stall = true;
        cpu.stats.load_use_stalls += 1;
        cpu.id_ex = IdEx::bubble();
        return;
    }

    trace!(pc = fetched.pc, "ID  {}", disassemble(fetched.inst));

    let rs1 = op.rs1();
    let rs2 = op.rs2();
    cpu.id_ex = IdEx::valid(IdExEntry {
        pc: fetched.pc,
        inst: fetched.inst,
        op: Some(op),
        rs1,
        rs2,
        rd: op.rd().unwrap_or(0),
        imm: op.imm(),
        rv1: rs1.map_or(0, |r| cpu.regs.read(r)),
        rv2: rs2.map_or(0, |r| cpu.regs.read(r)),
        ctrl: ControlSignals::for_instruction(&op),
        trap: None,
    });
}
