//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline.
//! It fetches the word at the current Program Counter, advances the PC
//! sequentially, and applies the stall and redirect signals raised later
//! in the same cycle. There is no branch prediction: fetch always assumes
//! not-taken.

use tracing::trace;

use crate::common::constants::INSTRUCTION_SIZE;
use crate::core::Cpu;
use crate::core::pipeline::latches::{IfId, IfIdEntry};

/// Executes the instruction fetch stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Behavior
///
/// - On a redirect, loads the target into the PC and squashes this cycle's fetch
/// - On a stall, holds both the PC and IF/ID
/// - Misaligned or out-of-range PCs produce a trap entry instead of an instruction
pub fn fetch_stage(cpu: &mut Cpu) {
    if let Some(target) = cpu.signals.redirect {
        cpu.pc = target;
        cpu.if_id = IfId::bubble();
        return;
    }
    if cpu.signals.stall {
        return;
    }

    let pc = cpu.pc;
    let entry = match cpu.system.imem.fetch(pc) {
        Ok(inst) => {
            trace!(pc, "IF  inst={inst:#010x}");
            IfIdEntry {
                pc,
                inst,
                trap: None,
            }
        }
        Err(trap) => IfIdEntry {
            pc,
            inst: 0,
            trap: Some(trap),
        },
    };

    cpu.if_id = IfId::valid(entry);
    cpu.pc = pc.wrapping_add(INSTRUCTION_SIZE);
}
